//! Access-log record parsing.
//!
//! Lines follow the proxy's cache log format:
//!
//! ```text
//! 192.168.1.100 - [27/Oct/2025:10:00:00 +0000] "GET /api/static HTTP/1.1" 200 1234 0.050 "HIT"
//! ```

mod parse;
#[cfg(test)]
mod tests;
mod types;

pub use parse::parse_line;
pub use types::*;
