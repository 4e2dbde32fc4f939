//! Cache metrics aggregation
//!
//! The data flow for one analysis run is:
//!
//! ```text
//! &str -> parse_line -> LogRecord -> CacheMetrics::record
//!      -> CacheMetrics -> MetricsSnapshot -> render_summary / evaluate_alerts
//! ```

mod alerts;
mod analyzer;
mod cache_metrics;
pub mod percentile;
mod snapshot;
mod summary;
#[cfg(test)]
mod tests;

pub use alerts::{Alert, evaluate_alerts};
pub use analyzer::MetricsAnalyzer;
pub use cache_metrics::CacheMetrics;
pub use snapshot::MetricsSnapshot;
pub use summary::render_summary;
