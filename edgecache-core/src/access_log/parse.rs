use crate::access_log::types::{CacheStatus, LogRecord};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// $remote_addr - [$time_local] "$request" $status $body_bytes_sent $request_time "$upstream_cache_status"
static LOG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"^(?P<ip>[0-9.]+) - \[(?P<time>[^\]]+)\] "#,
        r#""(?P<method>\w+) (?P<path>\S+) (?P<protocol>[^"\s]+)" "#,
        r#"(?P<status>[0-9]+) (?P<bytes>[0-9]+) (?P<latency>\S+) "#,
        r#""(?P<cache_status>[^"]*)""#,
    ))
    .expect("access log pattern must compile")
});

/// Parse one access-log line.
///
/// Returns `None` for anything that is not a request line: blank lines,
/// rotation banners, truncated writes. A record is only produced when the
/// whole grammar matches, so callers never see a partially filled one.
///
/// The latency field is the one exception to strict matching: any token is
/// accepted there, but only a plain run of digits and dots that parses to a
/// finite number becomes an observation. Signs, exponents and anything else
/// yield a record with `latency: None`.
pub fn parse_line(line: &str) -> Option<LogRecord> {
    let caps = LOG_PATTERN.captures(line.trim())?;

    // Digit runs too long even for u64 are treated like a non-match.
    let status = field(&caps, "status").parse::<u64>().ok()?;
    let bytes = field(&caps, "bytes").parse::<u64>().ok()?;

    Some(LogRecord {
        client_addr: field(&caps, "ip").to_string(),
        time: field(&caps, "time").to_string(),
        method: field(&caps, "method").to_string(),
        path: field(&caps, "path").to_string(),
        protocol: field(&caps, "protocol").to_string(),
        status,
        bytes,
        latency: parse_latency(field(&caps, "latency")),
        cache_status: CacheStatus::from_tag(field(&caps, "cache_status")),
    })
}

fn field<'h>(caps: &Captures<'h>, name: &str) -> &'h str {
    caps.name(name).map_or("", |m| m.as_str())
}

fn parse_latency(raw: &str) -> Option<f64> {
    if !raw.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}
