use chrono::{DateTime, FixedOffset};
use std::fmt;

/// Time layout of the proxy's `$time_local` field, e.g. `27/Oct/2025:10:00:00 +0000`.
pub const TIME_LOCAL_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

/// Value of `$upstream_cache_status` as written by the proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheStatus {
    Hit,
    Miss,
    Bypass,
    Stale,
    Updating,
    Revalidated,
    /// Empty tag or anything outside the known vocabulary.
    Unknown,
}

impl CacheStatus {
    /// Tags are matched after trimming and are case-sensitive.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "HIT" => Self::Hit,
            "MISS" => Self::Miss,
            "BYPASS" => Self::Bypass,
            "STALE" => Self::Stale,
            "UPDATING" => Self::Updating,
            "REVALIDATED" => Self::Revalidated,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hit => "HIT",
            Self::Miss => "MISS",
            Self::Bypass => "BYPASS",
            Self::Stale => "STALE",
            Self::Updating => "UPDATING",
            Self::Revalidated => "REVALIDATED",
            Self::Unknown => "",
        }
    }
}

impl fmt::Display for CacheStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One access-log line that matched the record grammar.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub client_addr: String,
    /// Raw `[time]` field, see [`LogRecord::timestamp`].
    pub time: String,
    pub method: String,
    pub path: String,
    pub protocol: String,
    pub status: u64,
    pub bytes: u64,
    /// Request time in seconds. `None` when the field is not a finite number.
    pub latency: Option<f64>,
    pub cache_status: CacheStatus,
}

impl LogRecord {
    pub fn timestamp(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_str(&self.time, TIME_LOCAL_FORMAT).ok()
    }

    pub fn is_client_error(&self) -> bool {
        (400..=499).contains(&self.status)
    }

    pub fn is_server_error(&self) -> bool {
        (500..=599).contains(&self.status)
    }
}
