use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Finished, read-only view of one run, in base units: seconds for
/// latency, bytes for size, `0.0..=1.0` for ratios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub total_requests: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub cache_bypass: u64,
    pub cache_stale: u64,
    pub cache_updating: u64,
    pub cache_revalidated: u64,
    pub error_4xx: u64,
    pub error_5xx: u64,
    pub total_bytes: u64,
    /// Number of latency observations. The samples themselves are never exported.
    pub latencies: u64,
    pub hit_ratio: f64,
    pub error_rate: f64,
    pub p50_latency: f64,
    pub p95_latency: f64,
    pub p99_latency: f64,
}

impl MetricsSnapshot {
    /// Flat key/value form, one entry per field.
    pub fn to_map(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            // A struct of plain numbers always serializes to an object.
            _ => Map::new(),
        }
    }
}
