use crate::access_log::{CacheStatus, LogRecord};
use crate::metrics::percentile::{self, P95, P99};
use crate::metrics::snapshot::MetricsSnapshot;

/// Aggregate of one analysis run.
///
/// Counters only ever grow. Every latency observation is kept so the
/// rank-index percentiles can be computed exactly; memory is linear in the
/// number of records with a parsed latency.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheMetrics {
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
    latencies: Vec<f64>,
}

impl CacheMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one parsed record into the aggregate.
    pub fn record(&mut self, record: &LogRecord) {
        self.total_requests += 1;

        match record.cache_status {
            CacheStatus::Hit => self.cache_hits += 1,
            CacheStatus::Miss => self.cache_misses += 1,
            CacheStatus::Bypass => self.cache_bypass += 1,
            CacheStatus::Stale => self.cache_stale += 1,
            CacheStatus::Updating => self.cache_updating += 1,
            CacheStatus::Revalidated => self.cache_revalidated += 1,
            CacheStatus::Unknown => {}
        }

        match record.status {
            500..=599 => self.error_5xx += 1,
            400..=499 => self.error_4xx += 1,
            _ => {}
        }

        self.total_bytes = self.total_bytes.saturating_add(record.bytes);

        if let Some(latency) = record.latency {
            self.latencies.push(latency);
        }
    }

    /// Number of latency observations collected so far.
    pub fn latency_count(&self) -> usize {
        self.latencies.len()
    }

    /// `hits / (hits + misses)`. Bypass, stale, updating and revalidated
    /// responses are outside both sides of the ratio.
    pub fn hit_ratio(&self) -> f64 {
        let total = self.cache_hits + self.cache_misses;
        if total == 0 {
            return 0.0;
        }
        self.cache_hits as f64 / total as f64
    }

    pub fn error_rate(&self) -> f64 {
        if self.total_requests == 0 {
            return 0.0;
        }
        (self.error_4xx + self.error_5xx) as f64 / self.total_requests as f64
    }

    pub fn p50_latency(&self) -> f64 {
        percentile::median(&percentile::sorted(&self.latencies))
    }

    pub fn p95_latency(&self) -> f64 {
        percentile::rank_index(&percentile::sorted(&self.latencies), P95)
    }

    pub fn p99_latency(&self) -> f64 {
        percentile::rank_index(&percentile::sorted(&self.latencies), P99)
    }

    /// Export counters and derived values. Latencies appear as a count only.
    pub fn snapshot(&self) -> MetricsSnapshot {
        let sorted = percentile::sorted(&self.latencies);

        MetricsSnapshot {
            total_requests: self.total_requests,
            cache_hits: self.cache_hits,
            cache_misses: self.cache_misses,
            cache_bypass: self.cache_bypass,
            cache_stale: self.cache_stale,
            cache_updating: self.cache_updating,
            cache_revalidated: self.cache_revalidated,
            error_4xx: self.error_4xx,
            error_5xx: self.error_5xx,
            total_bytes: self.total_bytes,
            latencies: sorted.len() as u64,
            hit_ratio: self.hit_ratio(),
            error_rate: self.error_rate(),
            p50_latency: percentile::median(&sorted),
            p95_latency: percentile::rank_index(&sorted, P95),
            p99_latency: percentile::rank_index(&sorted, P99),
        }
    }
}
