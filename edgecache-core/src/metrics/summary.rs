use crate::metrics::snapshot::MetricsSnapshot;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

pub fn render_summary(snapshot: &MetricsSnapshot) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Cache Metrics Summary\n\
         =====================\n\
         Total Requests: {}\n\
         Cache Hits:     {} ({:.2}%)\n\
         Cache Misses:   {}\n\
         Cache Bypass:   {}\n\
         Cache Stale:    {}\n\
         Cache Updating: {}\n\n",
        snapshot.total_requests,
        snapshot.cache_hits,
        snapshot.hit_ratio * 100.0,
        snapshot.cache_misses,
        snapshot.cache_bypass,
        snapshot.cache_stale,
        snapshot.cache_updating,
    ));

    out.push_str(&format!(
        "Error Rate: {:.2}%\n  4xx errors: {}\n  5xx errors: {}\n\n",
        snapshot.error_rate * 100.0,
        snapshot.error_4xx,
        snapshot.error_5xx,
    ));

    out.push_str(&format!(
        "Latency:\n  P50: {:.2}ms\n  P95: {:.2}ms\n  P99: {:.2}ms\n\n",
        snapshot.p50_latency * 1000.0,
        snapshot.p95_latency * 1000.0,
        snapshot.p99_latency * 1000.0,
    ));

    out.push_str(&format!(
        "Total Bytes: {:.2} MB\n",
        snapshot.total_bytes as f64 / BYTES_PER_MB
    ));

    out
}
