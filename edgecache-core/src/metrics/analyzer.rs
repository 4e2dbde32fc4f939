use crate::access_log::parse_line;
use crate::metrics::cache_metrics::CacheMetrics;
use crate::metrics::snapshot::MetricsSnapshot;
use crate::metrics::summary::render_summary;

/// Folds access-log text into [`CacheMetrics`].
///
/// Each instance owns its aggregate. Mutating calls take `&mut self`, so
/// concurrent runs need one analyzer each.
#[derive(Debug, Default)]
pub struct MetricsAnalyzer {
    metrics: CacheMetrics,
}

impl MetricsAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyze a whole block of log text as a fresh run.
    ///
    /// State from earlier calls is discarded first. Blank lines are skipped,
    /// lines that do not parse are ignored. The returned aggregate belongs to
    /// the caller; the analyzer keeps its own copy for [`Self::summary`] and
    /// further [`Self::process_line`] calls.
    pub fn process_content(&mut self, content: &str) -> CacheMetrics {
        self.metrics = CacheMetrics::new();

        let mut lines = 0u64;
        let mut skipped = 0u64;

        for line in content.lines() {
            if line.trim().is_empty() {
                continue;
            }
            lines += 1;
            if !self.process_line(line) {
                skipped += 1;
            }
        }

        tracing::info!(
            lines,
            skipped,
            total_requests = self.metrics.total_requests,
            "access log analyzed"
        );

        self.metrics.clone()
    }

    /// Fold one line into the current aggregate. Returns `false` when the
    /// line is not an access-log record.
    pub fn process_line(&mut self, line: &str) -> bool {
        let Some(record) = parse_line(line) else {
            tracing::debug!(line, "skipping unparseable line");
            return false;
        };

        if record.latency.is_none() {
            tracing::debug!(path = %record.path, "record has no usable latency");
        }

        self.metrics.record(&record);
        true
    }

    pub fn metrics(&self) -> &CacheMetrics {
        &self.metrics
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Plain-text summary of the current aggregate.
    pub fn summary(&self) -> String {
        render_summary(&self.snapshot())
    }

    pub fn into_metrics(self) -> CacheMetrics {
        self.metrics
    }
}
