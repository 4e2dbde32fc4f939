use crate::conf::types::AlertConfig;
use crate::metrics::snapshot::MetricsSnapshot;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    LowHitRatio { hit_ratio: f64, minimum: f64 },
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alert::LowHitRatio { hit_ratio, minimum } => write!(
                f,
                "hit ratio {:.2}% is below the minimum of {:.2}%",
                hit_ratio * 100.0,
                minimum * 100.0
            ),
        }
    }
}

/// Check a finished run against the configured thresholds.
pub fn evaluate_alerts(snapshot: &MetricsSnapshot, cfg: &AlertConfig) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if snapshot.hit_ratio < cfg.min_hit_ratio {
        alerts.push(Alert::LowHitRatio {
            hit_ratio: snapshot.hit_ratio,
            minimum: cfg.min_hit_ratio,
        });
    }

    for alert in &alerts {
        tracing::warn!(%alert, "cache alert raised");
    }

    alerts
}
