use crate::conf::{LogFormat, LoggingConfig};
use tracing_subscriber::{EnvFilter, fmt};

/// Filter from `RUST_LOG` when set, otherwise from the configured level.
pub fn build_filter(cfg: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.level))
}

/// Initialize the global tracing subscriber.
///
/// - `json` flattens event fields for log shippers
/// - `pretty` is meant for a terminal
///
/// Calling this twice panics, same as any global subscriber install.
pub fn init_logging(cfg: &LoggingConfig) {
    let filter = build_filter(cfg);

    match cfg.format {
        LogFormat::Json => fmt()
            .with_env_filter(filter)
            .json()
            .flatten_event(true)
            .init(),
        LogFormat::Pretty => fmt().with_env_filter(filter).pretty().init(),
    }
}
