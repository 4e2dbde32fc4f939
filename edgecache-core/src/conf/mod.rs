mod error;
mod loader;
#[cfg(test)]
mod tests;
pub mod types;

pub use error::ConfigError;
pub use loader::{
    ENV_LOG_FORMAT, ENV_LOG_LEVEL, ENV_MIN_HIT_RATIO, apply_env_overrides, apply_overrides,
    config_from_env, load_config,
};
pub use types::{AlertConfig, AnalyzerConfig, LogFormat, LoggingConfig};
