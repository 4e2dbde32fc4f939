use crate::conf::error::ConfigError;
use crate::conf::types::{AnalyzerConfig, LogFormat};
use std::fs;
use std::path::Path;

pub const ENV_LOG_LEVEL: &str = "EDGECACHE_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "EDGECACHE_LOG_FORMAT";
pub const ENV_MIN_HIT_RATIO: &str = "EDGECACHE_MIN_HIT_RATIO";

/// Read, parse, apply environment overrides, then validate.
pub fn load_config(path: &Path) -> Result<AnalyzerConfig, ConfigError> {
    let contents =
        fs::read_to_string(path).map_err(|e| ConfigError::read_file(path.to_path_buf(), e))?;

    let mut cfg: AnalyzerConfig =
        toml::from_str(&contents).map_err(|e| ConfigError::parse(path.to_path_buf(), e))?;

    apply_env_overrides(&mut cfg)?;
    cfg.validate()?;

    tracing::debug!(path = %path.display(), ?cfg, "analyzer config loaded");

    Ok(cfg)
}

/// Defaults plus environment overrides, for deployments without a config file.
pub fn config_from_env() -> Result<AnalyzerConfig, ConfigError> {
    let mut cfg = AnalyzerConfig::default();
    apply_env_overrides(&mut cfg)?;
    cfg.validate()?;
    Ok(cfg)
}

pub fn apply_env_overrides(cfg: &mut AnalyzerConfig) -> Result<(), ConfigError> {
    apply_overrides(cfg, std::env::vars())
}

/// Apply `EDGECACHE_*` overrides from an arbitrary variable source.
/// Unrelated variables are ignored.
pub fn apply_overrides<I, K, V>(cfg: &mut AnalyzerConfig, vars: I) -> Result<(), ConfigError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    for (key, value) in vars {
        let (key, value) = (key.as_ref(), value.as_ref());

        match key {
            ENV_LOG_LEVEL => cfg.logging.level = value.trim().to_string(),
            ENV_LOG_FORMAT => {
                cfg.logging.format = value
                    .parse::<LogFormat>()
                    .map_err(|reason| ConfigError::invalid_override(key, value, reason))?;
            }
            ENV_MIN_HIT_RATIO => {
                cfg.alerts.min_hit_ratio = value
                    .trim()
                    .parse::<f64>()
                    .map_err(|e| ConfigError::invalid_override(key, value, e))?;
            }
            _ => {}
        }
    }

    Ok(())
}
