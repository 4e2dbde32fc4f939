use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    // IO
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parsing
    #[error("failed to parse TOML in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse TOML config: {source}")]
    ParseStr {
        #[source]
        source: toml::de::Error,
    },

    // Environment
    #[error("invalid value '{value}' for {var}: {reason}")]
    InvalidOverride {
        var: String,
        value: String,
        reason: String,
    },

    // Validation
    #[error("invalid configuration: {}", .errors.join("; "))]
    Validation { errors: Vec<String> },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_override(var: &str, value: &str, reason: impl ToString) -> Self {
        Self::InvalidOverride {
            var: var.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}
