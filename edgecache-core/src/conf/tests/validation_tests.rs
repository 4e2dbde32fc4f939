use crate::conf::{AnalyzerConfig, ConfigError};

fn config(level: &str, min_hit_ratio: f64) -> AnalyzerConfig {
    let mut cfg = AnalyzerConfig::default();
    cfg.logging.level = level.to_string();
    cfg.alerts.min_hit_ratio = min_hit_ratio;
    cfg
}

fn validation_errors(cfg: &AnalyzerConfig) -> Vec<String> {
    match cfg.validate() {
        Err(ConfigError::Validation { errors }) => errors,
        other => panic!("expected validation errors, got {other:?}"),
    }
}

#[test]
fn defaults_are_valid() {
    assert!(AnalyzerConfig::default().validate().is_ok());
}

#[test]
fn log_level_is_case_insensitive() {
    for level in ["TRACE", "Debug", "info", "WARN", "error"] {
        assert!(config(level, 0.8).validate().is_ok(), "level {level}");
    }
}

#[test]
fn unknown_log_level_is_rejected() {
    // Act
    let errors = validation_errors(&config("verbose", 0.8));

    // Assert
    assert_eq!(errors, vec!["invalid log level 'verbose'".to_string()]);
}

#[test]
fn ratio_bounds_are_inclusive() {
    assert!(config("info", 0.0).validate().is_ok());
    assert!(config("info", 1.0).validate().is_ok());
}

#[test]
fn out_of_range_and_nan_ratios_are_rejected() {
    for ratio in [-0.1, 1.01, f64::NAN] {
        let errors = validation_errors(&config("info", ratio));
        assert_eq!(errors.len(), 1, "ratio {ratio}");
        assert!(errors[0].starts_with("min_hit_ratio"));
    }
}

#[test]
fn all_problems_are_reported_together() {
    // Act
    let err = config("loud", 2.0).validate().unwrap_err();

    // Assert
    let message = err.to_string();
    assert!(message.starts_with("invalid configuration: "));
    assert!(message.contains("invalid log level 'loud'"));
    assert!(message.contains("min_hit_ratio"));
}
