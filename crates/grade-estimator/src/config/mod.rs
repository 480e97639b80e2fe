use std::env;
use std::fmt;

use crate::estimation::{EstimatorConfig, EstimatorConfigError};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the estimator harness.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub estimator: EstimatorConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::parse(
            &env::var("GRADER_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("GRADER_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let defaults = EstimatorConfig::default();
        let back_centering_weight = read_number(
            "GRADER_BACK_CENTERING_WEIGHT",
            defaults.back_centering_weight,
        )?;
        let near_boundary_margin = read_number(
            "GRADER_NEAR_BOUNDARY_MARGIN",
            defaults.near_boundary_margin,
        )?;
        let estimator = EstimatorConfig::try_new(back_centering_weight, near_boundary_margin)
            .map_err(ConfigError::Estimator)?;

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            estimator,
        })
    }
}

fn read_number(key: &'static str, default: f64) -> Result<f64, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<f64>()
            .map_err(|_| ConfigError::InvalidNumber { key, value }),
        Err(_) => Ok(default),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { key: &'static str, value: String },
    Estimator(EstimatorConfigError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "{key} must be a number (found '{value}')")
            }
            ConfigError::Estimator(err) => write!(f, "invalid estimator policy: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidNumber { .. } => None,
            ConfigError::Estimator(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("GRADER_ENV");
        env::remove_var("GRADER_LOG_LEVEL");
        env::remove_var("GRADER_BACK_CENTERING_WEIGHT");
        env::remove_var("GRADER_NEAR_BOUNDARY_MARGIN");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.estimator, EstimatorConfig::default());
    }

    #[test]
    fn reads_policy_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("GRADER_ENV", "prod");
        env::set_var("GRADER_BACK_CENTERING_WEIGHT", "0.25");
        env::set_var("GRADER_NEAR_BOUNDARY_MARGIN", " 2.5 ");
        let config = AppConfig::load().expect("config loads");
        reset_env();

        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(config.estimator.back_centering_weight, 0.25);
        assert_eq!(config.estimator.near_boundary_margin, 2.5);
    }

    #[test]
    fn rejects_non_numeric_weight() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("GRADER_BACK_CENTERING_WEIGHT", "heavy");
        let err = AppConfig::load().expect_err("weight must parse");
        reset_env();

        assert!(matches!(
            err,
            ConfigError::InvalidNumber {
                key: "GRADER_BACK_CENTERING_WEIGHT",
                ..
            }
        ));
    }

    #[test]
    fn rejects_out_of_range_weight() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("GRADER_BACK_CENTERING_WEIGHT", "1.2");
        let err = AppConfig::load().expect_err("weight must be within [0, 1)");
        reset_env();

        assert!(matches!(
            err,
            ConfigError::Estimator(EstimatorConfigError::BackCenteringWeight(_))
        ));
    }
}
