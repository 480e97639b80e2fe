use grade_estimator::config::AppConfig;
use grade_estimator::error::AppError;
use grade_estimator::telemetry;
use grade_estimator::{Authority, EstimationEngine};
use tracing::info;

/// Loads configuration, installs tracing and builds the engine every command shares.
pub(crate) fn bootstrap() -> Result<EstimationEngine, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let engine = EstimationEngine::new(config.estimator);
    info!(
        ?config.environment,
        back_centering_weight = engine.config().back_centering_weight,
        near_boundary_margin = engine.config().near_boundary_margin,
        "grade estimator ready"
    );
    Ok(engine)
}

pub(crate) fn parse_authority(value: &str) -> Result<Authority, String> {
    Authority::parse(value)
        .ok_or_else(|| format!("unknown authority '{value}' (expected psa, bgs, sgc or cgc)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authority_names_are_case_insensitive() {
        assert_eq!(parse_authority("PSA"), Ok(Authority::Psa));
        assert_eq!(parse_authority("beckett"), Ok(Authority::Bgs));
        assert!(parse_authority("tag").is_err());
    }
}
