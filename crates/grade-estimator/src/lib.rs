pub mod config;
pub mod error;
pub mod estimation;
pub mod telemetry;

pub use estimation::{
    estimate_professional_grades, format_as_output, Authority, AuthorityEstimate,
    CenteringMeasurements, CenteringSplit, Confidence, EstimateBundle, EstimationEngine,
    EstimatorConfig, GradingInput, OutputDocument,
};
