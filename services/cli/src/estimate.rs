use clap::Args;
use grade_estimator::error::AppError;
use grade_estimator::{format_as_output, EstimationEngine, GradingInput};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Args, Debug, Default)]
pub(crate) struct EstimateArgs {
    /// Grading input JSON document; reads stdin when omitted or `-`
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Pretty-print the output document
    #[arg(long)]
    pub(crate) pretty: bool,
}

pub(crate) fn run_estimate(engine: &EstimationEngine, args: EstimateArgs) -> Result<(), AppError> {
    let document = read_document(args.input.as_deref())?;
    println!("{}", render_estimate(engine, &document, args.pretty)?);
    Ok(())
}

fn read_document(path: Option<&Path>) -> Result<String, AppError> {
    match path {
        Some(path) if path != Path::new("-") => {
            debug!(path = %path.display(), "reading grading input");
            Ok(std::fs::read_to_string(path)?)
        }
        _ => {
            let mut document = String::new();
            std::io::stdin().read_to_string(&mut document)?;
            Ok(document)
        }
    }
}

pub(crate) fn render_estimate(
    engine: &EstimationEngine,
    document: &str,
    pretty: bool,
) -> Result<String, AppError> {
    let input = GradingInput::from_json(document)?;
    let output = format_as_output(engine.estimate(&input));
    let rendered = if pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn renders_the_output_document() {
        let engine = EstimationEngine::default();
        let document = r#"{
            "final_grade": 9.0,
            "centering": {
                "front_left_right": [52, 48],
                "front_top_bottom": [51, 49]
            }
        }"#;

        let rendered = render_estimate(&engine, document, false).expect("renders");
        let value: Value = serde_json::from_str(&rendered).expect("valid json");
        let grades = &value["estimated_professional_grades"];

        assert_eq!(grades["PSA"]["estimated_grade"], "9 Mint");
        assert_eq!(grades["BGS"]["numeric_score"], 9.5);
        assert_eq!(grades["SGC"]["confidence"], "high");
        assert_eq!(grades["CGC"]["estimated_grade"], "9.0 VF/NM");
    }

    #[test]
    fn malformed_document_is_an_input_error() {
        let engine = EstimationEngine::default();
        let err = render_estimate(&engine, r#"{"final_grade": "nine"}"#, false)
            .expect_err("grade must be numeric");
        assert!(matches!(err, AppError::Input(_)));
    }
}
