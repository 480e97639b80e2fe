use serde::{Deserialize, Serialize};

use super::domain::EstimateBundle;

/// Document shape consumed by the grading pipeline's persistence step and the card UI.
///
/// Field names and nesting are an external contract:
/// `{"estimated_professional_grades": {"PSA": {...}, "BGS": {...}, "SGC": {...}, "CGC": {...}}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputDocument {
    pub estimated_professional_grades: EstimateBundle,
}

/// Wraps a bundle in the output document. No values are recomputed.
pub fn format_as_output(bundle: EstimateBundle) -> OutputDocument {
    OutputDocument {
        estimated_professional_grades: bundle,
    }
}

impl From<EstimateBundle> for OutputDocument {
    fn from(bundle: EstimateBundle) -> Self {
        format_as_output(bundle)
    }
}
