use crate::estimation::{
    Authority, AuthorityEstimate, CenteringMeasurements, CenteringSplit, EstimateBundle,
    EstimationEngine, GradingInput,
};

pub(super) fn engine() -> EstimationEngine {
    EstimationEngine::default()
}

pub(super) fn centering(lr: (f64, f64), tb: (f64, f64)) -> CenteringMeasurements {
    CenteringMeasurements::front(CenteringSplit(lr.0, lr.1), CenteringSplit(tb.0, tb.1))
}

pub(super) fn card(grade: f64, lr: (f64, f64), tb: (f64, f64)) -> GradingInput {
    GradingInput::new(grade).with_centering(centering(lr, tb))
}

pub(super) fn perfect_card() -> GradingInput {
    card(10.0, (50.0, 50.0), (50.0, 50.0))
}

pub(super) fn estimate(input: &GradingInput) -> EstimateBundle {
    engine().estimate(input)
}

pub(super) fn assert_grade(estimate: &AuthorityEstimate, label: &str, numeric: f64) {
    assert_eq!(
        estimate.estimated_grade, label,
        "unexpected label in {estimate:?}"
    );
    assert_eq!(
        estimate.numeric_score, numeric,
        "unexpected score in {estimate:?}"
    );
}

pub(super) fn scores(bundle: &EstimateBundle) -> [(Authority, f64); 4] {
    Authority::ALL.map(|authority| (authority, bundle.get(authority).numeric_score))
}
