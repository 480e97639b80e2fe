use super::domain::Confidence;

/// Grades on a multiple of this step count as standard increments.
pub const STANDARD_INCREMENT: f64 = 0.5;
const INCREMENT_EPSILON: f64 = 1e-9;

/// Which branches fired while estimating one authority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfidenceSignals {
    pub override_fired: bool,
    pub centering_binding: bool,
    pub on_standard_increment: bool,
    pub near_boundary: bool,
    pub weak_subgrade: bool,
}

pub fn is_standard_increment(grade: f64) -> bool {
    let steps = grade / STANDARD_INCREMENT;
    (steps - steps.round()).abs() < INCREMENT_EPSILON
}

/// Rules apply in order; the first that matches decides.
///
/// `Low` is kept for compounding weak signals but no current rule produces it.
pub fn assess(signals: &ConfidenceSignals) -> Confidence {
    if signals.override_fired {
        return Confidence::High;
    }
    if signals.centering_binding {
        return Confidence::Medium;
    }
    if signals.on_standard_increment && !signals.near_boundary && !signals.weak_subgrade {
        return Confidence::High;
    }
    Confidence::Medium
}
