use serde::{Deserialize, Serialize};

pub const DEFAULT_BACK_CENTERING_WEIGHT: f64 = 0.5;
pub const DEFAULT_NEAR_BOUNDARY_MARGIN: f64 = 1.0;

/// Rejected policy dials.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimatorConfigError {
    #[error("back centering weight must lie within [0, 1) (found {0})")]
    BackCenteringWeight(f64),
    #[error("near-boundary margin must be a non-negative number of percentage points (found {0})")]
    NearBoundaryMargin(f64),
}

/// Tunable policy constants for the estimator.
///
/// None of the grading companies publish how much back-face centering counts against
/// the front, so `back_centering_weight` is a policy choice: the fraction of the back's
/// deviation from 50/50 that is charged against the card. It stays below 1 so the front
/// face always counts more than the back. `near_boundary_margin` is how
/// many percentage points of headroom below a tolerance still count as borderline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    pub back_centering_weight: f64,
    pub near_boundary_margin: f64,
}

impl EstimatorConfig {
    pub fn try_new(
        back_centering_weight: f64,
        near_boundary_margin: f64,
    ) -> Result<Self, EstimatorConfigError> {
        if !back_centering_weight.is_finite() || !(0.0..1.0).contains(&back_centering_weight) {
            return Err(EstimatorConfigError::BackCenteringWeight(back_centering_weight));
        }
        if !near_boundary_margin.is_finite() || near_boundary_margin < 0.0 {
            return Err(EstimatorConfigError::NearBoundaryMargin(near_boundary_margin));
        }

        Ok(Self {
            back_centering_weight,
            near_boundary_margin,
        })
    }

    /// Replaces out-of-range dials with their defaults.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        Self {
            back_centering_weight: Self::try_new(self.back_centering_weight, 0.0)
                .map(|config| config.back_centering_weight)
                .unwrap_or(defaults.back_centering_weight),
            near_boundary_margin: Self::try_new(0.0, self.near_boundary_margin)
                .map(|config| config.near_boundary_margin)
                .unwrap_or(defaults.near_boundary_margin),
        }
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            back_centering_weight: DEFAULT_BACK_CENTERING_WEIGHT,
            near_boundary_margin: DEFAULT_NEAR_BOUNDARY_MARGIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_weight_outside_unit_interval() {
        assert_eq!(
            EstimatorConfig::try_new(1.5, 1.0),
            Err(EstimatorConfigError::BackCenteringWeight(1.5))
        );
        assert!(EstimatorConfig::try_new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn back_face_cannot_weigh_as_much_as_the_front() {
        assert_eq!(
            EstimatorConfig::try_new(1.0, 1.0),
            Err(EstimatorConfigError::BackCenteringWeight(1.0))
        );
        assert!(EstimatorConfig::try_new(0.99, 1.0).is_ok());

        let config = EstimatorConfig {
            back_centering_weight: 1.0,
            ..EstimatorConfig::default()
        }
        .sanitized();
        assert_eq!(config.back_centering_weight, DEFAULT_BACK_CENTERING_WEIGHT);
    }

    #[test]
    fn rejects_negative_margin() {
        assert_eq!(
            EstimatorConfig::try_new(0.5, -2.0),
            Err(EstimatorConfigError::NearBoundaryMargin(-2.0))
        );
    }

    #[test]
    fn sanitized_keeps_valid_dials_and_resets_invalid_ones() {
        let config = EstimatorConfig {
            back_centering_weight: 0.25,
            near_boundary_margin: f64::INFINITY,
        }
        .sanitized();

        assert_eq!(config.back_centering_weight, 0.25);
        assert_eq!(config.near_boundary_margin, DEFAULT_NEAR_BOUNDARY_MARGIN);
    }
}
