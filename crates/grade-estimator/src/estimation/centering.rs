use super::config::EstimatorConfig;
use super::domain::CenteringMeasurements;
use super::tables::Rulebook;

/// Centering outcome for one authority.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenteringVerdict {
    /// Tier the base grade maps to before centering is considered.
    pub implied_index: usize,
    /// Tier after walking down the tolerance ladder.
    pub tier_index: usize,
    /// Effective worst larger-side share; `None` when no measurements were supplied.
    pub worst_ratio: Option<f64>,
    /// Tolerance of the final tier.
    pub tolerance: f64,
}

impl CenteringVerdict {
    /// Centering forced the result below the tier implied by the base grade.
    pub fn binding(&self) -> bool {
        self.tier_index != self.implied_index
    }

    /// Percentage points left before the final tier's tolerance would be exceeded.
    pub fn headroom(&self) -> Option<f64> {
        self.worst_ratio.map(|worst| self.tolerance - worst)
    }

    /// Measured centering is off-perfect and within `margin` points of the tolerance.
    pub fn near_boundary(&self, margin: f64) -> bool {
        match (self.worst_ratio, self.headroom()) {
            (Some(worst), Some(headroom)) => worst > 50.0 && headroom >= 0.0 && headroom < margin,
            _ => false,
        }
    }
}

/// Blends front and back centering into one larger-side share.
///
/// The front's worst axis counts in full. The back's deviation from 50/50 is scaled by
/// `back_centering_weight`, so a back face only moves the result when it is off by enough
/// to overtake the front after scaling.
pub fn effective_worst_ratio(centering: &CenteringMeasurements, config: &EstimatorConfig) -> f64 {
    let front = centering.front_worst();
    match centering.back_worst() {
        Some(back) => {
            let back_equivalent = 50.0 + (back - 50.0) * config.back_centering_weight;
            front.max(back_equivalent)
        }
        None => front,
    }
}

/// Walks `book`'s tolerance ladder down from the tier implied by `grade`.
///
/// Tolerances are inclusive. Missing measurements never penalise the card.
pub fn evaluate(
    book: &Rulebook,
    grade: f64,
    centering: Option<&CenteringMeasurements>,
    config: &EstimatorConfig,
) -> CenteringVerdict {
    let implied_index = book.tier_index(grade);

    let Some(centering) = centering else {
        return CenteringVerdict {
            implied_index,
            tier_index: implied_index,
            worst_ratio: None,
            tolerance: book.tier(implied_index).max_worst_ratio,
        };
    };

    let worst = effective_worst_ratio(centering, config);
    let tier_index = (implied_index..book.tiers.len())
        .find(|&index| worst <= book.tiers[index].max_worst_ratio)
        .unwrap_or(book.lowest_index());

    CenteringVerdict {
        implied_index,
        tier_index,
        worst_ratio: Some(worst),
        tolerance: book.tier(tier_index).max_worst_ratio,
    }
}
