//! Professional grading estimation.
//!
//! Translates the internal 0–10 condition grade into estimates for PSA, BGS, SGC and CGC.
//! Each authority runs the same pipeline against its own rulebook: defect overrides first,
//! then the centering tolerance ladder, the table lookup, a confidence assessment and the
//! explanatory notes. The pipelines share nothing, so the order they run in is irrelevant.

pub mod centering;
pub mod confidence;
mod config;
pub mod domain;
pub mod notes;
pub mod output;
pub mod overrides;
pub mod tables;

#[cfg(test)]
mod tests;

pub use config::{
    EstimatorConfig, EstimatorConfigError, DEFAULT_BACK_CENTERING_WEIGHT,
    DEFAULT_NEAR_BOUNDARY_MARGIN,
};
pub use domain::{
    Authority, AuthorityEstimate, CenteringMeasurements, CenteringSplit, Confidence,
    EstimateBundle, GradingInput, InputError,
};
pub use output::{format_as_output, OutputDocument};

use confidence::ConfidenceSignals;
use tracing::{debug, trace};

/// Stateless estimator applying every authority's rulebook to a grading input.
#[derive(Debug, Clone, Default)]
pub struct EstimationEngine {
    config: EstimatorConfig,
}

impl EstimationEngine {
    pub fn new(config: EstimatorConfig) -> Self {
        Self {
            config: config.sanitized(),
        }
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    pub fn estimate(&self, input: &GradingInput) -> EstimateBundle {
        let grade = input.clamped_grade();
        if grade != input.final_grade {
            debug!(
                final_grade = input.final_grade,
                clamped = grade,
                "base grade outside the 0-10 scale; clamped"
            );
        }

        EstimateBundle {
            psa: self.estimate_authority(Authority::Psa, input),
            bgs: self.estimate_authority(Authority::Bgs, input),
            sgc: self.estimate_authority(Authority::Sgc, input),
            cgc: self.estimate_authority(Authority::Cgc, input),
        }
    }

    pub fn estimate_authority(
        &self,
        authority: Authority,
        input: &GradingInput,
    ) -> AuthorityEstimate {
        let book = tables::rulebook(authority);
        let grade = input.clamped_grade();

        if let Some(outcome) = overrides::resolve(book, input) {
            debug!(
                %authority,
                kind = ?outcome.kind,
                label = outcome.label,
                capped = outcome.capped,
                "override decided estimate"
            );
            return AuthorityEstimate {
                estimated_grade: outcome.label.to_string(),
                numeric_score: outcome.numeric,
                confidence: confidence::assess(&ConfidenceSignals {
                    override_fired: true,
                    ..ConfidenceSignals::default()
                }),
                notes: notes::override_notes(&outcome),
            };
        }

        let verdict = centering::evaluate(book, grade, input.centering.as_ref(), &self.config);
        let tier = book.tier(verdict.tier_index);
        if verdict.binding() {
            debug!(
                %authority,
                worst_ratio = ?verdict.worst_ratio,
                from = book.tier(verdict.implied_index).label,
                to = tier.label,
                "centering lowered estimate"
            );
        }

        let weak_subgrades = if authority == Authority::Bgs && tier.numeric >= 8.0 {
            input.weak_subgrades()
        } else {
            Vec::new()
        };

        let signals = ConfidenceSignals {
            override_fired: false,
            centering_binding: verdict.binding(),
            on_standard_increment: confidence::is_standard_increment(grade),
            near_boundary: verdict.near_boundary(self.config.near_boundary_margin),
            weak_subgrade: !weak_subgrades.is_empty(),
        };
        let confidence = confidence::assess(&signals);
        trace!(%authority, label = tier.label, ?signals, ?confidence, "table lookup");

        AuthorityEstimate {
            estimated_grade: tier.label.to_string(),
            numeric_score: tier.numeric,
            confidence,
            notes: notes::mapping_notes(book, &verdict, &signals, grade, &weak_subgrades),
        }
    }
}

/// Estimates all four authorities under the default policy.
pub fn estimate_professional_grades(input: &GradingInput) -> EstimateBundle {
    EstimationEngine::default().estimate(input)
}
