//! Per-authority rulebooks.
//!
//! Each authority owns one ordered table translating the internal 0–10 grade into its own
//! label and numeric score, together with the centering tolerance of every tier and the
//! fixed outcomes its defect policy imposes. Tables are plain data so they can be audited
//! and diffed against the published rubrics without reading any control flow.

mod bgs;
mod cgc;
mod psa;
mod sgc;

use super::domain::Authority;

/// Tolerance used by tiers that accept any centering.
pub const ANY_CENTERING: f64 = 100.0;

/// One row of an authority's grade table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeTier {
    /// Lowest internal grade that reaches this tier (inclusive).
    pub min_grade: f64,
    pub label: &'static str,
    pub numeric: f64,
    /// Largest tolerated larger-side centering share, e.g. `55.0` for 55/45.
    pub max_worst_ratio: f64,
    pub remark: &'static str,
}

/// Fixed label/score pair imposed by a defect policy rather than a table lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolicyOutcome {
    pub label: &'static str,
    pub numeric: f64,
    pub remark: &'static str,
}

/// Complete grading policy of one authority.
#[derive(Debug)]
pub struct Rulebook {
    pub authority: Authority,
    /// Ordered by descending `min_grade`; the last tier starts at 0.0 and accepts any centering.
    pub tiers: &'static [GradeTier],
    pub altered: PolicyOutcome,
    pub structural_ceiling: PolicyOutcome,
    pub crease_ceiling: PolicyOutcome,
}

impl Rulebook {
    /// Index of the tier for `grade`: the nearest breakpoint at or below it.
    pub fn tier_index(&self, grade: f64) -> usize {
        self.tiers
            .iter()
            .position(|tier| tier.min_grade <= grade)
            .unwrap_or(self.lowest_index())
    }

    pub fn tier(&self, index: usize) -> &GradeTier {
        &self.tiers[index.min(self.lowest_index())]
    }

    pub fn tier_for(&self, grade: f64) -> &GradeTier {
        self.tier(self.tier_index(grade))
    }

    pub fn lowest_index(&self) -> usize {
        self.tiers.len() - 1
    }

    /// Smallest and largest numeric score this authority can report, policy outcomes included.
    pub fn score_range(&self) -> (f64, f64) {
        let policy = [self.altered, self.structural_ceiling, self.crease_ceiling];
        let scores = self
            .tiers
            .iter()
            .map(|tier| tier.numeric)
            .chain(policy.iter().map(|outcome| outcome.numeric));
        scores.fold((f64::INFINITY, f64::NEG_INFINITY), |(low, high), score| {
            (low.min(score), high.max(score))
        })
    }
}

pub fn rulebook(authority: Authority) -> &'static Rulebook {
    match authority {
        Authority::Psa => &psa::PSA,
        Authority::Bgs => &bgs::BGS,
        Authority::Sgc => &sgc::SGC,
        Authority::Cgc => &cgc::CGC,
    }
}

#[cfg(test)]
pub(crate) fn assert_table_well_formed(book: &Rulebook) {
    let tiers = book.tiers;
    assert!(!tiers.is_empty(), "{} table is empty", book.authority);

    for pair in tiers.windows(2) {
        let (upper, lower) = (&pair[0], &pair[1]);
        assert!(
            upper.min_grade > lower.min_grade,
            "{} breakpoints must strictly descend: {} then {}",
            book.authority,
            upper.min_grade,
            lower.min_grade
        );
        assert!(
            upper.numeric >= lower.numeric,
            "{} scores must not increase down the table: {} then {}",
            book.authority,
            upper.label,
            lower.label
        );
        assert!(
            upper.max_worst_ratio <= lower.max_worst_ratio,
            "{} centering tolerance must loosen down the table: {} then {}",
            book.authority,
            upper.label,
            lower.label
        );
    }

    let lowest = tiers[book.lowest_index()];
    assert_eq!(lowest.min_grade, 0.0, "{} must cover grade 0", book.authority);
    assert_eq!(lowest.max_worst_ratio, ANY_CENTERING);
    assert_eq!(tiers[0].min_grade, 10.0, "{} must start at 10", book.authority);
    assert!(book.crease_ceiling.numeric >= book.structural_ceiling.numeric);
}
