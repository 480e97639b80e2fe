use super::centering::CenteringVerdict;
use super::confidence::ConfidenceSignals;
use super::overrides::{OverrideKind, OverrideOutcome};
use super::tables::Rulebook;

pub const DISCLAIMER: &str =
    "AI-generated estimate; actual professional grades may vary from an in-hand assessment.";

pub fn with_disclaimer(sentence: &str) -> String {
    format!("{sentence} | {DISCLAIMER}")
}

pub fn override_notes(outcome: &OverrideOutcome) -> String {
    let sentence = match outcome.kind {
        OverrideKind::Alteration => outcome.remark.to_string(),
        kind if outcome.capped => format!(
            "Capped at {} due to {}; {}",
            outcome.label,
            kind.cause(),
            outcome.remark
        ),
        kind => format!(
            "{}; {} noted but the base grade already sits at or below the {} ceiling",
            outcome.remark,
            kind.cause(),
            outcome.ceiling_label
        ),
    };
    with_disclaimer(&sentence)
}

/// Notes for a result produced by the table lookup.
pub fn mapping_notes(
    book: &Rulebook,
    verdict: &CenteringVerdict,
    signals: &ConfidenceSignals,
    grade: f64,
    weak_subgrades: &[&str],
) -> String {
    let tier = book.tier(verdict.tier_index);
    let mut sentence = tier.remark.to_string();

    match verdict.worst_ratio {
        Some(worst) if verdict.binding() => {
            let implied = book.tier(verdict.implied_index);
            sentence.push_str(&format!(
                " (lowered from {} because {} centering exceeds the {} limit)",
                implied.label,
                format_split(worst),
                format_split(implied.max_worst_ratio)
            ));
        }
        Some(_) if signals.near_boundary => {
            sentence.push_str(&format!(
                " (centering sits close to the {} limit)",
                format_split(verdict.tolerance)
            ));
        }
        _ => {}
    }

    if !signals.on_standard_increment {
        sentence.push_str(&format!(
            " (base grade {} falls between standard increments)",
            format_number(grade)
        ));
    }

    if !weak_subgrades.is_empty() {
        let plural = if weak_subgrades.len() > 1 { "s" } else { "" };
        sentence.push_str(&format!(
            " (weak {} subgrade{plural} may hold the overall grade down)",
            weak_subgrades.join(", ")
        ));
    }

    with_disclaimer(&sentence)
}

fn format_split(major: f64) -> String {
    format!("{}/{}", format_number(major), format_number(100.0 - major))
}

fn format_number(value: f64) -> String {
    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
