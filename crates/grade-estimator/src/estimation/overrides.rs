use super::domain::GradingInput;
use super::tables::{PolicyOutcome, Rulebook};

/// Disqualifying or capping condition, in dominance order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideKind {
    Alteration,
    BentCorner,
    StructuralDamage,
    Crease,
}

impl OverrideKind {
    pub fn cause(&self) -> &'static str {
        match self {
            OverrideKind::Alteration => "handwriting or alteration",
            OverrideKind::BentCorner => "bent corner",
            OverrideKind::StructuralDamage => "structural damage",
            OverrideKind::Crease => "detected crease",
        }
    }
}

struct OverrideRule {
    kind: OverrideKind,
    applies: fn(&GradingInput) -> bool,
}

fn altered(input: &GradingInput) -> bool {
    input.is_altered()
}

fn bent_corner(input: &GradingInput) -> bool {
    input.bent_corner_detected
}

fn structural_damage(input: &GradingInput) -> bool {
    input.has_structural_damage
}

fn crease(input: &GradingInput) -> bool {
    input.crease_detected
}

/// Evaluated top to bottom; the first match wins.
const RULES: &[OverrideRule] = &[
    OverrideRule {
        kind: OverrideKind::Alteration,
        applies: altered,
    },
    OverrideRule {
        kind: OverrideKind::BentCorner,
        applies: bent_corner,
    },
    OverrideRule {
        kind: OverrideKind::StructuralDamage,
        applies: structural_damage,
    },
    OverrideRule {
        kind: OverrideKind::Crease,
        applies: crease,
    },
];

/// Result of a fired override.
#[derive(Debug, Clone, PartialEq)]
pub struct OverrideOutcome {
    pub kind: OverrideKind,
    pub label: &'static str,
    pub numeric: f64,
    /// The policy outcome replaced the base grade; false when the base grade already sat
    /// at or below the ceiling.
    pub capped: bool,
    pub remark: &'static str,
    /// Ceiling label, kept for notes when the base grade was already lower.
    pub ceiling_label: &'static str,
}

pub fn first_match(input: &GradingInput) -> Option<OverrideKind> {
    RULES
        .iter()
        .find(|rule| (rule.applies)(input))
        .map(|rule| rule.kind)
}

/// Applies `book`'s defect policy, or `None` when no override fires.
pub fn resolve(book: &Rulebook, input: &GradingInput) -> Option<OverrideOutcome> {
    let kind = first_match(input)?;

    let outcome = match kind {
        OverrideKind::Alteration => OverrideOutcome {
            kind,
            label: book.altered.label,
            numeric: book.altered.numeric,
            capped: true,
            remark: book.altered.remark,
            ceiling_label: book.altered.label,
        },
        OverrideKind::BentCorner | OverrideKind::StructuralDamage => {
            apply_ceiling(book, input.clamped_grade(), kind, &book.structural_ceiling)
        }
        OverrideKind::Crease => {
            apply_ceiling(book, input.clamped_grade(), kind, &book.crease_ceiling)
        }
    };

    Some(outcome)
}

/// A ceiling only ever lowers a grade.
fn apply_ceiling(
    book: &Rulebook,
    grade: f64,
    kind: OverrideKind,
    ceiling: &PolicyOutcome,
) -> OverrideOutcome {
    let base = book.tier_for(grade);
    if base.numeric <= ceiling.numeric {
        OverrideOutcome {
            kind,
            label: base.label,
            numeric: base.numeric,
            capped: false,
            remark: base.remark,
            ceiling_label: ceiling.label,
        }
    } else {
        OverrideOutcome {
            kind,
            label: ceiling.label,
            numeric: ceiling.numeric,
            capped: true,
            remark: ceiling.remark,
            ceiling_label: ceiling.label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimation::domain::Authority;
    use crate::estimation::tables::rulebook;

    fn flagged(grade: f64, configure: impl FnOnce(&mut GradingInput)) -> GradingInput {
        let mut input = GradingInput::new(grade);
        configure(&mut input);
        input
    }

    #[test]
    fn clean_card_fires_nothing() {
        assert_eq!(first_match(&GradingInput::new(9.0)), None);
    }

    #[test]
    fn alteration_dominates_every_damage_flag() {
        let input = flagged(9.0, |input| {
            input.has_alterations = true;
            input.has_structural_damage = true;
            input.bent_corner_detected = true;
            input.crease_detected = true;
        });
        assert_eq!(first_match(&input), Some(OverrideKind::Alteration));
    }

    #[test]
    fn structural_damage_dominates_a_crease() {
        let input = flagged(9.0, |input| {
            input.has_structural_damage = true;
            input.crease_detected = true;
        });
        assert_eq!(first_match(&input), Some(OverrideKind::StructuralDamage));

        let sgc = resolve(rulebook(Authority::Sgc), &input).expect("override fires");
        assert_eq!(sgc.numeric, 4.5);
    }

    #[test]
    fn bent_corner_never_reaches_the_sgc_crease_tier() {
        let input = flagged(9.5, |input| {
            input.bent_corner_detected = true;
            input.crease_detected = true;
        });

        let sgc = resolve(rulebook(Authority::Sgc), &input).expect("override fires");
        assert_eq!(sgc.kind, OverrideKind::BentCorner);
        assert_eq!(sgc.label, "4.5 VG/EX+");
    }

    #[test]
    fn lone_crease_caps_sgc_at_five() {
        let input = flagged(9.5, |input| input.crease_detected = true);

        let sgc = resolve(rulebook(Authority::Sgc), &input).expect("override fires");
        assert_eq!(sgc.label, "5 EX");
        assert_eq!(sgc.numeric, 5.0);
        assert!(sgc.capped);

        let psa = resolve(rulebook(Authority::Psa), &input).expect("override fires");
        assert_eq!(psa.numeric, 4.0);
    }

    #[test]
    fn ceiling_never_raises_a_weaker_card() {
        let input = flagged(2.0, |input| input.crease_detected = true);

        let sgc = resolve(rulebook(Authority::Sgc), &input).expect("override fires");
        assert!(!sgc.capped);
        assert_eq!(sgc.label, "2.5 GOOD+");
        assert_eq!(sgc.ceiling_label, "5 EX");
    }
}
