use super::{GradeTier, PolicyOutcome, Rulebook, ANY_CENTERING};
use crate::estimation::domain::Authority;

/// PSA: whole-number scale, with centering weighed heavily at the top.
pub(super) static PSA: Rulebook = Rulebook {
    authority: Authority::Psa,
    tiers: &[
        GradeTier {
            min_grade: 10.0,
            label: "10 Gem Mint",
            numeric: 10.0,
            max_worst_ratio: 55.0,
            remark: "Virtually perfect card with four sharp corners and full original gloss",
        },
        GradeTier {
            min_grade: 9.5,
            label: "10 Gem Mint",
            numeric: 10.0,
            max_worst_ratio: 55.0,
            remark: "Microscopic defects acceptable at this tier",
        },
        GradeTier {
            min_grade: 9.0,
            label: "9 Mint",
            numeric: 9.0,
            max_worst_ratio: 60.0,
            remark: "Superb condition with only one minor flaw allowed",
        },
        GradeTier {
            min_grade: 8.0,
            label: "8 NM-MT",
            numeric: 8.0,
            max_worst_ratio: 65.0,
            remark: "Near Mint-Mint with slight wear visible on close inspection",
        },
        GradeTier {
            min_grade: 7.0,
            label: "7 NM",
            numeric: 7.0,
            max_worst_ratio: 70.0,
            remark: "Near Mint with slight surface wear or minor corner fraying",
        },
        GradeTier {
            min_grade: 6.0,
            label: "6 EX-MT",
            numeric: 6.0,
            max_worst_ratio: 80.0,
            remark: "Excellent-Mint with visible surface wear or light scratches",
        },
        GradeTier {
            min_grade: 5.0,
            label: "5 EX",
            numeric: 5.0,
            max_worst_ratio: 85.0,
            remark: "Excellent with minor corner rounding and surface wear",
        },
        GradeTier {
            min_grade: 4.0,
            label: "4 VG-EX",
            numeric: 4.0,
            max_worst_ratio: 85.0,
            remark: "Very Good-Excellent with slightly rounded corners",
        },
        GradeTier {
            min_grade: 3.0,
            label: "3 VG",
            numeric: 3.0,
            max_worst_ratio: 90.0,
            remark: "Very Good with rounding and noticeable surface wear",
        },
        GradeTier {
            min_grade: 2.0,
            label: "2 Good",
            numeric: 2.0,
            max_worst_ratio: 90.0,
            remark: "Good with accelerated rounding and obvious wear",
        },
        GradeTier {
            min_grade: 0.0,
            label: "1 Poor",
            numeric: 1.0,
            max_worst_ratio: ANY_CENTERING,
            remark: "Poor with advanced defects and little eye appeal",
        },
    ],
    altered: PolicyOutcome {
        label: "AA Authentic Altered",
        numeric: 0.0,
        remark: "Handwriting or alteration detected; PSA does not assign a numeric grade to altered cards",
    },
    structural_ceiling: PolicyOutcome {
        label: "4 VG-EX",
        numeric: 4.0,
        remark: "PSA does not grade structurally damaged cards above VG-EX",
    },
    crease_ceiling: PolicyOutcome {
        label: "4 VG-EX",
        numeric: 4.0,
        remark: "PSA treats any crease as structural damage",
    },
};

#[cfg(test)]
mod tests {
    use super::super::assert_table_well_formed;
    use super::*;

    #[test]
    fn table_is_well_formed() {
        assert_table_well_formed(&PSA);
    }

    #[test]
    fn gem_mint_tier_starts_at_nine_and_a_half() {
        assert_eq!(PSA.tier_for(9.5).label, "10 Gem Mint");
        assert_eq!(PSA.tier_for(9.49).label, "9 Mint");
        assert_eq!(PSA.tier_for(9.0).label, "9 Mint");
    }

    #[test]
    fn scores_are_whole_numbers() {
        assert!(PSA.tiers.iter().all(|tier| tier.numeric.fract() == 0.0));
    }

    #[test]
    fn top_tier_requires_fifty_five_forty_five() {
        assert_eq!(PSA.tiers[0].max_worst_ratio, 55.0);
    }
}
