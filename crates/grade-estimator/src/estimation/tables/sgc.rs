use super::{GradeTier, PolicyOutcome, Rulebook, ANY_CENTERING};
use crate::estimation::domain::Authority;

/// SGC: numeric grades paired with named tiers; any crease tops out at 5 EX.
pub(super) static SGC: Rulebook = Rulebook {
    authority: Authority::Sgc,
    tiers: &[
        GradeTier {
            min_grade: 10.0,
            label: "10 PRI",
            numeric: 10.0,
            max_worst_ratio: 50.0,
            remark: "Pristine: no print lines and no wear under magnification",
        },
        GradeTier {
            min_grade: 9.5,
            label: "10 GEM",
            numeric: 10.0,
            max_worst_ratio: 55.0,
            remark: "Gem Mint: sharp focus, four sharp corners, no gloss breaks",
        },
        GradeTier {
            min_grade: 9.0,
            label: "9.5 MINT+",
            numeric: 9.5,
            max_worst_ratio: 60.0,
            remark: "Mint+: looks Gem at first glance with a tiny flaw on close inspection",
        },
        GradeTier {
            min_grade: 8.5,
            label: "9 MINT",
            numeric: 9.0,
            max_worst_ratio: 60.0,
            remark: "Mint: a slight corner nick or small gloss break allowed",
        },
        GradeTier {
            min_grade: 8.0,
            label: "8.5 NM/MT+",
            numeric: 8.5,
            max_worst_ratio: 65.0,
            remark: "Near Mint/Mint+: a few minor flaws on close examination",
        },
        GradeTier {
            min_grade: 7.5,
            label: "8 NM/MT",
            numeric: 8.0,
            max_worst_ratio: 65.0,
            remark: "Near Mint/Mint: corners sharp to the naked eye",
        },
        GradeTier {
            min_grade: 7.0,
            label: "7.5 NM+",
            numeric: 7.5,
            max_worst_ratio: 70.0,
            remark: "Near Mint+: minor wear on one corner",
        },
        GradeTier {
            min_grade: 6.5,
            label: "7 NRMT",
            numeric: 7.0,
            max_worst_ratio: 70.0,
            remark: "Near Mint: slight corner wear, minor scratching",
        },
        GradeTier {
            min_grade: 6.0,
            label: "6.5 EX/NM+",
            numeric: 6.5,
            max_worst_ratio: 75.0,
            remark: "Excellent/Near Mint+: slight fuzzing of corners",
        },
        GradeTier {
            min_grade: 5.5,
            label: "6 EX/NM",
            numeric: 6.0,
            max_worst_ratio: 75.0,
            remark: "Excellent/Near Mint: fuzzing and slight edge notching",
        },
        GradeTier {
            min_grade: 5.0,
            label: "5.5 EX+",
            numeric: 5.5,
            max_worst_ratio: 80.0,
            remark: "Excellent+: minor rounding or fuzzing",
        },
        GradeTier {
            min_grade: 4.5,
            label: "5 EX",
            numeric: 5.0,
            max_worst_ratio: 80.0,
            remark: "Excellent: one very slight surface crease allowed",
        },
        GradeTier {
            min_grade: 4.0,
            label: "4.5 VG/EX+",
            numeric: 4.5,
            max_worst_ratio: 85.0,
            remark: "Very Good/Excellent+: light crease allowed",
        },
        GradeTier {
            min_grade: 3.5,
            label: "4 VG/EX",
            numeric: 4.0,
            max_worst_ratio: 85.0,
            remark: "Very Good/Excellent: rounded corners, light hairline crease",
        },
        GradeTier {
            min_grade: 3.0,
            label: "3.5 VG+",
            numeric: 3.5,
            max_worst_ratio: 90.0,
            remark: "Very Good+: rounded corners",
        },
        GradeTier {
            min_grade: 2.5,
            label: "3 VG",
            numeric: 3.0,
            max_worst_ratio: 90.0,
            remark: "Very Good: heavier rounding and stronger creasing",
        },
        GradeTier {
            min_grade: 2.0,
            label: "2.5 GOOD+",
            numeric: 2.5,
            max_worst_ratio: 90.0,
            remark: "Good+: heavy handling issues",
        },
        GradeTier {
            min_grade: 1.5,
            label: "2 GOOD",
            numeric: 2.0,
            max_worst_ratio: 90.0,
            remark: "Good: heavy creases, pinholes, fraying corners",
        },
        GradeTier {
            min_grade: 0.0,
            label: "1 POOR",
            numeric: 1.0,
            max_worst_ratio: ANY_CENTERING,
            remark: "Poor: many major issues and heavy damage",
        },
    ],
    altered: PolicyOutcome {
        label: "1 POOR",
        numeric: 1.0,
        remark: "Handwriting or alteration detected; SGC treats the card as altered",
    },
    structural_ceiling: PolicyOutcome {
        label: "4.5 VG/EX+",
        numeric: 4.5,
        remark: "SGC reserves 5 EX for a single slight crease",
    },
    crease_ceiling: PolicyOutcome {
        label: "5 EX",
        numeric: 5.0,
        remark: "SGC allows one slight crease at this tier",
    },
};
