use super::{GradeTier, PolicyOutcome, Rulebook, ANY_CENTERING};
use crate::estimation::domain::Authority;

/// BGS: half-point scale; a Pristine 10 demands perfect centering.
pub(super) static BGS: Rulebook = Rulebook {
    authority: Authority::Bgs,
    tiers: &[
        GradeTier {
            min_grade: 10.0,
            label: "10 Pristine (Black Label)",
            numeric: 10.0,
            max_worst_ratio: 50.0,
            remark: "Perfect 10 across all four subgrades",
        },
        GradeTier {
            min_grade: 9.5,
            label: "10 Pristine (Gold Label)",
            numeric: 10.0,
            max_worst_ratio: 50.0,
            remark: "Pristine with at most one subgrade at 9.5",
        },
        GradeTier {
            min_grade: 9.0,
            label: "9.5 Gem Mint",
            numeric: 9.5,
            max_worst_ratio: 55.0,
            remark: "Virtually flawless, slight imperfections only under magnification",
        },
        GradeTier {
            min_grade: 8.5,
            label: "9 Mint",
            numeric: 9.0,
            max_worst_ratio: 55.0,
            remark: "Mint with slight wear under normal scrutiny",
        },
        GradeTier {
            min_grade: 8.0,
            label: "8.5 NM-MT+",
            numeric: 8.5,
            max_worst_ratio: 60.0,
            remark: "Near Mint-Mint with minor imperfections",
        },
        GradeTier {
            min_grade: 7.5,
            label: "8 NM-MT",
            numeric: 8.0,
            max_worst_ratio: 60.0,
            remark: "Near Mint-Mint with sharp corners and slight imperfections",
        },
        GradeTier {
            min_grade: 7.0,
            label: "7.5 Near Mint+",
            numeric: 7.5,
            max_worst_ratio: 65.0,
            remark: "Near Mint with very minor wear on two or three corners",
        },
        GradeTier {
            min_grade: 6.5,
            label: "7 Near Mint",
            numeric: 7.0,
            max_worst_ratio: 65.0,
            remark: "Near Mint with slight edge roughness or minor chipping",
        },
        GradeTier {
            min_grade: 6.0,
            label: "6.5 Excellent-Mint+",
            numeric: 6.5,
            max_worst_ratio: 70.0,
            remark: "Excellent-Mint with fuzzy corners but free of dings",
        },
        GradeTier {
            min_grade: 5.5,
            label: "6 Excellent-Mint",
            numeric: 6.0,
            max_worst_ratio: 70.0,
            remark: "Excellent-Mint with moderate roughness or chipping",
        },
        GradeTier {
            min_grade: 5.0,
            label: "5.5 Excellent+",
            numeric: 5.5,
            max_worst_ratio: 75.0,
            remark: "Excellent with four fuzzy corners",
        },
        GradeTier {
            min_grade: 4.5,
            label: "5 Excellent",
            numeric: 5.0,
            max_worst_ratio: 75.0,
            remark: "Excellent with fuzzy corners and some lost gloss",
        },
        GradeTier {
            min_grade: 4.0,
            label: "4.5 Very Good-Excellent",
            numeric: 4.5,
            max_worst_ratio: 80.0,
            remark: "Very Good-Excellent, hairline creases allowed",
        },
        GradeTier {
            min_grade: 3.0,
            label: "3.5 Very Good",
            numeric: 3.5,
            max_worst_ratio: 85.0,
            remark: "Very Good with slightly rounded corners and minor creases",
        },
        GradeTier {
            min_grade: 2.0,
            label: "2.5 Good",
            numeric: 2.5,
            max_worst_ratio: 90.0,
            remark: "Good with noticeably rounded corners and creases",
        },
        GradeTier {
            min_grade: 0.0,
            label: "1 Poor",
            numeric: 1.0,
            max_worst_ratio: ANY_CENTERING,
            remark: "Poor with heavy creases and severe defects",
        },
    ],
    altered: PolicyOutcome {
        label: "1 Poor",
        numeric: 1.0,
        remark: "Handwriting or alteration detected; BGS treats the card as altered",
    },
    structural_ceiling: PolicyOutcome {
        label: "4.5 Very Good-Excellent",
        numeric: 4.5,
        remark: "BGS allows hairline creases no higher than VG-EX",
    },
    crease_ceiling: PolicyOutcome {
        label: "4.5 Very Good-Excellent",
        numeric: 4.5,
        remark: "BGS allows hairline creases no higher than VG-EX",
    },
};
