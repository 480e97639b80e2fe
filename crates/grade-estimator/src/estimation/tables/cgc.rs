use super::{GradeTier, PolicyOutcome, Rulebook, ANY_CENTERING};
use crate::estimation::domain::Authority;

/// CGC: the most lenient on centering (60/40 still reaches a 10), with fine steps above 9.
pub(super) static CGC: Rulebook = Rulebook {
    authority: Authority::Cgc,
    tiers: &[
        GradeTier {
            min_grade: 10.0,
            label: "10 Gem Mint",
            numeric: 10.0,
            max_worst_ratio: 60.0,
            remark: "Gem Mint: no manufacturing or handling defects",
        },
        GradeTier {
            min_grade: 9.9,
            label: "9.9 Mint",
            numeric: 9.9,
            max_worst_ratio: 60.0,
            remark: "Mint: nearly indistinguishable from a 10",
        },
        GradeTier {
            min_grade: 9.8,
            label: "9.8 NM/M",
            numeric: 9.8,
            max_worst_ratio: 60.0,
            remark: "Near Mint/Mint: negligible defects",
        },
        GradeTier {
            min_grade: 9.6,
            label: "9.6 NM+",
            numeric: 9.6,
            max_worst_ratio: 60.0,
            remark: "Near Mint+: very well preserved with a few minor defects",
        },
        GradeTier {
            min_grade: 9.4,
            label: "9.4 NM",
            numeric: 9.4,
            max_worst_ratio: 60.0,
            remark: "Near Mint: minor wear and small defects",
        },
        GradeTier {
            min_grade: 9.2,
            label: "9.2 NM-",
            numeric: 9.2,
            max_worst_ratio: 60.0,
            remark: "Near Mint-: some wear and small defects",
        },
        GradeTier {
            min_grade: 9.0,
            label: "9.0 VF/NM",
            numeric: 9.0,
            max_worst_ratio: 60.0,
            remark: "Very Fine/Near Mint: good eye appeal with minor defects",
        },
        GradeTier {
            min_grade: 8.5,
            label: "8.5 VF+",
            numeric: 8.5,
            max_worst_ratio: 65.0,
            remark: "Very Fine+: one moderate defect or several small ones",
        },
        GradeTier {
            min_grade: 8.0,
            label: "8.0 VF",
            numeric: 8.0,
            max_worst_ratio: 65.0,
            remark: "Very Fine: moderate defect or an accumulation of small ones",
        },
        GradeTier {
            min_grade: 7.5,
            label: "7.5 VF-",
            numeric: 7.5,
            max_worst_ratio: 70.0,
            remark: "Very Fine-: moderate defects accumulating",
        },
        GradeTier {
            min_grade: 7.0,
            label: "7.0 FN/VF",
            numeric: 7.0,
            max_worst_ratio: 70.0,
            remark: "Fine/Very Fine: one major defect or many small ones",
        },
        GradeTier {
            min_grade: 6.5,
            label: "6.5 FN+",
            numeric: 6.5,
            max_worst_ratio: 75.0,
            remark: "Fine+: a major defect and some smaller ones",
        },
        GradeTier {
            min_grade: 6.0,
            label: "6.0 FN",
            numeric: 6.0,
            max_worst_ratio: 75.0,
            remark: "Fine: major and smaller defects",
        },
        GradeTier {
            min_grade: 5.5,
            label: "5.5 FN-",
            numeric: 5.5,
            max_worst_ratio: 80.0,
            remark: "Fine-: several moderate defects",
        },
        GradeTier {
            min_grade: 5.0,
            label: "5.0 VG/FN",
            numeric: 5.0,
            max_worst_ratio: 80.0,
            remark: "Very Good/Fine: average collectible condition",
        },
        GradeTier {
            min_grade: 4.5,
            label: "4.5 VG+",
            numeric: 4.5,
            max_worst_ratio: 85.0,
            remark: "Very Good+: slightly below average, multiple moderate defects",
        },
        GradeTier {
            min_grade: 4.0,
            label: "4.0 VG",
            numeric: 4.0,
            max_worst_ratio: 85.0,
            remark: "Very Good: below average, multiple moderate defects",
        },
        GradeTier {
            min_grade: 3.5,
            label: "3.5 VG-",
            numeric: 3.5,
            max_worst_ratio: 90.0,
            remark: "Very Good-: several major defects",
        },
        GradeTier {
            min_grade: 3.0,
            label: "3.0 G/VG",
            numeric: 3.0,
            max_worst_ratio: 90.0,
            remark: "Good/Very Good: significant handling evidence",
        },
        GradeTier {
            min_grade: 2.5,
            label: "2.5 G+",
            numeric: 2.5,
            max_worst_ratio: 90.0,
            remark: "Good+: extensive handling with moderate-to-major defects",
        },
        GradeTier {
            min_grade: 2.0,
            label: "2.0 G",
            numeric: 2.0,
            max_worst_ratio: ANY_CENTERING,
            remark: "Good: extensive handling, numerous defects",
        },
        GradeTier {
            min_grade: 1.8,
            label: "1.8 G-",
            numeric: 1.8,
            max_worst_ratio: ANY_CENTERING,
            remark: "Good-: numerous major defects",
        },
        GradeTier {
            min_grade: 1.5,
            label: "1.5 Fa/G",
            numeric: 1.5,
            max_worst_ratio: ANY_CENTERING,
            remark: "Fair/Good: heavy accumulation of major defects",
        },
        GradeTier {
            min_grade: 1.0,
            label: "1.0 Fa",
            numeric: 1.0,
            max_worst_ratio: ANY_CENTERING,
            remark: "Fair: very poorly handled",
        },
        GradeTier {
            min_grade: 0.0,
            label: "0.5 Poor",
            numeric: 0.5,
            max_worst_ratio: ANY_CENTERING,
            remark: "Poor: heavily defaced, pieces may be missing",
        },
    ],
    altered: PolicyOutcome {
        label: "2.0 G",
        numeric: 2.0,
        remark: "Most lenient policy applied due to alteration: CGC still assigns 2.0 Good to handwritten or altered cards",
    },
    structural_ceiling: PolicyOutcome {
        label: "4.0 VG",
        numeric: 4.0,
        remark: "CGC counts creases and bent corners as major handling defects",
    },
    crease_ceiling: PolicyOutcome {
        label: "4.0 VG",
        numeric: 4.0,
        remark: "CGC counts creases and bent corners as major handling defects",
    },
};
