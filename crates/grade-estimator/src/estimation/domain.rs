use std::fmt;

use serde::{Deserialize, Serialize};

/// Lowest value on the internal condition scale.
pub const MIN_BASE_GRADE: f64 = 0.0;
/// Highest value on the internal condition scale.
pub const MAX_BASE_GRADE: f64 = 10.0;

/// External grading company an estimate is produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Authority {
    #[serde(rename = "PSA")]
    Psa,
    #[serde(rename = "BGS")]
    Bgs,
    #[serde(rename = "SGC")]
    Sgc,
    #[serde(rename = "CGC")]
    Cgc,
}

impl Authority {
    pub const ALL: [Authority; 4] = [
        Authority::Psa,
        Authority::Bgs,
        Authority::Sgc,
        Authority::Cgc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Authority::Psa => "PSA",
            Authority::Bgs => "BGS",
            Authority::Sgc => "SGC",
            Authority::Cgc => "CGC",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "psa" => Some(Self::Psa),
            "bgs" | "beckett" => Some(Self::Bgs),
            "sgc" => Some(Self::Sgc),
            "cgc" => Some(Self::Cgc),
            _ => None,
        }
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-assessed certainty of a single authority estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

/// Border split on one axis, e.g. `CenteringSplit(52.0, 48.0)`.
///
/// Serialises as a two-element array so upstream documents can write `[52, 48]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CenteringSplit(pub f64, pub f64);

impl CenteringSplit {
    /// Larger side's share of the split, in percent.
    pub fn larger_share(&self) -> f64 {
        let total = self.0 + self.1;
        if !total.is_finite() || total <= 0.0 {
            return 50.0;
        }
        let share = self.0.max(self.1) * 100.0 / total;
        share.clamp(50.0, 100.0)
    }
}

/// Front and optional back centering measurements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CenteringMeasurements {
    pub front_left_right: CenteringSplit,
    pub front_top_bottom: CenteringSplit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_left_right: Option<CenteringSplit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_top_bottom: Option<CenteringSplit>,
}

impl CenteringMeasurements {
    pub fn front(front_left_right: CenteringSplit, front_top_bottom: CenteringSplit) -> Self {
        Self {
            front_left_right,
            front_top_bottom,
            back_left_right: None,
            back_top_bottom: None,
        }
    }

    pub fn with_back(
        mut self,
        back_left_right: CenteringSplit,
        back_top_bottom: CenteringSplit,
    ) -> Self {
        self.back_left_right = Some(back_left_right);
        self.back_top_bottom = Some(back_top_bottom);
        self
    }

    /// Worst (largest) larger-side share across the front axes.
    pub fn front_worst(&self) -> f64 {
        self.front_left_right
            .larger_share()
            .max(self.front_top_bottom.larger_share())
    }

    /// Worst larger-side share across whichever back axes were measured.
    pub fn back_worst(&self) -> Option<f64> {
        [self.back_left_right, self.back_top_bottom]
            .into_iter()
            .flatten()
            .map(|split| split.larger_share())
            .reduce(f64::max)
    }
}

/// Raised when an upstream document cannot be read as a `GradingInput`.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("grading input is not valid JSON for the expected shape: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Structured condition data produced upstream for a single card.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GradingInput {
    pub final_grade: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub centering: Option<CenteringMeasurements>,
    #[serde(default)]
    pub has_structural_damage: bool,
    #[serde(default)]
    pub crease_detected: bool,
    #[serde(default)]
    pub bent_corner_detected: bool,
    #[serde(default)]
    pub has_handwriting: bool,
    #[serde(default)]
    pub has_alterations: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corners_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edges_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface_score: Option<f64>,
}

impl GradingInput {
    pub fn new(final_grade: f64) -> Self {
        Self {
            final_grade,
            ..Self::default()
        }
    }

    pub fn from_json(document: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(document)?)
    }

    pub fn with_centering(mut self, centering: CenteringMeasurements) -> Self {
        self.centering = Some(centering);
        self
    }

    /// Base grade clamped into the 0–10 scale; non-finite values clamp to the floor.
    pub fn clamped_grade(&self) -> f64 {
        if self.final_grade.is_finite() {
            self.final_grade.clamp(MIN_BASE_GRADE, MAX_BASE_GRADE)
        } else {
            MIN_BASE_GRADE
        }
    }

    pub fn is_altered(&self) -> bool {
        self.has_handwriting || self.has_alterations
    }

    pub fn has_structural_issue(&self) -> bool {
        self.has_structural_damage || self.bent_corner_detected
    }

    /// Subgrades that trail the base grade by more than a full point.
    pub fn weak_subgrades(&self) -> Vec<&'static str> {
        let floor = self.clamped_grade() - 1.0;
        [
            ("corners", self.corners_score),
            ("edges", self.edges_score),
            ("surface", self.surface_score),
        ]
        .into_iter()
        .filter_map(|(name, score)| match score {
            Some(score) if score.is_finite() && score < floor => Some(name),
            _ => None,
        })
        .collect()
    }
}

/// Estimate for one authority, expressed on that authority's own scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorityEstimate {
    pub estimated_grade: String,
    pub numeric_score: f64,
    pub confidence: Confidence,
    pub notes: String,
}

/// One estimate per authority; all four are always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateBundle {
    #[serde(rename = "PSA")]
    pub psa: AuthorityEstimate,
    #[serde(rename = "BGS")]
    pub bgs: AuthorityEstimate,
    #[serde(rename = "SGC")]
    pub sgc: AuthorityEstimate,
    #[serde(rename = "CGC")]
    pub cgc: AuthorityEstimate,
}

impl EstimateBundle {
    pub fn get(&self, authority: Authority) -> &AuthorityEstimate {
        match authority {
            Authority::Psa => &self.psa,
            Authority::Bgs => &self.bgs,
            Authority::Sgc => &self.sgc,
            Authority::Cgc => &self.cgc,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Authority, &AuthorityEstimate)> {
        Authority::ALL
            .into_iter()
            .map(move |authority| (authority, self.get(authority)))
    }
}
