use crate::utils::error::Result;
use crate::utils::validation::{validate_finite_result, validate_positive};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Paper speed every formula is calibrated against.
pub const STANDARD_PAPER_SPEED_MM_PER_SEC: f64 = 25.0;

/// QRS polarity of a limb lead, judged by eye.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Positive,
    Negative,
    #[serde(alias = "equiphasic")]
    #[cfg_attr(feature = "cli", value(alias = "equiphasic"))]
    Isoelectric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RateInput {
    /// Regular rhythm: large squares between consecutive R waves.
    Regular { large_squares_between_beats: f64 },
    /// Irregular rhythm: QRS complexes counted across 30 large squares (6 s).
    Irregular { qrs_count_in_6_sec: u32 },
}

impl RateInput {
    /// Regular rhythm measured in small squares; five small squares make one large square.
    pub fn from_small_squares(small_squares_between_beats: f64) -> Self {
        RateInput::Regular {
            large_squares_between_beats: small_squares_between_beats / 5.0,
        }
    }

    pub fn rhythm_regular(&self) -> bool {
        matches!(self, RateInput::Regular { .. })
    }

    /// Rescales a regular R-R distance measured at `paper_speed_mm_per_sec` to
    /// its 25 mm/s equivalent. Irregular counts are already per six seconds.
    pub fn at_paper_speed(self, paper_speed_mm_per_sec: f64) -> Self {
        match self {
            RateInput::Regular {
                large_squares_between_beats,
            } if paper_speed_mm_per_sec > 0.0 => RateInput::Regular {
                large_squares_between_beats: large_squares_between_beats
                    * (STANDARD_PAPER_SPEED_MM_PER_SEC / paper_speed_mm_per_sec),
            },
            other => other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisInput {
    pub lead_i: Polarity,
    pub lead_avf: Polarity,
    /// Only consulted when Lead I is positive and aVF negative.
    pub lead_ii: Option<Polarity>,
}

impl AxisInput {
    pub fn new(lead_i: Polarity, lead_avf: Polarity) -> Self {
        Self {
            lead_i,
            lead_avf,
            lead_ii: None,
        }
    }

    pub fn with_lead_ii(mut self, lead_ii: Polarity) -> Self {
        self.lead_ii = Some(lead_ii);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalInput {
    pub small_squares: f64,
    pub paper_speed_mm_per_sec: f64,
}

impl IntervalInput {
    pub fn new(small_squares: f64) -> Self {
        Self {
            small_squares,
            paper_speed_mm_per_sec: STANDARD_PAPER_SPEED_MM_PER_SEC,
        }
    }

    pub fn with_paper_speed(mut self, paper_speed_mm_per_sec: f64) -> Self {
        self.paper_speed_mm_per_sec = paper_speed_mm_per_sec;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QtcInput {
    pub qt_interval_ms: f64,
    pub preceding_rr_interval_ms: f64,
    /// Selects the cutoff row; `None` falls back to the male row.
    pub sex: Option<Sex>,
}

impl QtcInput {
    pub fn new(qt_interval_ms: f64, preceding_rr_interval_ms: f64) -> Self {
        Self {
            qt_interval_ms,
            preceding_rr_interval_ms,
            sex: None,
        }
    }

    /// Derives the RR interval from a heart rate (RR = 60000 / bpm).
    pub fn from_heart_rate(qt_interval_ms: f64, heart_rate_bpm: f64) -> Result<Self> {
        let bpm = validate_positive("heart_rate_bpm", heart_rate_bpm)?;
        let rr_ms = validate_finite_result("preceding_rr_interval_ms", 60_000.0 / bpm)?;
        Ok(Self::new(qt_interval_ms, rr_ms))
    }

    pub fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = Some(sex);
        self
    }
}

/// A classified output plus the differentials attached to its category, in clinical order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult<C> {
    pub label: String,
    pub category: C,
    pub associated_differentials: Vec<String>,
}

impl<C> ClassificationResult<C> {
    pub fn new(label: impl Into<String>, category: C, differentials: &[&str]) -> Self {
        Self {
            label: label.into(),
            category,
            associated_differentials: differentials.iter().map(|d| d.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisCategory {
    Normal,
    LeftAxisDeviation,
    RightAxisDeviation,
    ExtremeAxisDeviation,
    Indeterminate,
}

impl AxisCategory {
    pub fn is_deviation(&self) -> bool {
        matches!(
            self,
            AxisCategory::LeftAxisDeviation
                | AxisCategory::RightAxisDeviation
                | AxisCategory::ExtremeAxisDeviation
        )
    }
}

impl fmt::Display for AxisCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AxisCategory::Normal => "Normal axis",
            AxisCategory::LeftAxisDeviation => "Left axis deviation (LAD)",
            AxisCategory::RightAxisDeviation => "Right axis deviation (RAD)",
            AxisCategory::ExtremeAxisDeviation => "Extreme axis deviation",
            AxisCategory::Indeterminate => "Indeterminate axis",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QtcCategory {
    Normal,
    Borderline,
    Prolonged,
}

impl fmt::Display for QtcCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QtcCategory::Normal => "normal",
            QtcCategory::Borderline => "borderline",
            QtcCategory::Prolonged => "prolonged",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QtcResult {
    pub qtc_ms: f64,
    pub classification: ClassificationResult<QtcCategory>,
}

impl QtcResult {
    pub fn category(&self) -> QtcCategory {
        self.classification.category
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrCategory {
    Short,
    Normal,
    Prolonged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QrsCategory {
    Narrow,
    Wide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PWaveMorphology {
    PresentUpright,
    Absent,
    Inverted,
    Sawtooth,
    MoreThanQrs,
}

impl fmt::Display for PWaveMorphology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PWaveMorphology::PresentUpright => "Present & upright (sinus)",
            PWaveMorphology::Absent => "Absent",
            PWaveMorphology::Inverted => "Inverted",
            PWaveMorphology::Sawtooth => "Sawtooth pattern",
            PWaveMorphology::MoreThanQrs => "More P waves than QRS",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StTFinding {
    StElevation,
    StDepression,
    TWaveInversion,
    PeakedTWaves,
}

impl fmt::Display for StTFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StTFinding::StElevation => "ST elevation (STEMI/pericarditis)",
            StTFinding::StDepression => "ST depression (ischemia)",
            StTFinding::TWaveInversion => "T wave inversion",
            StTFinding::PeakedTWaves => "Peaked T waves",
        };
        f.write_str(name)
    }
}
