use crate::config::substitute_env_vars;
use crate::domain::model::{AxisInput, PWaveMorphology, Polarity, RateInput, Sex, StTFinding};
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{validate_non_negative, validate_positive, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Manual measurements read off one tracing, in checklist order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worksheet {
    #[serde(default)]
    pub patient: PatientInfo,
    #[serde(default)]
    pub calibration: CalibrationCheck,
    pub rhythm: RhythmEntry,
    #[serde(default)]
    pub p_waves: PWaveEntry,
    pub intervals: IntervalEntry,
    pub axis: AxisEntry,
    #[serde(default)]
    pub st_t: StTEntry,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientInfo {
    pub clinical_context: Option<String>,
    pub sex: Option<Sex>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationCheck {
    /// Paper speed and 10 mm/mV gain confirmed on the tracing.
    #[serde(default = "default_true")]
    pub confirmed: bool,
}

fn default_true() -> bool {
    true
}

impl Default for CalibrationCheck {
    fn default() -> Self {
        Self { confirmed: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RhythmEntry {
    pub regular: bool,
    pub rr_small_squares: Option<f64>,
    pub rr_large_squares: Option<f64>,
    pub qrs_count_in_6_sec: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PWaveEntry {
    pub morphology: PWaveMorphology,
}

impl Default for PWaveEntry {
    fn default() -> Self {
        Self {
            morphology: PWaveMorphology::PresentUpright,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalEntry {
    pub pr_small_squares: f64,
    pub qrs_small_squares: f64,
    pub qt_small_squares: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisEntry {
    pub lead_i: Polarity,
    pub lead_avf: Polarity,
    pub lead_ii: Option<Polarity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StTEntry {
    #[serde(default)]
    pub findings: Vec<StTFinding>,
}

impl Worksheet {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content)?;
        let worksheet: Self = toml::from_str(&processed_content)?;
        Ok(worksheet)
    }

    /// Picks the rate method matching the recorded rhythm. Large squares win
    /// when both square counts are given.
    pub fn rate_input(&self) -> Result<RateInput> {
        let rhythm = &self.rhythm;
        if rhythm.regular {
            match (rhythm.rr_large_squares, rhythm.rr_small_squares) {
                (Some(large), _) => Ok(RateInput::Regular {
                    large_squares_between_beats: large,
                }),
                (None, Some(small)) => Ok(RateInput::from_small_squares(small)),
                (None, None) => Err(CalcError::invalid_input(
                    "rhythm.rr_small_squares",
                    "missing",
                    "A regular rhythm needs the R-R distance in small or large squares",
                )),
            }
        } else {
            rhythm
                .qrs_count_in_6_sec
                .map(|qrs_count_in_6_sec| RateInput::Irregular { qrs_count_in_6_sec })
                .ok_or_else(|| {
                    CalcError::invalid_input(
                        "rhythm.qrs_count_in_6_sec",
                        "missing",
                        "An irregular rhythm needs the QRS count over 30 large squares",
                    )
                })
        }
    }

    pub fn axis_input(&self) -> AxisInput {
        AxisInput {
            lead_i: self.axis.lead_i,
            lead_avf: self.axis.lead_avf,
            lead_ii: self.axis.lead_ii,
        }
    }
}

impl Validate for Worksheet {
    fn validate(&self) -> Result<()> {
        if let RateInput::Regular {
            large_squares_between_beats,
        } = self.rate_input()?
        {
            validate_positive("rhythm.rr_squares", large_squares_between_beats)?;
        }
        validate_non_negative("intervals.pr_small_squares", self.intervals.pr_small_squares)?;
        validate_non_negative("intervals.qrs_small_squares", self.intervals.qrs_small_squares)?;
        validate_positive("intervals.qt_small_squares", self.intervals.qt_small_squares)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGULAR: &str = r#"
[patient]
clinical_context = "Chest pain, age 55"
sex = "female"

[rhythm]
regular = true
rr_small_squares = 20.0

[intervals]
pr_small_squares = 4.0
qrs_small_squares = 2.0
qt_small_squares = 9.0

[axis]
lead_i = "positive"
lead_avf = "negative"
lead_ii = "negative"

[st_t]
findings = ["st_elevation", "t_wave_inversion"]
"#;

    #[test]
    fn test_parse_worksheet() {
        let worksheet = Worksheet::from_toml_str(REGULAR).unwrap();
        assert_eq!(worksheet.patient.sex, Some(Sex::Female));
        assert!(worksheet.calibration.confirmed);
        assert_eq!(worksheet.p_waves.morphology, PWaveMorphology::PresentUpright);
        assert_eq!(
            worksheet.st_t.findings,
            vec![StTFinding::StElevation, StTFinding::TWaveInversion]
        );
        assert_eq!(
            worksheet.rate_input().unwrap(),
            RateInput::Regular {
                large_squares_between_beats: 4.0
            }
        );
        assert_eq!(worksheet.axis_input().lead_ii, Some(Polarity::Negative));
        assert!(worksheet.validate().is_ok());
    }

    #[test]
    fn test_irregular_requires_qrs_count() {
        let content = REGULAR.replace("regular = true", "regular = false");
        let worksheet = Worksheet::from_toml_str(&content).unwrap();
        assert!(matches!(
            worksheet.rate_input(),
            Err(CalcError::InvalidInput { .. })
        ));

        let content = content.replace("rr_small_squares = 20.0", "qrs_count_in_6_sec = 7");
        let worksheet = Worksheet::from_toml_str(&content).unwrap();
        assert_eq!(
            worksheet.rate_input().unwrap(),
            RateInput::Irregular {
                qrs_count_in_6_sec: 7
            }
        );
    }

    #[test]
    fn test_zero_rr_fails_validation() {
        let content = REGULAR.replace("rr_small_squares = 20.0", "rr_small_squares = 0.0");
        let worksheet = Worksheet::from_toml_str(&content).unwrap();
        assert!(worksheet.validate().is_err());
    }

    #[test]
    fn test_unknown_polarity_is_rejected() {
        let content = REGULAR.replace("lead_i = \"positive\"", "lead_i = \"sideways\"");
        assert!(matches!(
            Worksheet::from_toml_str(&content),
            Err(CalcError::TomlError(_))
        ));
    }
}
