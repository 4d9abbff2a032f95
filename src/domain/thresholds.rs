use crate::domain::model::Sex;
use crate::utils::error::Result;
use crate::utils::validation::{validate_config_positive, validate_ordered, Validate};
use serde::{Deserialize, Serialize};

/// One row of the QTc cutoff table. Both limits are exclusive: a QTc equal to
/// `borderline_above_ms` is still normal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QtcCutoffs {
    pub borderline_above_ms: f64,
    pub prolonged_above_ms: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QtcCutoffTable {
    pub male: QtcCutoffs,
    pub female: QtcCutoffs,
}

pub const STANDARD_QTC_CUTOFFS: QtcCutoffTable = QtcCutoffTable {
    male: QtcCutoffs {
        borderline_above_ms: 450.0,
        prolonged_above_ms: 470.0,
    },
    female: QtcCutoffs {
        borderline_above_ms: 460.0,
        prolonged_above_ms: 480.0,
    },
};

impl QtcCutoffTable {
    pub fn row(&self, sex: Option<Sex>) -> &QtcCutoffs {
        match sex {
            Some(Sex::Female) => &self.female,
            Some(Sex::Male) | None => &self.male,
        }
    }
}

impl Default for QtcCutoffTable {
    fn default() -> Self {
        STANDARD_QTC_CUTOFFS
    }
}

impl Validate for QtcCutoffTable {
    fn validate(&self) -> Result<()> {
        for (name, row) in [("male", &self.male), ("female", &self.female)] {
            validate_config_positive(
                &format!("qtc.{}.borderline_above_ms", name),
                row.borderline_above_ms,
            )?;
            validate_config_positive(
                &format!("qtc.{}.prolonged_above_ms", name),
                row.prolonged_above_ms,
            )?;
            validate_ordered(
                &format!("qtc.{}", name),
                row.borderline_above_ms,
                row.prolonged_above_ms,
            )?;
        }
        Ok(())
    }
}

/// PR and QRS duration limits in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntervalLimits {
    pub pr_short_below_ms: f64,
    pub pr_prolonged_above_ms: f64,
    pub qrs_wide_from_ms: f64,
}

pub const STANDARD_INTERVAL_LIMITS: IntervalLimits = IntervalLimits {
    pr_short_below_ms: 120.0,
    pr_prolonged_above_ms: 200.0,
    qrs_wide_from_ms: 120.0,
};

impl Default for IntervalLimits {
    fn default() -> Self {
        STANDARD_INTERVAL_LIMITS
    }
}

impl Validate for IntervalLimits {
    fn validate(&self) -> Result<()> {
        validate_config_positive("intervals.pr_short_below_ms", self.pr_short_below_ms)?;
        validate_config_positive("intervals.pr_prolonged_above_ms", self.pr_prolonged_above_ms)?;
        validate_config_positive("intervals.qrs_wide_from_ms", self.qrs_wide_from_ms)?;
        validate_ordered("intervals.pr", self.pr_short_below_ms, self.pr_prolonged_above_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_selection() {
        let table = QtcCutoffTable::default();
        assert_eq!(table.row(Some(Sex::Female)).borderline_above_ms, 460.0);
        assert_eq!(table.row(Some(Sex::Male)).prolonged_above_ms, 470.0);
        assert_eq!(table.row(None), table.row(Some(Sex::Male)));
    }

    #[test]
    fn test_standard_tables_are_valid() {
        assert!(STANDARD_QTC_CUTOFFS.validate().is_ok());
        assert!(STANDARD_INTERVAL_LIMITS.validate().is_ok());
    }

    #[test]
    fn test_inverted_cutoffs_are_rejected() {
        let mut table = STANDARD_QTC_CUTOFFS;
        table.female.borderline_above_ms = 500.0;
        assert!(table.validate().is_err());

        let mut limits = STANDARD_INTERVAL_LIMITS;
        limits.qrs_wide_from_ms = 0.0;
        assert!(limits.validate().is_err());
    }
}
