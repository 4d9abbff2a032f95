//! Corrected QT interval (Bazett) and its classification against a cutoff table.

use crate::domain::model::{ClassificationResult, QtcCategory, QtcInput, QtcResult};
use crate::domain::thresholds::{QtcCutoffTable, STANDARD_QTC_CUTOFFS};
use crate::utils::error::Result;
use crate::utils::validation::{validate_finite_result, validate_positive};

const QT_PROLONGING_CAUSES: &[&str] = &[
    "Hypokalemia",
    "Hypomagnesemia",
    "Hypocalcemia",
    "Drug-induced QT prolongation",
    "Congenital long QT syndrome",
];

/// Differentials to work through for a QTc category.
pub fn qtc_differentials(category: QtcCategory) -> &'static [&'static str] {
    match category {
        QtcCategory::Normal => &[],
        QtcCategory::Borderline | QtcCategory::Prolonged => QT_PROLONGING_CAUSES,
    }
}

/// Bazett's formula: QT divided by the square root of RR in seconds.
pub fn bazett(qt_interval_ms: f64, rr_interval_ms: f64) -> Result<f64> {
    let qt = validate_positive("qt_interval_ms", qt_interval_ms)?;
    let rr = validate_positive("preceding_rr_interval_ms", rr_interval_ms)?;
    validate_finite_result("qtc_ms", qt / (rr / 1000.0).sqrt())
}

/// Computes and classifies the QTc with the standard cutoff table.
pub fn compute_qtc(input: &QtcInput) -> Result<QtcResult> {
    compute_qtc_with(input, &STANDARD_QTC_CUTOFFS)
}

/// Computes the QTc and classifies it against `cutoffs`.
///
/// The row is picked by `input.sex` (male row when unknown). Both thresholds are
/// exclusive.
///
/// # Errors
///
/// `InvalidInput` when the QT or RR interval is zero, negative or not finite, or
/// when the corrected value overflows.
pub fn compute_qtc_with(input: &QtcInput, cutoffs: &QtcCutoffTable) -> Result<QtcResult> {
    let qtc_ms = bazett(input.qt_interval_ms, input.preceding_rr_interval_ms)?;
    let row = cutoffs.row(input.sex);

    let (category, label) = if qtc_ms > row.prolonged_above_ms {
        (
            QtcCategory::Prolonged,
            format!(
                "Prolonged QTc (>{} ms): risk of torsades de pointes",
                row.prolonged_above_ms
            ),
        )
    } else if qtc_ms > row.borderline_above_ms {
        (
            QtcCategory::Borderline,
            format!("Borderline QTc (>{} ms)", row.borderline_above_ms),
        )
    } else {
        (QtcCategory::Normal, "Normal QTc interval".to_string())
    };

    tracing::debug!(qtc_ms, %category, sex = ?input.sex, "computed QTc");
    Ok(QtcResult {
        qtc_ms,
        classification: ClassificationResult::new(label, category, qtc_differentials(category)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Sex;
    use crate::domain::thresholds::QtcCutoffs;

    #[test]
    fn test_rr_of_one_second_leaves_qt_unchanged() {
        let result = compute_qtc(&QtcInput::new(400.0, 1000.0)).unwrap();
        assert_eq!(result.qtc_ms, 400.0);
        assert_eq!(result.category(), QtcCategory::Normal);
        assert!(result.classification.associated_differentials.is_empty());
    }

    #[test]
    fn test_bazett_correction() {
        // RR 640 ms -> sqrt(0.64) = 0.8
        let qtc = bazett(360.0, 640.0).unwrap();
        assert!((qtc - 450.0).abs() < 1e-9);
    }

    #[test]
    fn test_cutoffs_are_exclusive() {
        let at_limit = compute_qtc(&QtcInput::new(450.0, 1000.0)).unwrap();
        assert_eq!(at_limit.category(), QtcCategory::Normal);

        let borderline = compute_qtc(&QtcInput::new(460.0, 1000.0)).unwrap();
        assert_eq!(borderline.category(), QtcCategory::Borderline);

        let top_of_borderline = compute_qtc(&QtcInput::new(470.0, 1000.0)).unwrap();
        assert_eq!(top_of_borderline.category(), QtcCategory::Borderline);

        let prolonged = compute_qtc(&QtcInput::new(471.0, 1000.0)).unwrap();
        assert_eq!(prolonged.category(), QtcCategory::Prolonged);
        assert!(prolonged.classification.label.contains("torsades"));
    }

    #[test]
    fn test_female_row() {
        let input = QtcInput::new(460.0, 1000.0).with_sex(Sex::Female);
        assert_eq!(compute_qtc(&input).unwrap().category(), QtcCategory::Normal);

        let input = QtcInput::new(475.0, 1000.0).with_sex(Sex::Female);
        assert_eq!(compute_qtc(&input).unwrap().category(), QtcCategory::Borderline);

        let input = QtcInput::new(475.0, 1000.0).with_sex(Sex::Male);
        assert_eq!(compute_qtc(&input).unwrap().category(), QtcCategory::Prolonged);
    }

    #[test]
    fn test_custom_cutoff_table() {
        let strict = QtcCutoffs {
            borderline_above_ms: 430.0,
            prolonged_above_ms: 440.0,
        };
        let table = QtcCutoffTable {
            male: strict,
            female: strict,
        };
        let result = compute_qtc_with(&QtcInput::new(445.0, 1000.0), &table).unwrap();
        assert_eq!(result.category(), QtcCategory::Prolonged);
    }

    #[test]
    fn test_prolonged_differentials() {
        let result = compute_qtc(&QtcInput::new(520.0, 1000.0)).unwrap();
        let differentials = &result.classification.associated_differentials;
        assert_eq!(differentials[0], "Hypokalemia");
        assert!(differentials.iter().any(|d| d == "Congenital long QT syndrome"));
        assert_eq!(
            qtc_differentials(QtcCategory::Borderline),
            qtc_differentials(QtcCategory::Prolonged)
        );
    }

    #[test]
    fn test_rejects_non_positive_intervals() {
        assert!(compute_qtc(&QtcInput::new(0.0, 1000.0)).is_err());
        assert!(compute_qtc(&QtcInput::new(400.0, 0.0)).is_err());
        assert!(compute_qtc(&QtcInput::new(-400.0, 1000.0)).is_err());
        assert!(compute_qtc(&QtcInput::new(400.0, -800.0)).is_err());
    }

    #[test]
    fn test_rejects_overflowing_qtc() {
        assert!(compute_qtc(&QtcInput::new(1e308, 1.0)).is_err());
        // sqrt(1e-13 s) is tiny enough to push a large QT past f64::MAX
        assert!(bazett(1e308, 1e-10).is_err());
    }

    #[test]
    fn test_qtc_is_deterministic() {
        let input = QtcInput::new(383.0, 733.0);
        let first = compute_qtc(&input).unwrap();
        let second = compute_qtc(&input).unwrap();
        assert_eq!(first.qtc_ms.to_bits(), second.qtc_ms.to_bits());
        assert_eq!(first, second);
    }
}
