//! Electrical axis from the QRS polarity of Lead I and aVF (quadrant method).

use crate::domain::model::{AxisCategory, AxisInput, ClassificationResult, Polarity};

/// Differentials associated with an axis category, most common first.
pub fn axis_differentials(category: AxisCategory) -> &'static [&'static str] {
    match category {
        AxisCategory::LeftAxisDeviation => &[
            "Left ventricular hypertrophy",
            "Left anterior fascicular block",
            "Inferior myocardial infarction",
        ],
        AxisCategory::RightAxisDeviation => &[
            "Right ventricular hypertrophy",
            "Pulmonary embolism",
            "Left posterior fascicular block",
        ],
        AxisCategory::ExtremeAxisDeviation => &[
            "Ventricular rhythm",
            "Limb lead reversal",
            "Severe right ventricular hypertrophy",
        ],
        AxisCategory::Normal | AxisCategory::Indeterminate => &[],
    }
}

/// Classifies the axis and attaches the category's differentials.
///
/// Lead II is only read in the Lead I positive / aVF negative quadrant: a
/// negative Lead II confirms left axis deviation, anything else (including no
/// reading) is the 0° to -30° normal variant.
pub fn classify_axis(input: &AxisInput) -> ClassificationResult<AxisCategory> {
    use Polarity::*;

    let (category, label) = match (input.lead_i, input.lead_avf) {
        (Positive, Positive) => (AxisCategory::Normal, "Normal axis (-30° to +90°)"),
        (Positive, Negative) => match input.lead_ii {
            Some(Negative) => (
                AxisCategory::LeftAxisDeviation,
                "Left axis deviation (-30° to -90°)",
            ),
            _ => (AxisCategory::Normal, "Normal axis (0° to -30°)"),
        },
        (Negative, Positive) => (
            AxisCategory::RightAxisDeviation,
            "Right axis deviation (+90° to 180°)",
        ),
        (Negative, Negative) => (
            AxisCategory::ExtremeAxisDeviation,
            "Extreme axis deviation (-90° to 180°)",
        ),
        (Isoelectric, Positive) => (AxisCategory::Normal, "Normal axis (+90°)"),
        (Isoelectric, Negative) => {
            (AxisCategory::LeftAxisDeviation, "Left axis deviation (-90°)")
        }
        (Positive, Isoelectric) => (AxisCategory::Normal, "Normal axis (0°)"),
        (Negative, Isoelectric) => {
            (AxisCategory::RightAxisDeviation, "Right axis deviation (180°)")
        }
        (Isoelectric, Isoelectric) => (AxisCategory::Indeterminate, "Indeterminate axis"),
    };

    tracing::debug!(?input, ?category, "classified axis");
    ClassificationResult::new(label, category, axis_differentials(category))
}
