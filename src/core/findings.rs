//! PR, QRS and morphology findings from the interpretation checklist.

use crate::domain::model::{ClassificationResult, PWaveMorphology, PrCategory, QrsCategory};
use crate::domain::thresholds::IntervalLimits;
use crate::utils::error::Result;
use crate::utils::validation::validate_non_negative;

pub fn pr_differentials(category: PrCategory) -> &'static [&'static str] {
    match category {
        PrCategory::Short => &["Wolff-Parkinson-White syndrome", "Lown-Ganong-Levine syndrome"],
        PrCategory::Normal => &[],
        PrCategory::Prolonged => &["First-degree AV block"],
    }
}

pub fn qrs_differentials(category: QrsCategory) -> &'static [&'static str] {
    match category {
        QrsCategory::Narrow => &[],
        QrsCategory::Wide => &["Bundle branch block", "Hyperkalemia", "Ventricular rhythm"],
    }
}

/// Classifies a PR interval. The normal band includes both limits.
pub fn classify_pr(
    pr_ms: f64,
    limits: &IntervalLimits,
) -> Result<ClassificationResult<PrCategory>> {
    let pr_ms = validate_non_negative("pr_interval_ms", pr_ms)?;

    let (category, label) = if pr_ms < limits.pr_short_below_ms {
        (
            PrCategory::Short,
            format!("Short PR (<{} ms)", limits.pr_short_below_ms),
        )
    } else if pr_ms > limits.pr_prolonged_above_ms {
        (
            PrCategory::Prolonged,
            format!("Prolonged PR (>{} ms)", limits.pr_prolonged_above_ms),
        )
    } else {
        (PrCategory::Normal, "Normal PR interval".to_string())
    };

    Ok(ClassificationResult::new(label, category, pr_differentials(category)))
}

pub fn classify_qrs(
    qrs_ms: f64,
    limits: &IntervalLimits,
) -> Result<ClassificationResult<QrsCategory>> {
    let qrs_ms = validate_non_negative("qrs_duration_ms", qrs_ms)?;

    let (category, label) = if qrs_ms >= limits.qrs_wide_from_ms {
        (
            QrsCategory::Wide,
            format!("Wide QRS (>={} ms)", limits.qrs_wide_from_ms),
        )
    } else {
        (QrsCategory::Narrow, "Narrow QRS (normal)".to_string())
    };

    Ok(ClassificationResult::new(label, category, qrs_differentials(category)))
}

/// Rhythm suspicion raised by the P-wave morphology, if any.
pub fn p_wave_finding(morphology: PWaveMorphology) -> Option<&'static str> {
    match morphology {
        PWaveMorphology::Absent => Some("Suspect atrial fibrillation (check for irregular rhythm)"),
        PWaveMorphology::MoreThanQrs => Some("Suspect atrial flutter or atrial tachycardia"),
        PWaveMorphology::Sawtooth => Some("Suspect atrial flutter"),
        PWaveMorphology::PresentUpright | PWaveMorphology::Inverted => None,
    }
}
