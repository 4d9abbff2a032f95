use crate::domain::model::{
    AxisCategory, ClassificationResult, PWaveMorphology, PrCategory, QrsCategory, QtcResult, Sex,
    StTFinding,
};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

pub const DISCLAIMER: &str = "DISCLAIMER: This tool is for educational and assisting purposes \
only. It does not replace professional medical advice. Always confirm findings manually.";

const NO_ABNORMALITY: &str =
    "Normal sinus rhythm with no acute abnormalities detected based on inputs.";

/// Everything derived from one worksheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EcgReport {
    pub generated_at: DateTime<Utc>,
    pub clinical_context: Option<String>,
    pub sex: Option<Sex>,
    pub calibration_confirmed: bool,
    pub paper_speed_mm_per_sec: f64,
    pub rhythm_regular: bool,
    pub heart_rate_bpm: f64,
    pub p_wave_morphology: PWaveMorphology,
    pub p_wave_finding: Option<String>,
    pub pr_interval_ms: f64,
    pub pr: ClassificationResult<PrCategory>,
    pub qrs_duration_ms: f64,
    pub qrs: ClassificationResult<QrsCategory>,
    pub axis: ClassificationResult<AxisCategory>,
    pub st_t_findings: Vec<StTFinding>,
    pub qt_interval_ms: f64,
    pub qtc: QtcResult,
    pub summary: Vec<String>,
}

fn with_differentials<C>(result: &ClassificationResult<C>) -> String {
    if result.associated_differentials.is_empty() {
        result.label.clone()
    } else {
        format!(
            "{} - consider {}",
            result.label,
            result.associated_differentials.join(", ")
        )
    }
}

/// Plain-text report, ready to paste into notes.
pub fn render_text(report: &EcgReport) -> String {
    let mut out = String::new();

    // writeln! into a String cannot fail
    let _ = writeln!(out, "ECG Analysis Report");
    let _ = writeln!(out, "Generated: {}", report.generated_at.format("%Y-%m-%d %H:%M UTC"));
    let _ = writeln!(
        out,
        "Clinical context: {}",
        report.clinical_context.as_deref().unwrap_or("Not provided")
    );
    if !report.calibration_confirmed {
        let _ = writeln!(
            out,
            "WARNING: Calibration not confirmed; interpretations assume {} mm/s and 10 mm/mV.",
            report.paper_speed_mm_per_sec
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "1. Rate: {:.0} bpm", report.heart_rate_bpm);
    let _ = writeln!(
        out,
        "2. Rhythm: {}",
        if report.rhythm_regular { "Regular" } else { "Irregular" }
    );
    match &report.p_wave_finding {
        Some(finding) => {
            let _ = writeln!(out, "3. P waves: {} ({})", report.p_wave_morphology, finding);
        }
        None => {
            let _ = writeln!(out, "3. P waves: {}", report.p_wave_morphology);
        }
    }
    let _ = writeln!(
        out,
        "4. PR interval: {:.0} ms - {}",
        report.pr_interval_ms,
        with_differentials(&report.pr)
    );
    let _ = writeln!(
        out,
        "5. QRS duration: {:.0} ms - {}",
        report.qrs_duration_ms,
        with_differentials(&report.qrs)
    );
    let _ = writeln!(out, "6. Axis: {}", with_differentials(&report.axis));

    let st_t = if report.st_t_findings.is_empty() {
        "None/Normal".to_string()
    } else {
        report
            .st_t_findings
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };
    let _ = writeln!(out, "7. ST/T changes: {}", st_t);
    let _ = writeln!(
        out,
        "8. QTc (Bazett): {:.0} ms (QT {:.0} ms) - {}",
        report.qtc.qtc_ms,
        report.qt_interval_ms,
        with_differentials(&report.qtc.classification)
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "Interpretation summary:");
    if report.summary.is_empty() {
        let _ = writeln!(out, "{}", NO_ABNORMALITY);
    } else {
        for line in &report.summary {
            let _ = writeln!(out, "- {}", line);
        }
    }

    let _ = writeln!(out);
    let _ = write!(out, "{}", DISCLAIMER);
    out
}

pub fn render_json(report: &EcgReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
