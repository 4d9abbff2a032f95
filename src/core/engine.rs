use crate::config::worksheet::Worksheet;
use crate::core::axis::classify_axis;
use crate::core::findings::{classify_pr, classify_qrs, p_wave_finding};
use crate::core::interval::convert_to_ms;
use crate::core::qtc::compute_qtc_with;
use crate::core::rate::compute_rate;
use crate::core::report::EcgReport;
use crate::domain::model::{
    AxisCategory, IntervalInput, PWaveMorphology, QtcCategory, QtcInput, RateInput, StTFinding,
};
use crate::domain::ports::ThresholdProvider;
use crate::utils::error::Result;

/// Runs every calculator over a worksheet, in checklist order.
pub struct WorksheetEngine<P: ThresholdProvider> {
    thresholds: P,
}

impl<P: ThresholdProvider> WorksheetEngine<P> {
    pub fn new(thresholds: P) -> Self {
        Self { thresholds }
    }

    pub fn run(&self, worksheet: &Worksheet) -> Result<EcgReport> {
        let paper_speed = self.thresholds.paper_speed_mm_per_sec();
        let to_ms = |small_squares: f64| {
            convert_to_ms(&IntervalInput::new(small_squares).with_paper_speed(paper_speed))
        };

        // Step 0: calibration
        if !worksheet.calibration.confirmed {
            tracing::warn!("Calibration not confirmed; results assume standard 10 mm/mV gain");
        }

        // Step 1 & 2: rate and rhythm
        let rate_input = worksheet.rate_input()?;
        let heart_rate_bpm = compute_rate(&rate_input.at_paper_speed(paper_speed))?;
        tracing::info!(heart_rate_bpm, regular = rate_input.rhythm_regular(), "rate computed");

        // Step 3: P waves
        let p_wave_morphology = worksheet.p_waves.morphology;
        let p_finding = p_wave_finding(p_wave_morphology);
        if let Some(finding) = p_finding {
            tracing::warn!("{}", finding);
        }

        // Step 4 & 5: PR and QRS
        let limits = self.thresholds.interval_limits();
        let pr_interval_ms = to_ms(worksheet.intervals.pr_small_squares)?;
        let pr = classify_pr(pr_interval_ms, limits)?;
        let qrs_duration_ms = to_ms(worksheet.intervals.qrs_small_squares)?;
        let qrs = classify_qrs(qrs_duration_ms, limits)?;

        // Step 6: axis
        let axis = classify_axis(&worksheet.axis_input());

        // Step 8: QT / QTc. A regular rhythm uses the measured R-R distance,
        // an irregular one the mean R-R implied by the rate.
        let qt_interval_ms = to_ms(worksheet.intervals.qt_small_squares)?;
        let mut qtc_input = match rate_input {
            RateInput::Regular {
                large_squares_between_beats,
            } => QtcInput::new(qt_interval_ms, to_ms(large_squares_between_beats * 5.0)?),
            RateInput::Irregular { .. } => {
                QtcInput::from_heart_rate(qt_interval_ms, heart_rate_bpm)?
            }
        };
        qtc_input.sex = worksheet.patient.sex;
        let qtc = compute_qtc_with(&qtc_input, self.thresholds.qtc_cutoffs())?;
        tracing::info!(qtc_ms = qtc.qtc_ms, category = %qtc.category(), "QTc computed");

        let st_t_findings = worksheet.st_t.findings.clone();

        let mut report = EcgReport {
            generated_at: chrono::Utc::now(),
            clinical_context: worksheet.patient.clinical_context.clone(),
            sex: worksheet.patient.sex,
            calibration_confirmed: worksheet.calibration.confirmed,
            paper_speed_mm_per_sec: paper_speed,
            rhythm_regular: rate_input.rhythm_regular(),
            heart_rate_bpm,
            p_wave_morphology,
            p_wave_finding: p_finding.map(str::to_string),
            pr_interval_ms,
            pr,
            qrs_duration_ms,
            qrs,
            axis,
            st_t_findings,
            qt_interval_ms,
            qtc,
            summary: Vec::new(),
        };
        report.summary = summarize(&report);

        Ok(report)
    }
}

/// Interpretation summary lines. An empty list means nothing stood out.
pub fn summarize(report: &EcgReport) -> Vec<String> {
    let mut summary = Vec::new();

    if !report.rhythm_regular {
        summary.push("Irregular rhythm detected.".to_string());
    }
    if report.p_wave_morphology == PWaveMorphology::PresentUpright {
        summary.push("Sinus origin.".to_string());
    }
    if matches!(
        report.axis.category,
        AxisCategory::LeftAxisDeviation | AxisCategory::RightAxisDeviation
    ) {
        summary.push(format!("Axis deviation detected: {}.", report.axis.label));
    }
    if report.st_t_findings.contains(&StTFinding::StElevation) {
        summary.push("CRITICAL: ST elevation noted - rule out STEMI.".to_string());
    }
    match report.qtc.category() {
        QtcCategory::Prolonged => summary.push("Prolonged QTc interval.".to_string()),
        QtcCategory::Borderline => summary.push("Borderline QTc interval.".to_string()),
        QtcCategory::Normal => {}
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::CalculatorConfig;
    use crate::domain::model::PrCategory;
    use crate::domain::ports::StandardThresholds;

    fn worksheet(body: &str) -> Worksheet {
        Worksheet::from_toml_str(body).unwrap()
    }

    const NORMAL_SINUS: &str = r#"
[rhythm]
regular = true
rr_small_squares = 25.0

[intervals]
pr_small_squares = 4.0
qrs_small_squares = 2.0
qt_small_squares = 10.0

[axis]
lead_i = "positive"
lead_avf = "positive"
"#;

    #[test]
    fn test_normal_sinus_worksheet() {
        let report = WorksheetEngine::new(StandardThresholds)
            .run(&worksheet(NORMAL_SINUS))
            .unwrap();

        assert!((report.heart_rate_bpm - 60.0).abs() < 1e-9);
        assert_eq!(report.pr_interval_ms, 160.0);
        assert_eq!(report.pr.category, PrCategory::Normal);
        assert_eq!(report.qrs_duration_ms, 80.0);
        assert_eq!(report.axis.category, AxisCategory::Normal);
        assert!((report.qtc.qtc_ms - 400.0).abs() < 1e-9);
        assert_eq!(report.summary, vec!["Sinus origin."]);
    }

    #[test]
    fn test_irregular_rhythm_uses_rate_for_rr() {
        let body = NORMAL_SINUS
            .replace("regular = true", "regular = false")
            .replace("rr_small_squares = 25.0", "qrs_count_in_6_sec = 6");
        let report = WorksheetEngine::new(StandardThresholds)
            .run(&worksheet(&body))
            .unwrap();

        assert_eq!(report.heart_rate_bpm, 60.0);
        assert!((report.qtc.qtc_ms - 400.0).abs() < 1e-9);
        assert_eq!(report.summary[0], "Irregular rhythm detected.");
    }

    #[test]
    fn test_irregular_without_beats_is_rejected() {
        let body = NORMAL_SINUS
            .replace("regular = true", "regular = false")
            .replace("rr_small_squares = 25.0", "qrs_count_in_6_sec = 0");
        let result = WorksheetEngine::new(StandardThresholds).run(&worksheet(&body));
        assert!(result.is_err());
    }

    #[test]
    fn test_abnormal_findings_reach_summary() {
        let body = NORMAL_SINUS
            .replace("lead_avf = \"positive\"", "lead_avf = \"negative\"\nlead_ii = \"negative\"")
            .replace("qt_small_squares = 10.0", "qt_small_squares = 12.5")
            + "\n[st_t]\nfindings = [\"st_elevation\"]\n";
        let report = WorksheetEngine::new(StandardThresholds)
            .run(&worksheet(&body))
            .unwrap();

        assert_eq!(report.axis.category, AxisCategory::LeftAxisDeviation);
        assert_eq!(report.qtc.category(), QtcCategory::Prolonged);
        assert!(report.summary.iter().any(|s| s.starts_with("Axis deviation detected")));
        assert!(report.summary.iter().any(|s| s.starts_with("CRITICAL")));
        assert_eq!(report.summary.last().unwrap(), "Prolonged QTc interval.");
    }

    #[test]
    fn test_paper_speed_from_config() {
        let config = CalculatorConfig::from_toml_str("[paper]\nspeed_mm_per_sec = 50.0\n").unwrap();
        let body = NORMAL_SINUS
            .replace("rr_small_squares = 25.0", "rr_small_squares = 50.0")
            .replace("pr_small_squares = 4.0", "pr_small_squares = 8.0");
        let report = WorksheetEngine::new(config).run(&worksheet(&body)).unwrap();

        assert!((report.heart_rate_bpm - 60.0).abs() < 1e-9);
        assert!((report.pr_interval_ms - 160.0).abs() < 1e-9);
    }
}
