use ecg_calc::core::report::{render_json, render_text, DISCLAIMER};
use ecg_calc::core::{AxisCategory, QtcCategory, StandardThresholds};
use ecg_calc::utils::validation::Validate;
use ecg_calc::{CalculatorConfig, Worksheet, WorksheetEngine};
use std::io::Write;
use tempfile::NamedTempFile;

const WORKSHEET: &str = r#"
[patient]
clinical_context = "Syncope, age 72, on sotalol"
sex = "female"

[calibration]
confirmed = true

[rhythm]
regular = true
rr_small_squares = 20.0

[p_waves]
morphology = "present_upright"

[intervals]
pr_small_squares = 4.0
qrs_small_squares = 2.5
qt_small_squares = 10.6

[axis]
lead_i = "positive"
lead_avf = "positive"
"#;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_end_to_end_report_from_files() {
    let worksheet_file = write_temp(WORKSHEET);
    let worksheet = Worksheet::from_file(worksheet_file.path()).unwrap();
    assert!(worksheet.validate().is_ok());

    let report = WorksheetEngine::new(StandardThresholds).run(&worksheet).unwrap();

    // 424 ms QT over an 800 ms R-R
    assert!((report.heart_rate_bpm - 75.0).abs() < 1e-9);
    assert!((report.qt_interval_ms - 424.0).abs() < 1e-9);
    assert!((report.qtc.qtc_ms - 474.04).abs() < 0.01);
    assert_eq!(report.qtc.category(), QtcCategory::Borderline);
    assert_eq!(report.axis.category, AxisCategory::Normal);
    assert_eq!(
        report.summary,
        vec!["Sinus origin.", "Borderline QTc interval."]
    );

    let text = render_text(&report);
    assert!(text.contains("Syncope, age 72, on sotalol"));
    assert!(text.contains("8. QTc (Bazett): 474 ms (QT 424 ms)"));
    assert!(text.contains("Drug-induced QT prolongation"));
    assert!(text.ends_with(DISCLAIMER));
}

#[test]
fn test_config_file_changes_classification() {
    let worksheet = Worksheet::from_toml_str(WORKSHEET).unwrap();
    let config_file = write_temp(
        r#"
[qtc.female]
borderline_above_ms = 440.0
prolonged_above_ms = 470.0
"#,
    );
    let config = CalculatorConfig::from_file(config_file.path()).unwrap();
    assert!(config.validate().is_ok());

    let report = WorksheetEngine::new(config).run(&worksheet).unwrap();
    assert_eq!(report.qtc.category(), QtcCategory::Prolonged);
    assert_eq!(report.summary.last().unwrap(), "Prolonged QTc interval.");
}

#[test]
fn test_json_report_is_machine_readable() {
    let worksheet = Worksheet::from_toml_str(WORKSHEET).unwrap();
    let report = WorksheetEngine::new(StandardThresholds).run(&worksheet).unwrap();

    let value: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();
    assert_eq!(value["sex"], "female");
    assert_eq!(value["qtc"]["classification"]["category"], "borderline");
    assert_eq!(value["qrs"]["category"], "narrow");
    assert!(value["generated_at"].is_string());
}

#[test]
fn test_missing_worksheet_file() {
    assert!(Worksheet::from_file("/nonexistent/worksheet.toml").is_err());
}
