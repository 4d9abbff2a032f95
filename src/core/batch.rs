use crate::core::qtc::compute_qtc_with;
use crate::domain::model::{QtcCategory, QtcInput, Sex};
use crate::domain::thresholds::QtcCutoffTable;
use crate::utils::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::io;

#[derive(Debug, Deserialize)]
struct QtcRow {
    qt_ms: f64,
    rr_ms: f64,
    #[serde(default)]
    sex: Option<Sex>,
}

#[derive(Debug, Serialize)]
struct QtcRowResult {
    qt_ms: f64,
    rr_ms: f64,
    sex: Option<Sex>,
    qtc_ms: f64,
    category: QtcCategory,
}

/// Corrects every `qt_ms,rr_ms[,sex]` row of a CSV and writes the results as CSV.
///
/// Returns the number of rows written. The first invalid row aborts the batch;
/// its 1-based data row number is prefixed to the offending field name.
pub fn run_qtc_batch<R: io::Read, W: io::Write>(
    reader: R,
    writer: W,
    cutoffs: &QtcCutoffTable,
) -> Result<usize> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut csv_writer = csv::Writer::from_writer(writer);
    let mut count = 0;

    for (index, row) in csv_reader.deserialize::<QtcRow>().enumerate() {
        let row_number = index + 1;
        let row = row?;

        let mut input = QtcInput::new(row.qt_ms, row.rr_ms);
        input.sex = row.sex;
        let result = compute_qtc_with(&input, cutoffs).map_err(|e| match e {
            CalcError::InvalidInput {
                field,
                value,
                reason,
            } => CalcError::InvalidInput {
                field: format!("row {}: {}", row_number, field),
                value,
                reason,
            },
            other => other,
        })?;

        csv_writer.serialize(QtcRowResult {
            qt_ms: row.qt_ms,
            rr_ms: row.rr_ms,
            sex: row.sex,
            qtc_ms: (result.qtc_ms * 10.0).round() / 10.0,
            category: result.category(),
        })?;
        count += 1;
    }

    csv_writer.flush()?;
    tracing::info!(rows = count, "QTc batch complete");
    Ok(count)
}
