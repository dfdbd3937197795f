use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::{AccidentDataset, AccidentRecord, CellValue};

/// Column holding the accident year. Its presence is the one schema check.
pub const YEAR_COLUMN: &str = "Year";
/// Column holding the attributed cause. May be absent or blank.
pub const CAUSE_COLUMN: &str = "Main Cause";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("the dataset must contain a '{0}' column")]
    MissingColumn(&'static str),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the accident dataset from a CSV file.
///
/// Expected layout: header row with column names, at least a `Year` column
/// with integer values. A `Main Cause` column is used for the cause filters
/// and charts; every other column is passed through to the table untouched.
pub fn load_csv(path: &Path) -> Result<AccidentDataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_records(csv::Reader::from_reader(file))
}

/// Parse accident records from any CSV reader.
///
/// Rows whose `Year` cell is not integer-coercible are skipped with a
/// warning. A blank `Main Cause` cell becomes `None`.
pub fn read_records<R: Read>(mut reader: csv::Reader<R>) -> Result<AccidentDataset> {
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let year_idx = headers
        .iter()
        .position(|h| h == YEAR_COLUMN)
        .ok_or(LoadError::MissingColumn(YEAR_COLUMN))?;
    let cause_idx = headers.iter().position(|h| h == CAUSE_COLUMN);

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let raw_year = record.get(year_idx).unwrap_or("").trim();
        let year = match raw_year.parse::<i64>() {
            Ok(y) => y,
            Err(_) => {
                log::warn!("CSV row {row_no}: '{raw_year}' is not a year, skipping");
                continue;
            }
        };

        let main_cause = cause_idx
            .and_then(|i| record.get(i))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let cells = record.iter().map(CellValue::guess).collect();

        records.push(AccidentRecord {
            year,
            main_cause,
            cells,
        });
    }

    Ok(AccidentDataset::from_records(headers, records))
}
