use std::collections::BTreeMap;
use std::fmt;

use crate::data::aggregate::normalize_cause;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the source table
// ---------------------------------------------------------------------------

/// A dynamically-typed table cell. The accident CSV carries arbitrary extra
/// columns which are passed through to the data table untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Null => write!(f, ""),
        }
    }
}

impl CellValue {
    /// Guess the cell type from its raw CSV text.
    pub fn guess(s: &str) -> CellValue {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return CellValue::Null;
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            return CellValue::Float(f);
        }
        CellValue::String(trimmed.to_string())
    }
}

// ---------------------------------------------------------------------------
// AccidentRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single accident record (one CSV row).
#[derive(Debug, Clone)]
pub struct AccidentRecord {
    /// Parsed `Year` column.
    pub year: i64,
    /// Trimmed `Main Cause` column, `None` when blank or absent.
    pub main_cause: Option<String>,
    /// The full row, ordered as [`AccidentDataset::columns`], for display.
    pub cells: Vec<CellValue>,
}

// ---------------------------------------------------------------------------
// AccidentDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed bounds and cause index.
#[derive(Debug, Clone)]
pub struct AccidentDataset {
    /// All records (rows), in file order.
    pub records: Vec<AccidentRecord>,
    /// Ordered list of column names, as found in the header.
    pub columns: Vec<String>,
    /// Inclusive (min, max) of the `Year` column.
    pub year_bounds: (i64, i64),
    /// Canonical cause labels keyed by normalized cause.
    cause_labels: BTreeMap<String, String>,
}

impl AccidentDataset {
    /// Build the cause index and year bounds from loaded records.
    pub fn from_records(columns: Vec<String>, records: Vec<AccidentRecord>) -> Self {
        let mut cause_labels: BTreeMap<String, String> = BTreeMap::new();
        let mut min_year = i64::MAX;
        let mut max_year = i64::MIN;

        for rec in &records {
            min_year = min_year.min(rec.year);
            max_year = max_year.max(rec.year);
            if let Some(cause) = &rec.main_cause {
                // First-seen casing becomes the display label.
                cause_labels
                    .entry(normalize_cause(cause))
                    .or_insert_with(|| cause.clone());
            }
        }

        let year_bounds = if records.is_empty() {
            (0, 0)
        } else {
            (min_year, max_year)
        };

        AccidentDataset {
            records,
            columns,
            year_bounds,
            cause_labels,
        }
    }

    /// Canonical display label for a normalized cause key, if known.
    pub fn cause_label(&self, normalized: &str) -> Option<&str> {
        self.cause_labels.get(normalized).map(String::as_str)
    }

    /// All canonical cause labels, sorted by normalized key.
    pub fn cause_labels(&self) -> impl Iterator<Item = &str> {
        self.cause_labels.values().map(String::as_str)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
