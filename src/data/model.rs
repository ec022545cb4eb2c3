use std::fmt;

use thiserror::Error;

use crate::stats::norm::ShapeError;

// ---------------------------------------------------------------------------
// Errors raised by the data layer
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum DataError {
    #[error("input file not found: {path}")]
    InputNotFound { path: String },

    #[error("reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed input at line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error("input has no header row")]
    MissingHeader,

    #[error("unsupported file extension: .{extension}")]
    UnsupportedFormat { extension: String },

    #[error("missing column '{column}'")]
    MissingColumn { column: String },

    #[error("column '{column}', row {row}: '{value}' is not a number")]
    NotNumeric {
        column: String,
        row: usize,
        value: String,
    },

    #[error(transparent)]
    Shape(#[from] ShapeError),
}

// ---------------------------------------------------------------------------
// CellValue – a single cell of the observation table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell, guessed from the raw text of the input file.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Interpret the cell as an `f64` when it holds a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// ObservationTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Rows of survey responses with named columns, in input order.
///
/// Every row holds exactly `column_names.len()` cells. Transformations never
/// touch `self`; they hand back a new table.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationTable {
    column_names: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl ObservationTable {
    /// Build a table, checking every row against the header width.
    pub fn new(column_names: Vec<String>, rows: Vec<Vec<CellValue>>) -> Result<Self, DataError> {
        let width = column_names.len();
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(ShapeError::ShapeMismatch {
                index,
                expected: width,
                found: row.len(),
            }
            .into());
        }
        Ok(Self { column_names, rows })
    }

    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, column: &str) -> Result<usize, DataError> {
        self.column_names
            .iter()
            .position(|c| c == column)
            .ok_or_else(|| DataError::MissingColumn {
                column: column.to_string(),
            })
    }

    /// Read a whole column as floats. Fails on the first non-numeric cell.
    pub fn numeric_column(&self, column: &str) -> Result<Vec<f64>, DataError> {
        let idx = self.column_index(column)?;
        self.rows
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                cells[idx].as_f64().ok_or_else(|| DataError::NotNumeric {
                    column: column.to_string(),
                    row,
                    value: cells[idx].to_string(),
                })
            })
            .collect()
    }

    /// Return a copy of the table with `column` replaced by `values`.
    pub fn with_numeric_column(&self, column: &str, values: &[f64]) -> Result<Self, DataError> {
        let idx = self.column_index(column)?;
        if values.len() != self.rows.len() {
            return Err(ShapeError::ShapeMismatch {
                index: 1,
                expected: self.rows.len(),
                found: values.len(),
            }
            .into());
        }
        let rows = self
            .rows
            .iter()
            .zip(values)
            .map(|(cells, &v)| {
                let mut cells = cells.clone();
                cells[idx] = CellValue::Float(v);
                cells
            })
            .collect();
        Ok(Self {
            column_names: self.column_names.clone(),
            rows,
        })
    }

    /// Copy the given rows, in the given order, into a new table.
    pub fn select_rows(&self, indices: &[usize]) -> Self {
        Self {
            column_names: self.column_names.clone(),
            rows: indices.iter().map(|&i| self.rows[i].clone()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ObservationTable {
        ObservationTable::new(
            vec!["x".into(), "label".into()],
            vec![
                vec![CellValue::Integer(3), CellValue::Text("a".into())],
                vec![CellValue::Float(1.5), CellValue::Text("b".into())],
            ],
        )
        .unwrap()
    }

    #[test]
    fn numeric_column_reads_integers_and_floats() {
        assert_eq!(table().numeric_column("x").unwrap(), vec![3.0, 1.5]);
    }

    #[test]
    fn numeric_column_rejects_text() {
        let err = table().numeric_column("label").unwrap_err();
        assert!(matches!(err, DataError::NotNumeric { row: 0, .. }));
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let err = table().numeric_column("ideo").unwrap_err();
        match err {
            DataError::MissingColumn { column } => assert_eq!(column, "ideo"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn with_numeric_column_leaves_original_untouched() {
        let original = table();
        let replaced = original.with_numeric_column("x", &[0.0, 1.0]).unwrap();
        assert_eq!(original.numeric_column("x").unwrap(), vec![3.0, 1.5]);
        assert_eq!(replaced.numeric_column("x").unwrap(), vec![0.0, 1.0]);
        assert_eq!(replaced.rows()[1][1], CellValue::Text("b".into()));
    }

    #[test]
    fn with_numeric_column_checks_length() {
        let err = table().with_numeric_column("x", &[0.0]).unwrap_err();
        assert!(matches!(err, DataError::Shape(ShapeError::ShapeMismatch { .. })));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = ObservationTable::new(vec!["x".into()], vec![vec![], vec![CellValue::Null]]);
        assert!(err.is_err());
    }
}
