use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use super::model::{CellValue, DataError, ObservationTable};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load an observation table from a delimited text file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`          – comma separated, header row required
/// * `.tsv` / `.tab` – tab separated, header row required
pub fn load_file(path: &Path) -> Result<ObservationTable, DataError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let delimiter = match ext.as_str() {
        "csv" => b',',
        "tsv" | "tab" => b'\t',
        other => {
            return Err(DataError::UnsupportedFormat {
                extension: other.to_string(),
            })
        }
    };

    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => DataError::InputNotFound {
            path: path.display().to_string(),
        },
        _ => DataError::Io {
            path: path.display().to_string(),
            source,
        },
    })?;

    load_delimited(file, delimiter)
}

// ---------------------------------------------------------------------------
// Delimited text loader
// ---------------------------------------------------------------------------

/// Layout: one header row with column names, then one row per observation.
/// Every row must have as many fields as the header. Cells are trimmed and
/// typed individually; the table keeps the header's column order.
pub fn load_delimited<R: Read>(input: R, delimiter: u8) -> Result<ObservationTable, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers: Vec<String> = reader
        .headers()
        .map_err(parse_error)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(DataError::MissingHeader);
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(parse_error)?;
        rows.push(record.iter().map(guess_cell_type).collect());
    }

    ObservationTable::new(headers, rows)
}

fn parse_error(err: csv::Error) -> DataError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    DataError::Parse {
        line,
        message: err.to_string(),
    }
}

fn guess_cell_type(s: &str) -> CellValue {
    if s.is_empty() {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    if s == "true" || s == "false" {
        return CellValue::Bool(s == "true");
    }
    CellValue::Text(s.to_string())
}
