//! CSV ingestion implementation.

use std::path::Path;

use crate::error::{ProcessingError, ProcessingResult};
use crate::processing::LineItem;
use crate::types::{Number, Sample};

/// Ingest one numeric column of a CSV file.
///
/// Rules:
///
/// - CSV must have headers.
/// - `column` selects a header by name; `None` selects the first column.
/// - Empty cells become `None`; integer text becomes [`Number::Int64`], any other numeric text
///   becomes [`Number::Float64`].
pub fn ingest_csv_from_path(path: impl AsRef<Path>, column: Option<&str>) -> ProcessingResult<Vec<Sample>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
    ingest_csv_from_reader(&mut rdr, column)
}

/// Ingest one numeric column from an existing CSV reader.
pub fn ingest_csv_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
    column: Option<&str>,
) -> ProcessingResult<Vec<Sample>> {
    let headers = rdr.headers()?.clone();

    let col_idx = match column {
        Some(name) => headers.iter().position(|h| h == name).ok_or_else(|| {
            ProcessingError::SchemaMismatch {
                message: format!(
                    "missing required column '{name}'. headers={:?}",
                    headers.iter().collect::<Vec<_>>()
                ),
            }
        })?,
        None if headers.is_empty() => {
            return Err(ProcessingError::SchemaMismatch {
                message: "csv has no columns".to_string(),
            });
        }
        None => 0,
    };
    let col_name = headers.get(col_idx).unwrap_or_default().to_string();

    let mut values = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // 1-based, and the header is row 1.
        let user_row = row_idx0 + 2;
        let record = result?;
        let raw = record.get(col_idx).unwrap_or("");
        values.push(parse_sample(user_row, &col_name, raw)?);
    }

    Ok(values)
}

/// Ingest order line items from a CSV file with `price` and `quantity` headers.
pub fn ingest_line_items_csv_from_path(path: impl AsRef<Path>) -> ProcessingResult<Vec<LineItem>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    ingest_line_items_csv_from_reader(&mut rdr)
}

/// Ingest order line items from an existing CSV reader.
pub fn ingest_line_items_csv_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
) -> ProcessingResult<Vec<LineItem>> {
    let mut items = Vec::new();
    for result in rdr.deserialize::<LineItem>() {
        items.push(result?);
    }
    Ok(items)
}

pub(crate) fn parse_sample(row: usize, column: &str, raw: &str) -> ProcessingResult<Sample> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    if let Ok(v) = trimmed.parse::<i64>() {
        return Ok(Some(Number::Int64(v)));
    }
    trimmed
        .parse::<f64>()
        .map(|v| Some(Number::Float64(v)))
        .map_err(|e| ProcessingError::ParseError {
            row,
            column: column.to_owned(),
            raw: raw.to_owned(),
            message: e.to_string(),
        })
}
