//! JSON ingestion implementation.
//!
//! Supported inputs for samples:
//! - A JSON array of numbers and nulls: `[1, null, 2.5]`
//! - Newline-delimited JSON (NDJSON) with one number or `null` per line
//!
//! Line items use the same two layouts with `{"price": .., "quantity": ..}` objects.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{ProcessingError, ProcessingResult};
use crate::processing::LineItem;
use crate::types::{Number, Sample};

/// Ingest a JSON file of numbers/nulls.
pub fn ingest_json_from_path(path: impl AsRef<Path>) -> ProcessingResult<Vec<Sample>> {
    let text = fs::read_to_string(path)?;
    ingest_json_from_str(&text)
}

/// Ingest numbers/nulls from an in-memory JSON or NDJSON string.
pub fn ingest_json_from_str(input: &str) -> ProcessingResult<Vec<Sample>> {
    let values = parse_json_values(input)?;
    values
        .iter()
        .enumerate()
        .map(|(idx0, v)| convert_json_value(idx0 + 1, v))
        .collect()
}

/// Ingest order line items from a JSON file.
pub fn ingest_line_items_json_from_path(path: impl AsRef<Path>) -> ProcessingResult<Vec<LineItem>> {
    let text = fs::read_to_string(path)?;
    ingest_line_items_json_from_str(&text)
}

/// Ingest order line items from an in-memory JSON or NDJSON string.
pub fn ingest_line_items_json_from_str(input: &str) -> ProcessingResult<Vec<LineItem>> {
    let values = parse_json_values(input)?;
    values
        .into_iter()
        .enumerate()
        .map(|(idx0, v)| deserialize_row(idx0 + 1, v))
        .collect()
}

// Splits the input into top-level values: array elements, a single scalar/object, or NDJSON lines.
fn parse_json_values(input: &str) -> ProcessingResult<Vec<serde_json::Value>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ProcessingError::SchemaMismatch {
            message: "json input is empty".to_string(),
        });
    }

    if let Ok(v) = serde_json::from_str::<serde_json::Value>(trimmed) {
        return Ok(match v {
            serde_json::Value::Array(items) => items,
            other => vec![other],
        });
    }

    let mut values = Vec::new();
    for (i, line) in trimmed.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let v = serde_json::from_str::<serde_json::Value>(line).map_err(|e| {
            ProcessingError::SchemaMismatch {
                message: format!("invalid ndjson at line {}: {}", i + 1, e),
            }
        })?;
        values.push(v);
    }
    Ok(values)
}

fn convert_json_value(row: usize, v: &serde_json::Value) -> ProcessingResult<Sample> {
    if v.is_null() {
        return Ok(None);
    }

    if let Some(n) = v.as_i64() {
        Ok(Some(Number::Int64(n)))
    } else if let Some(n) = v.as_f64() {
        Ok(Some(Number::Float64(n)))
    } else {
        Err(ProcessingError::ParseError {
            row,
            column: "value".to_string(),
            raw: v.to_string(),
            message: "expected number or null".to_string(),
        })
    }
}

fn deserialize_row<T: DeserializeOwned>(row: usize, v: serde_json::Value) -> ProcessingResult<T> {
    serde_json::from_value(v).map_err(|e| ProcessingError::SchemaMismatch {
        message: format!("row {row}: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::{ingest_json_from_str, ingest_line_items_json_from_str};
    use crate::processing::LineItem;
    use crate::types::Number;

    #[test]
    fn single_scalar_is_one_sample() {
        assert_eq!(ingest_json_from_str("42").unwrap(), vec![Some(Number::Int64(42))]);
        assert_eq!(ingest_json_from_str("null").unwrap(), vec![None]);
    }

    #[test]
    fn large_unsigned_values_become_floats() {
        let out = ingest_json_from_str("[18446744073709551615]").unwrap();
        assert!(matches!(out[0], Some(Number::Float64(_))));
    }

    #[test]
    fn line_items_accept_single_object() {
        let items = ingest_line_items_json_from_str(r#"{"price": 1.5, "quantity": 2}"#).unwrap();
        assert_eq!(items, vec![LineItem::new(1.5, 2.0)]);
    }
}
