//! Unified ingestion entrypoint.
//!
//! Most callers should use [`ingest_from_path`] (numeric samples) or
//! [`ingest_line_items_from_path`] (order line items).
//!
//! - If [`IngestionOptions::format`] is `None`, the format is inferred from the file extension.
//! - If an [`super::observability::IngestionObserver`] is provided, success/failure/alerts are
//!   reported to it.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{ProcessingError, ProcessingResult};
use crate::processing::{DataProcessor, LineItem};
use crate::types::Sample;

use super::observability::{IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats, RecordKind};
use super::{csv, json};

/// Supported ingestion formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestionFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// JSON array or NDJSON.
    Json,
}

impl IngestionFormat {
    /// Parse an ingestion format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" | "ndjson" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Options controlling unified ingestion behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct IngestionOptions {
    /// If `None`, auto-detect format from file extension.
    pub format: Option<IngestionFormat>,
    /// CSV column holding the samples. `None` selects the first column. Ignored for JSON and
    /// for line items.
    pub column: Option<String>,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IngestionSeverity,
}

impl fmt::Debug for IngestionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestionOptions")
            .field("format", &self.format)
            .field("column", &self.column)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for IngestionOptions {
    fn default() -> Self {
        Self {
            format: None,
            column: None,
            observer: None,
            alert_at_or_above: IngestionSeverity::Critical,
        }
    }
}

/// Load a nullable numeric sequence from a CSV or JSON file.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with the number of loaded entries
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ```no_run
/// use sample_processing::ingestion::{ingest_from_path, IngestionOptions};
/// use sample_processing::processing::DataProcessor;
///
/// # fn main() -> Result<(), sample_processing::ProcessingError> {
/// let opts = IngestionOptions {
///     column: Some("reading".to_string()),
///     ..Default::default()
/// };
/// let values = ingest_from_path("readings.csv", &opts)?;
/// println!("{:?}", DataProcessor::new(values).get_stats());
/// # Ok(())
/// # }
/// ```
///
/// ## Observability (stderr logging + alert threshold)
///
/// ```no_run
/// use std::sync::Arc;
///
/// use sample_processing::ingestion::{
///     ingest_from_path, IngestionOptions, IngestionSeverity, StdErrObserver,
/// };
///
/// let opts = IngestionOptions {
///     observer: Some(Arc::new(StdErrObserver::default())),
///     alert_at_or_above: IngestionSeverity::Critical,
///     ..Default::default()
/// };
///
/// // Missing files are treated as Critical and will trigger `on_alert` at this threshold.
/// let _err = ingest_from_path("does_not_exist.json", &opts).unwrap_err();
/// ```
pub fn ingest_from_path(path: impl AsRef<Path>, options: &IngestionOptions) -> ProcessingResult<Vec<Sample>> {
    run_observed(path.as_ref(), options, RecordKind::Samples, |path, fmt| match fmt {
        IngestionFormat::Csv => csv::ingest_csv_from_path(path, options.column.as_deref()),
        IngestionFormat::Json => json::ingest_json_from_path(path),
    })
}

/// Load order line items from a CSV (`price,quantity` headers) or JSON file.
///
/// Format selection and observer reporting follow [`ingest_from_path`].
pub fn ingest_line_items_from_path(
    path: impl AsRef<Path>,
    options: &IngestionOptions,
) -> ProcessingResult<Vec<LineItem>> {
    run_observed(path.as_ref(), options, RecordKind::LineItems, |path, fmt| match fmt {
        IngestionFormat::Csv => csv::ingest_line_items_csv_from_path(path),
        IngestionFormat::Json => json::ingest_line_items_json_from_path(path),
    })
}

fn run_observed<T, F>(
    path: &Path,
    options: &IngestionOptions,
    kind: RecordKind,
    load: F,
) -> ProcessingResult<Vec<T>>
where
    F: FnOnce(&Path, IngestionFormat) -> ProcessingResult<Vec<T>>,
{
    let fmt = match options.format {
        Some(f) => f,
        None => infer_format_from_path(path)?,
    };

    let result = load(path, fmt);

    if let Some(obs) = options.observer.as_ref() {
        let ctx = IngestionContext {
            path: path.to_path_buf(),
            format: fmt,
            kind,
        };
        match &result {
            Ok(records) => obs.on_success(&ctx, IngestionStats { rows: records.len() }),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

fn severity_for_error(e: &ProcessingError) -> IngestionSeverity {
    match e {
        ProcessingError::Io(_) => IngestionSeverity::Critical,
        ProcessingError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => IngestionSeverity::Critical,
            _ => IngestionSeverity::Error,
        },
        ProcessingError::Json(err) if err.is_io() => IngestionSeverity::Critical,
        _ => IngestionSeverity::Error,
    }
}

fn infer_format_from_path(path: &Path) -> ProcessingResult<IngestionFormat> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| ProcessingError::SchemaMismatch {
            message: format!(
                "cannot infer format: path has no extension ({})",
                path.display()
            ),
        })?;

    IngestionFormat::from_extension(ext).ok_or_else(|| ProcessingError::SchemaMismatch {
        message: format!(
            "cannot infer format from extension '{ext}' for path ({})",
            path.display()
        ),
    })
}

/// An owned ingestion request, e.g. for queueing loads in a job system.
#[derive(Debug, Clone)]
pub struct IngestionRequest {
    /// Path to the input file.
    pub path: PathBuf,
    /// Options controlling ingestion.
    pub options: IngestionOptions,
}

impl IngestionRequest {
    /// Request a load of `path` with default options.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            options: IngestionOptions::default(),
        }
    }

    /// Execute the request and wrap the loaded samples in a [`DataProcessor`].
    pub fn run(&self) -> ProcessingResult<DataProcessor> {
        ingest_from_path(&self.path, &self.options).map(DataProcessor::new)
    }
}

#[cfg(test)]
mod tests {
    use super::{infer_format_from_path, IngestionFormat};
    use std::path::Path;

    #[test]
    fn format_inference_is_case_insensitive() {
        assert_eq!(
            infer_format_from_path(Path::new("a/b.CSV")).unwrap(),
            IngestionFormat::Csv
        );
        assert_eq!(
            infer_format_from_path(Path::new("x.ndjson")).unwrap(),
            IngestionFormat::Json
        );
    }

    #[test]
    fn format_inference_rejects_unknown_extensions() {
        let err = infer_format_from_path(Path::new("data.parquet")).unwrap_err();
        assert!(err.to_string().contains("cannot infer format from extension 'parquet'"));
        let err = infer_format_from_path(Path::new("no_extension")).unwrap_err();
        assert!(err.to_string().contains("path has no extension"));
    }
}
