use thiserror::Error;

/// Convenience result type for fallible operations (loading, price parsing, engine setup).
pub type ProcessingResult<T> = Result<T, ProcessingError>;

/// Error type returned by fallible functions in this crate.
///
/// The core numeric operations ([`crate::processing::DataProcessor::process`],
/// [`crate::processing::DataProcessor::get_stats`], [`crate::processing::filter_data`]) never fail
/// and do not use this type.
#[derive(Debug, Error)]
pub enum ProcessingError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV ingestion error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON ingestion error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input does not have the expected shape (missing column, empty input, etc.).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A value could not be parsed into a number.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },

    /// A price string contained no digits.
    #[error("invalid price: no numeric value in '{raw}'")]
    InvalidPrice { raw: String },

    /// Engine options were rejected.
    #[error("invalid options: {message}")]
    InvalidOptions { message: String },

    /// The worker pool could not be built.
    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
