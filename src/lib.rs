//! `sample-processing` is a small library for processing nullable numeric sequences.
//!
//! The primary entrypoint is [`processing::DataProcessor`], which wraps a sequence of
//! [`types::Sample`]s (numbers that may be absent) and offers:
//!
//! - [`processing::DataProcessor::process`]: doubles every present value greater than zero
//! - [`processing::DataProcessor::get_stats`]: total / count / average / min / max over present
//!   values
//!
//! alongside [`processing::filter_data`] for inclusive threshold filtering and a few order helpers
//! ([`processing::calculate_total`], [`processing::format_currency`],
//! [`processing::parse_price`]).
//!
//! ## Value types
//!
//! [`types::Number`] keeps track of integer vs. float values:
//!
//! - [`types::Number::Int64`]
//! - [`types::Number::Float64`]
//!
//! Integer inputs stay integers through doubling and summation; averages are always floats.
//!
//! ## Quick example
//!
//! ```rust
//! use sample_processing::processing::{filter_data, DataProcessor, Thresholds};
//! use sample_processing::types::Number;
//!
//! let p = DataProcessor::from_numbers([1, -2, 3, 0]);
//! assert_eq!(p.process(), vec![Number::Int64(2), Number::Int64(6)]);
//!
//! let p = DataProcessor::new(vec![Some(1.into()), None, Some(3.into())]);
//! let stats = p.get_stats();
//! assert_eq!((stats.total, stats.count, stats.average), (Number::Int64(4), 2, 2.0));
//!
//! let data: Vec<Number> = [1, 5, 10, 15].into_iter().map(Number::from).collect();
//! let kept = filter_data(&data, Thresholds::new(5).with_max(10));
//! assert_eq!(kept, vec![Number::Int64(5), Number::Int64(10)]);
//! ```
//!
//! ## Loading data
//!
//! ```no_run
//! use sample_processing::ingestion::{ingest_from_path, IngestionOptions};
//! use sample_processing::processing::DataProcessor;
//!
//! # fn main() -> Result<(), sample_processing::ProcessingError> {
//! // Auto-detects by extension (.csv/.json/.ndjson).
//! let values = ingest_from_path("readings.json", &IngestionOptions::default())?;
//! let stats = DataProcessor::new(values).get_stats();
//! println!("{}", serde_json::to_string(&stats).unwrap_or_default());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`types`]: numeric value types
//! - [`processing`]: the processor, filters, reductions, stats and order helpers
//! - [`ingestion`]: CSV / JSON loading with observer hooks
//! - [`execution`]: chunked parallel execution with metrics
//! - [`error`]: error types used across the crate

pub mod error;
pub mod execution;
pub mod ingestion;
pub mod processing;
pub mod types;

pub use error::{ProcessingError, ProcessingResult};
