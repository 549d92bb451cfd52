//! In-memory numeric transformations.
//!
//! Currently implemented:
//!
//! - [`DataProcessor`]: wraps a nullable sequence; [`DataProcessor::process`] doubles positive
//!   values and [`DataProcessor::get_stats`] summarizes present values
//! - [`filter_data()`]: inclusive threshold filtering
//! - [`reduce()`]: count/sum/min/max over present values
//! - [`calculate_total()`], [`format_currency()`], [`parse_price()`]: order helpers
//!
//! ## Example: process → filter → stats
//!
//! ```rust
//! use sample_processing::processing::{filter_data, DataProcessor, Thresholds};
//! use sample_processing::types::Number;
//!
//! let p = DataProcessor::new(vec![
//!     Some(Number::Int64(1)),
//!     None,
//!     Some(Number::Int64(4)),
//!     Some(Number::Int64(-3)),
//! ]);
//!
//! // [2, 8]
//! let doubled = p.process();
//!
//! // Keep values in [0, 5].
//! let kept = filter_data(&doubled, Thresholds::default().with_max(5));
//! assert_eq!(kept, vec![Number::Int64(2)]);
//!
//! let stats = p.get_stats();
//! assert_eq!(stats.count, 3);
//! assert_eq!(stats.total, Number::Int64(2));
//! ```

pub mod filter;
pub mod map;
pub mod processor;
pub mod reduce;
pub mod stats;
pub mod totals;

pub use filter::{filter_data, Thresholds};
pub use map::double_positive;
pub use processor::DataProcessor;
pub use reduce::{reduce, ReduceOp};
pub use stats::{summarize, Stats};
pub use totals::{calculate_total, format_currency, parse_price, LineItem, DEFAULT_CURRENCY};
