//! Reduction operations over nullable numeric sequences.

use crate::types::{Number, Sample};

/// Built-in reduction operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceOp {
    /// Count present (non-null) values.
    Count,
    /// Sum values, ignoring nulls.
    Sum,
    /// Minimum value, ignoring nulls.
    Min,
    /// Maximum value, ignoring nulls.
    Max,
}

/// Reduce a sequence using a built-in [`ReduceOp`].
///
/// - For `Count`, always returns `Some(Number::Int64(present_count))`.
/// - For `Sum`/`Min`/`Max`, returns `None` if there are no present values.
/// - `Min`/`Max` keep the first of several equal extremes.
pub fn reduce(values: &[Sample], op: ReduceOp) -> Option<Number> {
    let mut present = values.iter().flatten().copied();

    match op {
        ReduceOp::Count => Some(Number::Int64(present.count() as i64)),
        ReduceOp::Sum => {
            let first = present.next()?;
            Some(present.fold(first, |acc, v| acc + v))
        }
        ReduceOp::Min => {
            let first = present.next()?;
            Some(present.fold(first, |acc, v| if v < acc { v } else { acc }))
        }
        ReduceOp::Max => {
            let first = present.next()?;
            Some(present.fold(first, |acc, v| if v > acc { v } else { acc }))
        }
    }
}
