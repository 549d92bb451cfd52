//! Summary statistics for nullable numeric sequences.

use serde::{Deserialize, Serialize};

use crate::types::{Number, Sample};

use super::reduce::{reduce, ReduceOp};

/// Summary statistics over the present values of a sequence.
///
/// Serializes to an object with exactly the keys `total`, `count`, `average`, `min`, `max`;
/// absent `min`/`max` become `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Sum of the present values.
    pub total: Number,
    /// Number of present values.
    pub count: usize,
    /// `total / count`, or `0.0` when `count == 0`.
    pub average: f64,
    /// Smallest present value.
    pub min: Option<Number>,
    /// Largest present value.
    pub max: Option<Number>,
}

impl Stats {
    /// The result for a sequence with no present values.
    pub fn empty() -> Self {
        Self {
            total: Number::ZERO,
            count: 0,
            average: 0.0,
            min: None,
            max: None,
        }
    }

    /// Returns `true` if no values contributed to these stats.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Combine the stats of two adjacent sub-sequences (`self` first).
    ///
    /// `min`/`max` ties resolve to `self`, matching a left-to-right scan.
    pub fn combine(self, other: Stats) -> Stats {
        if other.is_empty() {
            return self;
        }
        if self.is_empty() {
            return other;
        }

        let total = self.total + other.total;
        let count = self.count + other.count;
        Stats {
            total,
            count,
            average: total.as_f64() / count as f64,
            min: pick(self.min, other.min, |r, l| r < l),
            max: pick(self.max, other.max, |r, l| r > l),
        }
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::empty()
    }
}

fn pick(
    left: Option<Number>,
    right: Option<Number>,
    right_wins: impl Fn(Number, Number) -> bool,
) -> Option<Number> {
    match (left, right) {
        (Some(l), Some(r)) if right_wins(r, l) => Some(r),
        (Some(l), _) => Some(l),
        (None, r) => r,
    }
}

/// Compute [`Stats`] for `values`, ignoring absent entries.
pub fn summarize(values: &[Sample]) -> Stats {
    let count = values.iter().flatten().count();
    if count == 0 {
        return Stats::empty();
    }

    let total = reduce(values, ReduceOp::Sum).unwrap_or(Number::ZERO);
    Stats {
        total,
        count,
        average: total.as_f64() / count as f64,
        min: reduce(values, ReduceOp::Min),
        max: reduce(values, ReduceOp::Max),
    }
}

#[cfg(test)]
mod tests {
    use super::{summarize, Stats};
    use crate::types::{Number, Sample};

    fn ints(values: &[Option<i64>]) -> Vec<Sample> {
        values.iter().map(|v| v.map(Number::Int64)).collect()
    }

    #[test]
    fn summarize_skips_nulls() {
        let stats = summarize(&ints(&[Some(1), None, Some(3)]));
        assert_eq!(stats.total, Number::Int64(4));
        assert_eq!(stats.count, 2);
        assert_eq!(stats.average, 2.0);
        assert_eq!(stats.min, Some(Number::Int64(1)));
        assert_eq!(stats.max, Some(Number::Int64(3)));
    }

    #[test]
    fn summarize_all_null_is_empty() {
        assert_eq!(summarize(&ints(&[None, None])), Stats::empty());
        assert_eq!(summarize(&[]), Stats::empty());
    }

    #[test]
    fn average_uses_float_division() {
        let stats = summarize(&ints(&[Some(1), Some(2)]));
        assert_eq!(stats.average, 1.5);
    }

    #[test]
    fn combine_matches_single_pass() {
        let all = ints(&[Some(5), None, Some(-2), Some(8), Some(-2), None, Some(1)]);
        let (left, right) = all.split_at(3);
        assert_eq!(summarize(left).combine(summarize(right)), summarize(&all));
        assert_eq!(summarize(&[]).combine(summarize(&all)), summarize(&all));
        assert_eq!(summarize(&all).combine(Stats::empty()), summarize(&all));
    }

    #[test]
    fn serializes_with_fixed_keys() {
        let json = serde_json::to_value(Stats::empty()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"total": 0, "count": 0, "average": 0.0, "min": null, "max": null})
        );

        let json = serde_json::to_value(summarize(&ints(&[Some(1), None, Some(3)]))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"total": 4, "count": 2, "average": 2.0, "min": 1, "max": 3})
        );
    }
}
