//! Threshold filtering for numeric sequences.

use crate::types::Number;

/// Inclusive bounds used by [`filter_data`].
///
/// The default keeps every value `>= 0` with no upper bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Inclusive lower bound.
    pub min: Number,
    /// Optional inclusive upper bound.
    pub max: Option<Number>,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min: Number::ZERO,
            max: None,
        }
    }
}

impl Thresholds {
    /// Bounds with the given lower bound and no upper bound.
    pub fn new(min: impl Into<Number>) -> Self {
        Self {
            min: min.into(),
            max: None,
        }
    }

    /// Sets the inclusive upper bound.
    pub fn with_max(mut self, max: impl Into<Number>) -> Self {
        self.max = Some(max.into());
        self
    }

    /// Returns `true` if `value` satisfies both bounds.
    pub fn contains(&self, value: Number) -> bool {
        if value < self.min {
            return false;
        }
        match self.max {
            Some(max) => value <= max,
            None => true,
        }
    }
}

/// Returns the values `x` with `x >= thresholds.min` and, when an upper bound is set,
/// `x <= thresholds.max`. Input order is preserved.
pub fn filter_data(data: &[Number], thresholds: Thresholds) -> Vec<Number> {
    data.iter()
        .copied()
        .filter(|x| thresholds.contains(*x))
        .collect()
}
