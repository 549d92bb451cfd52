//! Core value types.
//!
//! Sequences in this crate are made of [`Number`]s, a value that is either a 64-bit integer or a
//! 64-bit float. A [`Sample`] is a number that may be absent (`None`), which is how missing
//! entries are represented in the input to [`crate::processing::DataProcessor`].

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A numeric value that keeps track of whether it is an integer or a float.
///
/// Arithmetic keeps integers as integers when both operands are integers; any float operand
/// makes the result a float. Integer overflow promotes the result to a float instead of wrapping.
///
/// Equality and ordering compare numerically across variants, so `Int64(1) == Float64(1.0)`.
/// Mixed comparisons are exact: an integer is never rounded to the nearest float first.
///
/// Serializes as a bare JSON number. Deserializing a JSON integer yields `Int64`; any other
/// number yields `Float64`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit floating point number.
    Float64(f64),
}

/// A number that may be absent.
pub type Sample = Option<Number>;

impl Number {
    /// Integer zero.
    pub const ZERO: Number = Number::Int64(0);

    /// Numeric value as `f64` (lossy for integers beyond 2^53).
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int64(v) => v as f64,
            Number::Float64(v) => v,
        }
    }

    /// Returns `true` if the value is strictly greater than zero (`NaN` is not).
    pub fn is_positive(self) -> bool {
        match self {
            Number::Int64(v) => v > 0,
            Number::Float64(v) => v > 0.0,
        }
    }

    /// Returns the value multiplied by two.
    pub fn doubled(self) -> Number {
        match self {
            Number::Int64(v) => v
                .checked_mul(2)
                .map(Number::Int64)
                .unwrap_or(Number::Float64(v as f64 * 2.0)),
            Number::Float64(v) => Number::Float64(v * 2.0),
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::ZERO
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Number::Int64(v)
    }
}

impl From<i32> for Number {
    fn from(v: i32) -> Self {
        Number::Int64(i64::from(v))
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Float64(v)
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int64(a), Number::Int64(b)) => a
                .checked_add(b)
                .map(Number::Int64)
                .unwrap_or(Number::Float64(a as f64 + b as f64)),
            (a, b) => Number::Float64(a.as_f64() + b.as_f64()),
        }
    }
}

impl Sum for Number {
    fn sum<I: Iterator<Item = Number>>(iter: I) -> Number {
        iter.fold(Number::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Number> for Number {
    fn sum<I: Iterator<Item = &'a Number>>(iter: I) -> Number {
        iter.copied().sum()
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Float64(a), Number::Float64(b)) => a == b,
            (a, b) => a.partial_cmp(b) == Some(Ordering::Equal),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Number::Int64(a), Number::Int64(b)) => Some(a.cmp(&b)),
            (Number::Float64(a), Number::Float64(b)) => a.partial_cmp(&b),
            (Number::Int64(i), Number::Float64(f)) => cmp_int_float(i, f),
            (Number::Float64(f), Number::Int64(i)) => cmp_int_float(i, f).map(Ordering::reverse),
        }
    }
}

// 2^63 as f64; every finite float below it (and >= -2^63) truncates to an i64 exactly.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

// Exact comparison of `i` against `f`, without rounding `i` to the nearest f64.
fn cmp_int_float(i: i64, f: f64) -> Option<Ordering> {
    if f.is_nan() {
        return None;
    }
    if f >= I64_BOUND {
        return Some(Ordering::Less);
    }
    if f < -I64_BOUND {
        return Some(Ordering::Greater);
    }

    let floor = f.floor();
    match i.cmp(&(floor as i64)) {
        Ordering::Equal if f > floor => Some(Ordering::Less),
        ord => Some(ord),
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int64(v) => write!(f, "{v}"),
            Number::Float64(v) => write!(f, "{v}"),
        }
    }
}
