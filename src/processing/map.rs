//! Value mapping for numeric sequences.

use crate::types::{Number, Sample};

/// Returns `x * 2` for every present value `x > 0`, preserving order.
///
/// Absent values and values `<= 0` are dropped.
pub fn double_positive(values: &[Sample]) -> Vec<Number> {
    values
        .iter()
        .flatten()
        .copied()
        .filter(|v| v.is_positive())
        .map(Number::doubled)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::double_positive;
    use crate::types::Number;

    #[test]
    fn doubles_positive_values_in_order() {
        let input = vec![
            Some(Number::Int64(1)),
            Some(Number::Int64(-2)),
            Some(Number::Int64(3)),
            Some(Number::Int64(0)),
        ];
        assert_eq!(
            double_positive(&input),
            vec![Number::Int64(2), Number::Int64(6)]
        );
    }

    #[test]
    fn skips_absent_values() {
        let input = vec![None, Some(Number::Float64(1.25)), None];
        let out = double_positive(&input);
        assert_eq!(out.len(), 1);
        assert!(matches!(out[0], Number::Float64(v) if v == 2.5));
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(double_positive(&[]).is_empty());
        assert!(double_positive(&[None, Some(Number::Int64(-1))]).is_empty());
    }
}
