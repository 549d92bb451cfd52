//! [`DataProcessor`]: a read-only wrapper around a nullable numeric sequence.

use crate::types::{Number, Sample};

use super::map::double_positive;
use super::stats::{summarize, Stats};

/// Holds one numeric sequence (set at construction) and answers read-only queries over it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataProcessor {
    data: Vec<Sample>,
}

impl DataProcessor {
    /// Create a processor over `data`.
    pub fn new(data: Vec<Sample>) -> Self {
        Self { data }
    }

    /// Create a processor from values that are all present.
    pub fn from_numbers<I, N>(values: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Number>,
    {
        values.into_iter().map(|v| Some(v.into())).collect()
    }

    /// The wrapped sequence.
    pub fn data(&self) -> &[Sample] {
        &self.data
    }

    /// Number of entries, including absent ones.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the sequence has no entries.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Doubles every present value greater than zero, dropping the rest.
    ///
    /// ```rust
    /// use sample_processing::processing::DataProcessor;
    /// use sample_processing::types::Number;
    ///
    /// let p = DataProcessor::from_numbers([1, -2, 3, 0]);
    /// assert_eq!(p.process(), vec![Number::Int64(2), Number::Int64(6)]);
    /// ```
    pub fn process(&self) -> Vec<Number> {
        double_positive(&self.data)
    }

    /// Summary statistics over the present values.
    ///
    /// ```rust
    /// use sample_processing::processing::DataProcessor;
    /// use sample_processing::types::Number;
    ///
    /// let p = DataProcessor::new(vec![Some(1.into()), None, Some(3.into())]);
    /// let stats = p.get_stats();
    /// assert_eq!(stats.total, Number::Int64(4));
    /// assert_eq!(stats.count, 2);
    /// assert_eq!(stats.average, 2.0);
    /// assert_eq!(stats.min, Some(Number::Int64(1)));
    /// assert_eq!(stats.max, Some(Number::Int64(3)));
    /// ```
    pub fn get_stats(&self) -> Stats {
        summarize(&self.data)
    }
}

impl From<Vec<Sample>> for DataProcessor {
    fn from(data: Vec<Sample>) -> Self {
        Self::new(data)
    }
}

impl FromIterator<Sample> for DataProcessor {
    fn from_iter<T: IntoIterator<Item = Sample>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
