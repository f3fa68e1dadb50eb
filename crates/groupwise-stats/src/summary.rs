//! Combined summary of one sample.

use crate::StatsError;
use crate::descriptive::{
    Basis, Mode, max_value, mean, median, min_value, mode, std_dev, variance,
};

/// Every descriptive statistic of a single sample in one structure.
///
/// The summary holds computed values only; rendering them is left to the
/// caller.
///
/// # Examples
///
/// ```
/// use groupwise_stats::descriptive::Basis;
/// use groupwise_stats::summary::SampleSummary;
///
/// let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// let summary = SampleSummary::compute(&values, Basis::Population).unwrap();
/// assert_eq!(summary.mean, 5.0);
/// assert_eq!(summary.std_dev, 2.0);
/// assert_eq!(summary.min, 2.0);
/// assert_eq!(summary.max, 9.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSummary {
    /// The smallest observation.
    pub min: f64,
    /// The largest observation.
    pub max: f64,
    /// The arithmetic mean.
    pub mean: f64,
    /// The most frequent value(s).
    pub mode: Mode,
    /// The middle value of the sorted observations.
    pub median: f64,
    /// The variance under the requested [`Basis`].
    pub variance: f64,
    /// The standard deviation under the requested [`Basis`].
    pub std_dev: f64,
    /// The divisor basis the variance and standard deviation were computed
    /// under.
    pub basis: Basis,
}

impl SampleSummary {
    /// Computes every statistic of `sample` under the given basis.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptyInput`] for an empty sample and
    /// [`StatsError::InsufficientData`] for a sample-basis summary of a
    /// single observation, matching the behavior of the individual
    /// statistics in [`crate::descriptive`].
    pub fn compute(sample: &[f64], basis: Basis) -> Result<Self, StatsError> {
        Ok(Self {
            min: min_value(sample)?,
            max: max_value(sample)?,
            mean: mean(sample)?,
            mode: mode(sample)?,
            median: median(sample)?,
            variance: variance(sample, basis)?,
            std_dev: std_dev(sample, basis)?,
            basis,
        })
    }
}
