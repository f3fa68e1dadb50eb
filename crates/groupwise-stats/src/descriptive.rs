//! Per-statistic functions over a single sample.
//!
//! Every function takes a borrowed slice and leaves it untouched; [`median`]
//! sorts a private copy rather than the caller's data. Empty samples are
//! rejected with [`StatsError::EmptyInput`] at the boundary of every
//! function.

use crate::StatsError;

/// Which divisor to use for variance and standard deviation.
///
/// The population formulas divide the sum of squared deviations by `N`; the
/// sample formulas divide by `N - 1` to correct for the bias of estimating
/// the mean from the same observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Basis {
    /// Treat the data as a complete population (divide by `N`).
    Population,
    /// Treat the data as a sample from a larger population (divide by `N - 1`).
    Sample,
}

/// The most frequent value(s) of a sample.
///
/// Multimodal samples keep their tied values in first-occurrence order of
/// the distinct values, so the result is deterministic for a given input
/// order.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// A single value occurred more often than every other value.
    Unimodal(f64),
    /// Several values tied for the highest occurrence count.
    Multimodal(Vec<f64>),
}

impl Mode {
    /// Returns all modal values, regardless of how many tied.
    ///
    /// # Examples
    ///
    /// ```
    /// use groupwise_stats::descriptive::Mode;
    ///
    /// assert_eq!(Mode::Unimodal(1.0).values(), &[1.0]);
    /// assert_eq!(Mode::Multimodal(vec![1.0, 2.0]).values(), &[1.0, 2.0]);
    /// ```
    #[must_use]
    pub fn values(&self) -> &[f64] {
        match self {
            Mode::Unimodal(value) => std::slice::from_ref(value),
            Mode::Multimodal(values) => values,
        }
    }
}

fn non_empty(sample: &[f64]) -> Result<(), StatsError> {
    if sample.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    Ok(())
}

/// Computes the arithmetic mean, `sum / N`.
///
/// # Examples
///
/// ```
/// use groupwise_stats::descriptive::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn mean(sample: &[f64]) -> Result<f64, StatsError> {
    non_empty(sample)?;
    Ok(sample.iter().sum::<f64>() / sample.len() as f64)
}

/// Computes the mode(s), the most frequent value(s) of the sample.
///
/// Builds a frequency table over the distinct values, finds the highest
/// occurrence count, and returns every value attaining it. Ties are listed
/// in first-occurrence order of the distinct values.
///
/// # Examples
///
/// ```
/// use groupwise_stats::descriptive::{mode, Mode};
///
/// assert_eq!(mode(&[1.0, 1.0, 2.0, 3.0]).unwrap(), Mode::Unimodal(1.0));
/// assert_eq!(
///     mode(&[1.0, 1.0, 2.0, 2.0]).unwrap(),
///     Mode::Multimodal(vec![1.0, 2.0]),
/// );
/// ```
#[expect(clippy::float_cmp)]
pub fn mode(sample: &[f64]) -> Result<Mode, StatsError> {
    non_empty(sample)?;

    // Insertion-ordered frequency table. `f64` keys rule out the std maps,
    // and iteration order must stay deterministic for tied modes.
    let mut freq: Vec<(f64, u64)> = vec![];
    for &x in sample {
        match freq.iter().position(|&(value, _)| value == x) {
            Some(idx) => freq[idx].1 += 1,
            None => freq.push((x, 1)),
        }
    }

    let max_count = freq.iter().map(|&(_, count)| count).max().unwrap_or(0);
    let modes = freq
        .iter()
        .filter(|&&(_, count)| count == max_count)
        .map(|&(value, _)| value)
        .collect::<Vec<_>>();

    if let [single] = modes.as_slice() {
        return Ok(Mode::Unimodal(*single));
    }
    Ok(Mode::Multimodal(modes))
}

/// Computes the median of the sample.
///
/// The input is copied and the copy sorted, so the caller's slice is never
/// reordered. For an even number of observations the median is the mean of
/// the two middle elements of the sorted data; for an odd number it is the
/// single middle element.
///
/// # Examples
///
/// ```
/// use groupwise_stats::descriptive::median;
///
/// assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
/// assert_eq!(median(&[3.0, 1.0, 2.0]).unwrap(), 2.0);
/// ```
pub fn median(sample: &[f64]) -> Result<f64, StatsError> {
    non_empty(sample)?;

    let mut sorted = sample.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    if n.is_multiple_of(2) {
        let (left, right) = (sorted[n / 2 - 1], sorted[n / 2]);
        return mean(&[left, right]);
    }
    Ok(sorted[(n - 1) / 2])
}

/// Computes the sum of squared deviations `Σ(xᵢ - mean)²` with the
/// definitional two-pass formula.
///
/// This is the reference formula: it materializes the mean first, then sums
/// the squared differences. [`sum_squared_deviations_computational`] is the
/// algebraically equivalent single-pass form.
///
/// # Examples
///
/// ```
/// use groupwise_stats::descriptive::sum_squared_deviations_definitional;
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(sum_squared_deviations_definitional(&values).unwrap(), 10.0);
/// ```
pub fn sum_squared_deviations_definitional(sample: &[f64]) -> Result<f64, StatsError> {
    let mu = mean(sample)?;
    Ok(sample.iter().map(|x| (x - mu).powi(2)).sum())
}

/// Computes the sum of squared deviations `Σxᵢ² - (Σxᵢ)²/N` with the
/// single-pass computational formula.
///
/// Algebraically equivalent to [`sum_squared_deviations_definitional`]
/// without materializing the mean first.
///
/// # Examples
///
/// ```
/// use groupwise_stats::descriptive::sum_squared_deviations_computational;
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(sum_squared_deviations_computational(&values).unwrap(), 10.0);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn sum_squared_deviations_computational(sample: &[f64]) -> Result<f64, StatsError> {
    non_empty(sample)?;

    let (sum_squared, sum) = sample
        .iter()
        .fold((0.0, 0.0), |(sq, s), x| (sq + x * x, s + x));
    Ok(sum_squared - sum.powi(2) / sample.len() as f64)
}

/// Computes the variance of the sample.
///
/// The population variance is `SS / N`; the sample variance is `SS / (N - 1)`,
/// where `SS` is the computational sum of squared deviations.
///
/// # Errors
///
/// Returns [`StatsError::InsufficientData`] for a sample-basis variance over
/// a single observation, where the `N - 1` divisor would be zero.
///
/// # Examples
///
/// ```
/// use groupwise_stats::descriptive::{variance, Basis};
///
/// let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert_eq!(variance(&values, Basis::Population).unwrap(), 4.0);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn variance(sample: &[f64], basis: Basis) -> Result<f64, StatsError> {
    let ss = sum_squared_deviations_computational(sample)?;
    let n = sample.len();
    match basis {
        Basis::Population => Ok(ss / n as f64),
        Basis::Sample => {
            if n == 1 {
                return Err(StatsError::InsufficientData { len: n });
            }
            Ok(ss / (n - 1) as f64)
        }
    }
}

/// Computes the standard deviation, the square root of the corresponding
/// [`variance`].
///
/// # Examples
///
/// ```
/// use groupwise_stats::descriptive::{std_dev, Basis};
///
/// let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert_eq!(std_dev(&values, Basis::Population).unwrap(), 2.0);
/// ```
pub fn std_dev(sample: &[f64], basis: Basis) -> Result<f64, StatsError> {
    Ok(variance(sample, basis)?.sqrt())
}

/// Returns the smallest value of the sample.
pub fn min_value(sample: &[f64]) -> Result<f64, StatsError> {
    non_empty(sample)?;
    Ok(sample.iter().copied().fold(f64::INFINITY, f64::min))
}

/// Returns the largest value of the sample.
pub fn max_value(sample: &[f64]) -> Result<f64, StatsError> {
    non_empty(sample)?;
    Ok(sample.iter().copied().fold(f64::NEG_INFINITY, f64::max))
}
