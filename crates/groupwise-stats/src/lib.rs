//! Descriptive statistics for finite numeric samples.
//!
//! This crate provides the single-sample statistics used throughout the
//! Groupwise project:
//!
//! - **Central tendency**: mean, mode, median
//! - **Dispersion**: sum of squared deviations (two formulas), variance,
//!   standard deviation, with both population and sample divisors
//! - **Summaries**: a [`summary::SampleSummary`] combining all of the above
//!   with the sample's minimum and maximum
//!
//! All operations are pure functions over in-memory slices. Functions that
//! need ordered data work on a private copy, so callers never observe their
//! input being reordered.
//!
//! # Modules
//!
//! - [`descriptive`]: Per-statistic functions over a single sample
//! - [`summary`]: Combined summary of one sample
//!
//! # Examples
//!
//! ## Computing individual statistics
//!
//! ```
//! use groupwise_stats::descriptive::{self, Basis};
//!
//! let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! assert_eq!(descriptive::mean(&values).unwrap(), 5.0);
//! assert_eq!(descriptive::variance(&values, Basis::Population).unwrap(), 4.0);
//! assert_eq!(descriptive::std_dev(&values, Basis::Population).unwrap(), 2.0);
//! ```
//!
//! ## Summarizing a sample
//!
//! ```
//! use groupwise_stats::descriptive::Basis;
//! use groupwise_stats::summary::SampleSummary;
//!
//! let values = [1.0, 2.0, 2.0, 3.0, 4.0];
//! let summary = SampleSummary::compute(&values, Basis::Population).unwrap();
//! assert_eq!(summary.mean, 2.4);
//! assert_eq!(summary.median, 2.0);
//! ```

pub mod descriptive;
pub mod summary;

/// Failure cases shared by all single-sample statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StatsError {
    /// A statistic was requested over a zero-length sample.
    #[display("cannot compute a statistic over an empty sample")]
    EmptyInput,
    /// A sample-basis variance or standard deviation was requested over a
    /// sample too small for the `N - 1` divisor.
    #[display("sample variance requires at least 2 observations, got {len}")]
    InsufficientData { len: usize },
}
