//! F-distribution collaborator.
//!
//! The ANOVA procedure only needs one probability from a distribution
//! library: the cumulative distribution function of the F-distribution at
//! the observed statistic. That single operation is a trait here, so the
//! test suite can substitute a deterministic stub for the real provider.

use statrs::distribution::{ContinuousCDF, FisherSnedecor};

/// Cumulative distribution function of the F-distribution.
pub trait FDistributionCdf {
    /// Returns `P(X <= x)` for `X` following the F-distribution with
    /// `df_num` numerator and `df_den` denominator degrees of freedom.
    fn cdf(&self, x: f64, df_num: usize, df_den: usize) -> f64;
}

/// Default provider backed by [`statrs::distribution::FisherSnedecor`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FisherSnedecorCdf;

impl FDistributionCdf for FisherSnedecorCdf {
    #[expect(clippy::cast_precision_loss)]
    fn cdf(&self, x: f64, df_num: usize, df_den: usize) -> f64 {
        // Construction only fails for non-positive degrees of freedom, which
        // the ANOVA procedure has already ruled out.
        match FisherSnedecor::new(df_num as f64, df_den as f64) {
            Ok(dist) => dist.cdf(x),
            Err(_) => f64::NAN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cdf_is_a_probability() {
        let provider = FisherSnedecorCdf;
        for &x in &[0.0, 0.5, 1.0, 4.0, 100.0] {
            let p = provider.cdf(x, 2, 12);
            assert!((0.0..=1.0).contains(&p), "cdf({x}) = {p}");
        }
    }

    #[test]
    fn test_cdf_is_monotonic() {
        let provider = FisherSnedecorCdf;
        assert!(provider.cdf(1.0, 2, 12) <= provider.cdf(2.0, 2, 12));
        assert!(provider.cdf(2.0, 2, 12) <= provider.cdf(4.0, 2, 12));
    }

    #[test]
    fn test_cdf_matches_closed_form_for_two_numerator_df() {
        // With 2 numerator degrees of freedom the survival function has the
        // closed form (1 + 2x/d2)^(-d2/2).
        let provider = FisherSnedecorCdf;
        let expected = 1.0 - f64::powf(1.0 + 2.0 * 4.0 / 12.0, -6.0);
        let actual = provider.cdf(4.0, 2, 12);
        assert!((actual - expected).abs() < 1e-8);
    }
}
