//! The one-way ANOVA procedure.

use groupwise_stats::descriptive::{mean, sum_squared_deviations_computational};

use crate::distribution::{FDistributionCdf, FisherSnedecorCdf};

/// Ways a one-way ANOVA request can be invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum AnovaError {
    /// Fewer than two groups were supplied, so there is nothing to compare.
    #[display("one-way ANOVA requires at least 2 groups, got {groups}")]
    TooFewGroups { groups: usize },
    /// A group contained no observations.
    #[display("group {index} is empty")]
    EmptyGroup { index: usize },
    /// The design leaves no within-group degrees of freedom (`N - g <= 0`),
    /// so the within-group mean square is undefined.
    #[display(
        "no within-group degrees of freedom: {observations} observations across {groups} groups"
    )]
    NoWithinGroupFreedom { observations: usize, groups: usize },
    /// Every group had zero within-group variance, so the F-statistic is a
    /// division by zero.
    #[display("all groups have zero within-group variance; the F-statistic is undefined")]
    ZeroWithinGroupVariance,
}

/// The outcome of a one-way ANOVA.
///
/// Holds the degrees-of-freedom pair, the sum-of-squares decomposition, the
/// mean squares, the F-statistic, its p-value, and the partial eta-squared
/// effect size, along with the per-group and grand means the decomposition
/// was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct AnovaResult {
    /// Between-group degrees of freedom, `g - 1`.
    pub df_between: usize,
    /// Within-group degrees of freedom, `N - g`.
    pub df_within: usize,
    /// Sum of squared deviations of the group means around the grand mean,
    /// weighted by group size.
    pub ss_between: f64,
    /// Sum over groups of the squared deviations around each group's mean.
    pub ss_within: f64,
    /// `ss_between / df_between`.
    pub ms_between: f64,
    /// `ss_within / df_within`.
    pub ms_within: f64,
    /// `ms_between / ms_within`.
    pub f_statistic: f64,
    /// Right-tail probability of the F-distribution at the observed
    /// statistic: the chance of an F at least this large under the null
    /// hypothesis of equal group means.
    pub p_value: f64,
    /// `ss_between / (ss_between + ss_within)`, in `[0, 1]`.
    pub partial_eta_squared: f64,
    /// The mean of each group, in input order.
    pub group_means: Vec<f64>,
    /// The mean of all observations pooled together.
    pub grand_mean: f64,
}

/// Runs a one-way ANOVA with the default `statrs`-backed F-distribution.
///
/// See [`one_way_anova_with`] for the procedure itself.
///
/// # Examples
///
/// ```
/// use groupwise_anova::one_way::one_way_anova;
///
/// let groups: &[&[f64]] = &[
///     &[35.0, 30.0, 28.0, 31.0, 26.0],
///     &[27.0, 33.0, 25.0, 26.0, 29.0],
///     &[24.0, 29.0, 22.0, 25.0, 20.0],
/// ];
/// let result = one_way_anova(groups).unwrap();
/// assert_eq!(result.df_between, 2);
/// assert_eq!(result.df_within, 12);
/// ```
pub fn one_way_anova(groups: &[&[f64]]) -> Result<AnovaResult, AnovaError> {
    one_way_anova_with(groups, &FisherSnedecorCdf)
}

/// Runs a one-way ANOVA with an explicit F-distribution provider.
///
/// The variation of the pooled observations is decomposed into a
/// between-group component (group means around the grand mean, weighted by
/// group size, so unequal group sizes are handled correctly) and a
/// within-group component (observations around their own group's mean). The
/// ratio of the two mean squares follows an F-distribution with
/// `(g - 1, N - g)` degrees of freedom under the null hypothesis of equal
/// group means, and `cdf` converts the observed ratio into a right-tail
/// p-value.
///
/// The groups are assumed independent and drawn from populations with equal
/// variance; neither assumption is validated.
///
/// # Errors
///
/// - [`AnovaError::TooFewGroups`] for fewer than two groups
/// - [`AnovaError::EmptyGroup`] if any group has no observations
/// - [`AnovaError::NoWithinGroupFreedom`] if `N - g <= 0`
/// - [`AnovaError::ZeroWithinGroupVariance`] if the within-group mean square
///   is zero, which would make the F-statistic a division by zero
#[expect(clippy::cast_precision_loss)]
pub fn one_way_anova_with<C>(groups: &[&[f64]], cdf: &C) -> Result<AnovaResult, AnovaError>
where
    C: FDistributionCdf + ?Sized,
{
    let g = groups.len();
    if g < 2 {
        return Err(AnovaError::TooFewGroups { groups: g });
    }

    let mut group_means = Vec::with_capacity(g);
    let mut ss_within = 0.0;
    let mut observations = 0_usize;
    for (index, group) in groups.iter().enumerate() {
        let group_mean = mean(group).map_err(|_| AnovaError::EmptyGroup { index })?;
        let group_ss = sum_squared_deviations_computational(group)
            .map_err(|_| AnovaError::EmptyGroup { index })?;
        group_means.push(group_mean);
        ss_within += group_ss;
        observations += group.len();
    }

    let df_between = g - 1;
    if observations <= g {
        return Err(AnovaError::NoWithinGroupFreedom {
            observations,
            groups: g,
        });
    }
    let df_within = observations - g;

    let grand_mean = groups
        .iter()
        .zip(&group_means)
        .map(|(group, &group_mean)| group.len() as f64 * group_mean)
        .sum::<f64>()
        / observations as f64;
    let ss_between = groups
        .iter()
        .zip(&group_means)
        .map(|(group, &group_mean)| group.len() as f64 * (group_mean - grand_mean).powi(2))
        .sum::<f64>();

    let ms_between = ss_between / df_between as f64;
    let ms_within = ss_within / df_within as f64;
    if ms_within.total_cmp(&0.0).is_eq() {
        return Err(AnovaError::ZeroWithinGroupVariance);
    }

    let f_statistic = ms_between / ms_within;
    let p_value = 1.0 - cdf.cdf(f_statistic, df_between, df_within);
    let partial_eta_squared = ss_between / (ss_between + ss_within);

    Ok(AnovaResult {
        df_between,
        df_within,
        ss_between,
        ss_within,
        ms_between,
        ms_within,
        f_statistic,
        p_value,
        partial_eta_squared,
        group_means,
        grand_mean,
    })
}

#[cfg(test)]
mod tests {
    use groupwise_stats::descriptive::sum_squared_deviations_definitional;

    use super::*;

    /// Reference scenario: three equal-sized groups of five observations.
    const GROUPS: &[&[f64]] = &[
        &[35.0, 30.0, 28.0, 31.0, 26.0],
        &[27.0, 33.0, 25.0, 26.0, 29.0],
        &[24.0, 29.0, 22.0, 25.0, 20.0],
    ];

    /// CDF stub returning a fixed probability, independent of its inputs.
    struct ConstantCdf(f64);

    impl FDistributionCdf for ConstantCdf {
        fn cdf(&self, _x: f64, _df_num: usize, _df_den: usize) -> f64 {
            self.0
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "{actual} not within {tolerance} of {expected}"
        );
    }

    /// Recomputes the decomposition with the definitional formulas only.
    fn definitional_reference(groups: &[&[f64]]) -> (f64, f64) {
        let all = groups.concat();
        let grand_mean = mean(&all).unwrap();
        let ss_between = groups
            .iter()
            .map(|group| {
                let group_mean = mean(group).unwrap();
                group.len() as f64 * (group_mean - grand_mean).powi(2)
            })
            .sum();
        let ss_within = groups
            .iter()
            .map(|group| sum_squared_deviations_definitional(group).unwrap())
            .sum();
        (ss_between, ss_within)
    }

    #[test]
    fn test_reference_scenario_degrees_of_freedom() {
        let result = one_way_anova(GROUPS).unwrap();
        assert_eq!(result.df_between, 2);
        assert_eq!(result.df_within, 12);
    }

    #[test]
    fn test_reference_scenario_matches_definitional_recomputation() {
        let result = one_way_anova(GROUPS).unwrap();
        let (ss_between, ss_within) = definitional_reference(GROUPS);
        assert_close(result.ss_between, ss_between);
        assert_close(result.ss_within, ss_within);
        assert_close(result.f_statistic, (ss_between / 2.0) / (ss_within / 12.0));
        assert_close(
            result.partial_eta_squared,
            ss_between / (ss_between + ss_within),
        );
    }

    #[test]
    fn test_reference_scenario_known_values() {
        let result = one_way_anova(GROUPS).unwrap();
        assert_close(result.ss_between, 280.0 / 3.0);
        assert_close(result.ss_within, 132.0);
        assert_close(result.f_statistic, 140.0 / 33.0);
        assert_close(result.partial_eta_squared, 70.0 / 169.0);
        assert_close(result.grand_mean, 410.0 / 15.0);
        assert_eq!(result.group_means, vec![30.0, 28.0, 24.0]);
    }

    #[test]
    fn test_reference_scenario_p_value_with_statrs() {
        // For 2 numerator degrees of freedom the right-tail probability has
        // the closed form (1 + 2F/d2)^(-d2/2).
        let result = one_way_anova(GROUPS).unwrap();
        let expected = (1.0 + 2.0 * result.f_statistic / 12.0).powf(-6.0);
        assert!((result.p_value - expected).abs() < 1e-8);
        assert!(result.p_value > 0.03 && result.p_value < 0.05);
    }

    #[test]
    fn test_p_value_uses_injected_cdf() {
        let result = one_way_anova_with(GROUPS, &ConstantCdf(0.75)).unwrap();
        assert_close(result.p_value, 0.25);
    }

    #[test]
    fn test_equal_sized_groups_match_equal_size_shortcut() {
        // With equal group sizes the weighted between-group formula reduces
        // to n * (Σm² - (Σm)²/g).
        let result = one_way_anova(GROUPS).unwrap();
        let means = &result.group_means;
        let sum: f64 = means.iter().sum();
        let sum_sq: f64 = means.iter().map(|m| m * m).sum();
        let shortcut = 5.0 * (sum_sq - sum.powi(2) / 3.0);
        assert_close(result.ss_between, shortcut);
    }

    #[test]
    fn test_unequal_group_sizes_use_weighted_formula() {
        let groups: &[&[f64]] = &[&[1.0, 2.0, 3.0], &[2.0, 4.0], &[6.0, 7.0, 8.0, 9.0]];
        let result = one_way_anova(groups).unwrap();
        let (ss_between, ss_within) = definitional_reference(groups);
        assert_close(result.ss_between, ss_between);
        assert_close(result.ss_within, ss_within);
        assert_eq!(result.df_between, 2);
        assert_eq!(result.df_within, 6);
    }

    #[test]
    fn test_identical_group_means_give_zero_effect() {
        let groups: &[&[f64]] = &[&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]];
        let result = one_way_anova(groups).unwrap();
        assert_close(result.ss_between, 0.0);
        assert_close(result.f_statistic, 0.0);
        assert_close(result.partial_eta_squared, 0.0);
    }

    #[test]
    fn test_too_few_groups() {
        assert_eq!(
            one_way_anova(&[]),
            Err(AnovaError::TooFewGroups { groups: 0 }),
        );
        assert_eq!(
            one_way_anova(&[&[1.0, 2.0]]),
            Err(AnovaError::TooFewGroups { groups: 1 }),
        );
    }

    #[test]
    fn test_empty_group_is_reported_with_its_index() {
        let groups: &[&[f64]] = &[&[1.0, 2.0], &[], &[3.0, 4.0]];
        assert_eq!(
            one_way_anova(groups),
            Err(AnovaError::EmptyGroup { index: 1 }),
        );
    }

    #[test]
    fn test_no_within_group_freedom() {
        // Two singleton groups: N = g = 2, so N - g = 0.
        let groups: &[&[f64]] = &[&[1.0], &[2.0]];
        assert_eq!(
            one_way_anova(groups),
            Err(AnovaError::NoWithinGroupFreedom {
                observations: 2,
                groups: 2,
            }),
        );
    }

    #[test]
    fn test_zero_within_group_variance() {
        let groups: &[&[f64]] = &[&[1.0, 1.0], &[2.0, 2.0]];
        assert_eq!(
            one_way_anova(groups),
            Err(AnovaError::ZeroWithinGroupVariance),
        );
    }
}
