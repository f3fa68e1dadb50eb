//! Serializable report shapes for the JSON output modes.

use groupwise_anova::one_way::AnovaResult;
use groupwise_stats::descriptive::Basis;
use groupwise_stats::summary::SampleSummary;

#[derive(Debug, Clone, serde::Serialize)]
pub(crate) struct SummaryReport {
    basis: &'static str,
    count: usize,
    min: f64,
    max: f64,
    mean: f64,
    mode: Vec<f64>,
    median: f64,
    variance: f64,
    std_dev: f64,
}

impl SummaryReport {
    pub(crate) fn new(count: usize, summary: &SampleSummary) -> Self {
        let basis = match summary.basis {
            Basis::Population => "population",
            Basis::Sample => "sample",
        };
        Self {
            basis,
            count,
            min: summary.min,
            max: summary.max,
            mean: summary.mean,
            mode: summary.mode.values().to_vec(),
            median: summary.median,
            variance: summary.variance,
            std_dev: summary.std_dev,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub(crate) struct AnovaReport {
    df_between: usize,
    df_within: usize,
    ss_between: f64,
    ss_within: f64,
    ms_between: f64,
    ms_within: f64,
    f_statistic: f64,
    p_value: f64,
    partial_eta_squared: f64,
    group_means: Vec<f64>,
    grand_mean: f64,
}

impl From<&AnovaResult> for AnovaReport {
    fn from(result: &AnovaResult) -> Self {
        Self {
            df_between: result.df_between,
            df_within: result.df_within,
            ss_between: result.ss_between,
            ss_within: result.ss_within,
            ms_between: result.ms_between,
            ms_within: result.ms_within,
            f_statistic: result.f_statistic,
            p_value: result.p_value,
            partial_eta_squared: result.partial_eta_squared,
            group_means: result.group_means.clone(),
            grand_mean: result.grand_mean,
        }
    }
}
