use std::path::PathBuf;

use anyhow::Context as _;
use groupwise_stats::descriptive::{Basis, Mode};
use groupwise_stats::summary::SampleSummary;

use crate::{schema::SummaryReport, util};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct SummaryArg {
    /// Observations given inline
    #[arg(
        value_name = "VALUE",
        required_unless_present = "input",
        allow_negative_numbers = true
    )]
    values: Vec<f64>,
    /// Read the sample from a JSON file (an array of numbers)
    #[arg(long, conflicts_with = "values")]
    input: Option<PathBuf>,
    /// Use the sample (N - 1) divisor instead of the population divisor
    #[arg(long)]
    sample: bool,
    /// Print the summary as JSON instead of text
    #[arg(long)]
    json: bool,
    /// Write the summary as JSON to the given file
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SummaryArg) -> anyhow::Result<()> {
    let values: Vec<f64> = match &arg.input {
        Some(path) => util::read_json_file("sample", path)?,
        None => arg.values.clone(),
    };
    let basis = if arg.sample {
        Basis::Sample
    } else {
        Basis::Population
    };
    let summary =
        SampleSummary::compute(&values, basis).context("failed to summarize the sample")?;

    if arg.json || arg.output.is_some() {
        let report = SummaryReport::new(values.len(), &summary);
        util::write_json(&report, arg.output.as_deref())?;
    } else {
        print_text(&summary);
    }
    Ok(())
}

fn print_text(summary: &SampleSummary) {
    let label = match summary.basis {
        Basis::Population => "Population",
        Basis::Sample => "Sample",
    };
    println!("{:<21} {}", "Mean", summary.mean);
    println!("{:<21} {}", "Mode", format_mode(&summary.mode));
    println!("{:<21} {}", "Median", summary.median);
    println!("{:<21} {}", format!("Variance ({label})"), summary.variance);
    println!("{:<21} {}", format!("StDev ({label})"), summary.std_dev);
    println!("{:<21} {}", "Min", summary.min);
    println!("{:<21} {}", "Max", summary.max);
}

fn format_mode(mode: &Mode) -> String {
    mode.values()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
