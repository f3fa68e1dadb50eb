use std::{path::PathBuf, str::FromStr};

use anyhow::Context as _;
use groupwise_anova::one_way::{AnovaResult, one_way_anova};

use crate::{schema::AnovaReport, util};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct AnovaArg {
    /// A group of comma-separated observations; repeat once per group
    #[arg(
        long = "group",
        value_name = "VALUES",
        required_unless_present = "input",
        allow_negative_numbers = true
    )]
    groups: Vec<GroupSpec>,
    /// Read the groups from a JSON file (an array of arrays of numbers)
    #[arg(long, conflicts_with = "groups")]
    input: Option<PathBuf>,
    /// Print the result as JSON instead of text
    #[arg(long)]
    json: bool,
    /// Write the result as JSON to the given file
    #[arg(long)]
    output: Option<PathBuf>,
}

/// One group of observations as given on the command line, e.g. `35,30,28`.
#[derive(Debug, Clone, PartialEq)]
struct GroupSpec(Vec<f64>);

impl FromStr for GroupSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|item| {
                item.trim()
                    .parse::<f64>()
                    .map_err(|err| format!("invalid number {item:?}: {err}"))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(GroupSpec(values))
    }
}

pub(crate) fn run(arg: &AnovaArg) -> anyhow::Result<()> {
    let groups: Vec<Vec<f64>> = match &arg.input {
        Some(path) => util::read_json_file("groups", path)?,
        None => arg.groups.iter().map(|spec| spec.0.clone()).collect(),
    };
    let views = groups.iter().map(Vec::as_slice).collect::<Vec<_>>();
    let result = one_way_anova(&views).context("one-way ANOVA failed")?;

    if arg.json || arg.output.is_some() {
        util::write_json(&AnovaReport::from(&result), arg.output.as_deref())?;
    } else {
        print_text(&result);
    }
    Ok(())
}

fn print_text(result: &AnovaResult) {
    println!(
        "df (between, within)  ({}, {})",
        result.df_between, result.df_within
    );
    println!("F-value  {}", result.f_statistic);
    println!("p-value  {}", result.p_value);
    println!("eta_p^2  {}", result.partial_eta_squared);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_spec_parses_comma_separated_values() {
        assert_eq!(
            "35,30, 28".parse::<GroupSpec>().unwrap(),
            GroupSpec(vec![35.0, 30.0, 28.0]),
        );
    }

    #[test]
    fn test_group_spec_rejects_non_numeric_input() {
        assert!("1,two,3".parse::<GroupSpec>().is_err());
        assert!("1,,3".parse::<GroupSpec>().is_err());
    }
}
