use clap::{Parser, Subcommand};

use self::{anova::AnovaArg, summary::SummaryArg};

mod anova;
mod summary;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What to compute
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Summarize a single sample of observations
    Summary(#[clap(flatten)] SummaryArg),
    /// Compare group means with a one-way ANOVA
    Anova(#[clap(flatten)] AnovaArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Summary(arg) => summary::run(&arg)?,
        Mode::Anova(arg) => anova::run(&arg)?,
    }
    Ok(())
}
