use crate::demo::{run_demo, DemoArgs};
use crate::estimate::{run_estimate, EstimateArgs};
use crate::infra::bootstrap;
use crate::tables::{run_tables, TablesArgs};
use clap::{Parser, Subcommand};
use grade_estimator::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Professional Grade Estimator",
    about = "Estimate PSA, BGS, SGC and CGC grades from an internal condition assessment",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Read a grading input document and print the estimated professional grades as JSON
    Estimate(EstimateArgs),
    /// Run a fixed set of sample cards through every authority
    Demo(DemoArgs),
    /// Print the grade tables and defect policies used for each authority
    Tables(TablesArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let engine = bootstrap()?;

    match cli.command {
        Command::Estimate(args) => run_estimate(&engine, args),
        Command::Demo(args) => run_demo(&engine, args),
        Command::Tables(args) => run_tables(args),
    }
}
