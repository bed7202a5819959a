use crate::reports;
use clap::Args;
use microtiter::error::MtResult;
use microtiter::report::read_score_table;
use std::fs::File;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Report file written by `evaluate --output`
    pub report: PathBuf,
}

pub fn run(args: &ShowArgs) -> MtResult<()> {
    let file = File::open(&args.report)?;
    let matrix = read_score_table(file)?;
    println!("\nReport: {}", args.report.display());
    reports::print_score_matrix(&matrix);
    Ok(())
}
