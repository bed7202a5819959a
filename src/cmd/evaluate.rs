use crate::reports;
use clap::Args;
use microtiter::api;
use microtiter::config::{ConfigRecord, Configuration};
use microtiter::error::MtResult;
use microtiter::geometry::min_spacing;
use microtiter::report::export_report;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub config: ConfigRecord,

    /// Export the report (tab-separated, `.csv` appended if missing)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Persist the effective settings back to the config file
    #[arg(long, default_value_t = false)]
    pub save_config: bool,
}

pub fn run(args: &EvaluateArgs, config: &Configuration, config_path: &Path) -> MtResult<()> {
    info!("🔬 Current spacing: {} pixels", min_spacing(config));

    let evaluation = api::evaluate_files(config)?;

    println!("\n{}", evaluation.report);
    reports::print_score_matrix(&evaluation.matrix);

    if let Some(path) = &args.output {
        let written = export_report(path, &evaluation.report)?;
        println!("💾 Saved report to {}", written.display());
    }

    if args.save_config {
        config.save_to_file(config_path)?;
    }

    Ok(())
}
