use clap::Args;
use microtiter::config::ConfigRecord;
use microtiter::error::{MicrotiterError, MtResult};
use std::path::Path;

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite an existing config file
    #[arg(short, long, default_value_t = false)]
    pub force: bool,
}

pub fn run(args: &InitArgs, config_path: &Path) -> MtResult<()> {
    if config_path.exists() && !args.force {
        return Err(MicrotiterError::InvalidConfiguration(format!(
            "'{}' already exists (use --force to overwrite)",
            config_path.display()
        )));
    }

    ConfigRecord::default().save_to_file(config_path)?;
    println!("📝 Wrote default config to {}", config_path.display());
    Ok(())
}
