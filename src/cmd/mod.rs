pub mod evaluate;
pub mod grid;
pub mod init;
pub mod methods;
pub mod show;

use clap::ArgMatches;
use microtiter::config::{sanitize_aoi_size, ConfigRecord, Configuration};
use microtiter::error::MtResult;
use std::path::Path;
use tracing::{info, warn};

/// Settings file, then command line overrides, then AoI sanitization.
pub fn resolve_record(
    config_path: &Path,
    cli_record: &ConfigRecord,
    matches: Option<&ArgMatches>,
) -> MtResult<ConfigRecord> {
    let mut record = if config_path.exists() {
        info!("📂 Loading config: {}", config_path.display());
        ConfigRecord::load_from_file(config_path)?
    } else {
        warn!(
            "⚠️  No config found at '{}'. Using default values.",
            config_path.display()
        );
        ConfigRecord::default()
    };

    if let Some(m) = matches {
        record.merge_from_cli(cli_record, m);
    }

    let sanitized = sanitize_aoi_size(record.aoi_size);
    if sanitized != record.aoi_size {
        warn!(
            "AoI size {} is even, using {} instead",
            record.aoi_size, sanitized
        );
        record.aoi_size = sanitized;
    }

    Ok(record)
}

pub fn resolve_config(
    config_path: &Path,
    cli_record: &ConfigRecord,
    matches: Option<&ArgMatches>,
) -> MtResult<Configuration> {
    Configuration::try_from(resolve_record(config_path, cli_record, matches)?)
}
