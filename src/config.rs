use crate::error::{MicrotiterError, MtResult};
use crate::geometry::Point;
use crate::methods::{AggregationMethod, ScoringMethod};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Flat key/value settings record, as persisted in `config.json`.
///
/// Every key doubles as a command line flag (`--n-rows`, `--aoi-size`, ...).
#[derive(Args, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigRecord {
    #[arg(long, default_value = "samples.jpeg")]
    pub path_samples: String,
    #[arg(long, default_value = "control.jpeg")]
    pub path_control: String,

    // === GRID ===
    #[arg(long, default_value_t = 3)]
    pub n_rows: u32,
    #[arg(long, default_value_t = 3)]
    pub n_columns: u32,
    #[arg(long, default_value_t = 100)]
    pub top_left_x: i64,
    #[arg(long, default_value_t = 100)]
    pub top_left_y: i64,
    #[arg(long, default_value_t = 500)]
    pub bottom_right_x: i64,
    #[arg(long, default_value_t = 500)]
    pub bottom_right_y: i64,

    // === CONTROL ===
    #[arg(long, default_value_t = 100)]
    pub control_x: i64,
    #[arg(long, default_value_t = 100)]
    pub control_y: i64,

    // === PROCESSING ===
    #[serde(rename = "AoI_size")]
    #[arg(long, default_value_t = 5)]
    pub aoi_size: u32,
    #[arg(long, default_value = "arithmetic_mean")]
    pub aggregation_method: String,
    #[arg(long, default_value = "euclidian_rgb")]
    pub scoring_method: String,
}

impl Default for ConfigRecord {
    fn default() -> Self {
        Self {
            path_samples: "samples.jpeg".to_string(),
            path_control: "control.jpeg".to_string(),
            n_rows: 3,
            n_columns: 3,
            top_left_x: 100,
            top_left_y: 100,
            bottom_right_x: 500,
            bottom_right_y: 500,
            control_x: 100,
            control_y: 100,
            aoi_size: 5,
            aggregation_method: AggregationMethod::ArithmeticMean.code().to_string(),
            scoring_method: ScoringMethod::EuclidianRgb.code().to_string(),
        }
    }
}

impl ConfigRecord {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> MtResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let record = serde_json::from_str(&content)?;
        info!("Loaded configuration from {}", path.display());
        Ok(record)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> MtResult<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        info!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Copies over only the values the user typed on the command line.
    pub fn merge_from_cli(&mut self, cli_record: &ConfigRecord, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    debug!("CLI override: {} = {:?}", stringify!($field), cli_record.$field);
                    self.$field = cli_record.$field.clone();
                }
            };
        }

        update_if_present!(path_samples);
        update_if_present!(path_control);
        update_if_present!(n_rows);
        update_if_present!(n_columns);
        update_if_present!(top_left_x);
        update_if_present!(top_left_y);
        update_if_present!(bottom_right_x);
        update_if_present!(bottom_right_y);
        update_if_present!(control_x);
        update_if_present!(control_y);
        update_if_present!(aoi_size);
        update_if_present!(aggregation_method);
        update_if_present!(scoring_method);
    }
}

/// Rounds an even AoI size up to the next odd one; 0 becomes 1.
pub fn sanitize_aoi_size(size: u32) -> u32 {
    if size % 2 == 1 {
        size
    } else {
        size + 1
    }
}

/// Immutable snapshot of everything one evaluation run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Opaque identifier of the samples image.
    pub path_samples: String,
    /// Opaque identifier of the control image.
    pub path_control: String,
    pub top_left: Point,
    pub bottom_right: Point,
    pub rows: u32,
    pub columns: u32,
    pub control_position: Point,
    pub aoi_size: u32,
    pub aggregation_method: AggregationMethod,
    pub scoring_method: ScoringMethod,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            path_samples: "samples.jpeg".to_string(),
            path_control: "control.jpeg".to_string(),
            top_left: Point::new(100, 100),
            bottom_right: Point::new(500, 500),
            rows: 3,
            columns: 3,
            control_position: Point::new(100, 100),
            aoi_size: 5,
            aggregation_method: AggregationMethod::ArithmeticMean,
            scoring_method: ScoringMethod::EuclidianRgb,
        }
    }
}

impl Configuration {
    pub fn validate(&self) -> MtResult<()> {
        if self.rows < 1 || self.columns < 1 {
            return Err(MicrotiterError::InvalidConfiguration(format!(
                "grid needs at least one row and one column (got {} x {})",
                self.rows, self.columns
            )));
        }
        if self.aoi_size % 2 == 0 {
            return Err(MicrotiterError::InvalidConfiguration(format!(
                "AoI size must be a positive odd number (got {})",
                self.aoi_size
            )));
        }
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> MtResult<Self> {
        Self::try_from(ConfigRecord::load_from_file(path)?)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> MtResult<()> {
        self.to_record().save_to_file(path)
    }

    pub fn to_record(&self) -> ConfigRecord {
        ConfigRecord {
            path_samples: self.path_samples.clone(),
            path_control: self.path_control.clone(),
            n_rows: self.rows,
            n_columns: self.columns,
            top_left_x: self.top_left.x,
            top_left_y: self.top_left.y,
            bottom_right_x: self.bottom_right.x,
            bottom_right_y: self.bottom_right.y,
            control_x: self.control_position.x,
            control_y: self.control_position.y,
            aoi_size: self.aoi_size,
            aggregation_method: self.aggregation_method.code().to_string(),
            scoring_method: self.scoring_method.code().to_string(),
        }
    }
}

impl TryFrom<ConfigRecord> for Configuration {
    type Error = MicrotiterError;

    fn try_from(record: ConfigRecord) -> MtResult<Self> {
        let config = Configuration {
            aggregation_method: AggregationMethod::from_code(&record.aggregation_method)?,
            scoring_method: ScoringMethod::from_code(&record.scoring_method)?,
            top_left: Point::new(record.top_left_x, record.top_left_y),
            bottom_right: Point::new(record.bottom_right_x, record.bottom_right_y),
            rows: record.n_rows,
            columns: record.n_columns,
            control_position: Point::new(record.control_x, record.control_y),
            aoi_size: record.aoi_size,
            path_samples: record.path_samples,
            path_control: record.path_control,
        };
        config.validate()?;
        Ok(config)
    }
}
