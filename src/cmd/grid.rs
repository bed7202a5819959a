use crate::reports;
use clap::Args;
use microtiter::config::{ConfigRecord, Configuration};
use microtiter::error::MtResult;
use microtiter::geometry::{generate_grid, grid_spacing, min_spacing};

#[derive(Args, Debug, Clone)]
pub struct GridArgs {
    #[command(flatten)]
    pub config: ConfigRecord,
}

pub fn run(config: &Configuration) -> MtResult<()> {
    let (sx, sy) = grid_spacing(config);
    println!(
        "\n📐 {} x {} wells, spacing x {:.2} / y {:.2} (current spacing: {} pixels)",
        config.rows,
        config.columns,
        sx,
        sy,
        min_spacing(config)
    );
    if config.aoi_size as i64 > min_spacing(config) && config.rows * config.columns > 1 {
        println!(
            "⚠️  AoI size {} exceeds the well spacing; neighbouring areas overlap.",
            config.aoi_size
        );
    }

    reports::print_grid(&generate_grid(config), config.columns as usize);
    Ok(())
}
