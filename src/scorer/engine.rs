use super::sampler::{sample_area, PixelSource};
use super::types::{ColorTriple, ScoreMatrix};
use crate::config::Configuration;
use crate::error::MtResult;
use crate::geometry::{generate_grid, Point};
use crate::methods::{AggregationMethod, ScoringMethod};
use tracing::{debug, info};

/// Samples the AoI around `position` and reduces it to one color.
pub fn aggregate_location<S: PixelSource + ?Sized>(
    source: &S,
    position: Point,
    aoi_size: u32,
    aggregation: AggregationMethod,
) -> MtResult<ColorTriple> {
    let block = sample_area(source, position.x, position.y, aoi_size)?;
    Ok(aggregation.aggregate_block(&block))
}

/// Scores every well of the grid against the control color.
///
/// The control is aggregated once, before any well. Any out-of-bounds AoI
/// aborts the run; no partial matrix is returned.
pub fn evaluate<S, C>(
    config: &Configuration,
    samples: &S,
    control: &C,
    aggregation: AggregationMethod,
    scoring: ScoringMethod,
) -> MtResult<ScoreMatrix>
where
    S: PixelSource + ?Sized,
    C: PixelSource + ?Sized,
{
    evaluate_detailed(config, samples, control, aggregation, scoring).map(|(_, matrix)| matrix)
}

/// Like [`evaluate`], also returning the aggregated control color.
pub fn evaluate_detailed<S, C>(
    config: &Configuration,
    samples: &S,
    control: &C,
    aggregation: AggregationMethod,
    scoring: ScoringMethod,
) -> MtResult<(ColorTriple, ScoreMatrix)>
where
    S: PixelSource + ?Sized,
    C: PixelSource + ?Sized,
{
    config.validate()?;

    let control_color = aggregate_location(
        control,
        config.control_position,
        config.aoi_size,
        aggregation,
    )?;
    info!(
        "Control color at {}: ({:.2}, {:.2}, {:.2})",
        config.control_position, control_color.red, control_color.green, control_color.blue
    );

    let grid = generate_grid(config);
    let mut matrix = ScoreMatrix::new(config.rows as usize, config.columns as usize);

    for point in &grid {
        let sample_color =
            aggregate_location(samples, point.position(), config.aoi_size, aggregation)?;
        let score = scoring.score(&sample_color, &control_color);
        debug!(
            "Well r{} c{} at ({}, {}): score {:.4}",
            point.row, point.column, point.x, point.y, score
        );
        matrix.set(point.row, point.column, score);
    }

    info!(
        "Evaluated {} wells with {} / {}",
        grid.len(),
        aggregation.label(),
        scoring.label()
    );
    if let (Some(closest), Some(farthest)) = (matrix.closest_match(), matrix.farthest_match()) {
        info!("Closest match: {}, farthest match: {}", closest, farthest);
    }
    Ok((control_color, matrix))
}
