use crate::config::Configuration;
use crate::error::MtResult;
use crate::report::format_config_report;
use crate::scorer::{ColorTriple, Evaluator, ScoreMatrix};
use image::RgbImage;
use std::path::Path;
use tracing::info;

/// Outcome of one evaluation run.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub control_color: ColorTriple,
    pub matrix: ScoreMatrix,
    pub report: String,
}

/// Decodes an image file into 8-bit RGB.
pub fn load_image<P: AsRef<Path>>(path: P) -> MtResult<RgbImage> {
    let path = path.as_ref();
    let img = image::open(path)?.to_rgb8();
    info!(
        "Loaded image {} ({}x{})",
        path.display(),
        img.width(),
        img.height()
    );
    Ok(img)
}

/// Evaluates already-loaded images and renders the report.
pub fn evaluate_images(
    config: &Configuration,
    samples: &RgbImage,
    control: &RgbImage,
) -> MtResult<Evaluation> {
    let evaluator = Evaluator::new(config.clone())?;
    let (control_color, matrix) = evaluator.evaluate_detailed(samples, control)?;
    let report = format_config_report(evaluator.config(), &matrix)?;

    Ok(Evaluation {
        control_color,
        matrix,
        report,
    })
}

/// Loads both images named by the configuration and evaluates them.
pub fn evaluate_files(config: &Configuration) -> MtResult<Evaluation> {
    config.validate()?;
    let samples = load_image(&config.path_samples)?;
    let control = load_image(&config.path_control)?;
    evaluate_images(config, &samples, &control)
}
