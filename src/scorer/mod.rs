pub mod aggregation;
pub mod color;
pub mod engine;
pub mod metrics;
pub mod sampler;
pub mod types;

pub use self::sampler::PixelSource;
pub use self::types::{CellIndex, ColorTriple, ScoreMatrix};
use crate::config::Configuration;
use crate::error::MtResult;

/// Scores a samples image against a control image under one configuration.
#[derive(Debug, Clone)]
pub struct Evaluator {
    config: Configuration,
}

impl Evaluator {
    pub fn new(config: Configuration) -> MtResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Uses the aggregation and scoring methods named in the configuration.
    pub fn evaluate<S, C>(&self, samples: &S, control: &C) -> MtResult<ScoreMatrix>
    where
        S: PixelSource + ?Sized,
        C: PixelSource + ?Sized,
    {
        engine::evaluate(
            &self.config,
            samples,
            control,
            self.config.aggregation_method,
            self.config.scoring_method,
        )
    }

    /// Also returns the aggregated control color.
    pub fn evaluate_detailed<S, C>(
        &self,
        samples: &S,
        control: &C,
    ) -> MtResult<(ColorTriple, ScoreMatrix)>
    where
        S: PixelSource + ?Sized,
        C: PixelSource + ?Sized,
    {
        engine::evaluate_detailed(
            &self.config,
            samples,
            control,
            self.config.aggregation_method,
            self.config.scoring_method,
        )
    }
}
