use crate::error::{MicrotiterError, MtResult};
use crate::scorer::types::{ChannelMatrix, ColorTriple, NeighborhoodBlock};
use crate::scorer::{aggregation, metrics};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Reduces one channel of an AoI block to a single representative value.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, AsRefStr, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum AggregationMethod {
    ArithmeticMean,
    WeightedMean,
}

/// Dissimilarity between a sample color and the control color. Lower is closer.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, AsRefStr, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum ScoringMethod {
    EuclidianRgb,
    EuclidianHsv,
    DistanceSaturation,
}

impl AggregationMethod {
    pub fn label(&self) -> &'static str {
        match self {
            Self::ArithmeticMean => "Arithmetic Mean",
            Self::WeightedMean => "Weighted Mean",
        }
    }

    /// Stable code used in configuration files.
    pub fn code(&self) -> &str {
        self.as_ref()
    }

    /// Registered methods in display order.
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }

    pub fn from_code(code: &str) -> MtResult<Self> {
        Self::from_str(code.trim()).map_err(|_| MicrotiterError::UnknownMethod {
            kind: "aggregation",
            code: code.to_string(),
        })
    }

    /// Looks a method up by its zero-based position in the registry.
    pub fn from_id(id: usize) -> MtResult<Self> {
        Self::iter()
            .nth(id)
            .ok_or_else(|| MicrotiterError::UnknownMethod {
                kind: "aggregation",
                code: id.to_string(),
            })
    }

    pub fn aggregate(&self, matrix: &ChannelMatrix) -> f64 {
        match self {
            Self::ArithmeticMean => aggregation::arithmetic_mean(matrix),
            Self::WeightedMean => aggregation::weighted_mean(matrix),
        }
    }

    /// Applies the method to each channel independently.
    pub fn aggregate_block(&self, block: &NeighborhoodBlock) -> ColorTriple {
        ColorTriple::new(
            self.aggregate(&block.red),
            self.aggregate(&block.green),
            self.aggregate(&block.blue),
        )
    }
}

impl ScoringMethod {
    pub fn label(&self) -> &'static str {
        match self {
            Self::EuclidianRgb => "Euclidian distance in RGB",
            Self::EuclidianHsv => "Euclidian distance in HSV",
            Self::DistanceSaturation => "Simple distance in saturation",
        }
    }

    pub fn code(&self) -> &str {
        self.as_ref()
    }

    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }

    pub fn from_code(code: &str) -> MtResult<Self> {
        Self::from_str(code.trim()).map_err(|_| MicrotiterError::UnknownMethod {
            kind: "scoring",
            code: code.to_string(),
        })
    }

    pub fn from_id(id: usize) -> MtResult<Self> {
        Self::iter()
            .nth(id)
            .ok_or_else(|| MicrotiterError::UnknownMethod {
                kind: "scoring",
                code: id.to_string(),
            })
    }

    pub fn score(&self, sample: &ColorTriple, control: &ColorTriple) -> f64 {
        match self {
            Self::EuclidianRgb => metrics::euclidian_rgb(sample, control),
            Self::EuclidianHsv => metrics::euclidian_hsv(sample, control),
            Self::DistanceSaturation => metrics::distance_saturation(sample, control),
        }
    }
}
