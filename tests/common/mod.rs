#![allow(dead_code)]

use image::{Rgb, RgbImage};
use microtiter::config::Configuration;
use microtiter::geometry::Point;
use microtiter::methods::{AggregationMethod, ScoringMethod};

/// Builder for Configuration to clean up tests
pub struct ConfigBuilder {
    config: Configuration,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Configuration {
                path_samples: "samples.png".to_string(),
                path_control: "control.png".to_string(),
                top_left: Point::new(100, 100),
                bottom_right: Point::new(300, 300),
                rows: 3,
                columns: 3,
                control_position: Point::new(50, 50),
                aoi_size: 3,
                aggregation_method: AggregationMethod::ArithmeticMean,
                scoring_method: ScoringMethod::EuclidianRgb,
            },
        }
    }

    pub fn corners(mut self, top_left: (i64, i64), bottom_right: (i64, i64)) -> Self {
        self.config.top_left = Point::new(top_left.0, top_left.1);
        self.config.bottom_right = Point::new(bottom_right.0, bottom_right.1);
        self
    }

    pub fn shape(mut self, rows: u32, columns: u32) -> Self {
        self.config.rows = rows;
        self.config.columns = columns;
        self
    }

    pub fn control(mut self, x: i64, y: i64) -> Self {
        self.config.control_position = Point::new(x, y);
        self
    }

    pub fn aoi(mut self, size: u32) -> Self {
        self.config.aoi_size = size;
        self
    }

    pub fn methods(mut self, aggregation: AggregationMethod, scoring: ScoringMethod) -> Self {
        self.config.aggregation_method = aggregation;
        self.config.scoring_method = scoring;
        self
    }

    pub fn build(self) -> Configuration {
        self.config
    }
}

pub fn solid_image(width: u32, height: u32, rgb: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(rgb))
}

/// Paints a `radius`-wide square of `rgb` around (x, y).
pub fn paint_well(img: &mut RgbImage, x: u32, y: u32, radius: u32, rgb: [u8; 3]) {
    for py in y - radius..=y + radius {
        for px in x - radius..=x + radius {
            img.put_pixel(px, py, Rgb(rgb));
        }
    }
}
