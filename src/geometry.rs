use crate::config::Configuration;
use std::fmt;

/// Integer pixel position in the photograph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One calibrated well position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPoint {
    pub row: usize,
    pub column: usize,
    pub x: i64,
    pub y: i64,
}

impl GridPoint {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Distance between neighbouring wells along one axis. A single well on the
/// axis has no spacing.
fn axis_spacing(start: i64, end: i64, count: u32) -> f64 {
    if count <= 1 {
        0.0
    } else {
        (end - start) as f64 / (count - 1) as f64
    }
}

/// (spacing_x, spacing_y) of the calibrated grid.
pub fn grid_spacing(config: &Configuration) -> (f64, f64) {
    (
        axis_spacing(config.top_left.x, config.bottom_right.x, config.columns),
        axis_spacing(config.top_left.y, config.bottom_right.y, config.rows),
    )
}

/// The smaller of the two spacings, rounded. Useful as an upper bound hint
/// for the AoI size.
pub fn min_spacing(config: &Configuration) -> i64 {
    let (sx, sy) = grid_spacing(config);
    sx.min(sy).round_ties_even() as i64
}

/// Well positions in row-major order (all columns of row 0, then row 1, ...).
///
/// Coordinates are rounded half-to-even. No bounds checking happens here.
pub fn generate_grid(config: &Configuration) -> Vec<GridPoint> {
    let (spacing_x, spacing_y) = grid_spacing(config);
    let rows = config.rows as usize;
    let columns = config.columns as usize;

    let mut grid = Vec::with_capacity(rows * columns);
    for row in 0..rows {
        for column in 0..columns {
            let x = config.top_left.x as f64 + column as f64 * spacing_x;
            let y = config.top_left.y as f64 + row as f64 * spacing_y;
            grid.push(GridPoint {
                row,
                column,
                x: x.round_ties_even() as i64,
                y: y.round_ties_even() as i64,
            });
        }
    }
    grid
}
