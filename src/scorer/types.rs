use std::fmt;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ColorTriple {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl ColorTriple {
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0] as f64, rgb[1] as f64, rgb[2] as f64)
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.red, self.green, self.blue]
    }
}

/// Square matrix of one channel's raw pixel values, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelMatrix {
    size: usize,
    values: Vec<f64>,
}

impl ChannelMatrix {
    pub fn new(size: usize, values: Vec<f64>) -> Self {
        assert_eq!(
            values.len(),
            size * size,
            "channel matrix needs size^2 values"
        );
        Self { size, values }
    }

    pub fn uniform(size: usize, value: f64) -> Self {
        Self::new(size, vec![value; size * size])
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.size + col]
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Per-channel AoI samples around one position.
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborhoodBlock {
    pub red: ChannelMatrix,
    pub green: ChannelMatrix,
    pub blue: ChannelMatrix,
}

/// Zero-based (row, column) address of a plate well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellIndex {
    pub row: usize,
    pub column: usize,
}

impl CellIndex {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Renders as the plate label, e.g. row 0 / column 2 -> `A3`.
impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", row_label(self.row), self.column + 1)
    }
}

/// Letter label of a plate row. Rows past 'Z' run on into the following
/// code points; plates are expected to have at most 26 rows.
pub fn row_label(row: usize) -> char {
    char::from_u32('A' as u32 + row as u32).unwrap_or('?')
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMatrix {
    rows: usize,
    columns: usize,
    // FLATTENED (row-major, size = rows * columns)
    scores: Vec<f64>,
}

impl ScoreMatrix {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            scores: vec![0.0; rows * columns],
        }
    }

    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let columns = rows.first().map_or(0, |r| r.len());
        assert!(
            rows.iter().all(|r| r.len() == columns),
            "score rows must have equal length"
        );
        Self {
            rows: rows.len(),
            columns,
            scores: rows.into_iter().flatten().collect(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline(always)]
    pub fn idx(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    pub fn get(&self, row: usize, column: usize) -> f64 {
        self.scores[self.idx(row, column)]
    }

    pub fn set(&mut self, row: usize, column: usize, score: f64) {
        let idx = self.idx(row, column);
        self.scores[idx] = score;
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.scores.chunks(self.columns.max(1)).take(self.rows)
    }

    /// Cell with the lowest score. Ties go to the first cell in row-major order.
    pub fn closest_match(&self) -> Option<CellIndex> {
        self.extremum(|candidate, best| candidate < best)
    }

    /// Cell with the highest score. Ties go to the first cell in row-major order.
    pub fn farthest_match(&self) -> Option<CellIndex> {
        self.extremum(|candidate, best| candidate > best)
    }

    fn extremum(&self, better: impl Fn(f64, f64) -> bool) -> Option<CellIndex> {
        let mut best: Option<usize> = None;
        for (i, &score) in self.scores.iter().enumerate() {
            match best {
                Some(b) if !better(score, self.scores[b]) => {}
                Some(_) => best = Some(i),
                None if !score.is_nan() => best = Some(i),
                None => {}
            }
        }
        best.map(|i| CellIndex::new(i / self.columns, i % self.columns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_labels() {
        assert_eq!(CellIndex::new(0, 2).to_string(), "A3");
        assert_eq!(CellIndex::new(7, 11).to_string(), "H12");
    }

    #[test]
    fn extrema_prefer_first_occurrence() {
        let m = ScoreMatrix::from_rows(vec![vec![1.0, 0.0, 0.0], vec![4.0, 4.0, 2.0]]);
        assert_eq!(m.closest_match(), Some(CellIndex::new(0, 1)));
        assert_eq!(m.farthest_match(), Some(CellIndex::new(1, 0)));
    }

    #[test]
    fn nan_scores_never_win() {
        let m = ScoreMatrix::from_rows(vec![vec![f64::NAN, 3.0, 1.0]]);
        assert_eq!(m.closest_match(), Some(CellIndex::new(0, 2)));
        assert_eq!(m.farthest_match(), Some(CellIndex::new(0, 1)));
    }
}
