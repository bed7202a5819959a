use super::types::ChannelMatrix;

/// Unweighted mean of all size^2 cells.
pub fn arithmetic_mean(matrix: &ChannelMatrix) -> f64 {
    let values = matrix.values();
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Weight of cell (i, j) in a block of the given size:
/// `ceil(size / 2) - |(i, j) - (center, center)|`, center = `floor(size / 2)`.
///
/// Corner weights reach zero or go negative for larger blocks. They are used
/// as-is, not clamped.
#[inline(always)]
pub fn cell_weight(size: usize, i: usize, j: usize) -> f64 {
    let center = (size / 2) as f64;
    let reach = (size as f64 / 2.0).ceil();
    let di = i as f64 - center;
    let dj = j as f64 - center;
    reach - (di * di + dj * dj).sqrt()
}

/// Center-weighted mean: weights fall off linearly with distance from the
/// center cell (no reciprocals, unlike inverse-distance weighting).
pub fn weighted_mean(matrix: &ChannelMatrix) -> f64 {
    let size = matrix.size();
    if size == 0 {
        return 0.0;
    }

    // Offsets from the first cell keep uniform blocks exact.
    let base = matrix.get(0, 0);
    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;

    for i in 0..size {
        for j in 0..size {
            let w = cell_weight(size, i, j);
            weighted_sum += (matrix.get(i, j) - base) * w;
            weight_total += w;
        }
    }

    base + weighted_sum / weight_total
}
