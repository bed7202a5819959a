use super::types::{ChannelMatrix, ColorTriple, NeighborhoodBlock};
use crate::error::{MicrotiterError, MtResult};
use image::RgbImage;

/// Read access to the pixels of a decoded photograph.
pub trait PixelSource {
    /// (width, height) in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// Color at integer pixel coordinates. Fails with `OutOfBounds` outside the
    /// image extent, negative coordinates included.
    fn pixel_color(&self, x: i64, y: i64) -> MtResult<ColorTriple>;
}

/// Maps signed coordinates to unsigned ones, or reports them out of bounds.
pub fn checked_coords(x: i64, y: i64, (width, height): (u32, u32)) -> MtResult<(u32, u32)> {
    if x < 0 || y < 0 || x >= width as i64 || y >= height as i64 {
        return Err(MicrotiterError::OutOfBounds {
            x,
            y,
            width,
            height,
        });
    }
    Ok((x as u32, y as u32))
}

impl PixelSource for RgbImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn pixel_color(&self, x: i64, y: i64) -> MtResult<ColorTriple> {
        let (px, py) = checked_coords(x, y, PixelSource::dimensions(self))?;
        Ok(ColorTriple::from_rgb8(self.get_pixel(px, py).0))
    }
}

/// Samples the `size` x `size` block centered on (x, y).
///
/// Rows run over dy (outer), columns over dx (inner), so cell (i, j) of each
/// channel matrix is pixel (x - half + j, y - half + i).
pub fn sample_area<S: PixelSource + ?Sized>(
    source: &S,
    x: i64,
    y: i64,
    size: u32,
) -> MtResult<NeighborhoodBlock> {
    if size % 2 == 0 {
        return Err(MicrotiterError::InvalidConfiguration(format!(
            "AoI size must be a positive odd number (got {})",
            size
        )));
    }
    let half = (size / 2) as i64;
    let n = size as usize;

    let mut red = Vec::with_capacity(n * n);
    let mut green = Vec::with_capacity(n * n);
    let mut blue = Vec::with_capacity(n * n);

    for dy in -half..=half {
        for dx in -half..=half {
            let c = source.pixel_color(x + dx, y + dy)?;
            red.push(c.red);
            green.push(c.green);
            blue.push(c.blue);
        }
    }

    Ok(NeighborhoodBlock {
        red: ChannelMatrix::new(n, red),
        green: ChannelMatrix::new(n, green),
        blue: ChannelMatrix::new(n, blue),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn gradient(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, 7]))
    }

    #[test]
    fn block_layout_is_dy_outer_dx_inner() {
        let img = gradient(10, 10);
        let block = sample_area(&img, 5, 5, 3).unwrap();
        // top-left cell is (4, 4), top-right is (6, 4), bottom-left is (4, 6)
        assert_eq!(block.red.get(0, 0), 4.0);
        assert_eq!(block.green.get(0, 0), 4.0);
        assert_eq!(block.red.get(0, 2), 6.0);
        assert_eq!(block.green.get(0, 2), 4.0);
        assert_eq!(block.red.get(2, 0), 4.0);
        assert_eq!(block.green.get(2, 0), 6.0);
        assert_eq!(block.blue.get(1, 1), 7.0);
    }

    #[test]
    fn edge_neighborhood_fails() {
        let img = gradient(10, 10);
        assert!(sample_area(&img, 0, 5, 3).is_err());
        assert!(sample_area(&img, 9, 5, 3).is_err());
        assert!(sample_area(&img, 1, 1, 3).is_ok());
        assert!(sample_area(&img, 0, 0, 1).is_ok());
    }

    #[test]
    fn even_or_zero_size_is_rejected() {
        let img = gradient(20, 20);
        for size in [0, 2, 4] {
            assert!(matches!(
                sample_area(&img, 10, 10, size),
                Err(MicrotiterError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn out_of_bounds_reports_first_offending_pixel() {
        let img = gradient(4, 4);
        match sample_area(&img, 3, 1, 3) {
            Err(MicrotiterError::OutOfBounds { x, y, width, height }) => {
                assert_eq!((x, y, width, height), (4, 0, 4, 4));
            }
            other => panic!("expected OutOfBounds, got {:?}", other),
        }
    }
}
