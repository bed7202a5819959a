use super::types::ColorTriple;

/// Hue, saturation and value, each in [0, 1].
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

/// Converts an RGB triple on the 0-255 scale to HSV.
///
/// Achromatic colors (max == min) get hue 0; black gets saturation 0.
/// When several channels share the maximum, blue takes precedence over green
/// and green over red (the formulas agree at those ties).
pub fn rgb_to_hsv(color: &ColorTriple) -> Hsv {
    let r = color.red / 255.0;
    let g = color.green / 255.0;
    let b = color.blue / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let saturation = if max == 0.0 || delta == 0.0 {
        0.0
    } else {
        delta / max
    };

    let hue = if delta == 0.0 {
        0.0
    } else {
        let sector = if b == max {
            4.0 + (r - g) / delta
        } else if g == max {
            2.0 + (b - r) / delta
        } else {
            (g - b) / delta
        };
        (sector / 6.0).rem_euclid(1.0)
    };

    Hsv {
        hue,
        saturation,
        value: max,
    }
}
