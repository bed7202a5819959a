use super::color::rgb_to_hsv;
use super::types::ColorTriple;

fn norm3(a: [f64; 3], b: [f64; 3]) -> f64 {
    let d0 = a[0] - b[0];
    let d1 = a[1] - b[1];
    let d2 = a[2] - b[2];
    (d0 * d0 + d1 * d1 + d2 * d2).sqrt()
}

/// Euclidean distance in raw RGB (0-255 per channel).
pub fn euclidian_rgb(sample: &ColorTriple, control: &ColorTriple) -> f64 {
    norm3(sample.as_array(), control.as_array())
}

/// Euclidean distance in HSV with hue and saturation scaled by 255 and value
/// kept on its [0, 1] scale.
pub fn euclidian_hsv(sample: &ColorTriple, control: &ColorTriple) -> f64 {
    let s = rgb_to_hsv(sample);
    let c = rgb_to_hsv(control);
    norm3(
        [s.hue * 255.0, s.saturation * 255.0, s.value],
        [c.hue * 255.0, c.saturation * 255.0, c.value],
    )
}

/// Absolute saturation difference, scaled by 255.
pub fn distance_saturation(sample: &ColorTriple, control: &ColorTriple) -> f64 {
    let s = rgb_to_hsv(sample);
    let c = rgb_to_hsv(control);
    (s.saturation - c.saturation).abs() * 255.0
}
