//! Perceptual color distance and brightness helpers
//!
//! The distance metric is a luma-weighted Euclidean distance over RGB,
//! not a true CIE color-difference formula. The weighting is enough to
//! make the distinctness thresholds stable, and it keeps the histogram
//! filter cheap.

use crate::color::Rgb;
use crate::constants::difference::{B_WEIGHT, G_WEIGHT, R_WEIGHT};

/// Weighted Euclidean distance between two RGB colors.
///
/// `sqrt(0.30 * dr^2 + 0.59 * dg^2 + 0.11 * db^2)`, range [0, 255].
pub fn color_difference(a: Rgb, b: Rgb) -> f64 {
    let dr = a.r as f64 - b.r as f64;
    let dg = a.g as f64 - b.g as f64;
    let db = a.b as f64 - b.b as f64;

    (R_WEIGHT * dr * dr + G_WEIGHT * dg * dg + B_WEIGHT * db * db).sqrt()
}

/// Integer-weight brightness: `(299r + 587g + 114b) / 1000`, range [0, 255].
///
/// Used by zone sampling to separate shadow content from lit content.
pub fn luma(rgb: Rgb) -> f64 {
    (rgb.r as f64 * 299.0 + rgb.g as f64 * 587.0 + rgb.b as f64 * 114.0) / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difference_zero_for_identical() {
        let c = Rgb::new(120, 45, 200);
        assert_eq!(color_difference(c, c), 0.0);
    }

    #[test]
    fn test_difference_symmetric() {
        let a = Rgb::new(255, 0, 0);
        let b = Rgb::new(0, 0, 255);
        assert_eq!(color_difference(a, b), color_difference(b, a));
    }

    #[test]
    fn test_difference_weights_channels() {
        let black = Rgb::new(0, 0, 0);
        let green_dist = color_difference(black, Rgb::new(0, 100, 0));
        let red_dist = color_difference(black, Rgb::new(100, 0, 0));
        let blue_dist = color_difference(black, Rgb::new(0, 0, 100));

        // Green differences dominate, blue ones barely register
        assert!(green_dist > red_dist);
        assert!(red_dist > blue_dist);
        assert!((green_dist - (0.59f64).sqrt() * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_luma_extremes() {
        assert_eq!(luma(Rgb::new(0, 0, 0)), 0.0);
        assert_eq!(luma(Rgb::new(255, 255, 255)), 255.0);
        // Pure blue is dark to the eye
        assert!(luma(Rgb::new(0, 0, 255)) < 30.0);
        // Pure green is bright
        assert!(luma(Rgb::new(0, 255, 0)) > 140.0);
    }
}
