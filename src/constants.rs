//! Tunable constants for color analysis
//!
//! All numeric thresholds used by the engine live here, grouped by the
//! pass they belong to.

/// Whole-image dominant color extraction
pub mod extraction {
    /// Default channel quantization step for the whole-image histogram
    pub const DEFAULT_QUANT_STEP: u8 = 20;

    /// Default cap on the number of distinct colors returned
    pub const DEFAULT_MAX_COLORS: usize = 15;

    /// Default minimum perceptual distance between returned colors
    pub const DEFAULT_MIN_DIFFERENCE: f64 = 25.0;

    /// Pixels with alpha below this are skipped entirely
    pub const DEFAULT_ALPHA_THRESHOLD: u8 = 128;
}

/// Zone grid and region average sampling
pub mod zones {
    /// Channel quantization step for per-cell histograms
    /// (finer than the whole-image pass)
    pub const ZONE_QUANT_STEP: u8 = 16;

    /// Default grid shape
    pub const DEFAULT_COLS: u32 = 3;
    pub const DEFAULT_ROWS: u32 = 2;

    /// Pixels with integer luma below this count as near-black
    pub const DARK_LUMA_CUTOFF: f64 = 20.0;

    /// Histogram buckets with luma below this are treated as shadow
    /// content and skipped when brighter buckets exist
    pub const SHADOW_LUMA_FLOOR: f64 = 25.0;

    /// A cell at or above this fraction of near-black pixels is
    /// genuinely dark; its raw dominant bucket wins
    pub const DARK_ZONE_FRACTION: f64 = 0.60;

    /// Rectangles with either edge below this are too small to be a
    /// deliberate selection
    pub const MIN_REGION_EDGE: u32 = 3;
}

/// Luma-weighted color difference metric
pub mod difference {
    /// Per-channel weights, approximating human luminance sensitivity
    pub const R_WEIGHT: f64 = 0.30;
    pub const G_WEIGHT: f64 = 0.59;
    pub const B_WEIGHT: f64 = 0.11;
}

/// WCAG contrast classification
pub mod contrast {
    /// Minimum ratio for AAA conformance
    pub const AAA_RATIO: f64 = 7.0;

    /// Minimum ratio for AA conformance
    pub const AA_RATIO: f64 = 4.5;

    /// Minimum ratio for AA conformance on large text
    pub const AA_LARGE_RATIO: f64 = 3.0;
}

/// Color temperature scoring
pub mod temperature {
    /// Divisor mapping the red-blue channel gap onto roughly [-100, 100]
    pub const CHANNEL_SCALE: f64 = 2.55;

    /// Category thresholds over the average temperature
    pub const VERY_COOL_BELOW: f64 = -50.0;
    pub const COOL_BELOW: f64 = 0.0;
    pub const WARM_BELOW: f64 = 50.0;

    /// Display position is clamped away from the gauge edges
    pub const POSITION_MIN: f64 = 2.0;
    pub const POSITION_MAX: f64 = 98.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difference_weights_sum_to_one() {
        let sum = difference::R_WEIGHT + difference::G_WEIGHT + difference::B_WEIGHT;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_contrast_thresholds_ordered() {
        assert!(contrast::AA_LARGE_RATIO < contrast::AA_RATIO);
        assert!(contrast::AA_RATIO < contrast::AAA_RATIO);
    }

    #[test]
    fn test_temperature_thresholds_ordered() {
        assert!(temperature::VERY_COOL_BELOW < temperature::COOL_BELOW);
        assert!(temperature::COOL_BELOW < temperature::WARM_BELOW);
        assert!(temperature::POSITION_MIN < temperature::POSITION_MAX);
    }

    #[test]
    fn test_zone_quant_finer_than_extraction() {
        assert!(zones::ZONE_QUANT_STEP < extraction::DEFAULT_QUANT_STEP);
        assert!(zones::DARK_LUMA_CUTOFF < zones::SHADOW_LUMA_FLOOR);
    }
}
