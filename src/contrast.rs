//! WCAG contrast analysis
//!
//! Relative luminance and contrast ratio per the WCAG 2.x definitions,
//! with the standard AA/AAA classification ladder.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::constants::contrast::{AAA_RATIO, AA_LARGE_RATIO, AA_RATIO};

/// WCAG conformance level for a contrast ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WcagLevel {
    /// Ratio >= 7: enhanced contrast
    Aaa,
    /// Ratio >= 4.5: minimum for normal text
    Aa,
    /// Ratio >= 3: acceptable for large text only
    AaLarge,
    /// Insufficient for text
    Fail,
}

impl WcagLevel {
    /// Classify a contrast ratio
    pub fn classify(ratio: f64) -> Self {
        if ratio >= AAA_RATIO {
            WcagLevel::Aaa
        } else if ratio >= AA_RATIO {
            WcagLevel::Aa
        } else if ratio >= AA_LARGE_RATIO {
            WcagLevel::AaLarge
        } else {
            WcagLevel::Fail
        }
    }

    /// Display string, matching the conventional badge text
    pub fn as_str(&self) -> &'static str {
        match self {
            WcagLevel::Aaa => "AAA",
            WcagLevel::Aa => "AA",
            WcagLevel::AaLarge => "AA Large",
            WcagLevel::Fail => "Fail",
        }
    }
}

impl std::fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contrast ratio between two colors with its classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastRating {
    pub ratio: f64,
    pub level: WcagLevel,
}

/// WCAG relative luminance of a color, range [0, 1].
///
/// Channels are normalized to [0, 1], linearized with the piecewise
/// sRGB transfer function (0.03928 breakpoint), and combined with the
/// 0.2126 / 0.7152 / 0.0722 coefficients.
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let linearize = |c: u8| {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };

    0.2126 * linearize(rgb.r) + 0.7152 * linearize(rgb.g) + 0.0722 * linearize(rgb.b)
}

/// Contrast ratio between two colors: `(lighter + 0.05) / (darker + 0.05)`.
///
/// Symmetric in its arguments, range [1, 21].
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// Rate a color pair: ratio plus WCAG classification
pub fn rate(a: Rgb, b: Rgb) -> ContrastRating {
    let ratio = contrast_ratio(a, b);
    ContrastRating {
        ratio,
        level: WcagLevel::classify(ratio),
    }
}
