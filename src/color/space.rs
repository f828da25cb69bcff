//! Color space conversion utilities
//!
//! Provides conversions among RGB, hexadecimal, HSL, and HSV:
//! - Standard max/min/chroma decomposition for HSL and HSV
//! - Chroma/X/match-lightness reconstruction for HSL to RGB
//! - Lowercase `#rrggbb` hex formatting and strict parsing
//!
//! HSL and HSV components are rounded to the nearest integer (degrees
//! and percent) for display purposes. That rounding is intentional and
//! makes conversions lossy in that direction: `hex -> rgb` is exact,
//! `rgb -> hsl -> rgb` is not guaranteed to be.

use serde::{Deserialize, Serialize};

use crate::{AnalysisError, Result};

/// RGB color, channels in [0, 255]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// HSL color: hue in [0, 360), saturation and lightness in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    pub fn new(h: u16, s: u8, l: u8) -> Self {
        debug_assert!(h < 360 && s <= 100 && l <= 100);
        Self { h, s, l }
    }
}

/// HSV color: hue in [0, 360), saturation and value in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: u16,
    pub s: u8,
    pub v: u8,
}

/// A color in all four representations the engine reports.
///
/// Derived, immutable value type; holds no reference to the pixel
/// buffer it was sampled from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSample {
    pub rgb: Rgb,
    pub hex: String,
    pub hsl: Hsl,
    pub hsv: Hsv,
}

impl ColorSample {
    /// Derive all representations from an RGB value
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            hex: rgb_to_hex(rgb),
            hsl: rgb_to_hsl(rgb),
            hsv: rgb_to_hsv(rgb),
            rgb,
        }
    }

    /// Derive all representations from a hex string
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidColorFormat`] when `hex` is not a
    /// valid `#rrggbb` color.
    pub fn from_hex(hex: &str) -> Result<Self> {
        Ok(Self::from_rgb(hex_to_rgb(hex)?))
    }
}

/// Format an RGB color as lowercase `#rrggbb`
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// Parse a `#rrggbb` hex string (the leading `#` is optional on input).
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidColorFormat`] on anything other than
/// exactly six hex digits. Parsing never falls back to black: downstream
/// palette code must not run on a silently-defaulted color.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(AnalysisError::InvalidColorFormat(hex.to_string()));
    }

    let parse = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| AnalysisError::InvalidColorFormat(hex.to_string()))
    };

    Ok(Rgb {
        r: parse(0..2)?,
        g: parse(2..4)?,
        b: parse(4..6)?,
    })
}

/// Convert RGB to HSL with integer-rounded components
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        // Achromatic
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        (hue_turns(r, g, b, max, d), s)
    };

    Hsl {
        h: round_hue(h),
        s: round_percent(s),
        l: round_percent(l),
    }
}

/// Convert RGB to HSV with integer-rounded components
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let s = if max == 0.0 { 0.0 } else { d / max };
    let h = if max == min {
        0.0
    } else {
        hue_turns(r, g, b, max, d)
    };

    Hsv {
        h: round_hue(h),
        s: round_percent(s),
        v: round_percent(max),
    }
}

/// Convert HSL to RGB via the chroma/X/match-lightness construction
/// over six 60-degree hue sectors
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h as f64;
    let s = hsl.s as f64 / 100.0;
    let l = hsl.l as f64 / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h as u16 {
        0..=59 => (c, x, 0.0),
        60..=119 => (x, c, 0.0),
        120..=179 => (0.0, c, x),
        180..=239 => (0.0, x, c),
        240..=299 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb {
        r: ((r + m) * 255.0).round() as u8,
        g: ((g + m) * 255.0).round() as u8,
        b: ((b + m) * 255.0).round() as u8,
    }
}

/// Convert HSL directly to a lowercase hex string
pub fn hsl_to_hex(hsl: Hsl) -> String {
    rgb_to_hex(hsl_to_rgb(hsl))
}

/// Hue in turns [0, 1) from the dominant channel
fn hue_turns(r: f64, g: f64, b: f64, max: f64, d: f64) -> f64 {
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    h / 6.0
}

/// Turns to integer degrees. Rounding can land on exactly 360 for hues
/// just below a full turn, so the result is reduced mod 360 to keep the
/// [0, 360) invariant.
fn round_hue(turns: f64) -> u16 {
    ((turns * 360.0).round() as u16) % 360
}

fn round_percent(fraction: f64) -> u8 {
    (fraction * 100.0).round() as u8
}
