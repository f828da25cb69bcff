//! Palette and harmony scheme generation
//!
//! Each scheme is a pure function of one base HSL color and returns a
//! fixed-length, ordered list of hex colors. Order is meaningful (a
//! lightness ramp for monochromatic, hue rotation for the others) and
//! is preserved all the way to the caller. Generators never fail.

use serde::{Deserialize, Serialize};

use crate::color::{hsl_to_hex, Hsl};

/// A named, ordered color scheme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub name: String,
    /// Lowercase `#rrggbb` strings; order is semantically meaningful
    pub colors: Vec<String>,
}

/// Derived color scheme shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    /// Five lightness steps (20..80) at fixed hue and saturation
    Monochromatic,
    /// Five hues at -60/-30/0/+30/+60 degrees
    Analogous,
    /// Base and complement plus softened and deepened variants
    Complementary,
    /// Three hues 120 degrees apart
    Triadic,
    /// Base plus the two hues flanking its complement
    SplitComplementary,
    /// Four hues 90 degrees apart
    Tetradic,
}

impl Scheme {
    /// Every scheme, in presentation order
    pub const ALL: [Scheme; 6] = [
        Scheme::Monochromatic,
        Scheme::Analogous,
        Scheme::Complementary,
        Scheme::Triadic,
        Scheme::SplitComplementary,
        Scheme::Tetradic,
    ];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Scheme::Monochromatic => "Monochromatic",
            Scheme::Analogous => "Analogous",
            Scheme::Complementary => "Complementary",
            Scheme::Triadic => "Triadic",
            Scheme::SplitComplementary => "Split Complementary",
            Scheme::Tetradic => "Tetradic",
        }
    }

    /// Number of colors the scheme produces
    pub fn color_count(&self) -> usize {
        match self {
            Scheme::Monochromatic | Scheme::Analogous | Scheme::Complementary => 5,
            Scheme::Triadic | Scheme::SplitComplementary => 3,
            Scheme::Tetradic => 4,
        }
    }

    /// Generate the scheme from a base color
    pub fn generate(&self, base: Hsl) -> Palette {
        let colors = match self {
            Scheme::Monochromatic => (0..5)
                .map(|i| hsl_to_hex(Hsl::new(base.h, base.s, 20 + i * 15)))
                .collect(),
            Scheme::Analogous => [-60, -30, 0, 30, 60]
                .iter()
                .map(|&angle| hsl_to_hex(Hsl::new(rotate(base.h, angle), base.s, base.l)))
                .collect(),
            Scheme::Complementary => {
                let complement = rotate(base.h, 180);
                let soft_s = shift(base.s, -20);
                let soft_l = shift(base.l, 10);
                vec![
                    hsl_to_hex(base),
                    hsl_to_hex(Hsl::new(complement, base.s, base.l)),
                    hsl_to_hex(Hsl::new(base.h, soft_s, soft_l)),
                    hsl_to_hex(Hsl::new(complement, soft_s, soft_l)),
                    hsl_to_hex(Hsl::new(base.h, shift(base.s, 20), shift(base.l, -10))),
                ]
            }
            Scheme::Triadic => rotations(base, &[0, 120, 240]),
            Scheme::SplitComplementary => rotations(base, &[0, 150, 210]),
            Scheme::Tetradic => rotations(base, &[0, 90, 180, 270]),
        };

        Palette {
            name: self.name().to_string(),
            colors,
        }
    }
}

/// Generate every scheme from one base color, in presentation order
pub fn generate_all(base: Hsl) -> Vec<Palette> {
    Scheme::ALL.iter().map(|s| s.generate(base)).collect()
}

fn rotations(base: Hsl, angles: &[i32]) -> Vec<String> {
    angles
        .iter()
        .map(|&angle| hsl_to_hex(Hsl::new(rotate(base.h, angle), base.s, base.l)))
        .collect()
}

/// Hue rotation over the rounded integer-degree representation
fn rotate(h: u16, delta: i32) -> u16 {
    (h as i32 + delta).rem_euclid(360) as u16
}

/// Saturation/lightness shift clamped to [0, 100]
fn shift(percent: u8, delta: i16) -> u8 {
    (percent as i16 + delta).clamp(0, 100) as u8
}
