//! Color representations, conversions, and distance metrics

pub mod difference;
pub mod space;

pub use difference::{color_difference, luma};
pub use space::{
    hex_to_rgb, hsl_to_hex, hsl_to_rgb, rgb_to_hex, rgb_to_hsl, rgb_to_hsv, ColorSample, Hsl, Hsv,
    Rgb,
};
