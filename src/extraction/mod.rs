//! Pixel-buffer analysis passes: whole-image dominant color extraction
//! and zone/region sampling

pub mod histogram;
pub mod zones;

pub use histogram::{
    sort_colors, DistinctColorEntry, DominantColorExtractor, GradientOrdering,
};
pub use zones::{sample_region_average, Zone, ZoneSampler};
