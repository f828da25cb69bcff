//! Quantized-histogram dominant color extraction
//!
//! Two-stage pass over the whole buffer:
//! 1. Count quantized colors, skipping pixels under the alpha threshold.
//! 2. Sort buckets by frequency and greedily keep only colors whose
//!    perceptual distance to every already-kept color clears the
//!    distinctness threshold.
//!
//! Equal-count buckets keep first-seen scan order: the histogram stores
//! buckets in insertion order and the frequency sort is stable, so the
//! result is deterministic for a given buffer.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::buffer::PixelBuffer;
use crate::color::{color_difference, ColorSample, Rgb};
use crate::config::ExtractionConfig;
use crate::constants::extraction::{
    DEFAULT_ALPHA_THRESHOLD, DEFAULT_MAX_COLORS, DEFAULT_MIN_DIFFERENCE, DEFAULT_QUANT_STEP,
};

/// One extracted color with its pixel tally and share of valid pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistinctColorEntry {
    pub sample: ColorSample,
    /// Number of valid pixels that quantized to this color
    pub count: u64,
    /// Share of valid pixels, rounded to two decimals
    pub percentage: f64,
}

/// Whole-image dominant color extractor
#[derive(Debug, Clone)]
pub struct DominantColorExtractor {
    quant_step: u8,
    max_colors: usize,
    min_difference: f64,
    alpha_threshold: u8,
}

impl Default for DominantColorExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DominantColorExtractor {
    /// Create an extractor with the default parameters
    pub fn new() -> Self {
        Self {
            quant_step: DEFAULT_QUANT_STEP,
            max_colors: DEFAULT_MAX_COLORS,
            min_difference: DEFAULT_MIN_DIFFERENCE,
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
        }
    }

    /// Create an extractor with custom parameters.
    ///
    /// The quantization step must stay positive; zero is lifted to one.
    /// A negative `min_difference` is lifted to zero.
    pub fn with_params(
        quant_step: u8,
        max_colors: usize,
        min_difference: f64,
        alpha_threshold: u8,
    ) -> Self {
        Self {
            quant_step: quant_step.max(1),
            max_colors,
            min_difference: min_difference.max(0.0),
            alpha_threshold,
        }
    }

    /// Create an extractor from a configuration section
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::with_params(
            config.quant_step,
            config.max_colors,
            config.min_difference,
            config.alpha_threshold,
        )
    }

    /// Extract up to `max_colors` perceptually distinct dominant colors.
    ///
    /// Returns an ordered list, most frequent first. Every pair of
    /// returned entries is at least `min_difference` apart under the
    /// weighted distance metric. A buffer with no pixel above the alpha
    /// threshold yields an empty list.
    pub fn extract(&self, buffer: &PixelBuffer<'_>) -> Vec<DistinctColorEntry> {
        let mut bucket_index: HashMap<Rgb, usize> = HashMap::new();
        let mut buckets: Vec<(Rgb, u64)> = Vec::new();
        let mut valid_pixels: u64 = 0;

        for px in buffer.pixels() {
            if px.a < self.alpha_threshold {
                continue;
            }
            valid_pixels += 1;

            let quantized = quantize(Rgb::new(px.r, px.g, px.b), self.quant_step);
            match bucket_index.get(&quantized) {
                Some(&i) => buckets[i].1 += 1,
                None => {
                    bucket_index.insert(quantized, buckets.len());
                    buckets.push((quantized, 1));
                }
            }
        }

        if valid_pixels == 0 {
            return Vec::new();
        }

        // Stable sort: equal counts keep first-seen order
        buckets.sort_by(|a, b| b.1.cmp(&a.1));

        let candidates: Vec<DistinctColorEntry> = buckets
            .into_iter()
            .map(|(rgb, count)| DistinctColorEntry {
                sample: ColorSample::from_rgb(rgb),
                count,
                percentage: round2(count as f64 / valid_pixels as f64 * 100.0),
            })
            .collect();

        let distinct = self.filter_distinct(candidates);
        debug!(
            valid_pixels,
            distinct = distinct.len(),
            "extracted dominant colors"
        );
        distinct
    }

    /// Greedy distinctness filter over frequency-sorted candidates.
    ///
    /// O(candidates * max_colors) pairwise checks; `max_colors` is a
    /// small constant, so no spatial index is warranted.
    fn filter_distinct(&self, candidates: Vec<DistinctColorEntry>) -> Vec<DistinctColorEntry> {
        let mut distinct: Vec<DistinctColorEntry> = Vec::new();

        for candidate in candidates {
            if distinct.len() >= self.max_colors {
                break;
            }
            let is_distinct = distinct.iter().all(|kept| {
                color_difference(candidate.sample.rgb, kept.sample.rgb) >= self.min_difference
            });
            if distinct.is_empty() || is_distinct {
                distinct.push(candidate);
            }
        }

        distinct
    }
}

/// Snap each channel to the nearest multiple of `step`, clamped to 255
pub(crate) fn quantize(rgb: Rgb, step: u8) -> Rgb {
    let snap = |c: u8| {
        let step = step as f64;
        ((c as f64 / step).round() * step).min(255.0) as u8
    };
    Rgb::new(snap(rgb.r), snap(rgb.g), snap(rgb.b))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Orderings used to present an extracted color set as a gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientOrdering {
    /// Brightest first (HSV value, descending)
    Value,
    /// Most saturated first (HSL saturation, descending)
    Saturation,
    /// Around the color wheel (hue, ascending)
    Hue,
    /// Most frequent first (pixel count, descending)
    Frequency,
}

/// Reorder an extracted color set for gradient display.
///
/// Pure reorder: the input is untouched and ties keep their relative
/// order from it.
pub fn sort_colors(
    entries: &[DistinctColorEntry],
    ordering: GradientOrdering,
) -> Vec<DistinctColorEntry> {
    let mut sorted = entries.to_vec();
    match ordering {
        GradientOrdering::Value => sorted.sort_by(|a, b| b.sample.hsv.v.cmp(&a.sample.hsv.v)),
        GradientOrdering::Saturation => {
            sorted.sort_by(|a, b| b.sample.hsl.s.cmp(&a.sample.hsl.s))
        }
        GradientOrdering::Hue => sorted.sort_by(|a, b| a.sample.hsl.h.cmp(&b.sample.hsl.h)),
        GradientOrdering::Frequency => sorted.sort_by(|a, b| b.count.cmp(&a.count)),
    }
    sorted
}
