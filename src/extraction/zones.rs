//! Zone grid and rectangle sampling
//!
//! Grid mode partitions the buffer into equal cells and assigns each
//! cell one dominant color from a per-cell quantized histogram, with a
//! bias against letting thin shadows win over lit content. Rectangle
//! mode averages a user-selected region instead.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::buffer::{PixelBuffer, Rect, Rgba};
use crate::color::{luma, ColorSample, Rgb};
use crate::config::ZoneConfig;
use crate::constants::extraction::DEFAULT_ALPHA_THRESHOLD;
use crate::constants::zones::{
    DARK_LUMA_CUTOFF, DARK_ZONE_FRACTION, DEFAULT_COLS, DEFAULT_ROWS, MIN_REGION_EDGE,
    SHADOW_LUMA_FLOOR, ZONE_QUANT_STEP,
};
use crate::extraction::histogram::quantize;

/// One cell of the sampling grid with its dominant color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub col: u32,
    pub row: u32,
    /// Short position label: TL/TM/TR/BL/BM/BR on the default 3x2 grid,
    /// `r{row}c{col}` on other grid shapes
    pub label: String,
    pub sample: ColorSample,
}

/// Grid-based dominant color sampler
#[derive(Debug, Clone)]
pub struct ZoneSampler {
    cols: u32,
    rows: u32,
}

impl Default for ZoneSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoneSampler {
    /// Create a sampler with the default 3x2 grid
    pub fn new() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
        }
    }

    /// Create a sampler with a custom grid shape
    pub fn with_grid(cols: u32, rows: u32) -> Self {
        Self { cols, rows }
    }

    /// Create a sampler from a configuration section
    pub fn from_config(config: &ZoneConfig) -> Self {
        Self::with_grid(config.cols, config.rows)
    }

    /// Partition the buffer into `cols x rows` cells and compute one
    /// dominant color per cell.
    ///
    /// Cell sizes are integer divisions of the buffer dimensions;
    /// trailing remainder pixels are dropped. Cells with no valid pixel
    /// yield no entry, so the result can be shorter than `cols * rows`
    /// (or empty for buffers smaller than the grid).
    pub fn sample_zones(&self, buffer: &PixelBuffer<'_>) -> Vec<Zone> {
        if self.cols == 0 || self.rows == 0 {
            return Vec::new();
        }
        let zone_w = buffer.width() / self.cols;
        let zone_h = buffer.height() / self.rows;
        if zone_w == 0 || zone_h == 0 {
            return Vec::new();
        }

        let mut zones = Vec::with_capacity((self.cols * self.rows) as usize);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let rect = Rect::new(col * zone_w, row * zone_h, zone_w, zone_h);
                if let Some(rgb) = dominant_region_color(buffer.region_pixels(rect)) {
                    zones.push(Zone {
                        col,
                        row,
                        label: zone_label(col, row, self.cols, self.rows),
                        sample: ColorSample::from_rgb(rgb),
                    });
                }
            }
        }

        debug!(
            cols = self.cols,
            rows = self.rows,
            zones = zones.len(),
            "sampled zone grid"
        );
        zones
    }
}

/// Dominant color of a pixel run via a fine-grained quantized histogram.
///
/// Near-black buckets only win when the region is genuinely dark (at
/// least 60% near-black pixels) or nothing brighter exists; otherwise
/// the most frequent lit bucket is preferred so that shadows do not
/// swallow the cell.
fn dominant_region_color(pixels: impl Iterator<Item = Rgba>) -> Option<Rgb> {
    let mut bucket_index: std::collections::HashMap<Rgb, usize> = std::collections::HashMap::new();
    let mut buckets: Vec<(Rgb, u64)> = Vec::new();
    let mut total: u64 = 0;
    let mut dark: u64 = 0;

    for px in pixels {
        if px.a < DEFAULT_ALPHA_THRESHOLD {
            continue;
        }
        let q = quantize(Rgb::new(px.r, px.g, px.b), ZONE_QUANT_STEP);
        if luma(q) < DARK_LUMA_CUTOFF {
            dark += 1;
        }
        total += 1;
        match bucket_index.get(&q) {
            Some(&i) => buckets[i].1 += 1,
            None => {
                bucket_index.insert(q, buckets.len());
                buckets.push((q, 1));
            }
        }
    }

    if total == 0 {
        return None;
    }

    // Stable: equal counts keep first-seen order
    buckets.sort_by(|a, b| b.1.cmp(&a.1));

    let dark_fraction = dark as f64 / total as f64;
    if dark_fraction < DARK_ZONE_FRACTION {
        if let Some(&(rgb, _)) = buckets.iter().find(|(rgb, _)| luma(*rgb) >= SHADOW_LUMA_FLOOR) {
            return Some(rgb);
        }
    }

    // Region is genuinely dark, or nothing lit exists
    buckets.first().map(|&(rgb, _)| rgb)
}

/// Arithmetic mean color of a rectangular selection.
///
/// Pixels under the alpha threshold are excluded; the rectangle is
/// clipped to the buffer. Returns `None` for selections under 3x3
/// pixels (too small to be deliberate) or with no valid pixel.
pub fn sample_region_average(buffer: &PixelBuffer<'_>, rect: Rect) -> Option<ColorSample> {
    if rect.width < MIN_REGION_EDGE || rect.height < MIN_REGION_EDGE {
        return None;
    }

    let (mut r_sum, mut g_sum, mut b_sum) = (0u64, 0u64, 0u64);
    let mut count: u64 = 0;
    for px in buffer.region_pixels(rect) {
        if px.a < DEFAULT_ALPHA_THRESHOLD {
            continue;
        }
        r_sum += px.r as u64;
        g_sum += px.g as u64;
        b_sum += px.b as u64;
        count += 1;
    }

    if count == 0 {
        return None;
    }

    let mean = |sum: u64| (sum as f64 / count as f64).round() as u8;
    Some(ColorSample::from_rgb(Rgb::new(
        mean(r_sum),
        mean(g_sum),
        mean(b_sum),
    )))
}

/// Position label for a grid cell
fn zone_label(col: u32, row: u32, cols: u32, rows: u32) -> String {
    if cols == 3 && rows == 2 {
        const LABELS: [&str; 6] = ["TL", "TM", "TR", "BL", "BM", "BR"];
        LABELS[(row * 3 + col) as usize].to_string()
    } else {
        format!("r{}c{}", row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Buffer painted from per-pixel closures
    fn paint(width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 4]) -> Vec<u8> {
        let mut data = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        data
    }

    #[test]
    fn test_default_grid_labels() {
        // Six 2x2 cells, each a distinct flat color
        let cell_colors: [[u8; 4]; 6] = [
            [240, 0, 0, 255],
            [0, 240, 0, 255],
            [0, 0, 240, 255],
            [240, 240, 0, 255],
            [0, 240, 240, 255],
            [240, 0, 240, 255],
        ];
        let data = paint(6, 4, |x, y| {
            let cell = (y / 2) * 3 + x / 2;
            cell_colors[cell as usize]
        });
        let buffer = PixelBuffer::new(6, 4, &data).unwrap();

        let zones = ZoneSampler::new().sample_zones(&buffer);
        assert_eq!(zones.len(), 6);
        let labels: Vec<&str> = zones.iter().map(|z| z.label.as_str()).collect();
        assert_eq!(labels, ["TL", "TM", "TR", "BL", "BM", "BR"]);
        assert_eq!(zones[0].sample.rgb, Rgb::new(240, 0, 0));
        assert_eq!(zones[5].sample.rgb, Rgb::new(240, 0, 240));
        assert_eq!((zones[4].col, zones[4].row), (1, 1));
    }

    #[test]
    fn test_custom_grid_labels() {
        let data = paint(4, 4, |_, _| [100, 100, 100, 255]);
        let buffer = PixelBuffer::new(4, 4, &data).unwrap();

        let zones = ZoneSampler::with_grid(2, 2).sample_zones(&buffer);
        assert_eq!(zones.len(), 4);
        assert_eq!(zones[0].label, "r0c0");
        assert_eq!(zones[3].label, "r1c1");
    }

    #[test]
    fn test_buffer_smaller_than_grid() {
        let data = paint(2, 1, |_, _| [10, 10, 10, 255]);
        let buffer = PixelBuffer::new(2, 1, &data).unwrap();
        assert!(ZoneSampler::new().sample_zones(&buffer).is_empty());
    }

    #[test]
    fn test_transparent_cells_skipped() {
        // Left half opaque, right half fully transparent
        let data = paint(6, 4, |x, _| {
            if x < 3 {
                [50, 100, 150, 255]
            } else {
                [0, 0, 0, 0]
            }
        });
        let buffer = PixelBuffer::new(6, 4, &data).unwrap();

        let zones = ZoneSampler::new().sample_zones(&buffer);
        // TR and BR are fully transparent; TM/BM cells straddle the edge
        // but keep their opaque pixels
        assert!(zones.iter().all(|z| z.label != "TR" && z.label != "BR"));
        assert!(zones.iter().any(|z| z.label == "TL"));
    }

    #[test]
    fn test_shadow_plurality_does_not_win() {
        // Near-black is the most frequent bucket (5 of 9 pixels) but
        // stays under the 60% dark fraction, so the lit bucket wins
        let data = paint(9, 1, |x, _| {
            if x < 5 {
                [0, 0, 0, 255]
            } else {
                [0, 160, 0, 255]
            }
        });
        let buffer = PixelBuffer::new(9, 1, &data).unwrap();

        let rgb = dominant_region_color(buffer.pixels()).unwrap();
        assert_eq!(rgb, Rgb::new(0, 160, 0));
    }

    #[test]
    fn test_genuinely_dark_region_keeps_black() {
        // 70% near-black beats a lit minority
        let data = paint(10, 1, |x, _| {
            if x < 7 {
                [0, 0, 0, 255]
            } else {
                [0, 160, 0, 255]
            }
        });
        let buffer = PixelBuffer::new(10, 1, &data).unwrap();

        let rgb = dominant_region_color(buffer.pixels()).unwrap();
        assert_eq!(rgb, Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_region_average_uniform() {
        let data = paint(8, 8, |_, _| [12, 34, 56, 255]);
        let buffer = PixelBuffer::new(8, 8, &data).unwrap();

        let sample = sample_region_average(&buffer, Rect::new(1, 1, 5, 5)).unwrap();
        assert_eq!(sample.rgb, Rgb::new(12, 34, 56));
        assert_eq!(sample.hex, "#0c2238");
    }

    #[test]
    fn test_region_average_mixes() {
        // Half white, half black selection averages to mid gray
        let data = paint(4, 4, |x, _| {
            if x < 2 {
                [255, 255, 255, 255]
            } else {
                [0, 0, 0, 255]
            }
        });
        let buffer = PixelBuffer::new(4, 4, &data).unwrap();

        let sample = sample_region_average(&buffer, Rect::new(0, 0, 4, 4)).unwrap();
        assert_eq!(sample.rgb, Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_region_average_too_small() {
        let data = paint(8, 8, |_, _| [12, 34, 56, 255]);
        let buffer = PixelBuffer::new(8, 8, &data).unwrap();

        assert!(sample_region_average(&buffer, Rect::new(0, 0, 2, 5)).is_none());
        assert!(sample_region_average(&buffer, Rect::new(0, 0, 5, 2)).is_none());
    }

    #[test]
    fn test_region_average_no_valid_pixels() {
        let data = paint(8, 8, |_, _| [12, 34, 56, 0]);
        let buffer = PixelBuffer::new(8, 8, &data).unwrap();

        assert!(sample_region_average(&buffer, Rect::new(0, 0, 4, 4)).is_none());
        // Off-buffer selection clips to nothing
        assert!(sample_region_average(&buffer, Rect::new(20, 20, 4, 4)).is_none());
    }
}
