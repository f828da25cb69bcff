//! # chroma_scan
//!
//! A Rust crate for analyzing the colors of RGBA pixel buffers.
//!
//! This library provides:
//! - Color space conversions (RGB, HSL, HSV, hex) with integer-rounded
//!   display components
//! - Dominant color extraction via quantized histograms with a
//!   perceptual distinctness filter
//! - Zone grid and rectangle sampling with shadow-aware dominant colors
//! - Palette generation for the classic harmony schemes
//! - WCAG contrast ratios and conformance levels
//! - Temperature, psychology, and mood heuristics
//!
//! ## Example
//!
//! ```rust
//! use chroma_scan::{analyze, AnalyzerConfig, PixelBuffer};
//!
//! let data = [255u8, 0, 0, 255].repeat(4);
//! let buffer = PixelBuffer::new(2, 2, &data)?;
//! let report = analyze(&buffer, &AnalyzerConfig::default());
//! println!("{} dominant colors", report.colors.len());
//! # Ok::<(), chroma_scan::AnalysisError>(())
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod buffer;
pub mod color;
pub mod config;
pub mod constants;
pub mod contrast;
pub mod error;
pub mod extraction;
pub mod mood;
pub mod schemes;

pub use buffer::{PixelBuffer, Rect, Rgba};
pub use color::{ColorSample, Hsl, Hsv, Rgb};
pub use config::{AnalyzerConfig, ExtractionConfig, ZoneConfig};
pub use contrast::{ContrastRating, WcagLevel};
pub use error::{AnalysisError, Result};
pub use extraction::{DistinctColorEntry, DominantColorExtractor, Zone, ZoneSampler};
pub use mood::{PsychologyMode, TemperatureSummary};
pub use schemes::{Palette, Scheme};

/// Combined analysis of one pixel buffer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Dominant colors, most frequent first
    pub colors: Vec<DistinctColorEntry>,
    /// Zone grid samples in row-major order
    pub zones: Vec<Zone>,
    /// Temperature over the dominant colors; `None` when no color
    /// survives extraction
    pub temperature: Option<TemperatureSummary>,
}

/// Run the full analysis pipeline over a buffer.
///
/// Extracts dominant colors, samples the zone grid, and summarizes
/// temperature over the extracted colors. Individual stages degrade to
/// empty results on fully transparent or tiny buffers rather than
/// failing.
pub fn analyze(buffer: &PixelBuffer<'_>, config: &AnalyzerConfig) -> AnalysisReport {
    let colors = DominantColorExtractor::from_config(&config.extraction).extract(buffer);
    let zones = ZoneSampler::from_config(&config.zones).sample_zones(buffer);

    let samples: Vec<ColorSample> = colors.iter().map(|c| c.sample.clone()).collect();
    let temperature = mood::summarize_temperature(&samples);

    debug!(
        colors = colors.len(),
        zones = zones.len(),
        "analysis complete"
    );

    AnalysisReport {
        colors,
        zones,
        temperature,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_solid_buffer() {
        let data: Vec<u8> = std::iter::repeat([200u8, 40, 40, 255])
            .take(36)
            .flatten()
            .collect();
        let buffer = PixelBuffer::new(6, 6, &data).unwrap();

        let report = analyze(&buffer, &AnalyzerConfig::default());
        assert_eq!(report.colors.len(), 1);
        assert_eq!(report.zones.len(), 6);
        let temp = report.temperature.unwrap();
        assert!(temp.average > 0.0);
    }

    #[test]
    fn test_analyze_transparent_buffer() {
        let data = vec![0u8; 6 * 6 * 4];
        let buffer = PixelBuffer::new(6, 6, &data).unwrap();

        let report = analyze(&buffer, &AnalyzerConfig::default());
        assert!(report.colors.is_empty());
        assert!(report.zones.is_empty());
        assert!(report.temperature.is_none());
    }

    #[test]
    fn test_report_serialization() {
        let data: Vec<u8> = std::iter::repeat([10u8, 120, 230, 255])
            .take(36)
            .flatten()
            .collect();
        let buffer = PixelBuffer::new(6, 6, &data).unwrap();

        let report = analyze(&buffer, &AnalyzerConfig::default());
        let json = serde_json::to_string(&report).unwrap();
        let deserialized: AnalysisReport = serde_json::from_str(&json).unwrap();

        assert_eq!(report, deserialized);
    }
}
