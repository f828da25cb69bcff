//! Configuration structures for the chroma_scan analysis pipeline.
//!
//! All tunable parameters for extraction and zone sampling, organized
//! into sections. Every section has sensible defaults, so callers can
//! start from `AnalyzerConfig::default()` and override selectively.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed
//! programmatically:
//!
//! ```no_run
//! use chroma_scan::AnalyzerConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = AnalyzerConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = AnalyzerConfig::default();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::{extraction, zones};

/// Complete analyzer configuration.
///
/// Can be serialized to/from JSON for reproducible runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Dominant color extraction parameters
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Zone sampling grid parameters
    #[serde(default)]
    pub zones: ZoneConfig,
}

/// Dominant color extraction parameters.
///
/// Controls the quantization resolution, the distinctness filter, and
/// how many colors the extractor reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Quantization step per channel; larger merges more shades
    pub quant_step: u8,

    /// Maximum number of distinct colors to report
    pub max_colors: usize,

    /// Minimum weighted distance between reported colors
    pub min_difference: f64,

    /// Pixels with alpha below this are ignored
    pub alpha_threshold: u8,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            quant_step: extraction::DEFAULT_QUANT_STEP,
            max_colors: extraction::DEFAULT_MAX_COLORS,
            min_difference: extraction::DEFAULT_MIN_DIFFERENCE,
            alpha_threshold: extraction::DEFAULT_ALPHA_THRESHOLD,
        }
    }
}

/// Zone sampling grid parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneConfig {
    /// Grid columns
    pub cols: u32,

    /// Grid rows
    pub rows: u32,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            cols: zones::DEFAULT_COLS,
            rows: zones::DEFAULT_ROWS,
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.extraction.quant_step, 20);
        assert_eq!(config.extraction.max_colors, 15);
        assert_eq!(config.extraction.min_difference, 25.0);
        assert_eq!(config.extraction.alpha_threshold, 128);
        assert_eq!(config.zones.cols, 3);
        assert_eq!(config.zones.rows, 2);
    }

    #[test]
    fn test_json_round_trip() {
        let config = AnalyzerConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AnalyzerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.extraction.quant_step, config.extraction.quant_step);
        assert_eq!(parsed.zones.cols, config.zones.cols);
    }

    #[test]
    fn test_partial_json_uses_section_defaults() {
        let parsed: AnalyzerConfig = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(parsed.extraction.max_colors, 15);
        assert_eq!(parsed.zones.rows, 2);
    }
}
