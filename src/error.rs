//! Error types for the chroma_scan library

use thiserror::Error;

/// Result type alias for chroma_scan operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Error types for color analysis operations.
///
/// The engine deliberately keeps this enum small: unusable *content*
/// (fully transparent buffers, too-small regions, empty selections) yields
/// empty collections or `None` rather than an error. Only contract
/// breaches surface here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// Pixel data length does not match the declared dimensions
    #[error("invalid pixel buffer: {width}x{height} requires {expected} bytes, got {actual}")]
    InvalidBuffer {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Hex color string could not be parsed
    #[error("invalid color format: {0:?} is not a #rrggbb color")]
    InvalidColorFormat(String),
}

impl AnalysisError {
    /// Get a user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::InvalidBuffer { width, height, .. } => {
                format!(
                    "The image data does not match its declared {}x{} size.",
                    width, height
                )
            }
            AnalysisError::InvalidColorFormat(_) => {
                "That is not a valid hex color. Use the #rrggbb form.".to_string()
            }
        }
    }
}
