//! Error types for the viewer core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`ViewerError`].
pub type Result<T> = std::result::Result<T, ViewerError>;

/// Primary error type.
#[derive(Debug, Error)]
pub enum ViewerError {
    // === Argument Errors ===
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown palette: {0}")]
    UnknownPalette(String),

    #[error("Palette '{name}' requires at least {required} shades, got {requested}")]
    TooFewShades { name: &'static str, required: usize, requested: usize },

    // === Navigation Errors ===
    #[error("Raster series is empty")]
    EmptySeries,

    #[error("Index {index} out of range for a series of {len} rasters")]
    IndexOutOfRange { index: usize, len: usize },

    // === Data Errors ===
    #[error("Failed to fetch raster '{}': {source}", .path.display())]
    Fetch { path: PathBuf, source: std::io::Error },

    #[error("Invalid raster metadata: {0}")]
    Metadata(String),

    #[error("Missing metadata field: {0}")]
    MissingMetadata(&'static str),

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Rendering failed: {0}")]
    Render(String),
}

impl From<tiff::TiffError> for ViewerError {
    fn from(err: tiff::TiffError) -> Self {
        ViewerError::Metadata(format!("TIFF error: {}", err))
    }
}

impl From<quick_xml::Error> for ViewerError {
    fn from(err: quick_xml::Error) -> Self {
        ViewerError::Metadata(format!("XML error: {}", err))
    }
}

impl From<serde_json::Error> for ViewerError {
    fn from(err: serde_json::Error) -> Self {
        ViewerError::Config(format!("JSON error: {}", err))
    }
}

impl From<image::ImageError> for ViewerError {
    fn from(err: image::ImageError) -> Self {
        ViewerError::Render(err.to_string())
    }
}
