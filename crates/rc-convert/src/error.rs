//! Error types for image and figure conversion.

use thiserror::Error;

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors that can occur while converting a source into an embeddable image.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// File extension has no entry in the MIME table.
    #[error("unsupported image format '{extension}' (supported: {supported})")]
    UnsupportedFormat {
        extension: String,
        supported: String,
    },

    /// Pixel array has a rank or channel count that cannot be turned into an image.
    #[error("unsupported pixel array shape {shape:?}: {reason}")]
    Dimension { shape: Vec<usize>, reason: String },

    /// Exported raster buffer does not match the figure's pixel bounding box.
    #[error(
        "raster buffer of {len} bytes does not fit a {width}x{height} bounding box"
    )]
    ShapeMismatch {
        len: usize,
        width: u32,
        height: u32,
    },

    /// The figure's own export routine failed.
    #[error("figure export failed: {0}")]
    Export(String),

    /// Image encoding error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
