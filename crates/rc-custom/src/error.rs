//! Error types for custom object construction.

use rc_convert::ConvertError;
use thiserror::Error;

/// Result type for custom object operations.
pub type Result<T> = std::result::Result<T, CustomError>;

/// Errors that can occur while building custom objects and sections.
#[derive(Error, Debug)]
pub enum CustomError {
    /// Image or figure conversion error.
    #[error(transparent)]
    Convert(#[from] ConvertError),

    /// Array has more axes than a table can hold.
    #[error("array must have 1 or 2 dimensions for a table, got {ndim}")]
    Dimension { ndim: usize },

    /// Tabular data is not rectangular.
    #[error("invalid table: {0}")]
    InvalidTable(String),

    /// Optional rendering dependency was not compiled in.
    #[error("'{dependency}' is not available; enable the '{feature}' feature to use {object_type} objects")]
    DependencyMissing {
        dependency: &'static str,
        feature: &'static str,
        object_type: &'static str,
    },

    /// Unknown or malformed pass-through options.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// Report context does not have the expected shape.
    #[error("invalid report context: {0}")]
    InvalidContext(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML configuration error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
