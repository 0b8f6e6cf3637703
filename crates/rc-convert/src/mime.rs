//! File extension to MIME type table for pass-through image files.

use crate::error::{ConvertError, Result};
use std::path::Path;

/// Extensions accepted for image files, with their MIME types.
pub const MIME_TYPES: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("svg", "image/svg+xml"),
    ("apng", "image/apng"),
    ("avif", "image/avif"),
    ("gif", "image/gif"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("webp", "image/webp"),
];

/// Look up the MIME type for a file extension (without the leading dot).
///
/// Matching ignores ASCII case, so `PNG` and `png` resolve identically.
pub fn mime_type_for_extension(extension: &str) -> Result<&'static str> {
    MIME_TYPES
        .iter()
        .find(|(ext, _)| ext.eq_ignore_ascii_case(extension))
        .map(|(_, mime)| *mime)
        .ok_or_else(|| unsupported(extension))
}

/// Look up the MIME type for a path from the text after the last `.` of its file name.
pub fn mime_type_for_path(path: &Path) -> Result<&'static str> {
    let extension = path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext)
        .unwrap_or_default();
    mime_type_for_extension(extension)
}

fn unsupported(extension: &str) -> ConvertError {
    ConvertError::UnsupportedFormat {
        extension: extension.to_string(),
        supported: MIME_TYPES
            .iter()
            .map(|(ext, _)| *ext)
            .collect::<Vec<_>>()
            .join(", "),
    }
}
