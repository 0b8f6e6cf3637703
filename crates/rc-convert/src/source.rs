//! Image sources and their resolution into base64 data URLs.

use crate::encode::{data_url_from_payload, encode_base64, encode_png, image_from_pixels, PNG_MIME};
use crate::error::Result;
use crate::mime::mime_type_for_path;

use image::DynamicImage;
use ndarray::{ArrayBase, ArrayViewD, Data, Dimension};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// An image source accepted by [`resolve_image_source`].
#[derive(Debug, Clone)]
pub enum ImageSource<'a> {
    /// Image file on disk, embedded byte-for-byte.
    Path(&'a Path),
    /// Decoded image, re-encoded as PNG.
    Image(&'a DynamicImage),
    /// Dense `(height, width)` or `(height, width, channels)` pixel array.
    Pixels(ArrayViewD<'a, u8>),
}

impl<'a> From<&'a Path> for ImageSource<'a> {
    fn from(path: &'a Path) -> Self {
        ImageSource::Path(path)
    }
}

impl<'a> From<&'a PathBuf> for ImageSource<'a> {
    fn from(path: &'a PathBuf) -> Self {
        ImageSource::Path(path.as_path())
    }
}

impl<'a> From<&'a str> for ImageSource<'a> {
    fn from(path: &'a str) -> Self {
        ImageSource::Path(Path::new(path))
    }
}

impl<'a> From<&'a DynamicImage> for ImageSource<'a> {
    fn from(image: &'a DynamicImage) -> Self {
        ImageSource::Image(image)
    }
}

impl<'a, S, D> From<&'a ArrayBase<S, D>> for ImageSource<'a>
where
    S: Data<Elem = u8>,
    D: Dimension,
{
    fn from(pixels: &'a ArrayBase<S, D>) -> Self {
        ImageSource::Pixels(pixels.view().into_dyn())
    }
}

impl ImageSource<'_> {
    /// Short label for the kind of source, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ImageSource::Path(_) => "path",
            ImageSource::Image(_) => "image",
            ImageSource::Pixels(_) => "pixels",
        }
    }
}

/// A base64 payload together with the data URL that embeds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedImage {
    /// `data:<mime>;base64,<payload>` URL.
    pub url: String,
    /// Base64 payload alone.
    pub payload: String,
}

impl EncodedImage {
    /// Encode raw bytes that are already in the format named by `mime`.
    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Self {
        let payload = encode_base64(bytes);
        Self {
            url: data_url_from_payload(mime, &payload),
            payload,
        }
    }

    /// Encode PNG bytes.
    pub fn from_png(bytes: &[u8]) -> Self {
        Self::from_bytes(PNG_MIME, bytes)
    }

    /// MIME segment of the data URL.
    pub fn mime(&self) -> &str {
        self.url
            .strip_prefix("data:")
            .and_then(|rest| rest.split(';').next())
            .unwrap_or_default()
    }
}

/// Resolve any image source into an embeddable base64 data URL.
///
/// Paths are embedded verbatim with the MIME type looked up from their
/// extension; the extension is checked before the file is opened. Decoded
/// images and pixel arrays are re-encoded as PNG. Nothing is written to disk
/// and the source is not retained.
pub fn resolve_image_source<'a>(source: impl Into<ImageSource<'a>>) -> Result<EncodedImage> {
    let source = source.into();
    debug!(kind = source.kind(), "Resolving image source");
    match source {
        ImageSource::Path(path) => {
            let mime = mime_type_for_path(path)?;
            let bytes = std::fs::read(path)?;
            debug!(path = %path.display(), bytes = bytes.len(), mime, "Read image file");
            Ok(EncodedImage::from_bytes(mime, &bytes))
        }
        ImageSource::Image(image) => Ok(EncodedImage::from_png(&encode_png(image)?)),
        ImageSource::Pixels(pixels) => {
            let image = image_from_pixels(pixels)?;
            Ok(EncodedImage::from_png(&encode_png(&image)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;
    use ndarray::Array3;

    #[test]
    fn test_encoded_image_mime() {
        let encoded = EncodedImage::from_bytes("image/svg+xml", b"<svg/>");
        assert_eq!(encoded.mime(), "image/svg+xml");
        assert!(encoded.url.ends_with(&encoded.payload));
    }

    #[test]
    fn test_unsupported_extension_checked_before_read() {
        let err = resolve_image_source("/nonexistent/figure.tiff").unwrap_err();
        assert!(matches!(err, ConvertError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = resolve_image_source("/nonexistent/figure.png").unwrap_err();
        assert!(matches!(err, ConvertError::Io(_)));
    }

    #[test]
    fn test_pixels_resolve_to_png_url() {
        let pixels = Array3::<u8>::from_elem((10, 10, 3), 200);
        let encoded = resolve_image_source(&pixels).unwrap();
        assert!(encoded.url.starts_with("data:image/png;base64,"));
        assert_eq!(encoded.mime(), "image/png");
    }

    #[test]
    fn test_source_kind_labels() {
        let image = DynamicImage::new_rgb8(1, 1);
        assert_eq!(ImageSource::from(&image).kind(), "image");
        assert_eq!(ImageSource::from("a.png").kind(), "path");
    }
}
