//! Raster images from files, decoded images or pixel arrays.

use super::image_tag;
use crate::error::Result;
use rc_convert::{resolve_image_source, EncodedImage, ImageSource};
use tracing::debug;

/// An image embedded as a base64 `<img>`.
///
/// Files keep their own format and MIME type; decoded images and pixel
/// arrays are re-encoded as PNG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomImage {
    pub(crate) name: String,
    pub(crate) html: String,
    image: EncodedImage,
}

impl CustomImage {
    pub fn new<'a>(name: impl Into<String>, source: impl Into<ImageSource<'a>>) -> Result<Self> {
        let name = name.into();
        let source = source.into();
        let kind = source.kind();
        let image = resolve_image_source(source)?;
        let html = image_tag(&image.url);
        debug!(name = %name, source = kind, mime = image.mime(), "Wrapped image");
        Ok(Self { name, html, image })
    }

    /// Base64 payload.
    pub fn image_str(&self) -> &str {
        &self.image.payload
    }

    /// Data URL embedding the image.
    pub fn image_url(&self) -> &str {
        &self.image.url
    }
}
