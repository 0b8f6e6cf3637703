//! Static figures embedded as PNG images.

use super::image_tag;
use crate::error::Result;
use rc_convert::{EncodedImage, RasterFigure, RasterFormat, SaveOptions};
use tracing::debug;

/// A static figure exported to PNG and embedded as a base64 `<img>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomMatplotlib {
    pub(crate) name: String,
    pub(crate) html: String,
    image: EncodedImage,
}

/// Short alias for [`CustomMatplotlib`].
pub type CustomMpl = CustomMatplotlib;

impl CustomMatplotlib {
    pub fn new<F>(name: impl Into<String>, figure: &F) -> Result<Self>
    where
        F: RasterFigure + ?Sized,
    {
        Self::with_options(name, figure, &SaveOptions::default())
    }

    /// Wrap a figure, forwarding `options` to its PNG export.
    pub fn with_options<F>(name: impl Into<String>, figure: &F, options: &SaveOptions) -> Result<Self>
    where
        F: RasterFigure + ?Sized,
    {
        let name = name.into();
        let png = figure.save(RasterFormat::Png, options)?;
        let image = EncodedImage::from_png(&png);
        let html = image_tag(&image.url);
        debug!(name = %name, png_bytes = png.len(), "Wrapped static figure");
        Ok(Self { name, html, image })
    }

    /// Base64 PNG payload.
    pub fn image_str(&self) -> &str {
        &self.image.payload
    }

    /// `data:image/png;base64,...` URL.
    pub fn image_url(&self) -> &str {
        &self.image.url
    }
}
