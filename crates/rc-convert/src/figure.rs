//! Static figure rasterization.
//!
//! [`RasterFigure`] is the seam for plotting backends that can render a
//! figure to pixels. [`Canvas`] is a ready-made implementation wrapping an
//! already rendered RGBA raster, which covers any backend able to draw into
//! a bitmap.

use crate::encode::{encode_png, image_from_pixels};
use crate::error::{ConvertError, Result};

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};
use ndarray::{Array3, ArrayViewD};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Output format requested from a figure export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RasterFormat {
    /// PNG-encoded bytes.
    Png,
    /// Uncompressed row-major pixel buffer, one byte per channel.
    Raw,
}

/// Options forwarded to a figure's export routine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaveOptions {
    /// Output resolution; `None` means the figure's own dpi.
    #[serde(default)]
    pub dpi: Option<f64>,
    /// Keep the alpha channel instead of flattening onto white.
    #[serde(default)]
    pub transparent: bool,
    /// Backend-specific options passed through untouched.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl SaveOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output dpi.
    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = Some(dpi);
        self
    }

    /// Keep transparency.
    pub fn with_transparent(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }

    /// Add a backend-specific option.
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// A figure that can export itself as a raster.
pub trait RasterFigure {
    /// The figure's own resolution in dots per inch.
    fn dpi(&self) -> f64;

    /// Pixel bounding box `(width, height)` at the figure's own dpi.
    fn pixel_size(&self) -> (u32, u32);

    /// Export the figure in the requested format.
    fn save(&self, format: RasterFormat, options: &SaveOptions) -> Result<Vec<u8>>;
}

/// Render a figure into a `(height, width, channels)` pixel array.
///
/// The dpi defaults to the figure's own. The raw buffer is reshaped with the
/// figure's reported bounding box; a buffer that does not split into whole
/// pixels of 1 to 4 channels is a [`ConvertError::ShapeMismatch`].
pub fn render_figure_to_array<F>(figure: &F, options: &SaveOptions) -> Result<Array3<u8>>
where
    F: RasterFigure + ?Sized,
{
    let mut options = options.clone();
    if options.dpi.is_none() {
        options.dpi = Some(figure.dpi());
    }

    let buffer = figure.save(RasterFormat::Raw, &options)?;
    let (width, height) = figure.pixel_size();
    let mismatch = |len| ConvertError::ShapeMismatch { len, width, height };

    let pixels = width as usize * height as usize;
    if pixels == 0 || buffer.len() % pixels != 0 {
        return Err(mismatch(buffer.len()));
    }
    let channels = buffer.len() / pixels;
    if !(1..=4).contains(&channels) {
        return Err(mismatch(buffer.len()));
    }

    let len = buffer.len();
    debug!(width, height, channels, "Rendered figure to array");
    Array3::from_shape_vec((height as usize, width as usize, channels), buffer)
        .map_err(|_| mismatch(len))
}

/// A pre-rendered RGBA raster with a nominal resolution.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: RgbaImage,
    dpi: f64,
}

/// Resolution used when a canvas is created without one.
pub const DEFAULT_DPI: f64 = 100.0;

/// Largest raster, in pixels, a canvas export may produce.
pub const MAX_RASTER_PIXELS: u64 = 1 << 26;

impl Canvas {
    /// Wrap an RGBA image rendered at `dpi`.
    pub fn new(pixels: RgbaImage, dpi: f64) -> Self {
        Self { pixels, dpi }
    }

    /// Wrap an RGBA image at [`DEFAULT_DPI`].
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self::new(pixels, DEFAULT_DPI)
    }

    /// Build a canvas from a pixel array, see [`image_from_pixels`].
    pub fn from_pixels(pixels: ArrayViewD<'_, u8>, dpi: f64) -> Result<Self> {
        Ok(Self::new(image_from_pixels(pixels)?.to_rgba8(), dpi))
    }

    /// Underlying pixels.
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    fn rasterize(&self, options: &SaveOptions) -> Result<RgbaImage> {
        let dpi = options.dpi.unwrap_or(self.dpi);
        if !(dpi.is_finite() && dpi > 0.0) || !(self.dpi.is_finite() && self.dpi > 0.0) {
            return Err(ConvertError::Export(format!("invalid dpi {dpi}")));
        }

        let mut out = if (dpi - self.dpi).abs() < f64::EPSILON {
            self.pixels.clone()
        } else {
            let (nw, nh) = scaled_size(self.pixels.dimensions(), dpi / self.dpi)?;
            imageops::resize(&self.pixels, nw, nh, FilterType::Triangle)
        };

        if !options.transparent {
            flatten_onto_white(&mut out);
        }
        Ok(out)
    }
}

impl RasterFigure for Canvas {
    fn dpi(&self) -> f64 {
        self.dpi
    }

    fn pixel_size(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    fn save(&self, format: RasterFormat, options: &SaveOptions) -> Result<Vec<u8>> {
        let raster = self.rasterize(options)?;
        match format {
            RasterFormat::Raw => Ok(raster.into_raw()),
            RasterFormat::Png => encode_png(&DynamicImage::ImageRgba8(raster)),
        }
    }
}

/// Target size of a rescaled raster, bounded by [`MAX_RASTER_PIXELS`].
fn scaled_size((w, h): (u32, u32), scale: f64) -> Result<(u32, u32)> {
    let side = |len: u32| {
        let scaled = (len as f64 * scale).round().max(1.0);
        if scaled <= u32::MAX as f64 {
            Some(scaled as u32)
        } else {
            None
        }
    };
    let too_large =
        || ConvertError::Export(format!("raster of {w}x{h} scaled by {scale} is too large"));

    let (Some(nw), Some(nh)) = (side(w), side(h)) else {
        return Err(too_large());
    };
    match (nw as u64).checked_mul(nh as u64) {
        Some(pixels) if pixels <= MAX_RASTER_PIXELS => Ok((nw, nh)),
        _ => Err(too_large()),
    }
}

fn flatten_onto_white(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        let alpha = a as u32;
        let blend = |c: u8| ((c as u32 * alpha + 255 * (255 - alpha) + 127) / 255) as u8;
        pixel.0 = [blend(r), blend(g), blend(b), 255];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn canvas(w: u32, h: u32) -> Canvas {
        Canvas::new(RgbaImage::from_pixel(w, h, Rgba([10, 20, 30, 255])), 72.0)
    }

    #[test]
    fn test_array_shape_matches_bounding_box() {
        let array = render_figure_to_array(&canvas(8, 5), &SaveOptions::new()).unwrap();
        assert_eq!(array.shape(), &[5, 8, 4]);
        assert_eq!(array[[4, 7, 0]], 10);
    }

    #[test]
    fn test_explicit_matching_dpi_is_accepted() {
        let array =
            render_figure_to_array(&canvas(3, 3), &SaveOptions::new().with_dpi(72.0)).unwrap();
        assert_eq!(array.shape(), &[3, 3, 4]);
    }

    #[test]
    fn test_different_dpi_is_shape_mismatch() {
        let err =
            render_figure_to_array(&canvas(4, 4), &SaveOptions::new().with_dpi(144.0)).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::ShapeMismatch { len: 256, width: 4, height: 4 }
        ));
    }

    #[test]
    fn test_flatten_transparent_pixels_onto_white() {
        let figure = Canvas::new(RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 0])), 72.0);
        let raw = figure.save(RasterFormat::Raw, &SaveOptions::new()).unwrap();
        assert_eq!(raw, vec![255, 255, 255, 255]);

        let kept = figure
            .save(RasterFormat::Raw, &SaveOptions::new().with_transparent(true))
            .unwrap();
        assert_eq!(kept, vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_png_export_rescales_with_dpi() {
        let png = canvas(10, 10)
            .save(RasterFormat::Png, &SaveOptions::new().with_dpi(36.0))
            .unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (5, 5));
    }

    #[test]
    fn test_invalid_dpi_rejected() {
        let err = canvas(2, 2)
            .save(RasterFormat::Raw, &SaveOptions::new().with_dpi(0.0))
            .unwrap_err();
        assert!(matches!(err, ConvertError::Export(_)));
    }

    #[test]
    fn test_huge_dpi_is_export_error() {
        let figure = Canvas::new(RgbaImage::new(10, 10), 100.0);
        let err = render_figure_to_array(&figure, &SaveOptions::new().with_dpi(1e12)).unwrap_err();
        assert!(matches!(err, ConvertError::Export(_)));

        let err = figure
            .save(RasterFormat::Png, &SaveOptions::new().with_dpi(1e300))
            .unwrap_err();
        assert!(matches!(err, ConvertError::Export(_)));
    }

    #[test]
    fn test_scaled_size_bounds() {
        assert_eq!(scaled_size((10, 4), 0.5).unwrap(), (5, 2));
        assert_eq!(scaled_size((3, 3), 0.01).unwrap(), (1, 1));
        assert!(scaled_size((8192, 8192), 1.0).is_ok());
        assert!(scaled_size((8192, 8192), 1.01).is_err());
    }

    #[test]
    fn test_from_pixels_round_trips_through_array() {
        let mut pixels = ndarray::Array3::<u8>::zeros((2, 3, 3));
        pixels[[1, 2, 0]] = 200;
        let figure = Canvas::from_pixels(pixels.view().into_dyn(), 50.0).unwrap();
        assert_eq!(figure.pixel_size(), (3, 2));

        let array = render_figure_to_array(&figure, &SaveOptions::new()).unwrap();
        assert_eq!(array.shape(), &[2, 3, 4]);
        assert_eq!(array[[1, 2, 0]], 200);
        assert_eq!(array[[1, 2, 3]], 255);
    }

    struct Broken;

    impl RasterFigure for Broken {
        fn dpi(&self) -> f64 {
            100.0
        }
        fn pixel_size(&self) -> (u32, u32) {
            (3, 2)
        }
        fn save(&self, _: RasterFormat, options: &SaveOptions) -> Result<Vec<u8>> {
            assert_eq!(options.dpi, Some(100.0));
            Ok(vec![0; 7])
        }
    }

    #[test]
    fn test_truncated_buffer_is_shape_mismatch() {
        assert!(matches!(
            render_figure_to_array(&Broken, &SaveOptions::new()),
            Err(ConvertError::ShapeMismatch { len: 7, .. })
        ));
    }
}
