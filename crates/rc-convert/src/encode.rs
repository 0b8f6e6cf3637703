//! PNG and base64 data-URL encoding.

use crate::error::{ConvertError, Result};
use base64::Engine;
use image::{DynamicImage, GrayAlphaImage, GrayImage, ImageFormat, RgbImage, RgbaImage};
use ndarray::ArrayViewD;
use std::io::Cursor;

/// MIME type of every re-encoded raster.
pub const PNG_MIME: &str = "image/png";

/// Base64-encode bytes with the standard padded alphabet.
pub fn encode_base64(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

/// Build a `data:<mime>;base64,<payload>` URL from an already encoded payload.
pub fn data_url_from_payload(mime: &str, payload: &str) -> String {
    format!("data:{mime};base64,{payload}")
}

/// Build a base64 data URL for raw bytes.
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    data_url_from_payload(mime, &encode_base64(bytes))
}

/// Encode an image as PNG in memory.
pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Build an image from a dense pixel array.
///
/// Rank 2 arrays are `(height, width)` grayscale. Rank 3 arrays are
/// `(height, width, channels)` with 1 (gray), 2 (gray + alpha), 3 (RGB) or
/// 4 (RGBA) channels. Pixel values are taken as-is.
pub fn image_from_pixels(pixels: ArrayViewD<'_, u8>) -> Result<DynamicImage> {
    let shape = pixels.shape().to_vec();
    let dims = match shape.as_slice() {
        [h, w] => Some((*h, *w, 1)),
        [h, w, c] => Some((*h, *w, *c)),
        _ => None,
    };
    let Some((height, width, channels)) = dims else {
        return Err(ConvertError::Dimension {
            reason: format!("expected 2 or 3 axes, got {}", shape.len()),
            shape,
        });
    };

    let (Ok(w), Ok(h)) = (u32::try_from(width), u32::try_from(height)) else {
        return Err(ConvertError::Dimension {
            shape,
            reason: "image dimensions exceed u32".to_string(),
        });
    };

    // Logical (row-major) order regardless of the array's memory layout.
    let raw: Vec<u8> = pixels.iter().copied().collect();

    let image = match channels {
        1 => GrayImage::from_raw(w, h, raw).map(DynamicImage::ImageLuma8),
        2 => GrayAlphaImage::from_raw(w, h, raw).map(DynamicImage::ImageLumaA8),
        3 => RgbImage::from_raw(w, h, raw).map(DynamicImage::ImageRgb8),
        4 => RgbaImage::from_raw(w, h, raw).map(DynamicImage::ImageRgba8),
        _ => {
            return Err(ConvertError::Dimension {
                shape,
                reason: format!("expected 1 to 4 channels, got {channels}"),
            })
        }
    };

    image.ok_or_else(|| ConvertError::Dimension {
        shape,
        reason: "pixel buffer smaller than image bounds".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, Array3, Array4};

    #[test]
    fn test_data_url_uses_semicolon_separator() {
        let url = data_url("image/gif", b"GIF89a");
        assert_eq!(url, "data:image/gif;base64,R0lGODlh");
    }

    #[test]
    fn test_encode_png_has_signature() {
        let image = DynamicImage::ImageRgb8(RgbImage::new(2, 2));
        let bytes = encode_png(&image).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_pixels_rank2_is_grayscale() {
        let pixels = Array2::<u8>::from_elem((3, 5), 128);
        let image = image_from_pixels(pixels.view().into_dyn()).unwrap();
        assert!(matches!(image, DynamicImage::ImageLuma8(_)));
        assert_eq!((image.width(), image.height()), (5, 3));
    }

    #[test]
    fn test_pixels_channel_mapping() {
        let rgb = Array3::<u8>::zeros((4, 4, 3));
        assert!(matches!(
            image_from_pixels(rgb.view().into_dyn()).unwrap(),
            DynamicImage::ImageRgb8(_)
        ));

        let rgba = Array3::<u8>::zeros((4, 4, 4));
        assert!(matches!(
            image_from_pixels(rgba.view().into_dyn()).unwrap(),
            DynamicImage::ImageRgba8(_)
        ));

        let gray_alpha = Array3::<u8>::zeros((4, 4, 2));
        assert!(matches!(
            image_from_pixels(gray_alpha.view().into_dyn()).unwrap(),
            DynamicImage::ImageLumaA8(_)
        ));
    }

    #[test]
    fn test_pixels_values_preserved() {
        let mut pixels = Array3::<u8>::zeros((1, 2, 3));
        pixels[[0, 1, 0]] = 255;
        pixels[[0, 1, 2]] = 7;
        let image = image_from_pixels(pixels.view().into_dyn()).unwrap().to_rgb8();
        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0]);
        assert_eq!(image.get_pixel(1, 0).0, [255, 0, 7]);
    }

    #[test]
    fn test_pixels_transposed_view_uses_logical_order() {
        let mut pixels = Array2::<u8>::zeros((2, 3));
        pixels[[0, 2]] = 9;
        let transposed = pixels.t();
        let image = image_from_pixels(transposed.into_dyn()).unwrap().to_luma8();
        assert_eq!((image.width(), image.height()), (2, 3));
        assert_eq!(image.get_pixel(0, 2).0, [9]);
    }

    #[test]
    fn test_pixels_bad_rank_rejected() {
        let pixels = Array4::<u8>::zeros((2, 2, 2, 3));
        assert!(matches!(
            image_from_pixels(pixels.view().into_dyn()),
            Err(ConvertError::Dimension { .. })
        ));
    }

    #[test]
    fn test_pixels_bad_channels_rejected() {
        let pixels = Array3::<u8>::zeros((2, 2, 5));
        let err = image_from_pixels(pixels.view().into_dyn()).unwrap_err();
        assert!(err.to_string().contains("5"));
    }
}
