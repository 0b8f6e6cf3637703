//! Converters for embedding images in custom report sections.
//!
//! Every raster ends up as a base64 `data:` URL:
//!
//! - image files are embedded byte-for-byte with a MIME type taken from their extension
//! - decoded images and pixel arrays are re-encoded as PNG
//! - static figures are rasterized through the [`RasterFigure`] trait
//!
//! # Example
//!
//! ```
//! use ndarray::Array3;
//! use rc_convert::resolve_image_source;
//!
//! let pixels = Array3::<u8>::zeros((10, 10, 3));
//! let encoded = resolve_image_source(&pixels).unwrap();
//! assert!(encoded.url.starts_with("data:image/png;base64,"));
//! ```

pub mod encode;
pub mod error;
pub mod figure;
pub mod mime;
pub mod source;

pub use encode::{data_url, encode_base64, encode_png, image_from_pixels, PNG_MIME};
pub use error::{ConvertError, Result};
pub use figure::{
    render_figure_to_array, Canvas, RasterFigure, RasterFormat, SaveOptions, MAX_RASTER_PIXELS,
};
pub use mime::{mime_type_for_extension, mime_type_for_path, MIME_TYPES};
pub use source::{resolve_image_source, EncodedImage, ImageSource};
