//! Custom sections for generated data-analysis reports.
//!
//! Wrap plots, images, tables, HTML fragments and markdown as self-contained
//! HTML, group them into titled [`Section`]s and merge those into the context
//! handed to the report renderer.
//!
//! # Object variants
//!
//! - [`CustomPlotly`]: interactive plotly figure, exported through the figure's own HTML export
//! - [`CustomHtml`]: raw HTML, passed through untouched
//! - [`CustomMarkdown`]: markdown rendered to HTML (feature `markdown`)
//! - [`CustomDataPrep`]: any [`ReprHtml`] report container
//! - [`CustomMatplotlib`]: static figure embedded as a PNG `<img>`
//! - [`CustomImage`]: image file, decoded image or pixel array as an `<img>`
//! - [`CustomTable`]: [`DataFrame`] or 1-D/2-D array as an HTML table
//!
//! # Example
//!
//! ```
//! use ndarray::arr2;
//! use rc_custom::{add_section, new_context, CustomHtml, CustomTable, Section};
//!
//! let mut section = Section::new("Appendix");
//! section
//!     .append(CustomHtml::new("note", "<p>Collected on site.</p>"))
//!     .append(CustomTable::new("scores", &arr2(&[[1.0, 2.0], [3.0, 4.0]])).unwrap());
//!
//! let mut context = new_context();
//! add_section(&mut context, &section).unwrap();
//! assert_eq!(context["components"]["has_customsections"], true);
//! ```

pub mod builder;
pub mod config;
pub mod context;
pub mod error;
pub mod frame;
pub mod logging;
pub mod objects;
pub mod section;
pub mod theme;

pub use builder::CustomBuilder;
pub use config::CustomConfig;
pub use context::{add_section, merge_section, new_context, Context};
pub use error::{CustomError, Result};
pub use frame::{DataFrame, TableCell, TableOptions};
pub use objects::{
    CustomDataPrep, CustomHtml, CustomImage, CustomMarkdown, CustomMatplotlib, CustomMpl,
    CustomObject, CustomPlotly, CustomTable, IntoCustomObjects, MarkdownOptions, ObjectType,
    PlotlyHtmlOptions, ReprHtml, TableSource, IMAGE_CSS_CLASS,
};
pub use section::Section;

pub use rc_convert::{
    render_figure_to_array, resolve_image_source, Canvas, ConvertError, EncodedImage,
    ImageSource, RasterFigure, RasterFormat, SaveOptions,
};
