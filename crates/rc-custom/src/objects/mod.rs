//! Wrapped objects.
//!
//! Each variant takes a source object, converts it to a self-contained HTML
//! fragment at construction time and keeps it alongside a display name and an
//! [`ObjectType`] tag. Nothing about a wrapped object changes afterwards.

pub mod dataprep;
pub mod html;
pub mod image;
pub mod markdown;
pub mod matplotlib;
pub mod plotly;
pub mod table;

pub use self::dataprep::{CustomDataPrep, ReprHtml};
pub use self::html::CustomHtml;
pub use self::image::CustomImage;
pub use self::markdown::{render_markdown, CustomMarkdown, MarkdownOptions};
pub use self::matplotlib::{CustomMatplotlib, CustomMpl};
pub use self::plotly::{CustomPlotly, PlotlyHtmlOptions};
pub use self::table::{CustomTable, TableSource};

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// CSS class carried by every embedded raster.
pub const IMAGE_CSS_CLASS: &str = "custom-image";

/// Tag identifying which variant produced a wrapped object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    Plotly,
    Html,
    Markdown,
    DataPrep,
    Matplotlib,
    Image,
    Table,
}

impl ObjectType {
    /// Get the tag as it appears in the report context.
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Plotly => "plotly",
            ObjectType::Html => "html",
            ObjectType::Markdown => "markdown",
            ObjectType::DataPrep => "dataprep",
            ObjectType::Matplotlib => "matplotlib",
            ObjectType::Image => "image",
            ObjectType::Table => "table",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `<img>` tag for an embedded raster.
pub(crate) fn image_tag(url: &str) -> String {
    format!(r#"<img class="{IMAGE_CSS_CLASS}" src="{url}" />"#)
}

/// Any wrapped object.
#[derive(Debug)]
pub enum CustomObject {
    Plotly(CustomPlotly),
    Html(CustomHtml),
    Markdown(CustomMarkdown),
    DataPrep(CustomDataPrep),
    Matplotlib(CustomMatplotlib),
    Image(CustomImage),
    Table(CustomTable),
}

impl CustomObject {
    /// Display label.
    pub fn name(&self) -> &str {
        match self {
            CustomObject::Plotly(o) => o.name(),
            CustomObject::Html(o) => o.name(),
            CustomObject::Markdown(o) => o.name(),
            CustomObject::DataPrep(o) => o.name(),
            CustomObject::Matplotlib(o) => o.name(),
            CustomObject::Image(o) => o.name(),
            CustomObject::Table(o) => o.name(),
        }
    }

    /// Variant tag.
    pub fn object_type(&self) -> ObjectType {
        match self {
            CustomObject::Plotly(_) => ObjectType::Plotly,
            CustomObject::Html(_) => ObjectType::Html,
            CustomObject::Markdown(_) => ObjectType::Markdown,
            CustomObject::DataPrep(_) => ObjectType::DataPrep,
            CustomObject::Matplotlib(_) => ObjectType::Matplotlib,
            CustomObject::Image(_) => ObjectType::Image,
            CustomObject::Table(_) => ObjectType::Table,
        }
    }

    /// Rendered HTML fragment.
    pub fn html(&self) -> &str {
        match self {
            CustomObject::Plotly(o) => o.html(),
            CustomObject::Html(o) => o.html(),
            CustomObject::Markdown(o) => o.html(),
            CustomObject::DataPrep(o) => o.html(),
            CustomObject::Matplotlib(o) => o.html(),
            CustomObject::Image(o) => o.html(),
            CustomObject::Table(o) => o.html(),
        }
    }

    /// Data URL of the embedded raster, for image and matplotlib objects.
    pub fn image_url(&self) -> Option<&str> {
        match self {
            CustomObject::Matplotlib(o) => Some(o.image_url()),
            CustomObject::Image(o) => Some(o.image_url()),
            _ => None,
        }
    }
}

#[derive(Serialize)]
struct ObjectRecord<'a> {
    name: &'a str,
    object_type: ObjectType,
    html: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_url: Option<&'a str>,
}

impl Serialize for CustomObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ObjectRecord {
            name: self.name(),
            object_type: self.object_type(),
            html: self.html(),
            image_url: self.image_url(),
        }
        .serialize(serializer)
    }
}

/// Anything that can be appended to a section: one object, several, or none.
pub trait IntoCustomObjects {
    fn into_custom_objects(self) -> Vec<CustomObject>;
}

impl IntoCustomObjects for CustomObject {
    fn into_custom_objects(self) -> Vec<CustomObject> {
        vec![self]
    }
}

impl IntoCustomObjects for Vec<CustomObject> {
    fn into_custom_objects(self) -> Vec<CustomObject> {
        self
    }
}

impl<const N: usize> IntoCustomObjects for [CustomObject; N] {
    fn into_custom_objects(self) -> Vec<CustomObject> {
        Vec::from(self)
    }
}

impl IntoCustomObjects for Option<CustomObject> {
    fn into_custom_objects(self) -> Vec<CustomObject> {
        self.into_iter().collect()
    }
}

macro_rules! wrapped_variant {
    ($ty:ident, $variant:ident) => {
        impl $ty {
            /// Display label.
            pub fn name(&self) -> &str {
                &self.name
            }

            /// Variant tag.
            pub fn object_type(&self) -> ObjectType {
                ObjectType::$variant
            }

            /// Rendered HTML fragment.
            pub fn html(&self) -> &str {
                &self.html
            }
        }

        impl From<$ty> for CustomObject {
            fn from(object: $ty) -> Self {
                CustomObject::$variant(object)
            }
        }

        impl IntoCustomObjects for $ty {
            fn into_custom_objects(self) -> Vec<CustomObject> {
                vec![CustomObject::$variant(self)]
            }
        }
    };
}

wrapped_variant!(CustomPlotly, Plotly);
wrapped_variant!(CustomHtml, Html);
wrapped_variant!(CustomMarkdown, Markdown);
wrapped_variant!(CustomDataPrep, DataPrep);
wrapped_variant!(CustomMatplotlib, Matplotlib);
wrapped_variant!(CustomImage, Image);
wrapped_variant!(CustomTable, Table);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_type_tags() {
        let tags: Vec<String> = [
            ObjectType::Plotly,
            ObjectType::Html,
            ObjectType::Markdown,
            ObjectType::DataPrep,
            ObjectType::Matplotlib,
            ObjectType::Image,
            ObjectType::Table,
        ]
        .iter()
        .map(|t| serde_json::to_value(t).unwrap().as_str().unwrap().to_string())
        .collect();
        assert_eq!(
            tags,
            ["plotly", "html", "markdown", "dataprep", "matplotlib", "image", "table"]
        );
    }

    #[test]
    fn test_display_matches_serde() {
        assert_eq!(ObjectType::DataPrep.to_string(), "dataprep");
    }

    #[test]
    fn test_image_tag_markup() {
        assert_eq!(
            image_tag("data:image/png;base64,AA=="),
            r#"<img class="custom-image" src="data:image/png;base64,AA==" />"#
        );
    }

    #[test]
    fn test_serialized_record_fields() {
        let object: CustomObject = CustomHtml::new("note", "<p>hi</p>").into();
        let value = serde_json::to_value(&object).unwrap();
        assert_eq!(value["name"], "note");
        assert_eq!(value["object_type"], "html");
        assert_eq!(value["html"], "<p>hi</p>");
        assert!(value.get("image_url").is_none());
    }

    #[test]
    fn test_none_is_empty() {
        assert!(None::<CustomObject>.into_custom_objects().is_empty());
    }
}
