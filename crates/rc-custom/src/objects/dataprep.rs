//! Structured report containers that know how to render themselves.

use crate::frame::{DataFrame, TableOptions};
use tracing::debug;

/// An object with its own embeddable HTML representation.
pub trait ReprHtml {
    /// Self-contained HTML for embedding in a larger document.
    fn repr_html(&self) -> String;
}

impl ReprHtml for DataFrame {
    fn repr_html(&self) -> String {
        self.to_html(&TableOptions::default())
    }
}

impl ReprHtml for ::plotly::Plot {
    fn repr_html(&self) -> String {
        self.to_inline_html(None)
    }
}

/// A wrapper around a report container rendered through [`ReprHtml`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomDataPrep {
    pub(crate) name: String,
    pub(crate) html: String,
}

impl CustomDataPrep {
    pub fn new<R>(name: impl Into<String>, container: &R) -> Self
    where
        R: ReprHtml + ?Sized,
    {
        let name = name.into();
        let html = container.repr_html();
        debug!(name = %name, bytes = html.len(), "Wrapped report container");
        Self { name, html }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Report {
        body: &'static str,
    }

    impl ReprHtml for Report {
        fn repr_html(&self) -> String {
            format!("<div class=\"container\">{}</div>", self.body)
        }
    }

    #[test]
    fn test_delegates_to_repr_html() {
        let object = CustomDataPrep::new("eda", &Report { body: "stats" });
        assert_eq!(object.html(), "<div class=\"container\">stats</div>");
    }

    #[test]
    fn test_data_frame_repr_is_table() {
        let frame = DataFrame::new(vec!["a"], vec![vec!["1".to_string()]]).unwrap();
        let object = CustomDataPrep::new("frame", &frame);
        assert!(object.html().starts_with("<table"));
    }
}
