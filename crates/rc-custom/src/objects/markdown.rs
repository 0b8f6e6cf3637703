//! Markdown text rendered to HTML.
//!
//! Every render builds its own converter options, so consecutive renders
//! share no state.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Markdown dialect switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownOptions {
    /// GitHub-style pipe tables.
    pub tables: bool,
    /// `~~strikethrough~~`.
    pub strikethrough: bool,
    /// Bare URLs become links.
    pub autolink: bool,
    /// Emit raw HTML blocks and inline HTML as written.
    pub raw_html: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            autolink: false,
            raw_html: true,
        }
    }
}

/// Render markdown to an HTML fragment.
#[cfg(feature = "markdown")]
pub fn render_markdown(text: &str, options: &MarkdownOptions) -> Result<String> {
    let mut comrak_options = comrak::Options::default();
    comrak_options.extension.table = options.tables;
    comrak_options.extension.strikethrough = options.strikethrough;
    comrak_options.extension.autolink = options.autolink;
    comrak_options.render.unsafe_ = options.raw_html;
    Ok(comrak::markdown_to_html(text, &comrak_options))
}

/// Render markdown to an HTML fragment.
///
/// Always fails: the crate was built without the `markdown` feature.
#[cfg(not(feature = "markdown"))]
pub fn render_markdown(_text: &str, _options: &MarkdownOptions) -> Result<String> {
    static WARNED: std::sync::Once = std::sync::Once::new();
    WARNED.call_once(|| {
        tracing::warn!(
            "markdown renderer not compiled in; rebuild with the 'markdown' feature to create CustomMarkdown objects"
        );
    });
    Err(crate::error::CustomError::DependencyMissing {
        dependency: "comrak",
        feature: "markdown",
        object_type: "markdown",
    })
}

/// Markdown text rendered to HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomMarkdown {
    pub(crate) name: String,
    pub(crate) html: String,
}

impl CustomMarkdown {
    pub fn new(name: impl Into<String>, text: &str) -> Result<Self> {
        Self::with_options(name, text, &MarkdownOptions::default())
    }

    pub fn with_options(
        name: impl Into<String>,
        text: &str,
        options: &MarkdownOptions,
    ) -> Result<Self> {
        let name = name.into();
        let html = render_markdown(text, options)?;
        debug!(name = %name, bytes = html.len(), "Rendered markdown");
        Ok(Self { name, html })
    }
}

#[cfg(all(test, feature = "markdown"))]
mod tests {
    use super::*;

    #[test]
    fn test_heading_renders_h1() {
        let object = CustomMarkdown::new("intro", "# Title").unwrap();
        assert!(object.html().contains("<h1>Title</h1>"));
    }

    #[test]
    fn test_sequential_renders_do_not_leak() {
        let first = CustomMarkdown::new("a", "[ref]: https://example.com\n\n*first*").unwrap();
        let second = CustomMarkdown::new("b", "[link][ref] and **second**").unwrap();

        assert!(first.html().contains("<em>first</em>"));
        assert!(!second.html().contains("first"));
        assert!(!second.html().contains("example.com"));
        assert!(second.html().contains("<strong>second</strong>"));
    }

    #[test]
    fn test_same_input_renders_identically() {
        let a = CustomMarkdown::new("a", "- one\n- two").unwrap();
        let _ = CustomMarkdown::new("noise", "# Other\n\n> quote").unwrap();
        let b = CustomMarkdown::new("b", "- one\n- two").unwrap();
        assert_eq!(a.html(), b.html());
    }

    #[test]
    fn test_tables_extension() {
        let text = "| a | b |\n|---|---|\n| 1 | 2 |";
        let html = render_markdown(text, &MarkdownOptions::default()).unwrap();
        assert!(html.contains("<table>"));

        let plain = MarkdownOptions {
            tables: false,
            ..MarkdownOptions::default()
        };
        assert!(!render_markdown(text, &plain).unwrap().contains("<table>"));
    }

    #[test]
    fn test_raw_html_passthrough_toggle() {
        let text = "<span class=\"x\">raw</span>";
        let kept = render_markdown(text, &MarkdownOptions::default()).unwrap();
        assert!(kept.contains("<span class=\"x\">raw</span>"));

        let escaped = MarkdownOptions {
            raw_html: false,
            ..MarkdownOptions::default()
        };
        assert!(!render_markdown(text, &escaped).unwrap().contains("<span"));
    }
}
