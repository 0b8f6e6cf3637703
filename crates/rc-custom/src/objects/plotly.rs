//! Interactive plotly figures.

use ::plotly::Plot;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Options forwarded to the figure's HTML export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotlyHtmlOptions {
    /// Export a complete standalone document rather than an inline `<div>`.
    pub full_html: bool,
    /// Id of the plot `<div>` for inline exports.
    pub div_id: Option<String>,
}

impl Default for PlotlyHtmlOptions {
    fn default() -> Self {
        Self {
            full_html: true,
            div_id: None,
        }
    }
}

impl PlotlyHtmlOptions {
    /// Inline `<div>` export, optionally with a fixed id.
    pub fn inline(div_id: Option<&str>) -> Self {
        Self {
            full_html: false,
            div_id: div_id.map(str::to_string),
        }
    }
}

/// A plotly figure rendered through its own HTML export.
#[derive(Clone)]
pub struct CustomPlotly {
    pub(crate) name: String,
    pub(crate) html: String,
    figure: Plot,
}

impl CustomPlotly {
    /// Wrap a figure with the default (standalone document) export.
    pub fn new(name: impl Into<String>, figure: Plot) -> Self {
        Self::with_options(name, figure, &PlotlyHtmlOptions::default())
    }

    pub fn with_options(
        name: impl Into<String>,
        figure: Plot,
        options: &PlotlyHtmlOptions,
    ) -> Self {
        let name = name.into();
        let html = if options.full_html {
            figure.to_html()
        } else {
            figure.to_inline_html(options.div_id.as_deref())
        };
        debug!(name = %name, full_html = options.full_html, bytes = html.len(), "Wrapped plotly figure");
        Self { name, html, figure }
    }

    /// The wrapped figure.
    pub fn figure(&self) -> &Plot {
        &self.figure
    }
}

impl fmt::Debug for CustomPlotly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomPlotly")
            .field("name", &self.name)
            .field("html_len", &self.html.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::plotly::Scatter;

    fn scatter() -> Plot {
        let mut plot = Plot::new();
        plot.add_trace(Scatter::new(vec![1, 2, 3], vec![4, 5, 6]).name("series-a"));
        plot
    }

    #[test]
    fn test_full_html_export() {
        let object = CustomPlotly::new("scatter", scatter());
        assert!(object.html().contains("<html"));
        assert!(object.html().contains("series-a"));
    }

    #[test]
    fn test_inline_export_uses_div_id() {
        let object = CustomPlotly::with_options(
            "scatter",
            scatter(),
            &PlotlyHtmlOptions::inline(Some("fig-1")),
        );
        assert!(object.html().contains("fig-1"));
        assert!(!object.html().contains("<html"));
    }

    #[test]
    fn test_figure_is_retained() {
        let object = CustomPlotly::new("scatter", scatter());
        assert_eq!(object.figure().to_json(), scatter().to_json());
    }
}
