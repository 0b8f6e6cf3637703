//! Configuration for custom object construction.

use crate::error::{CustomError, Result};
use crate::frame::TableOptions;
use crate::objects::{MarkdownOptions, PlotlyHtmlOptions};

use rc_convert::SaveOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Schema version written by [`CustomConfig::to_json`].
pub const CONFIG_SCHEMA_VERSION: &str = "1.0.0";

/// Default export options for every object variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomConfig {
    /// Schema version.
    #[serde(default = "default_schema_version")]
    pub schema_version: String,
    /// Plotly HTML export.
    #[serde(default)]
    pub plotly: PlotlyHtmlOptions,
    /// Table HTML export.
    #[serde(default)]
    pub table: TableOptions,
    /// Markdown dialect.
    #[serde(default)]
    pub markdown: MarkdownOptions,
    /// Static figure export.
    #[serde(default)]
    pub figure: SaveOptions,
}

fn default_schema_version() -> String {
    CONFIG_SCHEMA_VERSION.to_string()
}

impl Default for CustomConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            plotly: PlotlyHtmlOptions::default(),
            table: TableOptions::default(),
            markdown: MarkdownOptions::default(),
            figure: SaveOptions::default(),
        }
    }
}

impl CustomConfig {
    /// Create a new configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set plotly export options.
    pub fn with_plotly(mut self, plotly: PlotlyHtmlOptions) -> Self {
        self.plotly = plotly;
        self
    }

    /// Set table export options.
    pub fn with_table(mut self, table: TableOptions) -> Self {
        self.table = table;
        self
    }

    /// Set markdown options.
    pub fn with_markdown(mut self, markdown: MarkdownOptions) -> Self {
        self.markdown = markdown;
        self
    }

    /// Set static figure export options.
    pub fn with_figure(mut self, figure: SaveOptions) -> Self {
        self.figure = figure;
        self
    }

    /// Load configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from TOML.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a `.json` or `.toml` file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&text),
            Some("toml") => Self::from_toml(&text),
            _ => Err(CustomError::InvalidOptions(format!(
                "unsupported config file '{}' (expected .json or .toml)",
                path.display()
            ))),
        }
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
