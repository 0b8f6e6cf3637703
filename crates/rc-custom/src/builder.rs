//! Construct wrapped objects with configured defaults.

use crate::config::CustomConfig;
use crate::error::Result;
use crate::objects::{
    CustomDataPrep, CustomHtml, CustomImage, CustomMarkdown, CustomMatplotlib, CustomPlotly,
    CustomTable, ReprHtml, TableSource,
};

use plotly::Plot;
use rc_convert::{ImageSource, RasterFigure};

/// Factory applying one [`CustomConfig`] to every object it builds.
#[derive(Debug, Clone, Default)]
pub struct CustomBuilder {
    config: CustomConfig,
}

impl CustomBuilder {
    pub fn new(config: CustomConfig) -> Self {
        Self { config }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &CustomConfig {
        &self.config
    }

    pub fn plotly(&self, name: impl Into<String>, figure: Plot) -> CustomPlotly {
        CustomPlotly::with_options(name, figure, &self.config.plotly)
    }

    pub fn html(&self, name: impl Into<String>, html: impl Into<String>) -> CustomHtml {
        CustomHtml::new(name, html)
    }

    pub fn markdown(&self, name: impl Into<String>, text: &str) -> Result<CustomMarkdown> {
        CustomMarkdown::with_options(name, text, &self.config.markdown)
    }

    pub fn dataprep<R>(&self, name: impl Into<String>, container: &R) -> CustomDataPrep
    where
        R: ReprHtml + ?Sized,
    {
        CustomDataPrep::new(name, container)
    }

    pub fn matplotlib<F>(&self, name: impl Into<String>, figure: &F) -> Result<CustomMatplotlib>
    where
        F: RasterFigure + ?Sized,
    {
        CustomMatplotlib::with_options(name, figure, &self.config.figure)
    }

    pub fn image<'a>(
        &self,
        name: impl Into<String>,
        source: impl Into<ImageSource<'a>>,
    ) -> Result<CustomImage> {
        CustomImage::new(name, source)
    }

    pub fn table<'a>(
        &self,
        name: impl Into<String>,
        source: impl Into<TableSource<'a>>,
    ) -> Result<CustomTable> {
        CustomTable::with_options(name, source, &self.config.table)
    }
}
