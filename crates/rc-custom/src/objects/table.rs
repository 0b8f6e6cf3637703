//! Tables from data frames or numeric arrays.

use crate::error::Result;
use crate::frame::{DataFrame, TableCell, TableOptions};

use ndarray::{ArrayBase, ArrayD, Data, Dimension};
use tracing::debug;

/// Tabular input accepted by [`CustomTable`].
#[derive(Debug, Clone)]
pub enum TableSource<'a> {
    /// An existing frame.
    Frame(&'a DataFrame),
    /// Array cells already rendered to text; the rank is checked on conversion.
    Array(ArrayD<String>),
}

impl<'a> From<&'a DataFrame> for TableSource<'a> {
    fn from(frame: &'a DataFrame) -> Self {
        TableSource::Frame(frame)
    }
}

impl<S, D> From<&ArrayBase<S, D>> for TableSource<'_>
where
    S: Data,
    S::Elem: TableCell,
    D: Dimension,
{
    fn from(array: &ArrayBase<S, D>) -> Self {
        TableSource::Array(array.map(TableCell::to_cell).into_dyn())
    }
}

/// A table rendered to HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomTable {
    pub(crate) name: String,
    pub(crate) html: String,
}

impl CustomTable {
    pub fn new<'a>(name: impl Into<String>, source: impl Into<TableSource<'a>>) -> Result<Self> {
        Self::with_options(name, source, &TableOptions::default())
    }

    /// Wrap a table, rendering it with `options`.
    ///
    /// Arrays must have one or two axes.
    pub fn with_options<'a>(
        name: impl Into<String>,
        source: impl Into<TableSource<'a>>,
        options: &TableOptions,
    ) -> Result<Self> {
        let name = name.into();
        let html = match source.into() {
            TableSource::Frame(frame) => frame.to_html(options),
            TableSource::Array(cells) => DataFrame::from_array(&cells)?.to_html(options),
        };
        debug!(name = %name, bytes = html.len(), "Wrapped table");
        Ok(Self { name, html })
    }
}
