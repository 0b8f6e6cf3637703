//! A minimal data frame and its HTML table export.

use crate::error::{CustomError, Result};

use ndarray::{ArrayBase, Data, Dimension, Ix1, Ix2};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::Write as _;

/// Options for [`DataFrame::to_html`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableOptions {
    /// Render the row labels as a leading header column.
    pub index: bool,
    /// Render the column labels.
    pub header: bool,
    /// Value of the `border` attribute; `None` omits it.
    pub border: Option<u32>,
    /// Extra CSS classes after `dataframe`.
    pub classes: Vec<String>,
    /// `id` attribute of the `<table>`.
    pub table_id: Option<String>,
    /// Header text alignment.
    pub justify: String,
    /// Escape `<`, `>` and `&` in labels and cells.
    pub escape: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            index: true,
            header: true,
            border: Some(1),
            classes: Vec::new(),
            table_id: None,
            justify: "right".to_string(),
            escape: true,
        }
    }
}

impl TableOptions {
    /// Build options from loosely typed keyword arguments.
    ///
    /// A `buf` key is dropped: tables are always returned as strings.
    /// Any other unknown key is rejected.
    pub fn from_kwargs(mut kwargs: Map<String, Value>) -> Result<Self> {
        kwargs.remove("buf");
        serde_json::from_value(Value::Object(kwargs))
            .map_err(|err| CustomError::InvalidOptions(err.to_string()))
    }
}

/// A single table cell rendered as text.
pub trait TableCell {
    fn to_cell(&self) -> String;
}

macro_rules! display_cell {
    ($($ty:ty),*) => {
        $(impl TableCell for $ty {
            fn to_cell(&self) -> String {
                self.to_string()
            }
        })*
    };
}

display_cell!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, bool, String, &str);

impl TableCell for f64 {
    fn to_cell(&self) -> String {
        format_float(*self)
    }
}

impl TableCell for f32 {
    fn to_cell(&self) -> String {
        format_float(*self as f64)
    }
}

/// Decimal places shown for float cells.
const FLOAT_PRECISION: usize = 6;

/// Data-frame style float display: at most six decimals with trailing zeros
/// trimmed (integral values keep `.0`), scientific notation for magnitudes
/// that fixed notation cannot show, `NaN` and `inf` for special values.
fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e16 || (magnitude != 0.0 && magnitude < 1e-6) {
        return format_scientific(value);
    }

    let fixed = format!("{value:.prec$}", prec = FLOAT_PRECISION);
    let trimmed = fixed.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{trimmed}0")
    } else {
        trimmed.to_string()
    }
}

/// `1.234568e+16` style, with a signed two-digit exponent.
fn format_scientific(value: f64) -> String {
    let formatted = format!("{value:.prec$e}", prec = FLOAT_PRECISION);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => formatted,
    }
}

/// Rectangular table of text cells with column and row labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataFrame {
    columns: Vec<String>,
    index: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl DataFrame {
    /// Build a frame with a `0..n` row index.
    pub fn new<C>(columns: impl IntoIterator<Item = C>, rows: Vec<Vec<String>>) -> Result<Self>
    where
        C: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        if let Some((i, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != columns.len())
        {
            return Err(CustomError::InvalidTable(format!(
                "row {i} has {} cells, expected {}",
                row.len(),
                columns.len()
            )));
        }
        let index = (0..rows.len()).map(|i| i.to_string()).collect();
        Ok(Self {
            columns,
            index,
            rows,
        })
    }

    /// Replace the row labels.
    pub fn with_index<L>(mut self, index: impl IntoIterator<Item = L>) -> Result<Self>
    where
        L: Into<String>,
    {
        let index: Vec<String> = index.into_iter().map(Into::into).collect();
        if index.len() != self.rows.len() {
            return Err(CustomError::InvalidTable(format!(
                "index has {} labels for {} rows",
                index.len(),
                self.rows.len()
            )));
        }
        self.index = index;
        Ok(self)
    }

    /// Build a frame from a 1-D or 2-D array.
    ///
    /// A 1-D array becomes a single column. Columns and rows are labelled by
    /// position. Any other rank is a [`CustomError::Dimension`].
    pub fn from_array<S, D>(array: &ArrayBase<S, D>) -> Result<Self>
    where
        S: Data,
        S::Elem: TableCell,
        D: Dimension,
    {
        let view = array.view().into_dyn();
        let rows: Vec<Vec<String>> = match view.ndim() {
            1 => {
                let column = view
                    .into_dimensionality::<Ix1>()
                    .map_err(|err| CustomError::InvalidTable(err.to_string()))?;
                column.iter().map(|v| vec![v.to_cell()]).collect()
            }
            2 => {
                let matrix = view
                    .into_dimensionality::<Ix2>()
                    .map_err(|err| CustomError::InvalidTable(err.to_string()))?;
                matrix
                    .rows()
                    .into_iter()
                    .map(|row| row.iter().map(TableCell::to_cell).collect())
                    .collect()
            }
            ndim => return Err(CustomError::Dimension { ndim }),
        };
        let width = if array.ndim() == 1 { 1 } else { array.shape()[1] };
        Self::new((0..width).map(|i| i.to_string()), rows)
    }

    /// Column labels.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Row labels.
    pub fn index(&self) -> &[String] {
        &self.index
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    /// Render as an HTML `<table class="dataframe">`.
    pub fn to_html(&self, options: &TableOptions) -> String {
        let text = |s: &str| {
            if options.escape {
                html_escape(s)
            } else {
                s.to_string()
            }
        };

        let mut classes = vec!["dataframe".to_string()];
        classes.extend(options.classes.iter().cloned());

        let mut out = String::from("<table");
        if let Some(border) = options.border {
            let _ = write!(out, r#" border="{border}""#);
        }
        let _ = write!(out, r#" class="{}""#, html_escape(&classes.join(" ")));
        if let Some(id) = &options.table_id {
            let _ = write!(out, r#" id="{}""#, html_escape(id));
        }
        out.push_str(">\n");

        if options.header {
            out.push_str("  <thead>\n");
            let _ = writeln!(
                out,
                r#"    <tr style="text-align: {};">"#,
                html_escape(&options.justify)
            );
            if options.index {
                out.push_str("      <th></th>\n");
            }
            for column in &self.columns {
                let _ = writeln!(out, "      <th>{}</th>", text(column));
            }
            out.push_str("    </tr>\n  </thead>\n");
        }

        out.push_str("  <tbody>\n");
        for (label, row) in self.index.iter().zip(&self.rows) {
            out.push_str("    <tr>\n");
            if options.index {
                let _ = writeln!(out, "      <th>{}</th>", text(label));
            }
            for cell in row {
                let _ = writeln!(out, "      <td>{}</td>", text(cell));
            }
            out.push_str("    </tr>\n");
        }
        out.push_str("  </tbody>\n</table>");
        out
    }
}

/// Escape HTML special characters.
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
