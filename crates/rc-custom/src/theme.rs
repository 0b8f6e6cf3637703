//! The "crayon" colour theme for plotly figures.

use plotly::layout::Axis;
use plotly::Layout;

/// Discrete colour sequence, meant for plots with one to five series.
pub const CRAYON_COLORWAY: [&str; 5] = ["#094E5D", "#FF6A4C", "#04242D", "#ff370f", "#FF9449"];

const TRANSPARENT: &str = "rgba(0,0,0,0)";
const GRID_COLOR: &str = "#000000";

/// Base layout with the crayon colourway, transparent backgrounds and black
/// y-axis gridlines.
///
/// Replacing the y axis drops the gridline colour; start from
/// [`crayon_y_axis`] instead of `Axis::new()`.
pub fn crayon_layout() -> Layout {
    Layout::new()
        .colorway(CRAYON_COLORWAY.to_vec())
        .plot_background_color(TRANSPARENT)
        .paper_background_color(TRANSPARENT)
        .y_axis(crayon_y_axis())
}

/// Y axis with the crayon gridline colour.
pub fn crayon_y_axis() -> Axis {
    Axis::new().grid_color(GRID_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_carries_theme() {
        let value = serde_json::to_value(crayon_layout()).unwrap();
        assert_eq!(value["colorway"][0], "#094E5D");
        assert_eq!(value["colorway"].as_array().unwrap().len(), 5);
        assert_eq!(value["plot_bgcolor"], TRANSPARENT);
        assert_eq!(value["paper_bgcolor"], TRANSPARENT);
        assert_eq!(value["yaxis"]["gridcolor"], GRID_COLOR);
    }
}
