// File: crates/vitals-chart/src/plot.rs
// Summary: Per-chart rendering configuration (title, axis labels, tick visibility).

use serde::{Deserialize, Serialize};

/// Rendering configuration for one chart. Built fresh for each render.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Draw the four Y tick labels along the leading edge.
    pub show_y_ticks: bool,
    /// Draw a flat line across the middle of the canvas when there is no data.
    pub empty_placeholder: bool,
}

impl PlotSpec {
    pub fn new(title: impl Into<String>, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            ..Self::default()
        }
    }

    pub fn with_y_ticks(mut self, show: bool) -> Self {
        self.show_y_ticks = show;
        self
    }

    pub fn with_empty_placeholder(mut self, enabled: bool) -> Self {
        self.empty_placeholder = enabled;
        self
    }
}

impl Default for PlotSpec {
    fn default() -> Self {
        Self {
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            show_y_ticks: true,
            empty_placeholder: false,
        }
    }
}
