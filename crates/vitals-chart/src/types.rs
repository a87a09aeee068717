// File: crates/vitals-chart/src/types.rs
// Summary: Shared types and constants (canvas extents, outer label bands, layout paddings).

use serde::{Deserialize, Serialize};

use crate::plot::PlotSpec;

/// Default canvas width in pixels.
pub const WIDTH: f64 = 360.0;
/// Default canvas height in pixels.
pub const HEIGHT: f64 = 200.0;

/// Fraction of the data span added on each side of the domain and range.
pub const PADDING_FACTOR: f64 = 0.05;
/// Smallest value span used when computing Y padding; keeps flat signals visible.
pub const MINIMUM_RANGE: f64 = 0.1;
/// Pixels reserved at top and bottom of the canvas for tick labels.
pub const VERTICAL_MARGIN: f64 = 10.0;

/// Number of Y ticks drawn when Y ticks are enabled.
pub const Y_TICK_COUNT: usize = 4;
/// Approximate number of X ticks across the padded domain.
pub const X_TICK_TARGET: f64 = 10.0;
/// Smallest distance between two X ticks, in data units.
pub const X_TICK_MIN_STRIDE: f64 = 1.0;

/// Length of a tick mark in pixels.
pub const TICK_LENGTH: f64 = 5.0;
/// Distance from the canvas bottom to the top of an X tick label.
pub const X_TICK_LABEL_OFFSET: f64 = 20.0;
/// Horizontal position of Y tick labels.
pub const Y_TICK_LABEL_X: f64 = 10.0;

/// Series stroke width in pixels.
pub const LINE_WIDTH: f32 = 2.0;
/// Tick and grid stroke width in pixels.
pub const TICK_WIDTH: f32 = 1.0;

/// Caption font size (tick labels, axis labels).
pub const CAPTION_SIZE: f32 = 12.0;
/// Headline font size (chart title).
pub const HEADLINE_SIZE: f32 = 16.0;

/// Distance above the canvas top where the title box starts.
pub const TITLE_OFFSET: f64 = 36.0;
/// Distance above the canvas top where the Y-axis label is centred.
pub const Y_LABEL_OFFSET: f64 = 10.0;
/// Distance below the canvas bottom where the X-axis label box starts.
pub const X_LABEL_OFFSET: f64 = 6.0;

/// Pixel extent of the drawing surface handed to the renderer.
/// Contract: both fields are finite and non-negative after construction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    /// Create a canvas; non-finite or negative extents collapse to zero.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width: sanitize_extent(width), height: sanitize_extent(height) }
    }

    /// Copy of `self` with both extents sanitized. Useful after deserializing.
    pub fn sanitized(self) -> Self {
        Self::new(self.width, self.height)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

fn sanitize_extent(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

/// Label bands a host reserves outside the plot canvas, in pixels.
/// The title and Y-axis label sit in `top`, the X-axis label in `bottom`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Extra surface width the side bands add; saturates instead of wrapping.
    pub const fn hsum(&self) -> u32 { self.left.saturating_add(self.right) }
    /// Extra surface height taken by the title and X-label bands.
    pub const fn vsum(&self) -> u32 { self.top.saturating_add(self.bottom) }

    /// Bands large enough for the labels `spec` will emit; empty labels reserve nothing.
    pub fn for_spec(spec: &PlotSpec) -> Self {
        let top = if !spec.title.is_empty() {
            TITLE_OFFSET + f64::from(HEADLINE_SIZE) * 0.25
        } else if !spec.y_label.is_empty() {
            Y_LABEL_OFFSET + f64::from(CAPTION_SIZE)
        } else {
            0.0
        };
        let bottom = if spec.x_label.is_empty() {
            0.0
        } else {
            X_LABEL_OFFSET + f64::from(CAPTION_SIZE) * 1.5
        };
        Self::new(8, 8, top.ceil() as u32, bottom.ceil() as u32)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::for_spec(&PlotSpec::default())
    }
}
