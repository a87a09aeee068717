// File: crates/vitals-chart/src/scale.rs
// Summary: Time (X) and Value (Y) scale transforms from the padded view to canvas pixels.

use crate::geometry::Point;
use crate::series::Sample;
use crate::types::{Canvas, VERTICAL_MARGIN};
use crate::view::ViewState;

/// Logical X coordinate (sample time).
pub type Logical = f64;
/// Value Y coordinate (sample value).
pub type Value = f64;

/// Horizontal scale mapping `[x_min, x_max]` onto `[0, width]`.
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    pub width: f64,
    pub x_min: Logical,
    pub x_max: Logical,
}

impl TimeScale {
    pub fn new(width: f64, x_min: Logical, x_max: Logical) -> Self {
        Self { width, x_min, x_max }
    }

    #[inline]
    pub fn to_px(&self, x: Logical) -> f64 {
        if self.x_max == self.x_min {
            return self.width / 2.0;
        }
        fraction(x, self.x_min, self.x_max) * self.width
    }
}

/// Vertical scale mapping `[y_min, y_max]` onto `[height - margin, margin]` (inverted).
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub height: f64,
    pub margin: f64,
    pub y_min: Value,
    pub y_max: Value,
}

impl ValueScale {
    pub fn new(height: f64, y_min: Value, y_max: Value) -> Self {
        Self { height, margin: VERTICAL_MARGIN, y_min, y_max }
    }

    #[inline]
    pub fn to_px(&self, y: Value) -> f64 {
        if self.y_max == self.y_min {
            return self.height / 2.0;
        }
        (1.0 - fraction(y, self.y_min, self.y_max)) * (self.height - 2.0 * self.margin) + self.margin
    }
}

/// Where `v` sits in `[lo, hi]`. Operands are halved first so bounds near
/// `±f64::MAX` cannot overflow the differences.
#[inline]
fn fraction(v: f64, lo: f64, hi: f64) -> f64 {
    (v * 0.5 - lo * 0.5) / (hi * 0.5 - lo * 0.5)
}

/// Both scales for one render pass.
#[derive(Clone, Copy, Debug)]
pub struct PlotScale {
    pub x: TimeScale,
    pub y: ValueScale,
}

impl PlotScale {
    pub fn new(view: &ViewState, canvas: Canvas) -> Self {
        Self {
            x: TimeScale::new(canvas.width, view.x_min, view.x_max),
            y: ValueScale::new(canvas.height, view.y_min, view.y_max),
        }
    }

    #[inline]
    pub fn to_px(&self, s: &Sample) -> Point {
        Point::new(self.x.to_px(s.time), self.y.to_px(s.value))
    }
}
