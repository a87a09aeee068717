// File: crates/vitals-chart/src/view.rs
// Summary: Visible ranges: raw data extents and the padded view the renderer maps to pixels.

use crate::series::Series;
use crate::types::{MINIMUM_RANGE, PADDING_FACTOR};

/// Raw extents of a series. Empty series fall back to the unit square.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DataBounds {
    pub fn from_series(series: &Series) -> Self {
        let (x_min, x_max) = series.time_extent().unwrap_or((0.0, 1.0));
        let (y_min, y_max) = series.value_extent().unwrap_or((0.0, 1.0));
        Self { x_min, x_max, y_min, y_max }
    }

    pub fn x_span(&self) -> f64 { span(self.x_min, self.x_max) }
    pub fn y_span(&self) -> f64 { span(self.y_min, self.y_max) }
}

/// Padded view: the data bounds widened so the curve never touches the canvas edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Pad with the default factor and minimum range.
    pub fn from_bounds(b: &DataBounds) -> Self {
        Self::padded(b, PADDING_FACTOR, MINIMUM_RANGE)
    }

    pub fn from_series(series: &Series) -> Self {
        Self::from_bounds(&DataBounds::from_series(series))
    }

    /// X is padded by `factor` of its span; a zero-width domain falls back to
    /// `minimum_range` so a lone timestamp sits mid-canvas. Y is padded by
    /// `factor` of `max(span, minimum_range)`. Bounds saturate at `±f64::MAX`.
    pub fn padded(b: &DataBounds, factor: f64, minimum_range: f64) -> Self {
        let x_span = b.x_span();
        let xm = factor * if x_span == 0.0 { minimum_range } else { x_span };
        let ym = factor * b.y_span().max(minimum_range);
        Self {
            x_min: saturate(b.x_min - xm),
            x_max: saturate(b.x_max + xm),
            y_min: saturate(b.y_min - ym),
            y_max: saturate(b.y_max + ym),
        }
    }

    pub fn x_span(&self) -> f64 { span(self.x_min, self.x_max) }
    pub fn y_span(&self) -> f64 { span(self.y_min, self.y_max) }
}

/// `hi - lo` for finite bounds, capped at `f64::MAX` instead of overflowing.
pub(crate) fn span(lo: f64, hi: f64) -> f64 {
    saturate(hi - lo)
}

fn saturate(v: f64) -> f64 {
    v.clamp(f64::MIN, f64::MAX)
}
