// File: crates/vitals-chart/src/grid.rs
// Summary: Tick layout helpers for both axes and tick label formatting.

use crate::types::{X_TICK_MIN_STRIDE, X_TICK_TARGET, Y_TICK_COUNT};
use crate::view::{span, ViewState};

/// Most X ticks a padded domain can hold: `span / stride` is at most the target.
const MAX_X_TICKS: usize = X_TICK_TARGET as usize + 1;

/// `steps` evenly spaced values from `start` to `end` inclusive.
/// Interpolates per point, so finite endpoints always give finite values.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let last = steps as f64 - 1.0;
    (0..steps)
        .map(|i| {
            let t = i as f64 / last;
            start * (1.0 - t) + end * t
        })
        .collect()
}

/// Distance between X ticks: a tenth of the padded domain, never below one unit.
pub fn x_tick_stride(view: &ViewState) -> f64 {
    X_TICK_MIN_STRIDE.max(view.x_span() / X_TICK_TARGET)
}

/// X tick values from `ceil(x_min)` through `floor(x_max)` stepping by [`x_tick_stride`].
/// Includes the first tick; callers that avoid drawing at the origin skip it.
pub fn x_ticks(view: &ViewState) -> Vec<f64> {
    let stride = x_tick_stride(view);
    let start = view.x_min.ceil();
    let end = view.x_max.floor();
    if !stride.is_finite() || !start.is_finite() || !end.is_finite() || start > end {
        return Vec::new();
    }
    let count = ((span(start, end) / stride).floor() as usize)
        .saturating_add(1)
        .min(MAX_X_TICKS);
    let mut ticks: Vec<f64> = Vec::with_capacity(count);
    for k in 0..count {
        let v = start + stride * k as f64;
        // huge timestamps: a stride under half an ULP no longer advances
        if v > end || ticks.last().is_some_and(|&prev| v <= prev) {
            break;
        }
        ticks.push(v);
    }
    ticks
}

/// Exactly [`Y_TICK_COUNT`] evenly spaced values across the padded range.
/// A zero-width range yields the same value repeated.
pub fn y_ticks(view: &ViewState) -> Vec<f64> {
    let range = view.y_span();
    if range == 0.0 {
        return vec![view.y_min; Y_TICK_COUNT];
    }
    let mut ticks = linspace(view.y_min, view.y_max, Y_TICK_COUNT);
    if let Some(last) = ticks.last_mut() {
        *last = view.y_max;
    }
    ticks
}

/// Spacing between consecutive Y ticks.
pub fn y_tick_stride(view: &ViewState) -> f64 {
    view.y_span() / (Y_TICK_COUNT as f64 - 1.0)
}

/// Number formatting for tick labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelFormat {
    /// Whole numbers (`%.0f`), used on the time axis.
    Integer,
    /// One decimal place (`%.1f`).
    OneDecimal,
    /// Two decimal places (`%.2f`), for small-amplitude signals.
    TwoDecimals,
}

impl LabelFormat {
    /// Two decimals once the spacing between Y ticks drops below one unit.
    pub fn for_y_stride(stride: f64) -> Self {
        if stride < 1.0 { LabelFormat::TwoDecimals } else { LabelFormat::OneDecimal }
    }

    pub fn format(self, v: f64) -> String {
        // avoid printing "-0"
        let v = if v == 0.0 { 0.0 } else { v };
        match self {
            LabelFormat::Integer => format!("{:.0}", v),
            LabelFormat::OneDecimal => format!("{:.1}", v),
            LabelFormat::TwoDecimals => format!("{:.2}", v),
        }
    }
}
