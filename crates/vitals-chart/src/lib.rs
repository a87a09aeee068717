// File: crates/vitals-chart/src/lib.rs
// Summary: Core library entry point; exports the public API for building series and rendering charts.

pub mod backend;
pub mod chart;
pub mod draw;
pub mod error;
pub mod extract;
pub mod geometry;
pub mod grid;
pub mod plot;
pub mod scale;
pub mod series;
pub mod signal;
pub mod theme;
pub mod types;
pub mod view;

pub use backend::{Backend, SurfaceCapabilities};
pub use chart::{render, Renderer};
pub use draw::{Anchor, DrawCommand, Rgba};
pub use error::ExtractError;
pub use extract::{series_at, series_from_keyed, series_from_value, MetricsSnapshot};
pub use geometry::Point;
pub use plot::PlotSpec;
pub use series::{Sample, Series};
pub use signal::Signal;
pub use theme::Theme;
pub use types::{Canvas, Insets};
pub use view::{DataBounds, ViewState};
