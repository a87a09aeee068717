// File: crates/vitals-chart/src/backend.rs
// Summary: Rendering back-end selection based on what the target surface can do.

use serde::{Deserialize, Serialize};

/// How much chart furniture the renderer emits around the series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    /// Bare canvas: the series path, tick marks and labels, axis text.
    /// The first X tick is skipped so it does not collide with the origin.
    #[default]
    ConnectTheDots,
    /// Charting-library look: everything above plus grid lines behind the
    /// series, and every X tick drawn including the first.
    Native,
}

/// Capabilities advertised by a drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SurfaceCapabilities {
    pub native_charts: bool,
}

impl Backend {
    pub fn for_capabilities(caps: SurfaceCapabilities) -> Self {
        if caps.native_charts { Backend::Native } else { Backend::ConnectTheDots }
    }

    pub(crate) fn draws_grid(self) -> bool {
        matches!(self, Backend::Native)
    }

    /// Number of leading X ticks left undrawn.
    pub(crate) fn skipped_x_ticks(self) -> usize {
        match self {
            Backend::ConnectTheDots => 1,
            Backend::Native => 0,
        }
    }
}
