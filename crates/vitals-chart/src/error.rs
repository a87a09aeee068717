// File: crates/vitals-chart/src/error.rs
// Summary: Error types for metrics extraction. Rendering itself has no error path.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("metrics payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown signal name: {0}")]
    UnknownSignal(String),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
