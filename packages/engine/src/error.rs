//! Error types for the simulation engine.

use thiserror::Error;

/// Errors surfaced by the public simulation API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Grid coordinate outside `[0, width) x [0, height)`.
    #[error("coordinate ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    /// Raw material id that does not name a material.
    #[error("unknown material id {0}")]
    InvalidMaterial(u8),

    /// Settings JSON failed to parse or validate.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

pub type SimResult<T> = Result<T, SimError>;

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::InvalidSettings(err.to_string())
    }
}
