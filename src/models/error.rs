//! Error types for the palette core.

use crate::models::color::Channel;
use thiserror::Error;

/// Palette error types.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// A snapshot or saved color list does not have one color per slot.
    #[error("Expected {expected} colors, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// The persisted palette store could not be parsed.
    #[error("Palette store is corrupt: {0}")]
    CorruptStore(#[source] serde_json::Error),

    /// Slot index outside the palette.
    #[error("Slot {index} is out of range for a palette of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// No saved palette carries the requested number.
    #[error("No saved palette with number {0}")]
    PaletteNotFound(u32),

    /// The store already uses the largest palette number.
    #[error("No palette numbers left after {0}")]
    NumbersExhausted(u32),

    /// Channel value outside the channel's range.
    #[error("{channel} value {value} is out of range")]
    ValueOutOfRange { channel: Channel, value: f32 },

    /// Text that is not a hex color.
    #[error("Invalid hex color: {0:?}")]
    InvalidHex(String),

    /// The system clipboard could not be written.
    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),

    /// IO error during store access.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for palette operations.
pub type Result<T> = std::result::Result<T, PaletteError>;
