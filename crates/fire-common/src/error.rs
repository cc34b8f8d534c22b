//! Error types for fire-map crates.

use thiserror::Error;

/// Result type alias using FireMapError.
pub type FireMapResult<T> = Result<T, FireMapError>;

/// Primary error type for fire-map operations.
#[derive(Debug, Error)]
pub enum FireMapError {
    // === Input Errors ===
    #[error("Could not resolve tile coordinates from filename: {0}")]
    UnresolvableTile(String),

    #[error("Tile indices out of range: h{h} v{v} (h must be 0-35, v must be 0-17)")]
    InvalidTile { h: u32, v: u32 },

    // === Array Errors ===
    #[error("Auxiliary array shape {actual:?} does not match primary array shape {expected:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("Invalid raster shape: {0}")]
    InvalidShape(String),

    // === Adapter Errors ===
    #[error("Failed to read dataset '{0}': {1}")]
    DatasetReadError(String, String),
}

impl FireMapError {
    /// Create a ShapeMismatch error from two shapes.
    pub fn shape_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::ShapeMismatch { expected, actual }
    }

    /// Create an InvalidShape error.
    pub fn invalid_shape(msg: impl Into<String>) -> Self {
        Self::InvalidShape(msg.into())
    }

    /// Get the HTTP status code the serving layer should map this error to.
    pub fn http_status_code(&self) -> u16 {
        match self {
            FireMapError::UnresolvableTile(_) | FireMapError::InvalidTile { .. } => 400,
            FireMapError::DatasetReadError(_, _) => 404,
            _ => 500,
        }
    }
}
