//! Error types for Animatic Builder.

use thiserror::Error;

/// Main error type for Animatic Builder operations.
#[derive(Error, Debug)]
pub enum AnimaticError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Index {index} out of range for timeline of {len} shots")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Encoder error: {0}")]
    Encoder(String),

    #[error("Probe error: {0}")]
    Probe(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AnimaticError {
    /// Shorthand for a bounds failure against a sequence of `len` items.
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}

/// Result type alias for Animatic Builder operations.
pub type Result<T> = std::result::Result<T, AnimaticError>;
