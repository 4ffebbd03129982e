//! Error types for spinview

use thiserror::Error;

/// Main error type for spinview operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("model already exists in the scene")]
    DuplicateModel,

    #[error("model does not exist in the scene")]
    MissingModel,

    #[error("vertex index {index} out of range for {len} vertices")]
    VertexOutOfRange { index: usize, len: usize },

    #[error("expected {expected} offsets, got {actual}")]
    OffsetLengthMismatch { expected: usize, actual: usize },

    #[error("edge ({a}, {b}) references a vertex outside 0..{len}")]
    InvalidEdge { a: usize, b: usize, len: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for spinview operations
pub type Result<T> = std::result::Result<T, Error>;
