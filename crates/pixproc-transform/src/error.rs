//! Error types for pixproc-transform

use thiserror::Error;

/// Errors that can occur during geometric transformations
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixproc_core::Error),

    /// Invalid scale factor
    #[error("invalid scale factor: {0}")]
    InvalidScaleFactor(String),

    /// Invalid transformation parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
