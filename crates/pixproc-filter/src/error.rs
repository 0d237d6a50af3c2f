//! Error types for pixproc-filter

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixproc_core::Error),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
