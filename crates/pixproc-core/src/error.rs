//! Error types for pixproc-core
//!
//! The per-pixel kernels never fail. Errors only come from the boundary
//! checks that run when a caller wraps a buffer in a view or hands a
//! view to a transform with the wrong shape.

use thiserror::Error;

/// pixproc error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Zero width or height, or a pixel count that does not fit in `usize`
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel slice length does not match `width * height`
    #[error("buffer holds {actual} pixels, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    /// Image dimension mismatch
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

/// Result type alias for pixproc operations
pub type Result<T> = std::result::Result<T, Error>;
