//! pixproc Color - Per-pixel channel operations
//!
//! - **Channel rotation** ([`rotate`]): cycle red -> green -> blue -> red,
//!   alpha untouched

mod error;
pub mod rotate;

// Re-export core types
pub use pixproc_core;

pub use error::{ColorError, ColorResult};
pub use rotate::{color_rot, rotate_pixel};
