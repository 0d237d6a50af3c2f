//! pixproc-transform - Geometric transformations for pixproc
//!
//! This crate provides resolution-changing operations:
//!
//! - Squash: strided downsampling by integer factors, no blending
//! - Expand: resolution doubling with edge-aware 2-way / 4-way averaging

mod error;
pub mod expand;
pub mod squash;

pub use error::{TransformError, TransformResult};
pub use expand::{ExpandCase, expand, expand_dimensions, expand_pixel};
pub use squash::{squash, squash_dimensions};
