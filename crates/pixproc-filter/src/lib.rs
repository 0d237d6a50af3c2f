//! pixproc-filter - Neighborhood filters
//!
//! This crate provides windowed filtering operations:
//!
//! - Box blur of the color channels with edge clipping and alpha
//!   pass-through

pub mod blur;
mod error;

pub use blur::{blur, blur_pixel};
pub use error::{FilterError, FilterResult};
