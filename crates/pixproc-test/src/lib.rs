//! pixproc-test - Regression test framework for pixproc
//!
//! This crate provides the scaffolding the `*_reg` integration tests
//! share:
//!
//! - [`RegParams`] - numbered comparisons that collect failures and
//!   report them all at the end
//! - [`TestImage`] - deterministic synthetic images, since pixproc does
//!   no file I/O
//!
//! # Usage
//!
//! ```ignore
//! use pixproc_test::{RegParams, TestImage};
//!
//! let mut rp = RegParams::new("blur");
//! let img = TestImage::gradient(16, 16);
//! rp.compare_values(16.0, img.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod image;
mod params;

pub use image::TestImage;
pub use params::RegParams;
