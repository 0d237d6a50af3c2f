//! pixproc Core - Pixel primitives shared by every transform
//!
//! This crate provides the building blocks the pixproc transforms are
//! written against:
//!
//! - [`pixel`] - Packing and unpacking of `0xRRGGBBAA` pixels, and
//!   truncating 2-way / 4-way averages
//! - [`ImageView`] / [`ImageViewMut`] - Borrowed row-major pixel buffers
//!   with a known width and height
//! - [`Accumulator`] - Running per-channel sums for windowed averaging
//!
//! Nothing in this crate allocates pixel storage. Callers own the buffers
//! and lend them to a view for the duration of one transform.
//!
//! # Features
//!
//! - `parallel` - [`ImageViewMut::fill_rows`] spreads rows over a rayon pool

pub mod accum;
pub mod error;
pub mod pixel;
pub mod view;

pub use accum::Accumulator;
pub use error::{Error, Result};
pub use pixel::Channel;
pub use view::{ImageView, ImageViewMut, col_of, pixel_count, row_of};
