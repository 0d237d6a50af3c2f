//! pixproc - In-memory RGBA raster transforms
//!
//! pixproc transforms caller-owned buffers of packed `0xRRGGBBAA` pixels.
//! It never loads, saves or allocates images: the caller lends an input
//! buffer and a pre-sized output buffer, and each transform fills the
//! output completely.
//!
//! # Overview
//!
//! - Squash: strided downsampling by integer factors
//! - Color rotation: red -> green -> blue -> red, alpha kept
//! - Blur: edge-clipped box blur of the color channels, alpha kept
//! - Expand: 2x upscaling with 2-way / 4-way averaging
//!
//! # Example
//!
//! ```
//! use pixproc::{ImageView, ImageViewMut};
//!
//! let input = [0xAABBCCDDu32, 0x11223344];
//! let src = ImageView::new(&input, 2, 1).unwrap();
//!
//! let mut output = [0u32; 2];
//! let mut dst = ImageViewMut::new(&mut output, 2, 1).unwrap();
//! pixproc::color::color_rot(&src, &mut dst).unwrap();
//! assert_eq!(output, [0xCCAABBDD, 0x33112244]);
//! ```
//!
//! # Features
//!
//! - `parallel` - fill output rows on a rayon pool

mod operation;

// Re-export core types (primary data structures used everywhere)
pub use pixproc_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pixproc_color as color;
pub use pixproc_filter as filter;
pub use pixproc_transform as transform;

pub use operation::{Operation, OperationError, OperationResult};
