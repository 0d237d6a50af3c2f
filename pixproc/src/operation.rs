//! Transform selection
//!
//! [`Operation`] names one transform together with its parameters, knows
//! what size the output buffer must be, and runs the transform. Callers
//! that pick a transform at runtime size their output with
//! [`Operation::output_dimensions`], allocate it, then call
//! [`Operation::apply`].

use pixproc_color::ColorError;
use pixproc_core::{ImageView, ImageViewMut};
use pixproc_filter::FilterError;
use pixproc_transform::TransformError;
use thiserror::Error;

/// Errors from any transform run through [`Operation`]
#[derive(Debug, Error)]
pub enum OperationError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixproc_core::Error),

    /// Squash or expand failed
    #[error("transform error: {0}")]
    Transform(#[from] TransformError),

    /// Color rotation failed
    #[error("color error: {0}")]
    Color(#[from] ColorError),

    /// Blur failed
    #[error("filter error: {0}")]
    Filter(#[from] FilterError),
}

/// Result type for [`Operation`]
pub type OperationResult<T> = Result<T, OperationError>;

/// A transform and its parameters.
///
/// # Examples
///
/// ```
/// use pixproc::{ImageView, ImageViewMut, Operation};
///
/// let input = [0xAABBCCDDu32; 4];
/// let src = ImageView::new(&input, 2, 2).unwrap();
///
/// let op = Operation::Expand;
/// let (w, h) = op.output_dimensions(2, 2).unwrap();
/// let mut output = vec![0u32; (w * h) as usize];
/// let mut dst = ImageViewMut::new(&mut output, w, h).unwrap();
/// op.apply(&src, &mut dst).unwrap();
/// assert!(output.iter().all(|&p| p == 0xAABBCCDD));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Keep every `xfac`-th column of every `yfac`-th row
    Squash { xfac: u32, yfac: u32 },
    /// Rotate red -> green -> blue -> red
    ColorRot,
    /// Box blur of the color channels
    Blur { blur_dist: u32 },
    /// Double width and height with interpolation
    Expand,
}

impl Operation {
    /// Short name of the transform.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Squash { .. } => "squash",
            Operation::ColorRot => "color_rot",
            Operation::Blur { .. } => "blur",
            Operation::Expand => "expand",
        }
    }

    /// Output size this operation produces from a `width` x `height` input.
    ///
    /// Squash rounds up, so the last partial stride still gets a sample.
    ///
    /// # Errors
    ///
    /// Fails if the input size is empty, a squash factor is 0, or the
    /// expanded size overflows.
    pub fn output_dimensions(&self, width: u32, height: u32) -> OperationResult<(u32, u32)> {
        pixproc_core::pixel_count(width, height)?;
        let dims = match *self {
            Operation::Squash { xfac, yfac } => {
                pixproc_transform::squash_dimensions(width, height, xfac, yfac)?
            }
            Operation::ColorRot | Operation::Blur { .. } => (width, height),
            Operation::Expand => pixproc_transform::expand_dimensions(width, height)?,
        };
        Ok(dims)
    }

    /// Run the transform from `src` into `dst`.
    ///
    /// # Errors
    ///
    /// Propagates the transform's own validation errors, e.g. an output
    /// view of the wrong size.
    pub fn apply(&self, src: &ImageView<'_>, dst: &mut ImageViewMut<'_>) -> OperationResult<()> {
        log::debug!(
            "{}: {}x{} -> {}x{}",
            self.name(),
            src.width(),
            src.height(),
            dst.width(),
            dst.height()
        );

        match *self {
            Operation::Squash { xfac, yfac } => pixproc_transform::squash(src, dst, xfac, yfac)?,
            Operation::ColorRot => pixproc_color::color_rot(src, dst)?,
            Operation::Blur { blur_dist } => pixproc_filter::blur(src, dst, blur_dist)?,
            Operation::Expand => pixproc_transform::expand(src, dst)?,
        }
        Ok(())
    }
}
