//! Resolution doubling with interpolation
//!
//! An `n x m` input becomes a `2n x 2m` output. Output `(i, j)` is anchored
//! on input `(i / 2, j / 2)`:
//!
//! - even row, even column: a copy of the anchor
//! - even row, odd column: average of the anchor and its right neighbor
//! - odd row, even column: average of the anchor and the pixel below it
//! - odd row, odd column: average of the anchor, right, below and
//!   below-right pixels
//!
//! Neighbors that fall off the right or bottom edge are dropped, and the
//! output falls back to the next smaller average (or a plain copy). All
//! four channels, alpha included, are averaged with the truncating
//! primitives from [`pixproc_core::pixel`].

use crate::{TransformError, TransformResult};
use pixproc_core::{Error, ImageView, ImageViewMut, pixel};

/// Which input pixels feed one output pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpandCase {
    /// Anchor only
    Copy,
    /// Anchor and its right neighbor
    Horizontal,
    /// Anchor and the pixel below it
    Vertical,
    /// Anchor, right, below and below-right
    Quad,
}

impl ExpandCase {
    /// Classify output `(row, col)` for an input of `src_width` x `src_height`.
    pub fn classify(row: u32, col: u32, src_width: u32, src_height: u32) -> Self {
        let odd_row = row % 2 == 1;
        let odd_col = col % 2 == 1;
        let has_right = u64::from(col / 2) + 1 < u64::from(src_width);
        let has_below = u64::from(row / 2) + 1 < u64::from(src_height);

        match (odd_row, odd_col) {
            (false, false) => ExpandCase::Copy,
            (false, true) if has_right => ExpandCase::Horizontal,
            (true, false) if has_below => ExpandCase::Vertical,
            (true, true) => match (has_right, has_below) {
                (true, true) => ExpandCase::Quad,
                (true, false) => ExpandCase::Horizontal,
                (false, true) => ExpandCase::Vertical,
                (false, false) => ExpandCase::Copy,
            },
            _ => ExpandCase::Copy,
        }
    }

    /// Compute the output pixel anchored on input `(br, bc)`.
    #[inline]
    fn sample(self, src: &ImageView<'_>, br: u32, bc: u32) -> u32 {
        let anchor = src.get(br, bc);
        match self {
            ExpandCase::Copy => anchor,
            ExpandCase::Horizontal => pixel::average2(anchor, src.get(br, bc + 1)),
            ExpandCase::Vertical => pixel::average2(anchor, src.get(br + 1, bc)),
            ExpandCase::Quad => pixel::average4(
                anchor,
                src.get(br, bc + 1),
                src.get(br + 1, bc),
                src.get(br + 1, bc + 1),
            ),
        }
    }
}

/// Output size of [`expand`]: exactly `(2 * width, 2 * height)`.
///
/// # Errors
///
/// Returns [`TransformError::Core`] with [`Error::InvalidDimension`] if
/// either side is 0 or doubling overflows.
pub fn expand_dimensions(width: u32, height: u32) -> TransformResult<(u32, u32)> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height }.into());
    }
    match (width.checked_mul(2), height.checked_mul(2)) {
        (Some(w2), Some(h2)) => Ok((w2, h2)),
        _ => Err(TransformError::Core(Error::InvalidDimension { width, height })),
    }
}

/// Compute output pixel `(row, col)` of the doubled image.
///
/// `row` and `col` must lie inside the doubled image of `src`.
#[inline]
pub fn expand_pixel(src: &ImageView<'_>, row: u32, col: u32) -> u32 {
    ExpandCase::classify(row, col, src.width(), src.height()).sample(src, row / 2, col / 2)
}

/// Double `src` into `dst`, interpolating the new rows and columns.
///
/// # Errors
///
/// Returns [`TransformError::Core`] with [`Error::DimensionMismatch`] if
/// `dst` is not exactly twice the size of `src` in both axes.
pub fn expand(src: &ImageView<'_>, dst: &mut ImageViewMut<'_>) -> TransformResult<()> {
    let (w, h) = src.dimensions();
    let (out_w, out_h) = expand_dimensions(w, h)?;
    dst.ensure_dimensions(out_w, out_h)?;

    log::debug!("expand {w}x{h} -> {out_w}x{out_h}");

    dst.fill_rows(|row, out| {
        for (col, px) in out.iter_mut().enumerate() {
            *px = expand_pixel(src, row, col as u32);
        }
    });

    Ok(())
}
