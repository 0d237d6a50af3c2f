//! Downsampling by integer factors
//!
//! Squash keeps every `xfac`-th column of every `yfac`-th row and drops
//! the rest. Nothing is blended: each output pixel is a bit-exact copy of
//! one input pixel.
//!
//! ```text
//!   XAAAYBBB
//!   AAAABBBB      xfac = 4, yfac = 2      XY
//!   ZCCCWDDD   ------------------->       ZW
//!   CCCCDDDD
//! ```

use crate::{TransformError, TransformResult};
use pixproc_core::{ImageView, ImageViewMut};

fn check_factors(xfac: u32, yfac: u32) -> TransformResult<()> {
    if xfac == 0 || yfac == 0 {
        log::warn!("squash rejected factors {xfac}x{yfac}");
        return Err(TransformError::InvalidScaleFactor(format!(
            "squash factors must be positive, got xfac={xfac} yfac={yfac}"
        )));
    }
    Ok(())
}

/// Output size that samples every reachable stride position:
/// `(ceil(width / xfac), ceil(height / yfac))`.
///
/// # Errors
///
/// Returns [`TransformError::InvalidScaleFactor`] if either factor is 0.
pub fn squash_dimensions(
    width: u32,
    height: u32,
    xfac: u32,
    yfac: u32,
) -> TransformResult<(u32, u32)> {
    check_factors(xfac, yfac)?;
    Ok((width.div_ceil(xfac), height.div_ceil(yfac)))
}

/// Downsample `src` into `dst` by taking the pixel at
/// `(row * yfac, col * xfac)` for every output `(row, col)`.
///
/// The caller chooses the output size. Any size whose last row and column
/// still map inside `src` is accepted; [`squash_dimensions`] gives the
/// largest one.
///
/// # Errors
///
/// - [`TransformError::InvalidScaleFactor`] if either factor is 0
/// - [`TransformError::InvalidParameters`] if the output is too large for
///   the factors
pub fn squash(
    src: &ImageView<'_>,
    dst: &mut ImageViewMut<'_>,
    xfac: u32,
    yfac: u32,
) -> TransformResult<()> {
    check_factors(xfac, yfac)?;

    let (w, h) = src.dimensions();
    let (out_w, out_h) = dst.dimensions();
    let last_col = u64::from(out_w - 1) * u64::from(xfac);
    let last_row = u64::from(out_h - 1) * u64::from(yfac);
    if last_col >= u64::from(w) || last_row >= u64::from(h) {
        log::warn!("squash output {out_w}x{out_h} overruns {w}x{h} at {xfac}x{yfac}");
        return Err(TransformError::InvalidParameters(format!(
            "output {out_w}x{out_h} samples past input {w}x{h} with xfac={xfac} yfac={yfac}"
        )));
    }

    log::debug!("squash {w}x{h} -> {out_w}x{out_h} (xfac={xfac}, yfac={yfac})");

    dst.fill_rows(|row, out| {
        let line = src.row(row * yfac);
        for (col, px) in out.iter_mut().enumerate() {
            *px = line[col * xfac as usize];
        }
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squash_dimensions_ceil() {
        assert_eq!(squash_dimensions(8, 4, 4, 2).unwrap(), (2, 2));
        assert_eq!(squash_dimensions(9, 5, 4, 2).unwrap(), (3, 3));
        assert_eq!(squash_dimensions(3, 3, 10, 10).unwrap(), (1, 1));
    }

    #[test]
    fn test_squash_dimensions_zero_factor() {
        assert!(matches!(
            squash_dimensions(8, 8, 0, 1),
            Err(TransformError::InvalidScaleFactor(_))
        ));
    }

    #[test]
    fn test_squash_doc_example() {
        // X=1 Y=2 Z=3 W=4, filler A..D = 5..8
        #[rustfmt::skip]
        let data = [
            1, 5, 5, 5, 2, 6, 6, 6,
            5, 5, 5, 5, 6, 6, 6, 6,
            3, 7, 7, 7, 4, 8, 8, 8,
            7, 7, 7, 7, 8, 8, 8, 8,
        ];
        let src = ImageView::new(&data, 8, 4).unwrap();
        let mut out = [0u32; 4];
        let mut dst = ImageViewMut::new(&mut out, 2, 2).unwrap();
        squash(&src, &mut dst, 4, 2).unwrap();
        assert_eq!(out, [1, 2, 3, 4]);
    }

    #[test]
    fn test_squash_rejects_oversized_output() {
        let data = [0u32; 16];
        let src = ImageView::new(&data, 4, 4).unwrap();
        let mut out = [0u32; 9];
        let mut dst = ImageViewMut::new(&mut out, 3, 3).unwrap();
        assert!(matches!(
            squash(&src, &mut dst, 2, 2),
            Err(TransformError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_squash_accepts_smaller_output() {
        let data: Vec<u32> = (0..16).collect();
        let src = ImageView::new(&data, 4, 4).unwrap();
        let mut out = [0u32; 1];
        let mut dst = ImageViewMut::new(&mut out, 1, 1).unwrap();
        squash(&src, &mut dst, 2, 2).unwrap();
        assert_eq!(out, [0]);
    }
}
