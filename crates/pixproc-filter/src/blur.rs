//! Box blur with edge clipping
//!
//! Each output pixel takes the truncating average of the red, green and
//! blue channels over the `(2 * blur_dist + 1)^2` window centered on it.
//! Window positions outside the image are ignored, so pixels near an edge
//! average fewer samples; nothing is padded, clamped or wrapped.
//!
//! Alpha is not blurred: every output pixel keeps the alpha of the input
//! pixel at the same position.
//!
//! # See also
//!
//! [`pixproc_core::Accumulator::accumulate_if_in_bounds`] does the clipping.

use crate::FilterResult;
use pixproc_core::{Accumulator, ImageView, ImageViewMut, pixel};

/// Offsets `(min, max)` from `center` whose window positions lie in
/// `[0, len)`.
///
/// Positions outside that range would be dropped by the accumulator
/// anyway, so scanning only this range takes the same samples.
#[inline]
fn clipped_extent(center: u32, blur_dist: u32, len: u32) -> (i64, i64) {
    let lo = center.saturating_sub(blur_dist);
    let hi = center.saturating_add(blur_dist).min(len - 1);
    (
        i64::from(lo) - i64::from(center),
        i64::from(hi) - i64::from(center),
    )
}

fn window_average(
    acc: &mut Accumulator,
    src: &ImageView<'_>,
    row: u32,
    col: u32,
    blur_dist: u32,
) -> u32 {
    let (kmin, kmax) = clipped_extent(row, blur_dist, src.height());
    let (lmin, lmax) = clipped_extent(col, blur_dist, src.width());
    let (r, c) = (i64::from(row), i64::from(col));
    for k in kmin..=kmax {
        for l in lmin..=lmax {
            acc.accumulate_if_in_bounds(src, r + k, c + l);
        }
    }
    // The center is always in bounds, so the window is never empty.
    pixel::with_alpha(acc.result(), pixel::alpha(src.get(row, col)))
}

/// Blurred value of pixel `(row, col)`.
pub fn blur_pixel(src: &ImageView<'_>, row: u32, col: u32, blur_dist: u32) -> u32 {
    let mut acc = Accumulator::new();
    window_average(&mut acc, src, row, col, blur_dist)
}

/// Blur `src` into `dst`.
///
/// `blur_dist` 0 copies the image unchanged.
///
/// # Errors
///
/// Returns [`crate::FilterError::Core`] if `dst` and `src` differ in size.
pub fn blur(
    src: &ImageView<'_>,
    dst: &mut ImageViewMut<'_>,
    blur_dist: u32,
) -> FilterResult<()> {
    let (w, h) = src.dimensions();
    dst.ensure_dimensions(w, h)?;

    log::debug!("blur {w}x{h} (blur_dist={blur_dist})");

    dst.fill_rows(|row, out| {
        let mut acc = Accumulator::new();
        for (col, px) in out.iter_mut().enumerate() {
            acc.reset();
            *px = window_average(&mut acc, src, row, col as u32, blur_dist);
        }
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FilterError;
    use pixproc_core::Error;
    use pixproc_core::pixel::{alpha, encode, red};

    fn run_blur(data: &[u32], w: u32, h: u32, dist: u32) -> Vec<u32> {
        let src = ImageView::new(data, w, h).unwrap();
        let mut out = vec![0u32; data.len()];
        let mut dst = ImageViewMut::new(&mut out, w, h).unwrap();
        blur(&src, &mut dst, dist).unwrap();
        out
    }

    #[test]
    fn test_blur_zero_is_identity() {
        let data = [
            0x01020304, 0xFFEEDDCC, 0x7F7F7F00, 0x00000080, 0x12345678, 0x9ABCDEF0,
        ];
        assert_eq!(run_blur(&data, 3, 2, 0), data);
    }

    #[test]
    fn test_blur_row_edges_use_fewer_samples() {
        let data = [encode(10, 0, 0, 1), encode(20, 0, 0, 2), encode(60, 0, 0, 3)];
        let out = run_blur(&data, 3, 1, 1);
        // ends average 2 samples, middle averages 3
        assert_eq!(red(out[0]), 15);
        assert_eq!(red(out[1]), 30);
        assert_eq!(red(out[2]), 40);
    }

    #[test]
    fn test_blur_keeps_alpha() {
        let data = [encode(0, 0, 0, 255), encode(255, 255, 255, 0)];
        let out = run_blur(&data, 2, 1, 1);
        assert_eq!(alpha(out[0]), 255);
        assert_eq!(alpha(out[1]), 0);
        assert_eq!(out[0], encode(127, 127, 127, 255));
        assert_eq!(out[1], encode(127, 127, 127, 0));
    }

    #[test]
    fn test_blur_2x2_corner() {
        let data = [
            encode(0, 4, 8, 9),
            encode(1, 5, 9, 9),
            encode(2, 6, 10, 9),
            encode(3, 7, 11, 9),
        ];
        let out = run_blur(&data, 2, 2, 1);
        // every window covers the whole image: (6/4, 22/4, 38/4)
        assert!(out.iter().all(|&p| p == encode(1, 5, 9, 9)));
    }

    #[test]
    fn test_blur_huge_radius() {
        let data = [encode(100, 0, 0, 1), encode(0, 50, 0, 2), encode(0, 0, 25, 3)];
        let out = run_blur(&data, 1, 3, u32::MAX);
        assert_eq!(out[0], encode(33, 16, 8, 1));
        assert_eq!(out[2], encode(33, 16, 8, 3));
    }

    #[test]
    fn test_clipped_extent() {
        assert_eq!(clipped_extent(0, 2, 5), (0, 2));
        assert_eq!(clipped_extent(4, 2, 5), (-2, 0));
        assert_eq!(clipped_extent(2, 0, 5), (0, 0));
        assert_eq!(clipped_extent(0, u32::MAX, 1), (0, 0));
        assert_eq!(clipped_extent(3, u32::MAX, 7), (-3, 3));
    }

    #[test]
    fn test_blur_thin_image_large_radius() {
        let n = 600u32;
        let data: Vec<u32> = (0..n).map(|i| encode(i % 256, 7, 9, 200)).collect();
        let out = run_blur(&data, n, 1, n);
        // every window covers the whole row
        let sum: u32 = (0..n).map(|i| i % 256).sum();
        assert!(out.iter().all(|&p| p == encode(sum / n, 7, 9, 200)));
    }

    #[test]
    fn test_blur_pixel_matches_blur() {
        let data: Vec<u32> = (0..20u32).map(|i| i.wrapping_mul(0x0913_2B57)).collect();
        let out = run_blur(&data, 5, 4, 2);
        let src = ImageView::new(&data, 5, 4).unwrap();
        for row in 0..4 {
            for col in 0..5 {
                assert_eq!(blur_pixel(&src, row, col, 2), out[src.index_of(row, col)]);
            }
        }
    }

    #[test]
    fn test_blur_size_mismatch() {
        let data = [0u32; 4];
        let src = ImageView::new(&data, 2, 2).unwrap();
        let mut out = [0u32; 4];
        let mut dst = ImageViewMut::new(&mut out, 4, 1).unwrap();
        assert!(matches!(
            blur(&src, &mut dst, 1),
            Err(FilterError::Core(Error::DimensionMismatch { .. }))
        ));
    }
}
