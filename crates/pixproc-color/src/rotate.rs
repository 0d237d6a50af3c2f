//! Color channel rotation
//!
//! Moves red into green, green into blue and blue into red. Alpha stays
//! where it is. `0xAABBCCDD` becomes `0xCCAABBDD`. The permutation is a
//! 3-cycle, so three rotations give back the original pixel.

use crate::ColorResult;
use pixproc_core::{ImageView, ImageViewMut, pixel};

/// Rotate the color channels of one pixel.
#[inline]
pub fn rotate_pixel(px: u32) -> u32 {
    let (r, g, b, a) = pixel::decode(px);
    pixel::compose_rgba(b, r, g, a)
}

/// Rotate the color channels of every pixel of `src` into `dst`.
///
/// # Errors
///
/// Returns [`crate::ColorError::Core`] if `dst` and `src` differ in size.
pub fn color_rot(src: &ImageView<'_>, dst: &mut ImageViewMut<'_>) -> ColorResult<()> {
    let (w, h) = src.dimensions();
    dst.ensure_dimensions(w, h)?;

    log::debug!("color_rot {w}x{h}");

    dst.fill_rows(|row, out| {
        for (px, &input) in out.iter_mut().zip(src.row(row)) {
            *px = rotate_pixel(input);
        }
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColorError;
    use pixproc_core::Error;

    #[test]
    fn test_rotate_pixel() {
        assert_eq!(rotate_pixel(0xAABBCCDD), 0xCCAABBDD);
        assert_eq!(rotate_pixel(0x00000000), 0x00000000);
        assert_eq!(rotate_pixel(0xFF0000FF), 0x00FF00FF);
    }

    #[test]
    fn test_rotate_three_times() {
        for px in [0xAABBCCDDu32, 0x01020304, 0xFF00FF00, 0x80007F01] {
            assert_eq!(rotate_pixel(rotate_pixel(rotate_pixel(px))), px);
            assert_ne!(rotate_pixel(px), px, "{px:#010x} has distinct channels");
        }
    }

    #[test]
    fn test_color_rot_image() {
        let data = [0xAABBCCDD, 0x11223344];
        let src = ImageView::new(&data, 1, 2).unwrap();
        let mut out = [0u32; 2];
        let mut dst = ImageViewMut::new(&mut out, 1, 2).unwrap();
        color_rot(&src, &mut dst).unwrap();
        assert_eq!(out, [0xCCAABBDD, 0x33112244]);
    }

    #[test]
    fn test_color_rot_size_mismatch() {
        let data = [0u32; 2];
        let src = ImageView::new(&data, 1, 2).unwrap();
        let mut out = [0u32; 2];
        let mut dst = ImageViewMut::new(&mut out, 2, 1).unwrap();
        assert!(matches!(
            color_rot(&src, &mut dst),
            Err(ColorError::Core(Error::DimensionMismatch { .. }))
        ));
    }
}
