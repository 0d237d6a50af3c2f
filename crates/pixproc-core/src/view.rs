//! Image buffer views
//!
//! [`ImageView`] and [`ImageViewMut`] wrap a caller-owned flat pixel slice
//! with its width and height. Pixels are stored row-major:
//! `index = row * width + col`. All addressing goes through
//! [`ImageView::index_of`] so that convention is written exactly once.
//!
//! # Ownership model
//!
//! Views borrow; they never allocate or free. The shape is checked once,
//! when the view is built. After that, [`ImageView::index_of`] is a pure
//! addressing function and performs no bounds checking of its own: the
//! transforms check neighbor coordinates before asking for them.

use crate::error::{Error, Result};

/// Number of pixels an image of the given size holds.
///
/// # Errors
///
/// Returns [`Error::InvalidDimension`] if either side is 0 or the product
/// overflows `usize`.
pub fn pixel_count(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(Error::InvalidDimension { width, height })
}

fn check_len(len: usize, width: u32, height: u32) -> Result<()> {
    let expected = pixel_count(width, height)?;
    if len != expected {
        log::warn!("pixel buffer of {len} does not match {width}x{height}");
        return Err(Error::BufferSize {
            expected,
            actual: len,
        });
    }
    Ok(())
}

/// Row number of a flat pixel index.
#[inline]
pub fn row_of(index: usize, width: u32) -> u32 {
    (index / width as usize) as u32
}

/// Column number of a flat pixel index.
#[inline]
pub fn col_of(index: usize, width: u32) -> u32 {
    (index % width as usize) as u32
}

/// Read-only view over a row-major pixel buffer.
///
/// # Examples
///
/// ```
/// use pixproc_core::ImageView;
///
/// let data = [1u32, 2, 3, 4, 5, 6];
/// let view = ImageView::new(&data, 3, 2).unwrap();
/// assert_eq!(view.get(1, 0), 4);
/// assert_eq!(view.index_of(1, 2), 5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ImageView<'a> {
    data: &'a [u32],
    width: u32,
    height: u32,
}

impl<'a> ImageView<'a> {
    /// Wrap `data` as a `width` x `height` image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, and
    /// [`Error::BufferSize`] if `data.len() != width * height`.
    pub fn new(data: &'a [u32], width: u32, height: u32) -> Result<Self> {
        check_len(data.len(), width, height)?;
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &'a [u32] {
        self.data
    }

    /// Flat index of `(row, col)`.
    #[inline]
    pub fn index_of(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    /// Pixel at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the computed index falls outside the buffer.
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> u32 {
        self.data[self.index_of(row, col)]
    }

    /// Whether a signed coordinate lies inside `[0, height) x [0, width)`.
    #[inline]
    pub fn contains(&self, row: i64, col: i64) -> bool {
        row >= 0 && row < self.height as i64 && col >= 0 && col < self.width as i64
    }

    /// Pixels of one row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    #[inline]
    pub fn row(&self, row: u32) -> &'a [u32] {
        let start = self.index_of(row, 0);
        &self.data[start..start + self.width as usize]
    }
}

/// Writable view over a row-major pixel buffer.
#[derive(Debug)]
pub struct ImageViewMut<'a> {
    data: &'a mut [u32],
    width: u32,
    height: u32,
}

impl<'a> ImageViewMut<'a> {
    /// Wrap `data` as a writable `width` x `height` image.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ImageView::new`].
    pub fn new(data: &'a mut [u32], width: u32, height: u32) -> Result<Self> {
        check_len(data.len(), width, height)?;
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Borrow as a read-only view.
    #[inline]
    pub fn as_view(&self) -> ImageView<'_> {
        ImageView {
            data: &*self.data,
            width: self.width,
            height: self.height,
        }
    }

    /// Overwrite the pixel at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the computed index falls outside the buffer.
    #[inline]
    pub fn set(&mut self, row: u32, col: u32, pixel: u32) {
        let idx = row as usize * self.width as usize + col as usize;
        self.data[idx] = pixel;
    }

    /// Check that this view has exactly the given shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] otherwise.
    pub fn ensure_dimensions(&self, width: u32, height: u32) -> Result<()> {
        if self.dimensions() != (width, height) {
            log::warn!(
                "output is {}x{}, expected {width}x{height}",
                self.width,
                self.height
            );
            return Err(Error::DimensionMismatch {
                expected: (width, height),
                actual: self.dimensions(),
            });
        }
        Ok(())
    }

    /// Fill every row by calling `f(row, out_row)` once per row.
    ///
    /// Rows are disjoint, so with the `parallel` feature they are handed
    /// to the rayon pool; otherwise they are visited top to bottom. The
    /// result is the same either way as long as `f` only reads from
    /// other buffers.
    pub fn fill_rows<F>(&mut self, f: F)
    where
        F: Fn(u32, &mut [u32]) + Send + Sync,
    {
        let width = self.width as usize;

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            self.data
                .par_chunks_mut(width)
                .enumerate()
                .for_each(|(row, out)| f(row as u32, out));
        }

        #[cfg(not(feature = "parallel"))]
        {
            self.data
                .chunks_mut(width)
                .enumerate()
                .for_each(|(row, out)| f(row as u32, out));
        }
    }
}
