//! Synthetic test images
//!
//! Image decoding is out of scope for pixproc, so regression tests run on
//! generated buffers. This is the only place in the workspace that owns
//! pixel storage.

use pixproc_core::{ImageView, ImageViewMut, pixel};

/// Owned pixel buffer for tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestImage {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl TestImage {
    /// Image where every pixel is `pixel`.
    ///
    /// # Panics
    ///
    /// Panics if width or height is 0.
    pub fn filled(width: u32, height: u32, pixel: u32) -> Self {
        let len = pixproc_core::pixel_count(width, height)
            .unwrap_or_else(|e| panic!("test image {width}x{height}: {e}"));
        Self {
            width,
            height,
            data: vec![pixel; len],
        }
    }

    /// Image with a red ramp along columns, a green ramp along rows, a
    /// checkerboard in blue and a diagonal ramp in alpha.
    pub fn gradient(width: u32, height: u32) -> Self {
        let mut img = Self::filled(width, height, 0);
        let xspan = (width - 1).max(1);
        let yspan = (height - 1).max(1);
        for row in 0..height {
            for col in 0..width {
                let r = col * 255 / xspan;
                let g = row * 255 / yspan;
                let b = if (row + col) % 2 == 0 { 200 } else { 40 };
                let a = (row + col) * 7 % 256;
                img.set(row, col, pixel::encode(r, g, b, a));
            }
        }
        img
    }

    /// Image of pseudo-random pixels, reproducible for a given seed.
    pub fn random(width: u32, height: u32, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let mut img = Self::filled(width, height, 0);
        for px in img.data.iter_mut() {
            *px = rng.next_pixel();
        }
        img
    }

    /// Image built from explicit rows.
    ///
    /// # Panics
    ///
    /// Panics if `rows` is empty or the rows differ in length.
    pub fn from_rows(rows: &[&[u32]]) -> Self {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.len() as u32);
        let mut img = Self::filled(width, height, 0);
        for (row, line) in rows.iter().enumerate() {
            assert_eq!(line.len() as u32, width, "ragged row {row}");
            for (col, &px) in line.iter().enumerate() {
                img.set(row as u32, col as u32, px);
            }
        }
        img
    }

    /// Get the image width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the pixel data.
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    fn index_of(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    /// Pixel at `(row, col)`.
    pub fn get(&self, row: u32, col: u32) -> u32 {
        self.data[self.index_of(row, col)]
    }

    /// Overwrite the pixel at `(row, col)`.
    pub fn set(&mut self, row: u32, col: u32, px: u32) {
        let idx = self.index_of(row, col);
        self.data[idx] = px;
    }

    /// Borrow as a read-only view.
    pub fn view(&self) -> ImageView<'_> {
        ImageView::new(&self.data, self.width, self.height)
            .unwrap_or_else(|e| panic!("test image view: {e}"))
    }

    /// Borrow as a writable view.
    pub fn view_mut(&mut self) -> ImageViewMut<'_> {
        ImageViewMut::new(&mut self.data, self.width, self.height)
            .unwrap_or_else(|e| panic!("test image view: {e}"))
    }
}

/// Simple linear congruential generator for reproducible randomness
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u32) -> Self {
        Self { state: seed as u64 }
    }

    fn next(&mut self) -> u64 {
        // LCG parameters from Numerical Recipes
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }

    fn next_pixel(&mut self) -> u32 {
        // High bits of an LCG are the well-mixed ones
        (self.next() >> 32) as u32
    }
}
