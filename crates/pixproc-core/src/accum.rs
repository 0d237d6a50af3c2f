//! Neighborhood accumulator
//!
//! Running per-channel sums plus a sample count, used to average a
//! window of pixels one sample at a time. Positions outside the image are
//! skipped entirely: they add neither to the sums nor to the count, so a
//! window that hangs over an edge averages fewer samples instead of being
//! padded.

use crate::pixel::{self, Channel};
use crate::view::ImageView;

/// Per-channel sums and sample count for one output pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accumulator {
    red: u64,
    green: u64,
    blue: u64,
    alpha: u64,
    count: u64,
}

impl Accumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero all sums and the count.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Add one pixel.
    #[inline]
    pub fn accumulate(&mut self, pixel: u32) {
        self.red += pixel::red(pixel) as u64;
        self.green += pixel::green(pixel) as u64;
        self.blue += pixel::blue(pixel) as u64;
        self.alpha += pixel::alpha(pixel) as u64;
        self.count += 1;
    }

    /// Add the pixel at `(row, col)` if it lies inside `image`.
    ///
    /// Returns whether a sample was taken.
    #[inline]
    pub fn accumulate_if_in_bounds(&mut self, image: &ImageView<'_>, row: i64, col: i64) -> bool {
        if !image.contains(row, col) {
            return false;
        }
        self.accumulate(image.get(row as u32, col as u32));
        true
    }

    /// Number of samples taken since the last reset.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Running sum of one channel.
    #[inline]
    pub fn sum(&self, which: Channel) -> u64 {
        match which {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
            Channel::Alpha => self.alpha,
        }
    }

    /// Truncating per-channel average of every sample taken.
    ///
    /// # Panics
    ///
    /// Panics if no sample has been taken.
    #[inline]
    pub fn result(&self) -> u32 {
        assert!(self.count > 0, "average of an empty neighborhood");
        // An average of 8-bit samples fits in 8 bits.
        pixel::encode(
            (self.red / self.count) as u32,
            (self.green / self.count) as u32,
            (self.blue / self.count) as u32,
            (self.alpha / self.count) as u32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::encode;

    #[test]
    fn test_single_sample_is_identity() {
        let mut acc = Accumulator::new();
        acc.accumulate(0x12345678);
        assert_eq!(acc.count(), 1);
        assert_eq!(acc.result(), 0x12345678);
    }

    #[test]
    fn test_average_truncates() {
        let mut acc = Accumulator::new();
        acc.accumulate(encode(1, 10, 0, 255));
        acc.accumulate(encode(1, 11, 0, 255));
        acc.accumulate(encode(2, 11, 2, 254));
        // 4/3=1, 32/3=10, 2/3=0, 764/3=254
        assert_eq!(acc.result(), encode(1, 10, 0, 254));
    }

    #[test]
    fn test_sums() {
        let mut acc = Accumulator::new();
        acc.accumulate(encode(1, 2, 3, 4));
        acc.accumulate(encode(10, 20, 30, 40));
        assert_eq!(acc.sum(Channel::Red), 11);
        assert_eq!(acc.sum(Channel::Green), 22);
        assert_eq!(acc.sum(Channel::Blue), 33);
        assert_eq!(acc.sum(Channel::Alpha), 44);
    }

    #[test]
    fn test_reset() {
        let mut acc = Accumulator::new();
        acc.accumulate(0xFFFFFFFF);
        acc.reset();
        assert_eq!(acc, Accumulator::new());
        acc.accumulate(0x01020304);
        assert_eq!(acc.result(), 0x01020304);
    }

    #[test]
    fn test_accumulate_if_in_bounds() {
        let data = [
            encode(10, 0, 0, 0),
            encode(20, 0, 0, 0),
            encode(30, 0, 0, 0),
            encode(40, 0, 0, 0),
        ];
        let view = ImageView::new(&data, 2, 2).unwrap();
        let mut acc = Accumulator::new();
        assert!(acc.accumulate_if_in_bounds(&view, 1, 1));
        assert!(!acc.accumulate_if_in_bounds(&view, -1, 0));
        assert!(!acc.accumulate_if_in_bounds(&view, 0, 2));
        assert!(!acc.accumulate_if_in_bounds(&view, 2, 0));
        assert!(acc.accumulate_if_in_bounds(&view, 0, 1));
        assert_eq!(acc.count(), 2);
        assert_eq!(pixel::red(acc.result()), 30);
    }

    #[test]
    #[should_panic(expected = "empty neighborhood")]
    fn test_result_of_empty_panics() {
        Accumulator::new().result();
    }
}
