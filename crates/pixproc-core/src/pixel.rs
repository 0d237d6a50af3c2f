//! Pixel codec
//!
//! A pixel is a `u32` packed as `0xRRGGBBAA`: red in the most significant
//! byte, alpha in the least significant byte. Every channel access in the
//! workspace goes through this module so the shift amounts live in one
//! place.
//!
//! Averages are per-channel integer divisions that truncate. Nothing here
//! rounds, clamps or validates.

/// Shift amounts for extracting color channels
pub const RED_SHIFT: u32 = 24;
pub const GREEN_SHIFT: u32 = 16;
pub const BLUE_SHIFT: u32 = 8;
pub const ALPHA_SHIFT: u32 = 0;

/// Mask for a single 8-bit channel after shifting.
pub const CHANNEL_MASK: u32 = 0xff;

/// Channel selector for [`decode_channel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red channel (bits 24-31)
    Red,
    /// Green channel (bits 16-23)
    Green,
    /// Blue channel (bits 8-15)
    Blue,
    /// Alpha channel (bits 0-7)
    Alpha,
}

impl Channel {
    /// All channels in storage order, most significant first.
    pub const ALL: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha];

    /// Bit offset of this channel inside a packed pixel.
    #[inline]
    pub fn shift(self) -> u32 {
        match self {
            Channel::Red => RED_SHIFT,
            Channel::Green => GREEN_SHIFT,
            Channel::Blue => BLUE_SHIFT,
            Channel::Alpha => ALPHA_SHIFT,
        }
    }
}

/// Extract one 8-bit channel from a packed pixel.
#[inline]
pub fn decode_channel(pixel: u32, which: Channel) -> u8 {
    ((pixel >> which.shift()) & CHANNEL_MASK) as u8
}

/// Extract red component from a packed pixel.
#[inline]
pub fn red(pixel: u32) -> u8 {
    decode_channel(pixel, Channel::Red)
}

/// Extract green component from a packed pixel.
#[inline]
pub fn green(pixel: u32) -> u8 {
    decode_channel(pixel, Channel::Green)
}

/// Extract blue component from a packed pixel.
#[inline]
pub fn blue(pixel: u32) -> u8 {
    decode_channel(pixel, Channel::Blue)
}

/// Extract alpha component from a packed pixel.
#[inline]
pub fn alpha(pixel: u32) -> u8 {
    decode_channel(pixel, Channel::Alpha)
}

/// Extract `(red, green, blue, alpha)` from a packed pixel.
#[inline]
pub fn decode(pixel: u32) -> (u8, u8, u8, u8) {
    (red(pixel), green(pixel), blue(pixel), alpha(pixel))
}

/// Pack four channel values into a pixel.
///
/// Each argument keeps only its low 8 bits; there is no clamping. Callers
/// in this workspace only pass averages of 8-bit values, which are already
/// in range.
#[inline]
pub fn encode(red: u32, green: u32, blue: u32, alpha: u32) -> u32 {
    ((red & CHANNEL_MASK) << RED_SHIFT)
        | ((green & CHANNEL_MASK) << GREEN_SHIFT)
        | ((blue & CHANNEL_MASK) << BLUE_SHIFT)
        | ((alpha & CHANNEL_MASK) << ALPHA_SHIFT)
}

/// Pack four 8-bit channels into a pixel.
#[inline]
pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    encode(r as u32, g as u32, b as u32, a as u32)
}

/// Replace the alpha channel of a pixel, keeping its color.
#[inline]
pub fn with_alpha(pixel: u32, a: u8) -> u32 {
    (pixel & !(CHANNEL_MASK << ALPHA_SHIFT)) | ((a as u32) << ALPHA_SHIFT)
}

/// Per-channel sum of a set of pixels, widened so it cannot overflow.
#[inline]
fn channel_sum(pixels: &[u32], which: Channel) -> u32 {
    pixels
        .iter()
        .map(|&p| decode_channel(p, which) as u32)
        .sum()
}

/// Per-channel truncating average of two pixels.
///
/// Channel values 1 and 2 average to 1.
#[inline]
pub fn average2(p1: u32, p2: u32) -> u32 {
    let pixels = [p1, p2];
    encode(
        channel_sum(&pixels, Channel::Red) / 2,
        channel_sum(&pixels, Channel::Green) / 2,
        channel_sum(&pixels, Channel::Blue) / 2,
        channel_sum(&pixels, Channel::Alpha) / 2,
    )
}

/// Per-channel truncating average of four pixels.
#[inline]
pub fn average4(p1: u32, p2: u32, p3: u32, p4: u32) -> u32 {
    let pixels = [p1, p2, p3, p4];
    encode(
        channel_sum(&pixels, Channel::Red) / 4,
        channel_sum(&pixels, Channel::Green) / 4,
        channel_sum(&pixels, Channel::Blue) / 4,
        channel_sum(&pixels, Channel::Alpha) / 4,
    )
}
