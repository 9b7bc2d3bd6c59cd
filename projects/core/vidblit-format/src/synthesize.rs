//! Packing 8-bit colour channels into pixel words.

use crate::layout::RgbLayout;
use vidblit_common::color_rgb::ColorRgb;

impl RgbLayout {
    /// Packs an 8-bit colour into a pixel word of this layout.
    ///
    /// Each channel keeps the most significant bits of its value which fit. Bits of the
    /// word outside the three channels (alpha, padding) are left at 0.
    #[inline]
    pub fn pack(&self, r: u8, g: u8, b: u8) -> u32 {
        self.red().insert(r) | self.green().insert(g) | self.blue().insert(b)
    }

    /// Unpacks a pixel word into an 8-bit colour.
    ///
    /// Channels narrower than 8 bits are widened with [`widen_channel`](crate::widen_channel),
    /// so the extremes of each channel map to 0 and 255.
    #[inline]
    pub fn decode(&self, pixel: u32) -> ColorRgb {
        let widen = |channel: crate::ChannelLayout| {
            crate::widen_channel(channel.extract(pixel), channel.len())
        };

        ColorRgb::new(widen(self.red()), widen(self.green()), widen(self.blue()))
    }
}

/// Packs an 8-bit colour into a YUY2 unit.
///
/// Luma and chroma come from the fixed point matrix
///
/// ```text
/// Y =  0.299  R + 0.587  G + 0.114  B
/// U = -0.1687 R - 0.3313 G + 0.5    B + 128
/// V =  0.5    R - 0.4187 G - 0.0813 B + 128
/// ```
///
/// with coefficients scaled by 2^16 and truncated. The unit covers two pixels and is laid
/// out `Y0 | U << 8 | Y1 << 16 | V << 24`; both luma samples are the same colour here.
///
/// # Examples
///
/// ```
/// use vidblit_format::yuy2_pack;
///
/// assert_eq!(yuy2_pack(0, 0, 0), 0x8000_8000);
/// assert_eq!(yuy2_pack(255, 255, 255), 0x80FE_80FE);
/// ```
#[inline]
pub fn yuy2_pack(r: u8, g: u8, b: u8) -> u32 {
    let (r, g, b) = (r as i32, g as i32, b as i32);

    // All three sums stay non-negative for any 8-bit input.
    let y = ((19595 * r + 38469 * g + 7471 * b) >> 16) as u32 & 0xFF;
    let u = ((-11055 * r - 21712 * g + 32768 * b + 8388608) >> 16) as u32 & 0xFF;
    let v = ((32768 * r - 27439 * g - 5328 * b + 8388608) >> 16) as u32 & 0xFF;

    y | u << 8 | y << 16 | v << 24
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChannelLayout;
    use rstest::rstest;

    fn rgb565() -> RgbLayout {
        RgbLayout::new(
            2,
            ChannelLayout::new(5, 11),
            ChannelLayout::new(6, 5),
            ChannelLayout::new(5, 0),
        )
    }

    #[rstest]
    #[case(255, 0, 0, 0xF800)]
    #[case(0, 255, 0, 0x07E0)]
    #[case(0, 0, 255, 0x001F)]
    #[case(255, 255, 255, 0xFFFF)]
    #[case(0, 0, 0, 0x0000)]
    #[case(0x87, 0x43, 0x21, (0x10 << 11) | (0x10 << 5) | 0x04)]
    fn packs_rgb565(#[case] r: u8, #[case] g: u8, #[case] b: u8, #[case] expected: u32) {
        assert_eq!(rgb565().pack(r, g, b), expected);
    }

    #[test]
    fn decode_widens_extremes() {
        let layout = rgb565();
        assert_eq!(layout.decode(0xFFFF), ColorRgb::new(255, 255, 255));
        assert_eq!(layout.decode(0x0000), ColorRgb::new(0, 0, 0));
        assert_eq!(layout.decode(0xF800), ColorRgb::new(255, 0, 0));
    }

    #[rstest]
    #[case(0, 0, 0, 0x8000_8000)]
    #[case(255, 255, 255, 0x80FE_80FE)]
    #[case(255, 0, 0, 0xFF4C_544C)]
    fn packs_yuy2(#[case] r: u8, #[case] g: u8, #[case] b: u8, #[case] expected: u32) {
        assert_eq!(yuy2_pack(r, g, b), expected);
    }

    #[test]
    fn yuy2_repeats_luma() {
        for value in [0u8, 17, 128, 200, 255] {
            let unit = yuy2_pack(value, 255 - value, value / 2);
            assert_eq!(unit & 0xFF, (unit >> 16) & 0xFF);
        }
    }
}
