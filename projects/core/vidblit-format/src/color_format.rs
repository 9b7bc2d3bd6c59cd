//! The colour format descriptor.

use crate::channel::ChannelLayout;
use crate::error::LayoutError;
use crate::layout::RgbLayout;
use crate::legacy::LegacyFormat;
use crate::synthesize::yuy2_pack;
use alloc::string::{String, ToString};
use core::fmt;
use derive_enum_all_values::AllValues;
use vidblit_common::pixel_word::PixelWord;

/// Describes how a pixel is encoded inside a pixel word.
///
/// Descriptors are small `Copy` values, built once per surface and passed around by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorFormat {
    /// 8-bit palette indices.
    Palette,
    /// Bitfield RGB.
    Rgb(RgbLayout),
    /// Packed luma/chroma, two pixels per 32-bit unit.
    Yuy2,
    /// A layout which can't be produced.
    #[default]
    Unknown,
}

/// The kind of a [`ColorFormat`], without its layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum ColorFormatKind {
    /// See [`ColorFormat::Palette`]
    Palette,
    /// See [`ColorFormat::Rgb`]
    Rgb,
    /// See [`ColorFormat::Yuy2`]
    Yuy2,
    /// See [`ColorFormat::Unknown`]
    Unknown,
}

impl ColorFormat {
    /// Creates a bare descriptor of the given kind.
    ///
    /// An [`Rgb`](ColorFormatKind::Rgb) descriptor made this way has an empty layout and
    /// synthesizes 0 for every colour.
    pub fn from_kind(kind: ColorFormatKind) -> Self {
        match kind {
            ColorFormatKind::Palette => ColorFormat::Palette,
            ColorFormatKind::Rgb => ColorFormat::Rgb(RgbLayout::default()),
            ColorFormatKind::Yuy2 => ColorFormat::Yuy2,
            ColorFormatKind::Unknown => ColorFormat::Unknown,
        }
    }

    /// Creates an RGB descriptor from the length and bit position of each channel.
    ///
    /// # Parameters
    ///
    /// - `bytes_per_pixel`: Size of the pixel word
    /// - `red_len`, `green_len`, `blue_len`: Bits in each channel (0-8)
    /// - `red_pos`, `green_pos`, `blue_pos`: Bit position of the lowest bit of each channel
    ///
    /// # Remarks
    ///
    /// Nothing is validated. Overlapping channels or channels which don't fit the pixel
    /// produce a descriptor whose pixels are wrong. Use [`ColorFormat::try_from_layout`]
    /// to have such layouts rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use vidblit_format::ColorFormat;
    ///
    /// let format = ColorFormat::from_layout(4, 8, 16, 8, 8, 8, 0);
    /// assert_eq!(format.synthesize_pixel(0x12, 0x34, 0x56), 0x0012_3456);
    /// assert_eq!(format.rgb_layout().unwrap().alpha_size(), 1);
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn from_layout(
        bytes_per_pixel: u8,
        red_len: u8,
        red_pos: u8,
        green_len: u8,
        green_pos: u8,
        blue_len: u8,
        blue_pos: u8,
    ) -> Self {
        ColorFormat::Rgb(RgbLayout::new(
            bytes_per_pixel,
            ChannelLayout::new(red_len, red_pos),
            ChannelLayout::new(green_len, green_pos),
            ChannelLayout::new(blue_len, blue_pos),
        ))
    }

    /// Creates an RGB descriptor from a mask and shift for each channel.
    ///
    /// The shift is the amount an 8-bit channel value is shifted left to line it up with its
    /// mask (negative for right shifts). See [`ChannelLayout::from_mask_shift`].
    ///
    /// # Examples
    ///
    /// ```
    /// use vidblit_format::ColorFormat;
    ///
    /// let from_masks = ColorFormat::from_mask_shift(2, 0xF800, 8, 0x07E0, 3, 0x001F, -3);
    /// assert_eq!(from_masks, ColorFormat::from_layout(2, 5, 11, 6, 5, 5, 0));
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn from_mask_shift(
        bytes_per_pixel: u8,
        red_mask: u32,
        red_shift: i32,
        green_mask: u32,
        green_shift: i32,
        blue_mask: u32,
        blue_shift: i32,
    ) -> Self {
        ColorFormat::Rgb(RgbLayout::new(
            bytes_per_pixel,
            ChannelLayout::from_mask_shift(red_mask, red_shift),
            ChannelLayout::from_mask_shift(green_mask, green_shift),
            ChannelLayout::from_mask_shift(blue_mask, blue_shift),
        ))
    }

    /// Strict variant of [`ColorFormat::from_layout`].
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] if the layout doesn't describe a real pixel,
    /// see [`RgbLayout::validate`].
    #[allow(clippy::too_many_arguments)]
    pub fn try_from_layout(
        bytes_per_pixel: u8,
        red_len: u8,
        red_pos: u8,
        green_len: u8,
        green_pos: u8,
        blue_len: u8,
        blue_pos: u8,
    ) -> Result<Self, LayoutError> {
        Self::from_layout(
            bytes_per_pixel,
            red_len,
            red_pos,
            green_len,
            green_pos,
            blue_len,
            blue_pos,
        )
        .validated(bytes_per_pixel)
    }

    /// Strict variant of [`ColorFormat::from_mask_shift`].
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] if the derived layout doesn't describe a real pixel,
    /// see [`RgbLayout::validate`].
    #[allow(clippy::too_many_arguments)]
    pub fn try_from_mask_shift(
        bytes_per_pixel: u8,
        red_mask: u32,
        red_shift: i32,
        green_mask: u32,
        green_shift: i32,
        blue_mask: u32,
        blue_shift: i32,
    ) -> Result<Self, LayoutError> {
        Self::from_mask_shift(
            bytes_per_pixel,
            red_mask,
            red_shift,
            green_mask,
            green_shift,
            blue_mask,
            blue_shift,
        )
        .validated(bytes_per_pixel)
    }

    fn validated(self, bytes_per_pixel: u8) -> Result<Self, LayoutError> {
        if let ColorFormat::Rgb(layout) = &self {
            if let Err(e) = layout.validate(bytes_per_pixel) {
                tracing::debug!(error = %e, "rejected rgb layout");
                return Err(e);
            }
        }

        Ok(self)
    }

    /// Creates the descriptor of a legacy format index.
    ///
    /// Indices which don't name a [`LegacyFormat`] give [`ColorFormat::Unknown`].
    ///
    /// # Examples
    ///
    /// ```
    /// use vidblit_format::ColorFormat;
    ///
    /// assert_eq!(ColorFormat::from_legacy_index(4).describe(), "rgb 5/11,6/5,5/0");
    /// assert_eq!(ColorFormat::from_legacy_index(99), ColorFormat::Unknown);
    /// ```
    pub fn from_legacy_index(index: u32) -> Self {
        match LegacyFormat::try_from(index) {
            Ok(format) => format.color_format(),
            Err(e) => {
                tracing::debug!(error = %e, "unrecognised legacy format index");
                ColorFormat::Unknown
            }
        }
    }

    /// The kind of this descriptor.
    #[inline]
    pub const fn kind(&self) -> ColorFormatKind {
        match self {
            ColorFormat::Palette => ColorFormatKind::Palette,
            ColorFormat::Rgb(_) => ColorFormatKind::Rgb,
            ColorFormat::Yuy2 => ColorFormatKind::Yuy2,
            ColorFormat::Unknown => ColorFormatKind::Unknown,
        }
    }

    /// The RGB layout, if this is an RGB descriptor.
    #[inline]
    pub const fn rgb_layout(&self) -> Option<&RgbLayout> {
        match self {
            ColorFormat::Rgb(layout) => Some(layout),
            _ => None,
        }
    }

    /// Size of one pixel in bytes.
    ///
    /// YUY2 stores 2 pixels per 4 byte unit, so it reports 2. Unknown formats report 0.
    #[inline]
    pub const fn bytes_per_pixel(&self) -> u32 {
        match self {
            ColorFormat::Palette => 1,
            ColorFormat::Rgb(layout) => layout.bytes_per_pixel(),
            ColorFormat::Yuy2 => 2,
            ColorFormat::Unknown => 0,
        }
    }

    /// Packs an 8-bit colour into a pixel of this format.
    ///
    /// - RGB: each channel keeps its most significant bits, placed at its position.
    /// - YUY2: a whole 2 pixel unit of the colour, see [`yuy2_pack`].
    /// - Palette and unknown formats: always 0, palette pixels can't be synthesized.
    #[inline]
    pub fn synthesize_pixel(&self, r: u8, g: u8, b: u8) -> u32 {
        match self {
            ColorFormat::Rgb(layout) => layout.pack(r, g, b),
            ColorFormat::Yuy2 => yuy2_pack(r, g, b),
            ColorFormat::Palette | ColorFormat::Unknown => 0,
        }
    }

    /// Packs an 8-bit colour into a pixel word of the surface's width.
    ///
    /// The synthesized pixel is truncated to `W`, keeping its low bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use vidblit_format::ColorFormat;
    ///
    /// let format = ColorFormat::from_layout(2, 5, 10, 5, 5, 5, 0);
    /// let white: u16 = format.synthesize_word(255, 255, 255);
    /// assert_eq!(white, 0x7FFF);
    /// ```
    #[inline]
    pub fn synthesize_word<W: PixelWord>(&self, r: u8, g: u8, b: u8) -> W {
        W::from_u32_truncate(self.synthesize_pixel(r, g, b))
    }

    /// Human readable description of the format, for diagnostics.
    ///
    /// One of `rgb <rlen>/<rpos>,<glen>/<gpos>,<blen>/<bpos>`, `palette`, `yuy2` or `unknown`.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorFormat::Palette => f.write_str("palette"),
            ColorFormat::Rgb(layout) => write!(
                f,
                "rgb {}/{},{}/{},{}/{}",
                layout.red().len(),
                layout.red().pos(),
                layout.green().len(),
                layout.green().pos(),
                layout.blue().len(),
                layout.blue().pos()
            ),
            ColorFormat::Yuy2 => f.write_str("yuy2"),
            ColorFormat::Unknown => f.write_str("unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn kinds_round_trip() {
        for &kind in ColorFormatKind::all_values() {
            assert_eq!(ColorFormat::from_kind(kind).kind(), kind);
        }
    }

    #[test]
    fn bare_rgb_synthesizes_zero() {
        let format = ColorFormat::from_kind(ColorFormatKind::Rgb);
        assert_eq!(format.describe(), "rgb 0/0,0/0,0/0");
        assert_eq!(format.synthesize_pixel(255, 255, 255), 0);
    }

    #[rstest]
    #[case(ColorFormat::Palette)]
    #[case(ColorFormat::Unknown)]
    fn cannot_synthesize_without_layout(#[case] format: ColorFormat) {
        assert_eq!(format.synthesize_pixel(255, 128, 7), 0);
        assert_eq!(format.synthesize_word::<u8>(255, 128, 7), 0);
    }

    #[rstest]
    #[case(ColorFormat::Palette, "palette")]
    #[case(ColorFormat::Yuy2, "yuy2")]
    #[case(ColorFormat::Unknown, "unknown")]
    #[case(ColorFormat::from_layout(2, 5, 11, 6, 5, 5, 0), "rgb 5/11,6/5,5/0")]
    fn describes_formats(#[case] format: ColorFormat, #[case] expected: &str) {
        assert_eq!(format.describe(), expected);
    }

    #[test]
    fn default_is_unknown() {
        assert_eq!(ColorFormat::default(), ColorFormat::Unknown);
    }

    #[test]
    fn yuy2_uses_luma_chroma_matrix() {
        assert_eq!(ColorFormat::Yuy2.synthesize_pixel(255, 0, 0), 0xFF4C_544C);
    }

    #[test]
    fn permissive_layout_keeps_overlap() {
        let format = ColorFormat::from_layout(2, 8, 0, 8, 4, 0, 0);
        assert_eq!(format.synthesize_pixel(0xF0, 0x0F, 0), 0xF0 | (0x0F << 4));
    }

    #[test]
    fn strict_layout_rejects_overlap() {
        assert!(matches!(
            ColorFormat::try_from_layout(2, 8, 0, 8, 4, 0, 0),
            Err(LayoutError::ChannelsOverlap { .. })
        ));
        assert_eq!(
            ColorFormat::try_from_layout(2, 5, 11, 6, 5, 5, 0),
            Ok(ColorFormat::from_layout(2, 5, 11, 6, 5, 5, 0))
        );
    }

    #[test]
    fn strict_mask_shift_rejects_out_of_range() {
        assert!(matches!(
            ColorFormat::try_from_mask_shift(2, 0x00FF_0000, 16, 0xFF00, 8, 0xFF, 0),
            Err(LayoutError::ChannelOutOfRange { .. })
        ));
    }
}
