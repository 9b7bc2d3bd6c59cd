//! Bitfield RGB layouts.

use crate::channel::{Channel, ChannelLayout};
use crate::error::LayoutError;

/// Where the red, green and blue channels live inside a packed RGB pixel word.
///
/// Any bytes of the word not spanned by the three channels are counted as alpha
/// (or padding) bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RgbLayout {
    red: ChannelLayout,
    green: ChannelLayout,
    blue: ChannelLayout,
    alpha_size: u8,
}

impl RgbLayout {
    /// Creates a layout for a pixel of `bytes_per_pixel` bytes.
    ///
    /// Nothing is validated. A layout whose channels overlap, or spill out of the pixel,
    /// is kept as is and packs wrong values; a channel total wider than the pixel makes
    /// the alpha size saturate at 0. See [`RgbLayout::validate`].
    pub fn new(
        bytes_per_pixel: u8,
        red: ChannelLayout,
        green: ChannelLayout,
        blue: ChannelLayout,
    ) -> Self {
        let color_bits = red.len() as u32 + green.len() as u32 + blue.len() as u32;
        let color_bytes = color_bits.div_ceil(8);
        let alpha_size = (bytes_per_pixel as u32).saturating_sub(color_bytes) as u8;

        Self {
            red,
            green,
            blue,
            alpha_size,
        }
    }

    /// The red channel.
    #[inline]
    pub const fn red(&self) -> ChannelLayout {
        self.red
    }

    /// The green channel.
    #[inline]
    pub const fn green(&self) -> ChannelLayout {
        self.green
    }

    /// The blue channel.
    #[inline]
    pub const fn blue(&self) -> ChannelLayout {
        self.blue
    }

    /// Looks up a channel by name.
    #[inline]
    pub const fn channel(&self, channel: Channel) -> ChannelLayout {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// Number of whole bytes in the pixel not spanned by the colour channels.
    #[inline]
    pub const fn alpha_size(&self) -> u8 {
        self.alpha_size
    }

    /// Total number of colour bits.
    #[inline]
    pub const fn color_bits(&self) -> u32 {
        self.red.len() as u32 + self.green.len() as u32 + self.blue.len() as u32
    }

    /// Size of the pixel word in bytes.
    #[inline]
    pub const fn bytes_per_pixel(&self) -> u32 {
        self.color_bits().div_ceil(8) + self.alpha_size as u32
    }

    /// Checks the layout describes a real pixel of `bytes_per_pixel` bytes.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::InvalidBytesPerPixel`] if the pixel isn't 1 to 4 bytes
    /// - [`LayoutError::ChannelTooLong`] if a channel holds more than 8 bits
    /// - [`LayoutError::ChannelOutOfRange`] if a channel ends past the last bit of the pixel
    /// - [`LayoutError::ChannelsOverlap`] if two channels share a bit
    pub fn validate(&self, bytes_per_pixel: u8) -> Result<(), LayoutError> {
        if !(1..=4).contains(&bytes_per_pixel) {
            return Err(LayoutError::InvalidBytesPerPixel(bytes_per_pixel));
        }

        let bits = bytes_per_pixel as u32 * 8;
        for &channel in Channel::all_values() {
            let layout = self.channel(channel);
            if layout.len() > 8 {
                return Err(LayoutError::ChannelTooLong {
                    channel,
                    len: layout.len(),
                });
            }

            if layout.end() > bits {
                return Err(LayoutError::ChannelOutOfRange {
                    channel,
                    len: layout.len(),
                    pos: layout.pos(),
                    bits,
                });
            }
        }

        let channels = Channel::all_values();
        for (x, &first) in channels.iter().enumerate() {
            for &second in &channels[x + 1..] {
                if self.channel(first).mask() & self.channel(second).mask() != 0 {
                    return Err(LayoutError::ChannelsOverlap { first, second });
                }
            }
        }

        Ok(())
    }
}
