//! Errors raised by the validating colour format constructors.

use crate::channel::Channel;
use thiserror::Error;

/// Reasons a strict constructor refused an RGB layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The pixel size isn't one of the supported word sizes.
    #[error("Invalid pixel size: {0} bytes (must be between 1 and 4)")]
    InvalidBytesPerPixel(u8),

    /// A channel holds more bits than an 8-bit channel value can fill.
    #[error("The {channel} channel is {len} bits long (at most 8 bits are supported)")]
    ChannelTooLong {
        /// The offending channel.
        channel: Channel,
        /// Its length in bits.
        len: u8,
    },

    /// A channel extends past the end of the pixel word.
    #[error("The {channel} channel ({len} bits at bit {pos}) does not fit in a {bits}-bit pixel")]
    ChannelOutOfRange {
        /// The offending channel.
        channel: Channel,
        /// Its length in bits.
        len: u8,
        /// Its bit position.
        pos: u8,
        /// Size of the pixel in bits.
        bits: u32,
    },

    /// Two channels claim the same bits.
    #[error("The {first} and {second} channels overlap")]
    ChannelsOverlap {
        /// The first of the two channels.
        first: Channel,
        /// The second of the two channels.
        second: Channel,
    },
}

/// A legacy format index which doesn't name any known layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unknown legacy format index: {0}")]
pub struct UnknownLegacyIndex(pub u32);
