//! A single colour channel inside a packed pixel word.
//!
//! A channel is described by its length in bits and the position of its least significant
//! bit. Channel values travel as 8-bit numbers; a channel narrower than 8 bits keeps the
//! `len` most significant bits of the value.
//!
//! ```text
//!  bit 15          11 10            5 4            0
//! +--------------+----------------+--------------+
//! |  red 5/11    |  green 6/5     |  blue 5/0    |
//! +--------------+----------------+--------------+
//! ```

use core::fmt;
use derive_enum_all_values::AllValues;

/// Names one of the colour channels of an RGB layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum Channel {
    /// Red channel
    Red,
    /// Green channel
    Green,
    /// Blue channel
    Blue,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        })
    }
}

/// Length and position of one channel within a pixel word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ChannelLayout {
    len: u8,
    pos: u8,
}

impl ChannelLayout {
    /// Creates a channel of `len` bits whose least significant bit sits at bit `pos`.
    #[inline]
    pub const fn new(len: u8, pos: u8) -> Self {
        Self { len, pos }
    }

    /// Derives a channel from a bit mask and the shift applied to an 8-bit value to
    /// line it up with the mask.
    ///
    /// The length is the run of set bits at the bottom of the mask once its trailing zeros
    /// are skipped; a gap ends the run. The position is `8 + shift - len`, wrapped into
    /// the 8-bit position field when the inputs don't describe a real channel.
    ///
    /// # Examples
    ///
    /// ```
    /// use vidblit_format::ChannelLayout;
    ///
    /// // Green of a 5:6:5 pixel.
    /// let green = ChannelLayout::from_mask_shift(0x07E0, 3);
    /// assert_eq!(green, ChannelLayout::new(6, 5));
    /// ```
    #[inline]
    pub fn from_mask_shift(mask: u32, shift: i32) -> Self {
        let len = len_from_mask(mask);
        let pos = 8i32.wrapping_add(shift).wrapping_sub(len as i32) as u8;
        Self { len, pos }
    }

    /// Number of bits in the channel.
    #[inline]
    pub const fn len(&self) -> u8 {
        self.len
    }

    /// Returns `true` if the channel has no bits.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bit position of the least significant bit of the channel.
    #[inline]
    pub const fn pos(&self) -> u8 {
        self.pos
    }

    /// Bit position one past the most significant bit of the channel.
    #[inline]
    pub const fn end(&self) -> u32 {
        self.pos as u32 + self.len as u32
    }

    /// The distance an 8-bit value is shifted left to land in this channel.
    /// Negative values are right shifts.
    #[inline]
    pub const fn shift(&self) -> i32 {
        self.pos as i32 + self.len as i32 - 8
    }

    /// Bits of the pixel word occupied by this channel.
    #[inline]
    pub fn mask(&self) -> u32 {
        let low = 1u32
            .checked_shl(self.len as u32)
            .map_or(u32::MAX, |bit| bit - 1);
        low.checked_shl(self.pos as u32).unwrap_or(0)
    }

    /// Places the top [`len`](Self::len) bits of `value` into this channel's bits of a word.
    ///
    /// # Examples
    ///
    /// ```
    /// use vidblit_format::ChannelLayout;
    ///
    /// let red = ChannelLayout::new(5, 11);
    /// assert_eq!(red.insert(0xFF), 0xF800);
    /// assert_eq!(red.insert(0x07), 0); // below the 5 kept bits
    /// ```
    #[inline]
    pub fn insert(&self, value: u8) -> u32 {
        shift_by(value as u32, self.shift()) & self.mask()
    }

    /// Reads this channel out of a pixel word as an 8-bit value.
    ///
    /// The kept bits land at the top of the byte; the low `8 - len` bits are zero.
    /// Use [`widen_channel`] to fill them.
    #[inline]
    pub fn extract(&self, pixel: u32) -> u8 {
        shift_by(pixel & self.mask(), -self.shift()) as u8
    }
}

/// Shifts left by `shift` bits, or right when it's negative. Shifts of 32 or more give 0.
#[inline(always)]
fn shift_by(value: u32, shift: i32) -> u32 {
    if shift < 0 {
        value.checked_shr(shift.unsigned_abs()).unwrap_or(0)
    } else {
        value.checked_shl(shift as u32).unwrap_or(0)
    }
}

/// Counts the contiguous set bits of a mask, starting from its lowest set bit.
#[inline]
pub(crate) fn len_from_mask(mask: u32) -> u8 {
    if mask == 0 {
        return 0;
    }

    (mask >> mask.trailing_zeros()).trailing_ones() as u8
}

/// Widens a channel value read from an `len`-bit channel back to the full 8-bit range.
///
/// `value` holds the channel in its top `len` bits. Those bits are replicated downwards,
/// doubling the filled width on each step, so that the darkest value maps to 0 and the
/// brightest to 255 rather than to e.g. `0xF8`.
///
/// Lengths of 0, or 8 and above, return `value` unchanged.
///
/// # Examples
///
/// ```
/// use vidblit_format::widen_channel;
///
/// assert_eq!(widen_channel(0xF8, 5), 0xFF);
/// assert_eq!(widen_channel(0x00, 5), 0x00);
/// assert_eq!(widen_channel(0b1010_0000, 3), 0b1011_0110);
/// ```
#[inline]
pub fn widen_channel(value: u8, len: u8) -> u8 {
    if len == 0 {
        return value;
    }

    let mut value = value;
    let mut fill = len as u32;
    while fill < 8 {
        value |= value >> fill;
        fill *= 2;
    }
    value
}
