//! Fixed-width pixel words.
//!
//! A frame buffer is a sequence of pixel words of one width: 8, 16 or 32 bits.
//! What the bits of a word mean is decided by a colour format descriptor; code
//! which only moves or compares pixels (blitters, scalers) treats them as opaque.
//!
//! [`PixelWord`] is sealed, it is implemented for [`u8`], [`u16`] and [`u32`] only.

use core::fmt::Debug;
use core::hash::Hash;

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
}

/// An opaque fixed-width pixel word.
///
/// Two words are the same pixel if and only if they compare equal bit for bit.
pub trait PixelWord: sealed::Sealed + Copy + Eq + Hash + Debug + Default + Send + Sync + 'static {
    /// Width of the word in bytes.
    const BYTES: usize;

    /// Truncates a 32-bit packed pixel to this width, keeping the low bits.
    fn from_u32_truncate(value: u32) -> Self;
}

impl PixelWord for u8 {
    const BYTES: usize = 1;

    #[inline(always)]
    fn from_u32_truncate(value: u32) -> Self {
        value as u8
    }
}

impl PixelWord for u16 {
    const BYTES: usize = 2;

    #[inline(always)]
    fn from_u32_truncate(value: u32) -> Self {
        value as u16
    }
}

impl PixelWord for u32 {
    const BYTES: usize = 4;

    #[inline(always)]
    fn from_u32_truncate(value: u32) -> Self {
        value
    }
}
