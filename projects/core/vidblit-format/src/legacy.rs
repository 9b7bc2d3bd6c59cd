//! The fixed set of pixel formats identified by a numeric mode index.
//!
//! Video mode tables refer to the pixel format of a mode with a small index rather than a
//! full layout. The BGR formats store blue in the low bits of the word.
//!
//! | Index | Format     | Bytes | Layout (red, green, blue) |
//! |-------|------------|-------|---------------------------|
//! | 1     | `Palette8` | 1     | palette index             |
//! | 2     | `Bgr8`     | 1     | 3/5, 3/2, 2/0             |
//! | 3     | `Bgr15`    | 2     | 5/10, 5/5, 5/0            |
//! | 4     | `Bgr16`    | 2     | 5/11, 6/5, 5/0            |
//! | 5     | `Bgr24`    | 3     | 8/16, 8/8, 8/0            |
//! | 6     | `Bgr32`    | 4     | 8/16, 8/8, 8/0            |
//! | 7     | `Yuy2`     | 4     | packed luma/chroma pair   |

use crate::color_format::ColorFormat;
use crate::error::UnknownLegacyIndex;
use derive_enum_all_values::AllValues;

/// A pixel format named by a legacy mode index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum LegacyFormat {
    /// 8-bit palette index
    Palette8,
    /// 8-bit 3:3:2
    Bgr8,
    /// 15-bit 5:5:5 in a 16-bit word
    Bgr15,
    /// 16-bit 5:6:5
    Bgr16,
    /// 24-bit 8:8:8
    Bgr24,
    /// 24-bit 8:8:8 in a 32-bit word
    Bgr32,
    /// Packed luma/chroma, two pixels per 32-bit unit
    Yuy2,
}

impl LegacyFormat {
    /// The numeric index of this format in mode tables.
    #[inline]
    pub const fn index(self) -> u32 {
        match self {
            LegacyFormat::Palette8 => 1,
            LegacyFormat::Bgr8 => 2,
            LegacyFormat::Bgr15 => 3,
            LegacyFormat::Bgr16 => 4,
            LegacyFormat::Bgr24 => 5,
            LegacyFormat::Bgr32 => 6,
            LegacyFormat::Yuy2 => 7,
        }
    }

    /// The colour format descriptor for this format.
    pub fn color_format(self) -> ColorFormat {
        match self {
            LegacyFormat::Palette8 => ColorFormat::Palette,
            LegacyFormat::Bgr8 => ColorFormat::from_layout(1, 3, 5, 3, 2, 2, 0),
            LegacyFormat::Bgr15 => ColorFormat::from_layout(2, 5, 10, 5, 5, 5, 0),
            LegacyFormat::Bgr16 => ColorFormat::from_layout(2, 5, 11, 6, 5, 5, 0),
            LegacyFormat::Bgr24 => ColorFormat::from_layout(3, 8, 16, 8, 8, 8, 0),
            LegacyFormat::Bgr32 => ColorFormat::from_layout(4, 8, 16, 8, 8, 8, 0),
            LegacyFormat::Yuy2 => ColorFormat::Yuy2,
        }
    }
}

impl TryFrom<u32> for LegacyFormat {
    type Error = UnknownLegacyIndex;

    fn try_from(index: u32) -> Result<Self, Self::Error> {
        LegacyFormat::all_values()
            .iter()
            .copied()
            .find(|format| format.index() == index)
            .ok_or(UnknownLegacyIndex(index))
    }
}

impl From<LegacyFormat> for ColorFormat {
    fn from(format: LegacyFormat) -> Self {
        format.color_format()
    }
}
