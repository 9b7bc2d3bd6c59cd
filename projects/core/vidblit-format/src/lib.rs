#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod channel;
pub mod color_format;
pub mod error;
pub mod layout;
pub mod legacy;
mod synthesize;

pub use channel::{widen_channel, Channel, ChannelLayout};
pub use color_format::{ColorFormat, ColorFormatKind};
pub use error::{LayoutError, UnknownLegacyIndex};
pub use layout::RgbLayout;
pub use legacy::LegacyFormat;
pub use synthesize::yuy2_pack;
pub use vidblit_common::color_rgb::ColorRgb;

/// Squared euclidean distance between two colours.
///
/// See [`ColorRgb::distance`].
#[inline]
pub fn color_distance(a: &ColorRgb, b: &ColorRgb) -> u32 {
    a.distance(b)
}
