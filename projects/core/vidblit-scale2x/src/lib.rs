#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(test)]
extern crate alloc;

pub mod error;
pub mod safe;
pub mod scale2x;

#[cfg(feature = "bench")]
pub mod bench;

pub use error::UpscaleValidationError;
pub use safe::{upscale_frame, upscale_row_16, upscale_row_32, upscale_row_8, upscale_row_safe};
pub use scale2x::{upscale_row, Scale2xWord};
pub use vidblit_common::pixel_word::PixelWord;
