#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]

pub mod color_rgb;
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub mod cpu_detect;
pub mod pixel_word;
