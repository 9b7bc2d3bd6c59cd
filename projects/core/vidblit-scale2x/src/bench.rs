//! Benchmark functions re-exported for external benchmarks.
//!
//! This module re-exposes the individual kernels, which are `pub(crate)`, so that
//! external benchmarks can compare them when the `bench` feature is enabled.
#![allow(clippy::missing_safety_doc)]
#![cfg(not(tarpaulin_include))]

/// Re-exported Scale2x row kernels, one per implementation and pixel width.
pub mod scale2x {
    use core::slice;

    macro_rules! portable_kernel {
        ($name:ident, $word:ty, $kernel:path) => {
            pub unsafe fn $name(
                dst0: *mut $word,
                dst1: *mut $word,
                src0: *const $word,
                src1: *const $word,
                src2: *const $word,
                count: usize,
            ) {
                $kernel(
                    slice::from_raw_parts_mut(dst0, count * 2),
                    slice::from_raw_parts_mut(dst1, count * 2),
                    slice::from_raw_parts(src0, count),
                    slice::from_raw_parts(src1, count),
                    slice::from_raw_parts(src2, count),
                )
            }
        };
    }

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    macro_rules! simd_kernel {
        ($name:ident, $word:ty, $kernel:expr) => {
            pub unsafe fn $name(
                dst0: *mut $word,
                dst1: *mut $word,
                src0: *const $word,
                src1: *const $word,
                src2: *const $word,
                count: usize,
            ) {
                $kernel(dst0, dst1, src0, src1, src2, count)
            }
        };
    }

    // Portable implementations
    portable_kernel!(portable_u8, u8, crate::scale2x::portable::upscale_row_u8);
    portable_kernel!(portable_u16, u16, crate::scale2x::portable::upscale_row_u16);
    portable_kernel!(portable_u32, u32, crate::scale2x::portable::upscale_row_u32);

    // SSE2 implementations
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    simd_kernel!(sse2_u8, u8, crate::scale2x::sse2::upscale_row::<u8>);
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    simd_kernel!(sse2_u16, u16, crate::scale2x::sse2::upscale_row::<u16>);
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    simd_kernel!(sse2_u32, u32, crate::scale2x::sse2::upscale_row::<u32>);

    // AVX2 implementations
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    simd_kernel!(avx2_u8, u8, crate::scale2x::avx2::upscale_row::<u8>);
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    simd_kernel!(avx2_u16, u16, crate::scale2x::avx2::upscale_row::<u16>);
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    simd_kernel!(avx2_u32, u32, crate::scale2x::avx2::upscale_row::<u32>);
}
