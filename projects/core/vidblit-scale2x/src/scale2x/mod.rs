//! # Scale2x
//!
//! Every source pixel `E` is expanded to a 2x2 block using its four direct neighbours:
//!
//! ```text
//!         +---+                  +----+----+
//!         | B |                  | E0 | E1 |
//!     +---+---+---+      --->    +----+----+
//!     | D | E | F |              | E2 | E3 |
//!     +---+---+---+              +----+----+
//!         | H |
//!         +---+
//! ```
//!
//! ```text
//! E0 = D == B && B != F && D != H ? D : E
//! E1 = B == F && B != D && F != H ? F : E
//! E2 = D == H && D != B && H != F ? D : E
//! E3 = H == F && D != H && B != F ? F : E
//! ```
//!
//! Rows are processed one at a time. The caller provides the row above (`B`), the row
//! itself (`D`, `E`, `F`) and the row below (`H`); at the top and bottom of a frame the
//! current row is passed again in place of the missing neighbour. Horizontally the first
//! pixel uses itself as `D` and the last pixel uses itself as `F`.
//!
//! The SIMD kernels evaluate the rule for a full register of pixels at once, and fall back
//! to the portable rule for the first pixel and any pixels that do not fill a register.

pub(crate) mod portable;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub(crate) mod sse2;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub(crate) mod avx2;


use core::slice;
use vidblit_common::pixel_word::PixelWord;

/// A pixel word the Scale2x kernels can process.
///
/// Implemented for [`u8`], [`u16`] and [`u32`].
pub trait Scale2xWord: PixelWord {
    /// Upscales one row with the portable implementation.
    #[doc(hidden)]
    fn upscale_row_portable(
        dst0: &mut [Self],
        dst1: &mut [Self],
        src0: &[Self],
        src1: &[Self],
        src2: &[Self],
    );

    /// Upscales one row with the best implementation for the current CPU.
    ///
    /// # Safety
    ///
    /// Same as [`upscale_row`].
    #[doc(hidden)]
    unsafe fn upscale_row_dispatch(
        dst0: *mut Self,
        dst1: *mut Self,
        src0: *const Self,
        src1: *const Self,
        src2: *const Self,
        count: usize,
    );
}

macro_rules! impl_scale2x_word {
    ($word:ty, $portable:path) => {
        impl Scale2xWord for $word {
            #[inline(always)]
            fn upscale_row_portable(
                dst0: &mut [Self],
                dst1: &mut [Self],
                src0: &[Self],
                src1: &[Self],
                src2: &[Self],
            ) {
                $portable(dst0, dst1, src0, src1, src2)
            }

            #[inline(always)]
            unsafe fn upscale_row_dispatch(
                dst0: *mut Self,
                dst1: *mut Self,
                src0: *const Self,
                src1: *const Self,
                src2: *const Self,
                count: usize,
            ) {
                #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
                {
                    upscale_row_x86(dst0, dst1, src0, src1, src2, count)
                }

                #[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
                {
                    upscale_row_fallback(dst0, dst1, src0, src1, src2, count)
                }
            }
        }
    };
}

impl_scale2x_word!(u8, portable::upscale_row_u8);
impl_scale2x_word!(u16, portable::upscale_row_u16);
impl_scale2x_word!(u32, portable::upscale_row_u32);

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
#[inline(always)]
unsafe fn upscale_row_x86<W: Scale2xWord + sse2::Sse2Lanes + avx2::Avx2Lanes>(
    dst0: *mut W,
    dst1: *mut W,
    src0: *const W,
    src1: *const W,
    src2: *const W,
    count: usize,
) {
    #[cfg(not(feature = "no-runtime-cpu-detection"))]
    {
        // Runtime feature detection
        if vidblit_common::cpu_detect::has_avx2() {
            avx2::upscale_row(dst0, dst1, src0, src1, src2, count);
            return;
        }

        if vidblit_common::cpu_detect::has_sse2() {
            sse2::upscale_row(dst0, dst1, src0, src1, src2, count);
            return;
        }
    }

    #[cfg(feature = "no-runtime-cpu-detection")]
    {
        if cfg!(target_feature = "avx2") {
            avx2::upscale_row(dst0, dst1, src0, src1, src2, count);
            return;
        }

        if cfg!(target_feature = "sse2") {
            sse2::upscale_row(dst0, dst1, src0, src1, src2, count);
            return;
        }
    }

    // Fallback to portable implementation
    upscale_row_fallback(dst0, dst1, src0, src1, src2, count)
}

#[inline(always)]
unsafe fn upscale_row_fallback<W: Scale2xWord>(
    dst0: *mut W,
    dst1: *mut W,
    src0: *const W,
    src1: *const W,
    src2: *const W,
    count: usize,
) {
    W::upscale_row_portable(
        slice::from_raw_parts_mut(dst0, count * 2),
        slice::from_raw_parts_mut(dst1, count * 2),
        slice::from_raw_parts(src0, count),
        slice::from_raw_parts(src1, count),
        slice::from_raw_parts(src2, count),
    )
}

/// Upscales one row of `count` pixels into two output rows of `count * 2` pixels,
/// using the best known implementation for the current CPU.
///
/// # Arguments
///
/// * `dst0` - First output row (`E0 E1` pairs)
/// * `dst1` - Second output row (`E2 E3` pairs)
/// * `src0` - Row above the current row
/// * `src1` - Current row
/// * `src2` - Row below the current row
/// * `count` - Number of pixels in each source row
///
/// # Safety
///
/// - `src0`, `src1` and `src2` must be valid for reads of `count` pixels
/// - `dst0` and `dst1` must be valid for writes of `count * 2` pixels
/// - `dst0` and `dst1` must not overlap each other or any source row
/// - The source rows may overlap each other (e.g. the same row at a frame edge)
///
/// # Remarks
///
/// `count == 0` is a no-op. Unaligned pointers are supported; for performance it's
/// recommended that rows are 32-byte aligned.
#[inline]
pub unsafe fn upscale_row<W: Scale2xWord>(
    dst0: *mut W,
    dst1: *mut W,
    src0: *const W,
    src1: *const W,
    src2: *const W,
    count: usize,
) {
    if count == 0 {
        return;
    }

    W::upscale_row_dispatch(dst0, dst1, src0, src1, src2, count)
}
