#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use super::portable::upscale_range;
use core::mem::size_of;
use core::slice;
use vidblit_common::pixel_word::PixelWord;

/// Lane-width specific SSE2 operations for a pixel word.
pub trait Sse2Lanes: PixelWord {
    /// Per-lane equality, all ones where equal.
    unsafe fn eq128(a: __m128i, b: __m128i) -> __m128i;

    /// Interleaves the low halves of `a` and `b`.
    unsafe fn interleave_lo128(a: __m128i, b: __m128i) -> __m128i;

    /// Interleaves the high halves of `a` and `b`.
    unsafe fn interleave_hi128(a: __m128i, b: __m128i) -> __m128i;
}

impl Sse2Lanes for u8 {
    #[inline(always)]
    unsafe fn eq128(a: __m128i, b: __m128i) -> __m128i {
        _mm_cmpeq_epi8(a, b)
    }

    #[inline(always)]
    unsafe fn interleave_lo128(a: __m128i, b: __m128i) -> __m128i {
        _mm_unpacklo_epi8(a, b)
    }

    #[inline(always)]
    unsafe fn interleave_hi128(a: __m128i, b: __m128i) -> __m128i {
        _mm_unpackhi_epi8(a, b)
    }
}

impl Sse2Lanes for u16 {
    #[inline(always)]
    unsafe fn eq128(a: __m128i, b: __m128i) -> __m128i {
        _mm_cmpeq_epi16(a, b)
    }

    #[inline(always)]
    unsafe fn interleave_lo128(a: __m128i, b: __m128i) -> __m128i {
        _mm_unpacklo_epi16(a, b)
    }

    #[inline(always)]
    unsafe fn interleave_hi128(a: __m128i, b: __m128i) -> __m128i {
        _mm_unpackhi_epi16(a, b)
    }
}

impl Sse2Lanes for u32 {
    #[inline(always)]
    unsafe fn eq128(a: __m128i, b: __m128i) -> __m128i {
        _mm_cmpeq_epi32(a, b)
    }

    #[inline(always)]
    unsafe fn interleave_lo128(a: __m128i, b: __m128i) -> __m128i {
        _mm_unpacklo_epi32(a, b)
    }

    #[inline(always)]
    unsafe fn interleave_hi128(a: __m128i, b: __m128i) -> __m128i {
        _mm_unpackhi_epi32(a, b)
    }
}

/// `mask ? a : b`, per bit.
#[inline(always)]
unsafe fn select(mask: __m128i, a: __m128i, b: __m128i) -> __m128i {
    _mm_or_si128(_mm_and_si128(mask, a), _mm_andnot_si128(mask, b))
}

/// Upscales one row using SSE2 instructions
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
/// - `count` must be at least 1
/// - CPU must support SSE2 instructions
#[target_feature(enable = "sse2")]
pub unsafe fn upscale_row<W: Sse2Lanes>(
    dst0: *mut W,
    dst1: *mut W,
    src0: *const W,
    src1: *const W,
    src2: *const W,
    count: usize,
) {
    debug_assert!(count >= 1, "count must be at least 1");

    let lanes = size_of::<__m128i>() / W::BYTES;
    let out0 = slice::from_raw_parts_mut(dst0, count * 2);
    let out1 = slice::from_raw_parts_mut(dst1, count * 2);
    let above = slice::from_raw_parts(src0, count);
    let current = slice::from_raw_parts(src1, count);
    let below = slice::from_raw_parts(src2, count);

    // The first pixel has no left neighbour.
    upscale_range(out0, out1, above, current, below, 0..1);

    // Each register needs one pixel of context on both sides.
    let mut x = 1;
    while x + lanes < count {
        let b = _mm_loadu_si128(above.as_ptr().add(x) as *const __m128i);
        let h = _mm_loadu_si128(below.as_ptr().add(x) as *const __m128i);
        let d = _mm_loadu_si128(current.as_ptr().add(x - 1) as *const __m128i);
        let e = _mm_loadu_si128(current.as_ptr().add(x) as *const __m128i);
        let f = _mm_loadu_si128(current.as_ptr().add(x + 1) as *const __m128i);

        let db = W::eq128(d, b);
        let bf = W::eq128(b, f);
        let dh = W::eq128(d, h);
        let hf = W::eq128(h, f);

        // andnot(a, b) == !a & b
        let e0 = select(_mm_andnot_si128(_mm_or_si128(bf, dh), db), d, e);
        let e1 = select(_mm_andnot_si128(_mm_or_si128(db, hf), bf), f, e);
        let e2 = select(_mm_andnot_si128(_mm_or_si128(db, hf), dh), d, e);
        let e3 = select(_mm_andnot_si128(_mm_or_si128(dh, bf), hf), f, e);

        let out0_ptr = out0.as_mut_ptr().add(x * 2);
        _mm_storeu_si128(out0_ptr as *mut __m128i, W::interleave_lo128(e0, e1));
        _mm_storeu_si128(
            out0_ptr.add(lanes) as *mut __m128i,
            W::interleave_hi128(e0, e1),
        );

        let out1_ptr = out1.as_mut_ptr().add(x * 2);
        _mm_storeu_si128(out1_ptr as *mut __m128i, W::interleave_lo128(e2, e3));
        _mm_storeu_si128(
            out1_ptr.add(lanes) as *mut __m128i,
            W::interleave_hi128(e2, e3),
        );

        x += lanes;
    }

    // Handle remaining pixels, including the last one
    upscale_range(out0, out1, above, current, below, x..count);
}
