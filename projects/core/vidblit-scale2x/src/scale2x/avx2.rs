#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use super::portable::upscale_range;
use core::mem::size_of;
use core::slice;
use vidblit_common::pixel_word::PixelWord;

/// Lane-width specific AVX2 operations for a pixel word.
///
/// The interleaves work within each 128-bit half, like the underlying instructions.
pub trait Avx2Lanes: PixelWord {
    /// Per-lane equality, all ones where equal.
    unsafe fn eq256(a: __m256i, b: __m256i) -> __m256i;

    /// Interleaves the low quarter of each 128-bit half of `a` and `b`.
    unsafe fn interleave_lo256(a: __m256i, b: __m256i) -> __m256i;

    /// Interleaves the high quarter of each 128-bit half of `a` and `b`.
    unsafe fn interleave_hi256(a: __m256i, b: __m256i) -> __m256i;
}

impl Avx2Lanes for u8 {
    #[inline(always)]
    unsafe fn eq256(a: __m256i, b: __m256i) -> __m256i {
        _mm256_cmpeq_epi8(a, b)
    }

    #[inline(always)]
    unsafe fn interleave_lo256(a: __m256i, b: __m256i) -> __m256i {
        _mm256_unpacklo_epi8(a, b)
    }

    #[inline(always)]
    unsafe fn interleave_hi256(a: __m256i, b: __m256i) -> __m256i {
        _mm256_unpackhi_epi8(a, b)
    }
}

impl Avx2Lanes for u16 {
    #[inline(always)]
    unsafe fn eq256(a: __m256i, b: __m256i) -> __m256i {
        _mm256_cmpeq_epi16(a, b)
    }

    #[inline(always)]
    unsafe fn interleave_lo256(a: __m256i, b: __m256i) -> __m256i {
        _mm256_unpacklo_epi16(a, b)
    }

    #[inline(always)]
    unsafe fn interleave_hi256(a: __m256i, b: __m256i) -> __m256i {
        _mm256_unpackhi_epi16(a, b)
    }
}

impl Avx2Lanes for u32 {
    #[inline(always)]
    unsafe fn eq256(a: __m256i, b: __m256i) -> __m256i {
        _mm256_cmpeq_epi32(a, b)
    }

    #[inline(always)]
    unsafe fn interleave_lo256(a: __m256i, b: __m256i) -> __m256i {
        _mm256_unpacklo_epi32(a, b)
    }

    #[inline(always)]
    unsafe fn interleave_hi256(a: __m256i, b: __m256i) -> __m256i {
        _mm256_unpackhi_epi32(a, b)
    }
}

/// `mask ? a : b`, per bit.
#[inline(always)]
unsafe fn select(mask: __m256i, a: __m256i, b: __m256i) -> __m256i {
    _mm256_or_si256(_mm256_and_si256(mask, a), _mm256_andnot_si256(mask, b))
}

/// Interleaves `a` and `b` across the full register, returning the first and second
/// halves of the result in order.
#[inline(always)]
unsafe fn interleave<W: Avx2Lanes>(a: __m256i, b: __m256i) -> (__m256i, __m256i) {
    // lo: [a0 b0 .. | a2 b2 ..], hi: [a1 b1 .. | a3 b3 ..] (in 128-bit halves)
    let lo = W::interleave_lo256(a, b);
    let hi = W::interleave_hi256(a, b);
    (
        _mm256_permute2x128_si256::<0x20>(lo, hi),
        _mm256_permute2x128_si256::<0x31>(lo, hi),
    )
}

/// Upscales one row using AVX2 instructions
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
/// - CPU must support AVX2 instructions
#[target_feature(enable = "avx2")]
pub unsafe fn upscale_row<W: Avx2Lanes>(
    dst0: *mut W,
    dst1: *mut W,
    src0: *const W,
    src1: *const W,
    src2: *const W,
    count: usize,
) {
    debug_assert!(count >= 1, "count must be at least 1");

    let lanes = size_of::<__m256i>() / W::BYTES;
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
        let b = _mm256_loadu_si256(above.as_ptr().add(x) as *const __m256i);
        let h = _mm256_loadu_si256(below.as_ptr().add(x) as *const __m256i);
        let d = _mm256_loadu_si256(current.as_ptr().add(x - 1) as *const __m256i);
        let e = _mm256_loadu_si256(current.as_ptr().add(x) as *const __m256i);
        let f = _mm256_loadu_si256(current.as_ptr().add(x + 1) as *const __m256i);

        let db = W::eq256(d, b);
        let bf = W::eq256(b, f);
        let dh = W::eq256(d, h);
        let hf = W::eq256(h, f);

        // andnot(a, b) == !a & b
        let e0 = select(_mm256_andnot_si256(_mm256_or_si256(bf, dh), db), d, e);
        let e1 = select(_mm256_andnot_si256(_mm256_or_si256(db, hf), bf), f, e);
        let e2 = select(_mm256_andnot_si256(_mm256_or_si256(db, hf), dh), d, e);
        let e3 = select(_mm256_andnot_si256(_mm256_or_si256(dh, bf), hf), f, e);

        let (row0_lo, row0_hi) = interleave::<W>(e0, e1);
        let out0_ptr = out0.as_mut_ptr().add(x * 2);
        _mm256_storeu_si256(out0_ptr as *mut __m256i, row0_lo);
        _mm256_storeu_si256(out0_ptr.add(lanes) as *mut __m256i, row0_hi);

        let (row1_lo, row1_hi) = interleave::<W>(e2, e3);
        let out1_ptr = out1.as_mut_ptr().add(x * 2);
        _mm256_storeu_si256(out1_ptr as *mut __m256i, row1_lo);
        _mm256_storeu_si256(out1_ptr.add(lanes) as *mut __m256i, row1_hi);

        x += lanes;
    }

    // Handle remaining pixels, including the last one
    upscale_range(out0, out1, above, current, below, x..count);
}
