use core::ops::Range;
use multiversion::multiversion;
use vidblit_common::pixel_word::PixelWord;

/// Expands the centre pixel `e` into its 2x2 block `[E0, E1, E2, E3]`.
///
/// # Arguments
///
/// * `b` - Pixel above `e`
/// * `d` - Pixel left of `e`
/// * `e` - Centre pixel
/// * `f` - Pixel right of `e`
/// * `h` - Pixel below `e`
#[inline(always)]
pub(crate) fn expand_pixel<W: PixelWord>(b: W, d: W, e: W, f: W, h: W) -> [W; 4] {
    let e0 = if d == b && b != f && d != h { d } else { e };
    let e1 = if b == f && b != d && f != h { f } else { e };
    let e2 = if d == h && d != b && h != f { d } else { e };
    let e3 = if h == f && d != h && b != f { f } else { e };
    [e0, e1, e2, e3]
}

/// Upscales the pixels of `src1` at the positions in `range`, clamping the horizontal
/// neighbours at both ends of the row.
///
/// Used for the row edges and for pixels left over after a SIMD loop.
///
/// # Panics
///
/// If `range` extends past `src1`, or a source/destination row is too short for it.
#[inline(always)]
pub(crate) fn upscale_range<W: PixelWord>(
    dst0: &mut [W],
    dst1: &mut [W],
    src0: &[W],
    src1: &[W],
    src2: &[W],
    range: Range<usize>,
) {
    let last = src1.len().wrapping_sub(1);
    for x in range {
        let e = src1[x];
        let d = if x == 0 { e } else { src1[x - 1] };
        let f = if x == last { e } else { src1[x + 1] };
        let [e0, e1, e2, e3] = expand_pixel(src0[x], d, e, f, src2[x]);

        dst0[x * 2] = e0;
        dst0[x * 2 + 1] = e1;
        dst1[x * 2] = e2;
        dst1[x * 2 + 1] = e3;
    }
}

/// Upscales a full row one pixel at a time.
///
/// # Arguments
///
/// * `dst0` - First output row, at least `src1.len() * 2` pixels
/// * `dst1` - Second output row, at least `src1.len() * 2` pixels
/// * `src0` - Row above, at least `src1.len()` pixels
/// * `src1` - Current row
/// * `src2` - Row below, at least `src1.len()` pixels
#[inline(always)]
pub(crate) fn upscale_row_generic<W: PixelWord>(
    dst0: &mut [W],
    dst1: &mut [W],
    src0: &[W],
    src1: &[W],
    src2: &[W],
) {
    let count = src1.len();
    debug_assert!(src0.len() >= count && src2.len() >= count);
    debug_assert!(dst0.len() >= count * 2 && dst1.len() >= count * 2);
    if count == 0 {
        return;
    }

    upscale_range(dst0, dst1, src0, src1, src2, 0..1);
    if count == 1 {
        return;
    }

    // Interior pixels have both horizontal neighbours.
    let interior = src1
        .windows(3)
        .zip(&src0[1..])
        .zip(&src2[1..])
        .zip(dst0[2..].chunks_exact_mut(2))
        .zip(dst1[2..].chunks_exact_mut(2));

    for ((((window, &b), &h), out0), out1) in interior {
        let [e0, e1, e2, e3] = expand_pixel(b, window[0], window[1], window[2], h);
        out0[0] = e0;
        out0[1] = e1;
        out1[0] = e2;
        out1[1] = e3;
    }

    upscale_range(dst0, dst1, src0, src1, src2, count - 1..count);
}

#[multiversion(targets(
    // x86-64-v3 without lahfsahf
    "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
    // x86-64-v2 without lahfsahf
    "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
))]
pub(crate) fn upscale_row_u8(dst0: &mut [u8], dst1: &mut [u8], src0: &[u8], src1: &[u8], src2: &[u8]) {
    upscale_row_generic(dst0, dst1, src0, src1, src2)
}

#[multiversion(targets(
    // x86-64-v3 without lahfsahf
    "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
    // x86-64-v2 without lahfsahf
    "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
))]
pub(crate) fn upscale_row_u16(
    dst0: &mut [u16],
    dst1: &mut [u16],
    src0: &[u16],
    src1: &[u16],
    src2: &[u16],
) {
    upscale_row_generic(dst0, dst1, src0, src1, src2)
}

#[multiversion(targets(
    // x86-64-v3 without lahfsahf
    "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
    // x86-64-v2 without lahfsahf
    "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
))]
pub(crate) fn upscale_row_u32(
    dst0: &mut [u32],
    dst1: &mut [u32],
    src0: &[u32],
    src1: &[u32],
    src2: &[u32],
) {
    upscale_row_generic(dst0, dst1, src0, src1, src2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale2x::tests::{
        assert_implementation_matches_reference, generate_test_rows, upscale_with_reference,
    };
    use alloc::vec;
    use rstest::rstest;

    #[rstest]
    // Nothing matches: every pixel is replicated.
    #[case::replicate(1, 2, 3, 4, 5, [3, 3, 3, 3])]
    // Flat neighbourhood: every pixel is replicated.
    #[case::flat(7, 7, 7, 7, 7, [7, 7, 7, 7])]
    // Isolated centre pixel.
    #[case::isolated(1, 1, 2, 1, 1, [2, 2, 2, 2])]
    // Diagonal edge through the top left corner.
    #[case::top_left(1, 1, 2, 3, 4, [1, 2, 2, 2])]
    #[case::top_right(1, 3, 2, 1, 4, [2, 1, 2, 2])]
    #[case::bottom_left(3, 1, 2, 4, 1, [2, 2, 1, 2])]
    #[case::bottom_right(3, 4, 2, 1, 1, [2, 2, 2, 1])]
    fn expands_neighbourhoods(
        #[case] b: u32,
        #[case] d: u32,
        #[case] e: u32,
        #[case] f: u32,
        #[case] h: u32,
        #[case] expected: [u32; 4],
    ) {
        assert_eq!(expand_pixel(b, d, e, f, h), expected);
    }

    #[test]
    fn single_pixel_row_is_replicated() {
        let (mut dst0, mut dst1) = ([0u16; 2], [0u16; 2]);
        upscale_row_u16(&mut dst0, &mut dst1, &[9], &[5], &[9]);

        assert_eq!(dst0, [5, 5]);
        assert_eq!(dst1, [5, 5]);
    }

    #[rstest]
    #[case::no_edges([1, 1], [2, 2], [1, 1], [2, 2, 2, 2], [2, 2, 2, 2])]
    // Above and right agree at column 0.
    #[case::first_column_edge([1, 1], [2, 1], [3, 3], [2, 1, 1, 1], [2, 2, 1, 1])]
    // Above and left agree at the last column; the clamped F equals E.
    #[case::last_column_edge([3, 1], [1, 2], [3, 3], [1, 1, 1, 2], [1, 1, 2, 2])]
    fn upscales_two_pixel_rows(
        #[case] src0: [u8; 2],
        #[case] src1: [u8; 2],
        #[case] src2: [u8; 2],
        #[case] expected0: [u8; 4],
        #[case] expected1: [u8; 4],
    ) {
        let (mut dst0, mut dst1) = ([0u8; 4], [0u8; 4]);
        upscale_row_u8(&mut dst0, &mut dst1, &src0, &src1, &src2);

        assert_eq!(dst0, expected0);
        assert_eq!(dst1, expected1);
    }

    #[rstest]
    // A straight horizontal edge is left alone.
    #[case::straight([0, 0, 0], [9, 9, 9], [9, 9, 9], [9; 6], [9; 6])]
    // The edge steps down at column 0: the corners of the step are filled in.
    #[case::stepped([0, 0, 0], [0, 9, 9], [9, 9, 9], [0, 0, 0, 9, 9, 9], [0, 9, 9, 9, 9, 9])]
    fn horizontal_edges(
        #[case] src0: [u32; 3],
        #[case] src1: [u32; 3],
        #[case] src2: [u32; 3],
        #[case] expected0: [u32; 6],
        #[case] expected1: [u32; 6],
    ) {
        let (mut dst0, mut dst1) = ([0u32; 6], [0u32; 6]);
        upscale_row_u32(&mut dst0, &mut dst1, &src0, &src1, &src2);

        assert_eq!(dst0, expected0);
        assert_eq!(dst1, expected1);
    }

    #[test]
    fn matches_reference_for_all_widths() {
        for count in 1..=64 {
            let [src0, src1, src2] = generate_test_rows::<u32>(count);
            let (expected0, expected1) = upscale_with_reference(&src0, &src1, &src2);
            let (mut dst0, mut dst1) = (vec![0u32; count * 2], vec![0u32; count * 2]);

            upscale_row_u32(&mut dst0, &mut dst1, &src0, &src1, &src2);
            assert_implementation_matches_reference(
                (&expected0, &expected1),
                (&dst0, &dst1),
                "portable u32",
                count,
            );
        }
    }
}
