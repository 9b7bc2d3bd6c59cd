//! Safe, slice-based wrappers around the row upscaler.
//!
//! [`upscale_row_safe`] validates buffer lengths before calling [`upscale_row`];
//! [`upscale_frame`] drives it over every row of a frame, passing the current row again
//! in place of the missing neighbour at the top and bottom edges.
//!
//! [`upscale_row`]: crate::upscale_row

use crate::error::UpscaleValidationError;
use crate::scale2x::{upscale_row, Scale2xWord};
use likely_stable::unlikely;

/// Upscales one row of pixels into two output rows.
///
/// # Arguments
///
/// * `dst0` - First output row, at least `src1.len() * 2` pixels
/// * `dst1` - Second output row, at least `src1.len() * 2` pixels
/// * `src0` - Row above the current row
/// * `src1` - Current row
/// * `src2` - Row below the current row
///
/// # Errors
///
/// - [`UpscaleValidationError::RowLengthMismatch`] if the source rows differ in length
/// - [`UpscaleValidationError::OutputBufferTooSmall`] if an output row is too short
///
/// # Examples
///
/// ```
/// use vidblit_scale2x::upscale_row_safe;
///
/// // A diagonal edge between the 5s and the 2s.
/// let mut row0 = [0u8; 4];
/// let mut row1 = [0u8; 4];
/// upscale_row_safe(&mut row0, &mut row1, &[1, 5], &[5, 2], &[2, 2])?;
///
/// assert_eq!(row0, [5, 5, 5, 2]);
/// assert_eq!(row1, [5, 2, 2, 2]);
/// # Ok::<(), vidblit_scale2x::UpscaleValidationError>(())
/// ```
pub fn upscale_row_safe<W: Scale2xWord>(
    dst0: &mut [W],
    dst1: &mut [W],
    src0: &[W],
    src1: &[W],
    src2: &[W],
) -> Result<(), UpscaleValidationError> {
    let count = src1.len();
    if unlikely(src0.len() != count || src2.len() != count) {
        return Err(UpscaleValidationError::RowLengthMismatch {
            above: src0.len(),
            current: count,
            below: src2.len(),
        });
    }

    let needed = count * 2;
    let shortest = dst0.len().min(dst1.len());
    if unlikely(shortest < needed) {
        return Err(UpscaleValidationError::OutputBufferTooSmall {
            needed,
            actual: shortest,
        });
    }

    // SAFETY: lengths validated above; borrows guarantee the outputs don't alias
    // each other or the inputs.
    unsafe {
        upscale_row(
            dst0.as_mut_ptr(),
            dst1.as_mut_ptr(),
            src0.as_ptr(),
            src1.as_ptr(),
            src2.as_ptr(),
            count,
        );
    }

    Ok(())
}

/// [`upscale_row_safe`] for 8-bit pixels.
#[inline]
pub fn upscale_row_8(
    dst0: &mut [u8],
    dst1: &mut [u8],
    src0: &[u8],
    src1: &[u8],
    src2: &[u8],
) -> Result<(), UpscaleValidationError> {
    upscale_row_safe(dst0, dst1, src0, src1, src2)
}

/// [`upscale_row_safe`] for 16-bit pixels.
#[inline]
pub fn upscale_row_16(
    dst0: &mut [u16],
    dst1: &mut [u16],
    src0: &[u16],
    src1: &[u16],
    src2: &[u16],
) -> Result<(), UpscaleValidationError> {
    upscale_row_safe(dst0, dst1, src0, src1, src2)
}

/// [`upscale_row_safe`] for 32-bit pixels.
#[inline]
pub fn upscale_row_32(
    dst0: &mut [u32],
    dst1: &mut [u32],
    src0: &[u32],
    src1: &[u32],
    src2: &[u32],
) -> Result<(), UpscaleValidationError> {
    upscale_row_safe(dst0, dst1, src0, src1, src2)
}

/// Upscales a `width` x `height` frame into a `width * 2` x `height * 2` frame.
///
/// Both frames are tightly packed, row after row. The first and last source rows use
/// themselves as the missing row above or below.
///
/// # Errors
///
/// - [`UpscaleValidationError::FrameSizeMismatch`] if `src` holds fewer than
///   `width * height` pixels
/// - [`UpscaleValidationError::OutputBufferTooSmall`] if `dst` holds fewer than
///   `width * height * 4` pixels
///
/// An empty frame (`width == 0` or `height == 0`) is accepted and leaves `dst` untouched.
pub fn upscale_frame<W: Scale2xWord>(
    dst: &mut [W],
    src: &[W],
    width: usize,
    height: usize,
) -> Result<(), UpscaleValidationError> {
    let frame_size_mismatch = UpscaleValidationError::FrameSizeMismatch {
        width,
        height,
        len: src.len(),
    };
    let pixels = width.checked_mul(height).ok_or(frame_size_mismatch)?;
    if src.len() < pixels {
        return Err(frame_size_mismatch);
    }

    let needed = pixels
        .checked_mul(4)
        .ok_or(UpscaleValidationError::OutputBufferTooSmall {
            needed: usize::MAX,
            actual: dst.len(),
        })?;
    if dst.len() < needed {
        return Err(UpscaleValidationError::OutputBufferTooSmall {
            needed,
            actual: dst.len(),
        });
    }

    if pixels == 0 {
        return Ok(());
    }

    tracing::trace!(width, height, "upscaling frame");

    let rows: &[W] = &src[..pixels];
    let out_rows = dst[..needed].chunks_exact_mut(width * 4);
    for (y, out) in out_rows.enumerate() {
        let (dst0, dst1) = out.split_at_mut(width * 2);
        let row = |index: usize| &rows[index * width..(index + 1) * width];

        let above = row(y.saturating_sub(1));
        let below = row((y + 1).min(height - 1));
        upscale_row_safe(dst0, dst1, above, row(y), below)?;
    }

    Ok(())
}
