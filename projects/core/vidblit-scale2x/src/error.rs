//! Errors reported by the safe upscaling wrappers.

use thiserror::Error;

/// Validation errors for [`upscale_row_safe`] and [`upscale_frame`].
///
/// [`upscale_row_safe`]: crate::upscale_row_safe
/// [`upscale_frame`]: crate::upscale_frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UpscaleValidationError {
    /// The three source rows are not all the same length.
    #[error("Source rows differ in length: above {above}, current {current}, below {below}")]
    RowLengthMismatch {
        /// Length of the row above.
        above: usize,
        /// Length of the current row.
        current: usize,
        /// Length of the row below.
        below: usize,
    },

    /// An output buffer cannot hold the upscaled pixels.
    #[error("Output buffer too small: needed {needed} pixels, got {actual}")]
    OutputBufferTooSmall {
        /// Pixels the output must hold.
        needed: usize,
        /// Pixels the shortest output holds.
        actual: usize,
    },

    /// The source frame holds fewer pixels than `width * height`.
    #[error("Source frame of {len} pixels does not cover {width}x{height}")]
    FrameSizeMismatch {
        /// Frame width in pixels.
        width: usize,
        /// Frame height in pixels.
        height: usize,
        /// Pixels in the source buffer.
        len: usize,
    },
}
