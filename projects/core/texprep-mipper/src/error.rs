use crate::pixel_buffer::PixelFormat;
use thiserror::Error;

/// Errors raised when constructing a [`PixelBuffer`](crate::PixelBuffer) that would break its
/// shape invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    /// One of the dimensions is zero.
    #[error("Invalid dimensions: {width}x{height}x{depth} (all dimensions must be non-zero)")]
    ZeroDimension {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
        /// Depth in slices.
        depth: u32,
    },

    /// The pixel storage does not hold `width * height * depth` pixels.
    #[error("Pixel storage length mismatch: needed {expected}, got {actual}")]
    LengthMismatch {
        /// Number of pixels implied by the dimensions.
        expected: usize,
        /// Number of pixels supplied.
        actual: usize,
    },

    /// HDR images must be stored as half or full floats.
    #[error("HDR images require half or float storage")]
    HdrRequiresFloat,

    /// sRGB encoding only applies to 8-bit storage.
    #[error("sRGB images require 8-bit storage")]
    SrgbRequiresUnorm8,
}

/// Errors raised by [`Mipper`](crate::Mipper) when its preconditions are violated.
///
/// These are contract violations on the caller's side; retrying with the same arguments
/// fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MipError {
    /// The destination is not half the size (rounded up) of the source.
    #[error(
        "Destination dimensions mismatch: needed {expected_width}x{expected_height}, got {actual_width}x{actual_height}"
    )]
    DimensionMismatch {
        /// `ceil(src.width / 2)`
        expected_width: u32,
        /// `ceil(src.height / 2)`
        expected_height: u32,
        /// Width of the destination supplied.
        actual_width: u32,
        /// Height of the destination supplied.
        actual_height: u32,
    },

    /// The destination has a different number of depth slices than the source.
    #[error("Destination depth mismatch: needed {expected}, got {actual}")]
    DepthMismatch {
        /// Depth of the source.
        expected: u32,
        /// Depth of the destination supplied.
        actual: u32,
    },

    /// Source and destination use different pixel representations.
    #[error("Pixel representation mismatch: source is {source_format:?}, destination is {destination_format:?}")]
    RepresentationMismatch {
        /// Representation of the source.
        source_format: PixelFormat,
        /// Representation of the destination.
        destination_format: PixelFormat,
    },

    /// An image could not be constructed.
    #[error(transparent)]
    InvalidSource(#[from] PixelBufferError),
}
