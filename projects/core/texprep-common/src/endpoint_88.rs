//! # Packed 8:8 Endpoints
//!
//! BC4 and BC5 store each channel as a pair of 8-bit endpoints that the decoder interpolates
//! between. The `_SNORM` variants of these formats store the endpoints as two's complement
//! bytes, while endpoint fitting is usually done in unsigned space.
//!
//! This module converts a packed pair between the two domains. The conversion biases each
//! byte by 128, which for 8-bit values is the same as flipping the top bit:
//!
//! ```text
//! unsigned   0 -> signed -128 (0x80)
//! unsigned 128 -> signed    0 (0x00)
//! unsigned 255 -> signed  127 (0x7F)
//! ```
//!
//! Flipping a bit twice restores it, so the remap is its own inverse.
//!
//! ## Lane Order
//!
//! The first endpoint lives in the low byte and the second in the high byte, i.e. the
//! little endian order the endpoints appear in within a block. The remap never swaps lanes.
//!
//! ## Examples
//!
//! ```
//! use texprep_common::endpoint_88::{remap_from_signed_bc_endpoint88, remap_to_signed_bc_endpoint88};
//!
//! let unsigned = 0xFF00; // first = 0, second = 255
//! let signed = remap_to_signed_bc_endpoint88(unsigned);
//! assert_eq!(signed, 0x7F80); // first = -128, second = 127
//! assert_eq!(remap_from_signed_bc_endpoint88(signed), unsigned);
//! ```

/// Bias applied to both lanes.
const LANE_BIAS_MASK: u16 = 0x8080;

/// Remaps a packed pair of unsigned endpoints to the signed domain of a snorm block format.
///
/// Use this after fitting endpoints in unsigned space, before writing a signed BC4/BC5 block.
#[inline]
pub const fn remap_to_signed_bc_endpoint88(endpoint: u16) -> u16 {
    endpoint ^ LANE_BIAS_MASK
}

/// Remaps a packed pair of signed endpoints back to the unsigned domain.
///
/// Use this on signed BC4/BC5 blocks before decoding them with unsigned logic.
#[inline]
pub const fn remap_from_signed_bc_endpoint88(endpoint: u16) -> u16 {
    endpoint ^ LANE_BIAS_MASK
}

/// Represents a pair of 8-bit endpoints packed into a [`u16`].
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Endpoint88 {
    /// The underlying packed value
    value: u16,
}

impl Endpoint88 {
    /// Creates a new [`Endpoint88`] from the raw 16-bit value
    #[inline]
    pub const fn from_raw(value: u16) -> Self {
        Self { value }
    }

    /// Creates a new [`Endpoint88`] from its two endpoints.
    ///
    /// # Examples
    ///
    /// ```
    /// use texprep_common::endpoint_88::Endpoint88;
    ///
    /// let endpoint = Endpoint88::from_endpoints(0x12, 0x34);
    /// assert_eq!(endpoint.raw_value(), 0x3412);
    /// ```
    #[inline]
    pub const fn from_endpoints(first: u8, second: u8) -> Self {
        Self {
            value: u16::from_le_bytes([first, second]),
        }
    }

    /// Returns the raw 16-bit value
    #[inline]
    pub const fn raw_value(&self) -> u16 {
        self.value
    }

    /// The first endpoint (low byte)
    #[inline]
    pub const fn first(&self) -> u8 {
        self.value.to_le_bytes()[0]
    }

    /// The second endpoint (high byte)
    #[inline]
    pub const fn second(&self) -> u8 {
        self.value.to_le_bytes()[1]
    }

    /// The first endpoint reinterpreted as a signed byte
    #[inline]
    pub const fn signed_first(&self) -> i8 {
        self.first() as i8
    }

    /// The second endpoint reinterpreted as a signed byte
    #[inline]
    pub const fn signed_second(&self) -> i8 {
        self.second() as i8
    }

    /// See [`remap_to_signed_bc_endpoint88`].
    #[inline]
    pub const fn to_signed(self) -> Self {
        Self::from_raw(remap_to_signed_bc_endpoint88(self.value))
    }

    /// See [`remap_from_signed_bc_endpoint88`].
    #[inline]
    pub const fn from_signed(self) -> Self {
        Self::from_raw(remap_from_signed_bc_endpoint88(self.value))
    }
}
