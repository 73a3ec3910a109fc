//! # Floating Point Colours
//!
//! Four-channel RGBA vectors used by the higher precision mip paths, and the sRGB transfer
//! functions that move values between gamma-encoded and linear light.
//!
//! - [`Float4`]: 32-bit float per channel.
//! - [`Half4`]: 16-bit float per channel, via the [`half`] crate.
//!
//! ## Transfer Functions
//!
//! The sRGB curve follows IEC 61966-2-1: a short linear segment near black and a 2.4 power
//! curve above it. Alpha is never gamma encoded, so [`linear_to_srgb`] passes it through.
//!
//! ```
//! use texprep_common::color_float::{linear_to_srgb_func, srgb_to_linear_func};
//!
//! let linear = srgb_to_linear_func(0.5);
//! assert!((linear - 0.214).abs() < 0.001);
//! assert!((linear_to_srgb_func(linear) - 0.5).abs() < 0.0001);
//! ```

use half::f16;

/// An RGBA colour with one [`f32`] per channel.
pub type Float4 = [f32; 4];

/// An RGBA colour with one [`f16`] per channel.
pub type Half4 = [f16; 4];

/// Converts an sRGB encoded intensity in `[0, 1]` to linear light.
#[inline]
pub fn srgb_to_linear_func(srgb: f32) -> f32 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// Returns the sRGB encoding of a linear intensity in `[0, 1]`.
#[inline]
pub fn linear_to_srgb_func(linear: f32) -> f32 {
    if linear < 0.0031308 {
        12.92 * linear
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// Encodes the colour channels of a linear colour to sRGB. Alpha is passed through.
#[inline]
pub fn linear_to_srgb(linear: Float4) -> Float4 {
    [
        linear_to_srgb_func(linear[0]),
        linear_to_srgb_func(linear[1]),
        linear_to_srgb_func(linear[2]),
        linear[3],
    ]
}

/// Narrows a [`Float4`] to half precision, rounding to nearest.
#[inline]
pub fn to_half4(value: Float4) -> Half4 {
    value.map(f16::from_f32)
}

/// Widens a [`Half4`] to single precision. This is exact.
#[inline]
pub fn from_half4(value: Half4) -> Float4 {
    value.map(f16::to_f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0)]
    #[case(0.002)]
    #[case(0.03)]
    #[case(0.25)]
    #[case(0.5)]
    #[case(0.75)]
    #[case(1.0)]
    fn srgb_round_trips_through_linear(#[case] srgb: f32) {
        let back = linear_to_srgb_func(srgb_to_linear_func(srgb));
        assert!((back - srgb).abs() < 1e-5, "{srgb} came back as {back}");
    }

    #[test]
    fn transfer_functions_hit_endpoints() {
        assert_eq!(srgb_to_linear_func(0.0), 0.0);
        assert!((srgb_to_linear_func(1.0) - 1.0).abs() < 1e-6);
        assert_eq!(linear_to_srgb_func(0.0), 0.0);
        assert!((linear_to_srgb_func(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn linear_to_srgb_keeps_alpha() {
        let encoded = linear_to_srgb([0.5, 0.5, 0.5, 0.25]);
        assert_eq!(encoded[3], 0.25);
        assert!(encoded[0] > 0.5);
    }

    #[test]
    fn half_conversion_is_exact_for_representable_values() {
        let value = [0.0, 0.5, 0.25, 1.0];
        assert_eq!(from_half4(to_half4(value)), value);
    }
}
