//! Lookup tables converting 8-bit channel values to floats.

use texprep_common::color_8888::Color8888;
use texprep_common::color_float::{srgb_to_linear_func, Float4};

/// Precomputed 8-bit to float conversions.
///
/// Linearizing with the sRGB curve needs a `powf` per sample. Every 8-bit value is converted
/// once here instead, so mipping pays a table lookup per sample.
///
/// The tables are built on construction and never change afterwards, so one instance can be
/// shared freely between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSpaceTables {
    srgb_to_linear: [f32; 256],
    alpha_to_float: [f32; 256],
}

impl ColorSpaceTables {
    /// Builds both tables.
    pub fn new() -> Self {
        let mut srgb_to_linear = [0.0; 256];
        let mut alpha_to_float = [0.0; 256];

        for (i, (linear, alpha)) in srgb_to_linear
            .iter_mut()
            .zip(alpha_to_float.iter_mut())
            .enumerate()
        {
            let unorm = i as f32 / 255.0;
            *linear = srgb_to_linear_func(unorm);
            // alpha is never gamma encoded
            *alpha = unorm;
        }

        Self {
            srgb_to_linear,
            alpha_to_float,
        }
    }

    /// Linear intensity of an sRGB encoded 8-bit value.
    #[inline]
    pub fn linear_of(&self, srgb: u8) -> f32 {
        self.srgb_to_linear[srgb as usize]
    }

    /// `alpha / 255`
    #[inline]
    pub fn alpha_of(&self, alpha: u8) -> f32 {
        self.alpha_to_float[alpha as usize]
    }

    /// Linearizes the colour channels of an sRGB pixel. Alpha is converted without gamma.
    #[inline]
    pub fn to_linear(&self, color: Color8888) -> Float4 {
        [
            self.linear_of(color.r),
            self.linear_of(color.g),
            self.linear_of(color.b),
            self.alpha_of(color.a),
        ]
    }
}

impl Default for ColorSpaceTables {
    fn default() -> Self {
        Self::new()
    }
}
