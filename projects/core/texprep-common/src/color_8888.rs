use crate::color_float::Float4;

/// Represents a single RGBA8888 pixel, the canonical 8-bit storage unit of a mip level.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Color8888 {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha component (0-255)
    pub a: u8,
}

impl Color8888 {
    /// Constructs a new [`Color8888`] from the specified red, green, blue, and alpha components.
    ///
    /// Each parameter represents the intensity of its corresponding colour channel (0–255).
    ///
    /// # Examples
    ///
    /// ```
    /// use texprep_common::color_8888::Color8888;
    ///
    /// let pixel = Color8888::new(255, 0, 0, 255);
    /// assert_eq!(pixel.r, 255);
    /// assert_eq!(pixel.g, 0);
    /// assert_eq!(pixel.b, 0);
    /// assert_eq!(pixel.a, 255);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the same colour with its alpha replaced.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Returns the colour packed into a [`u32`] with the alpha byte cleared.
    ///
    /// Useful for comparing colours while ignoring transparency.
    #[inline]
    pub fn without_alpha(&self) -> u32 {
        u32::from_le_bytes([self.r, self.g, self.b, 0])
    }

    /// Premultiplies the colour channels by alpha.
    ///
    /// Each of `r`, `g` and `b` becomes `channel * a / 255` using truncating integer division.
    /// Alpha is left untouched. Fully opaque colours are returned as-is, so no rounding error is
    /// introduced on them.
    ///
    /// This doesn't convert to linear before premultiplying; see the mipper for the
    /// gamma-correct path.
    ///
    /// # Examples
    ///
    /// ```
    /// use texprep_common::color_8888::Color8888;
    ///
    /// let premul = Color8888::new(255, 128, 10, 128).to_premul();
    /// assert_eq!(premul, Color8888::new(128, 64, 5, 128));
    /// ```
    #[inline]
    pub fn to_premul(self) -> Self {
        if self.a == 255 {
            return self;
        }

        Self {
            r: premul_channel(self.r, self.a),
            g: premul_channel(self.g, self.a),
            b: premul_channel(self.b, self.a),
            a: self.a,
        }
    }

    /// Maps each channel from `[0, 255]` to `[0, 1]`. No gamma correction is applied.
    #[inline]
    pub fn to_unorm_float4(self) -> Float4 {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    /// Maps each channel from `[0, 255]` to roughly `[-1, 1]` via `(value - 128) / 255`.
    ///
    /// Applied to all four channels, alpha included.
    #[inline]
    pub fn to_snorm_float4(self) -> Float4 {
        [
            (self.r as f32 - 128.0) / 255.0,
            (self.g as f32 - 128.0) / 255.0,
            (self.b as f32 - 128.0) / 255.0,
            (self.a as f32 - 128.0) / 255.0,
        ]
    }

    /// Inverse of [`Self::to_unorm_float4`].
    ///
    /// Each channel is clamped to `[0, 1]`, scaled by 255 and rounded half away from zero.
    /// NaN inputs map to 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use texprep_common::color_8888::Color8888;
    ///
    /// let color = Color8888::from_unorm_float4([1.5, 0.5, -1.0, 1.0]);
    /// assert_eq!(color, Color8888::new(255, 128, 0, 255));
    /// ```
    #[inline]
    pub fn from_unorm_float4(value: Float4) -> Self {
        Self {
            r: unorm_to_u8(value[0]),
            g: unorm_to_u8(value[1]),
            b: unorm_to_u8(value[2]),
            a: unorm_to_u8(value[3]),
        }
    }
}

/// Premultiplies a single channel intensity by an alpha value.
///
/// Computes `channel * alpha / 255`, truncating.
#[inline]
pub const fn premul_channel(channel: u8, alpha: u8) -> u8 {
    ((channel as u32 * alpha as u32) / 255) as u8
}

#[inline]
fn unorm_to_u8(value: f32) -> u8 {
    // `clamp` propagates NaN, the `as` cast then saturates it to 0.
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
