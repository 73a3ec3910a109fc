//! # Pixel Buffer
//!
//! A [`PixelBuffer`] holds one mip level of an image, in exactly one of three
//! representations:
//!
//! - [`Pixels::Unorm8`]: 8 bits per channel ([`Color8888`]), optionally sRGB encoded.
//! - [`Pixels::Half`]: 16-bit float per channel.
//! - [`Pixels::Float`]: 32-bit float per channel.
//!
//! Pixels are stored in row-major order, one depth slice after another:
//!
//! ```text
//! index = (z * height + y) * width + x
//! ```
//!
//! ## Invariants
//!
//! Enforced by every constructor:
//!
//! - `width`, `height` and `depth` are non-zero.
//! - The storage holds exactly `width * height * depth` pixels.
//! - `is_srgb` implies 8-bit storage.
//! - `is_hdr` implies half or float storage.
//!
//! ## Linear Intermediate
//!
//! For 8-bit sRGB images that are premultiplied or zeroed, the [`Mipper`](crate::Mipper) keeps
//! a linear half-float copy of the image next to the 8-bit data
//! (see [`PixelBuffer::linear_half`]). Mip levels are averaged from this copy so premultiplied
//! values do not lose precision by round-tripping through 8-bit sRGB at every level.

use crate::error::PixelBufferError;
use derive_enum_all_values::AllValues;
use texprep_common::color_8888::Color8888;
use texprep_common::color_float::{Float4, Half4};

/// The representation a [`PixelBuffer`] stores its pixels in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum PixelFormat {
    /// 8-bit unsigned normalized, see [`Color8888`].
    Unorm8,
    /// 16-bit float RGBA.
    Half,
    /// 32-bit float RGBA.
    Float,
}

impl PixelFormat {
    /// Whether values in this representation can exceed `[0, 1]`.
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Half | Self::Float)
    }
}

/// Pixel storage of a [`PixelBuffer`]. Exactly one representation is live at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum Pixels {
    /// 8-bit unsigned normalized pixels.
    Unorm8(Vec<Color8888>),
    /// Half float pixels.
    Half(Vec<Half4>),
    /// Full float pixels.
    Float(Vec<Float4>),
}

impl Pixels {
    /// Allocates `len` zeroed pixels in the given representation.
    pub fn zeroed(format: PixelFormat, len: usize) -> Self {
        match format {
            PixelFormat::Unorm8 => Self::Unorm8(vec![Color8888::default(); len]),
            PixelFormat::Half => Self::Half(vec![Half4::default(); len]),
            PixelFormat::Float => Self::Float(vec![Float4::default(); len]),
        }
    }

    /// The live representation.
    pub fn format(&self) -> PixelFormat {
        match self {
            Self::Unorm8(_) => PixelFormat::Unorm8,
            Self::Half(_) => PixelFormat::Half,
            Self::Float(_) => PixelFormat::Float,
        }
    }

    /// Number of pixels stored.
    pub fn len(&self) -> usize {
        match self {
            Self::Unorm8(pixels) => pixels.len(),
            Self::Half(pixels) => pixels.len(),
            Self::Float(pixels) => pixels.len(),
        }
    }

    /// Whether no pixels are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The 8-bit pixels, if that is the live representation.
    pub fn as_unorm8(&self) -> Option<&[Color8888]> {
        match self {
            Self::Unorm8(pixels) => Some(pixels),
            _ => None,
        }
    }

    /// The half float pixels, if that is the live representation.
    pub fn as_half(&self) -> Option<&[Half4]> {
        match self {
            Self::Half(pixels) => Some(pixels),
            _ => None,
        }
    }

    /// The full float pixels, if that is the live representation.
    pub fn as_float(&self) -> Option<&[Float4]> {
        match self {
            Self::Float(pixels) => Some(pixels),
            _ => None,
        }
    }
}

/// One mip level of a 2D image, or of a 3D image mipped slice by slice.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    depth: u32,
    is_srgb: bool,
    is_hdr: bool,
    pub(crate) pixels: Pixels,
    pub(crate) linear_half: Option<Vec<Half4>>,
}

impl PixelBuffer {
    /// Wraps existing pixel storage.
    ///
    /// # Errors
    ///
    /// - [`PixelBufferError::ZeroDimension`] if any dimension is zero
    /// - [`PixelBufferError::LengthMismatch`] if `pixels` does not hold `width * height * depth` pixels
    pub fn new(width: u32, height: u32, depth: u32, pixels: Pixels) -> Result<Self, PixelBufferError> {
        let expected = pixel_count(width, height, depth)?;
        if pixels.len() != expected {
            return Err(PixelBufferError::LengthMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            depth,
            is_srgb: false,
            is_hdr: false,
            pixels,
            linear_half: None,
        })
    }

    /// Allocates a zero filled image.
    ///
    /// # Errors
    ///
    /// [`PixelBufferError::ZeroDimension`] if any dimension is zero.
    pub fn zeroed(
        format: PixelFormat,
        width: u32,
        height: u32,
        depth: u32,
    ) -> Result<Self, PixelBufferError> {
        let len = pixel_count(width, height, depth)?;
        Self::new(width, height, depth, Pixels::zeroed(format, len))
    }

    /// Wraps a 2D image of 8-bit pixels.
    pub fn from_unorm8(width: u32, height: u32, pixels: Vec<Color8888>) -> Result<Self, PixelBufferError> {
        Self::new(width, height, 1, Pixels::Unorm8(pixels))
    }

    /// Wraps a 2D image of half float pixels.
    pub fn from_half(width: u32, height: u32, pixels: Vec<Half4>) -> Result<Self, PixelBufferError> {
        Self::new(width, height, 1, Pixels::Half(pixels))
    }

    /// Wraps a 2D image of full float pixels.
    pub fn from_float(width: u32, height: u32, pixels: Vec<Float4>) -> Result<Self, PixelBufferError> {
        Self::new(width, height, 1, Pixels::Float(pixels))
    }

    /// Marks the 8-bit data as sRGB encoded.
    ///
    /// # Errors
    ///
    /// [`PixelBufferError::SrgbRequiresUnorm8`] if `is_srgb` is set on float storage.
    pub fn with_srgb(mut self, is_srgb: bool) -> Result<Self, PixelBufferError> {
        if is_srgb && self.format() != PixelFormat::Unorm8 {
            return Err(PixelBufferError::SrgbRequiresUnorm8);
        }
        self.is_srgb = is_srgb;
        Ok(self)
    }

    /// Marks the float data as holding values outside `[0, 1]`.
    ///
    /// # Errors
    ///
    /// [`PixelBufferError::HdrRequiresFloat`] if `is_hdr` is set on 8-bit storage.
    pub fn with_hdr(mut self, is_hdr: bool) -> Result<Self, PixelBufferError> {
        if is_hdr && !self.format().is_float() {
            return Err(PixelBufferError::HdrRequiresFloat);
        }
        self.is_hdr = is_hdr;
        Ok(self)
    }

    /// Allocates the level below this one: half the size rounded up, same depth,
    /// representation and flags. The pixels are zeroed until a [`Mipper`](crate::Mipper)
    /// fills them in.
    pub fn next_level(&self) -> Self {
        let (width, height) = self.next_level_dimensions();
        let len = width as usize * height as usize * self.depth as usize;
        Self {
            width,
            height,
            depth: self.depth,
            is_srgb: self.is_srgb,
            is_hdr: self.is_hdr,
            pixels: Pixels::zeroed(self.format(), len),
            linear_half: None,
        }
    }

    /// `(ceil(width / 2), ceil(height / 2))`
    pub fn next_level_dimensions(&self) -> (u32, u32) {
        (self.width.div_ceil(2), self.height.div_ceil(2))
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of depth slices. 1 for 2D images.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// The larger of width and height.
    pub fn max_dimension(&self) -> u32 {
        self.width.max(self.height)
    }

    /// Whether the 8-bit data is sRGB encoded.
    pub fn is_srgb(&self) -> bool {
        self.is_srgb
    }

    /// Whether the float data holds values outside `[0, 1]`.
    pub fn is_hdr(&self) -> bool {
        self.is_hdr
    }

    /// The live pixel representation.
    pub fn format(&self) -> PixelFormat {
        self.pixels.format()
    }

    /// The pixel storage.
    pub fn pixels(&self) -> &Pixels {
        &self.pixels
    }

    /// Consumes the buffer, returning its pixel storage.
    pub fn into_pixels(self) -> Pixels {
        self.pixels
    }

    /// Linear (and possibly premultiplied) half float copy of 8-bit sRGB data, if the
    /// mipper created one.
    pub fn linear_half(&self) -> Option<&[Half4]> {
        self.linear_half.as_deref()
    }

    /// Total number of pixels, `width * height * depth`.
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Index of the pixel at `(x, y, z)` within the storage.
    #[inline]
    pub fn index_of(&self, x: u32, y: u32, z: u32) -> usize {
        debug_assert!(x < self.width && y < self.height && z < self.depth);
        (z as usize * self.height as usize + y as usize) * self.width as usize + x as usize
    }

    pub(crate) fn set_flags_from(&mut self, other: &Self) {
        self.is_srgb = other.is_srgb;
        self.is_hdr = other.is_hdr;
    }
}

fn pixel_count(width: u32, height: u32, depth: u32) -> Result<usize, PixelBufferError> {
    if width == 0 || height == 0 || depth == 0 {
        return Err(PixelBufferError::ZeroDimension {
            width,
            height,
            depth,
        });
    }
    Ok(width as usize * height as usize * depth as usize)
}
