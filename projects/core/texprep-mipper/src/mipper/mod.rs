//! # Mipper
//!
//! Produces one mip level from the level above it with a box filter.
//!
//! [`Mipper::mipmap`] picks a traversal based on the source dimensions:
//!
//! - [`even`]: both dimensions even, every destination pixel averages a 2x2 block.
//! - [`odd`]: at least one odd dimension, see the module docs for which samples are used.
//!
//! and an averaging kernel from [`reduce`] based on how the pixels are stored.

pub(crate) mod even;
pub(crate) mod odd;
pub(crate) mod prepare;
pub(crate) mod reduce;

use crate::error::MipError;
use crate::pixel_buffer::{PixelBuffer, Pixels};
use crate::tables::ColorSpaceTables;
use reduce::{BoxReduce, FloatReduce, HalfReduce, LinearHalfReduce, SrgbReduce, Unorm8Reduce};
use texprep_common::color_8888::{premul_channel, Color8888};
use texprep_common::color_float::{Float4, Half4};

/// Generates mip levels.
///
/// Holds the sRGB and alpha conversion tables; a single instance can be shared between
/// threads and reused for any number of images.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mipper {
    tables: ColorSpaceTables,
}

impl Mipper {
    /// Creates a mipper, building its conversion tables.
    pub fn new() -> Self {
        Self {
            tables: ColorSpaceTables::new(),
        }
    }

    /// The conversion tables used for sRGB data.
    pub fn tables(&self) -> &ColorSpaceTables {
        &self.tables
    }

    /// See [`ColorSpaceTables::linear_of`].
    #[inline]
    pub fn linear_of(&self, srgb: u8) -> f32 {
        self.tables.linear_of(srgb)
    }

    /// See [`ColorSpaceTables::alpha_of`].
    #[inline]
    pub fn alpha_of(&self, alpha: u8) -> f32 {
        self.tables.alpha_of(alpha)
    }

    /// See [`ColorSpaceTables::to_linear`].
    #[inline]
    pub fn to_linear(&self, color: Color8888) -> Float4 {
        self.tables.to_linear(color)
    }

    /// See [`premul_channel`].
    #[inline]
    pub fn premul_channel(&self, channel: u8, alpha: u8) -> u8 {
        premul_channel(channel, alpha)
    }

    /// Downsamples `src` into `dst`.
    ///
    /// `dst` must be allocated at `ceil(width / 2) x ceil(height / 2)`, with the same depth
    /// and pixel representation as `src`; [`PixelBuffer::next_level`] does exactly that.
    /// On success every pixel of `dst` is overwritten and `dst` takes the sRGB and HDR flags
    /// of `src`.
    ///
    /// If `src` carries a linear half intermediate (see
    /// [`Self::init_pixels_half_if_needed`]), levels are averaged from it and `dst` receives
    /// one too.
    ///
    /// # Errors
    ///
    /// Checked in this order, before anything is written:
    ///
    /// - [`MipError::DimensionMismatch`] if `dst` is not half the size of `src`
    /// - [`MipError::DepthMismatch`] if the depths differ
    /// - [`MipError::RepresentationMismatch`] if the pixel representations differ
    pub fn mipmap(&self, src: &PixelBuffer, dst: &mut PixelBuffer) -> Result<(), MipError> {
        validate(src, dst)?;
        dst.set_flags_from(src);

        let geometry = LevelGeometry::new(src.width() as usize, src.height() as usize, src.depth() as usize);
        let is_even = src.width() % 2 == 0 && src.height() % 2 == 0;

        match (&src.pixels, &mut dst.pixels) {
            (Pixels::Unorm8(src_pixels), Pixels::Unorm8(dst_pixels)) => {
                if let Some(src_half) = src.linear_half.as_deref() {
                    let dst_half = dst
                        .linear_half
                        .insert(vec![Half4::default(); dst_pixels.len()]);
                    run(
                        &geometry,
                        is_even,
                        &mut LinearHalfReduce {
                            src_half,
                            dst_half,
                            dst: dst_pixels,
                        },
                    );
                    return Ok(());
                }

                if src.is_srgb() {
                    run(
                        &geometry,
                        is_even,
                        &mut SrgbReduce {
                            tables: &self.tables,
                            src: src_pixels,
                            dst: dst_pixels,
                        },
                    );
                } else if is_even {
                    even::mipmap_level_unorm8(&geometry, src_pixels, dst_pixels);
                } else {
                    odd::mipmap_level_odd(
                        &geometry,
                        &mut Unorm8Reduce {
                            src: src_pixels,
                            dst: dst_pixels,
                        },
                    );
                }
            }
            (Pixels::Half(src_pixels), Pixels::Half(dst_pixels)) => run(
                &geometry,
                is_even,
                &mut HalfReduce {
                    src: src_pixels,
                    dst: dst_pixels,
                },
            ),
            (Pixels::Float(src_pixels), Pixels::Float(dst_pixels)) => run(
                &geometry,
                is_even,
                &mut FloatReduce {
                    src: src_pixels,
                    dst: dst_pixels,
                },
            ),
            (src_pixels, dst_pixels) => {
                return Err(MipError::RepresentationMismatch {
                    source_format: src_pixels.format(),
                    destination_format: dst_pixels.format(),
                })
            }
        }

        dst.linear_half = None;
        Ok(())
    }
}

/// Sizes of a source level and the level generated from it, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LevelGeometry {
    pub src_width: usize,
    pub src_height: usize,
    pub dst_width: usize,
    pub dst_height: usize,
    pub depth: usize,
}

impl LevelGeometry {
    pub fn new(src_width: usize, src_height: usize, depth: usize) -> Self {
        Self {
            src_width,
            src_height,
            dst_width: src_width.div_ceil(2),
            dst_height: src_height.div_ceil(2),
            depth,
        }
    }

    #[inline]
    pub fn src_slice_len(&self) -> usize {
        self.src_width * self.src_height
    }

    #[inline]
    pub fn dst_slice_len(&self) -> usize {
        self.dst_width * self.dst_height
    }
}

#[inline]
fn run<R: BoxReduce>(geometry: &LevelGeometry, is_even: bool, reduce: &mut R) {
    if is_even {
        even::mipmap_level(geometry, reduce);
    } else {
        odd::mipmap_level_odd(geometry, reduce);
    }
}

fn validate(src: &PixelBuffer, dst: &PixelBuffer) -> Result<(), MipError> {
    let (expected_width, expected_height) = src.next_level_dimensions();
    if dst.width() != expected_width || dst.height() != expected_height {
        return Err(MipError::DimensionMismatch {
            expected_width,
            expected_height,
            actual_width: dst.width(),
            actual_height: dst.height(),
        });
    }

    if dst.depth() != src.depth() {
        return Err(MipError::DepthMismatch {
            expected: src.depth(),
            actual: dst.depth(),
        });
    }

    if dst.format() != src.format() {
        return Err(MipError::RepresentationMismatch {
            source_format: src.format(),
            destination_format: dst.format(),
        });
    }

    Ok(())
}
