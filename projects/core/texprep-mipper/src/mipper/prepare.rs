//! One-time preparation of the top level before a chain is built.

use super::Mipper;
use crate::pixel_buffer::{PixelBuffer, Pixels};
use crate::settings::MipSettings;
use crate::tables::ColorSpaceTables;
use likely_stable::unlikely;
use texprep_common::color_8888::Color8888;
use texprep_common::color_float::{from_half4, linear_to_srgb, to_half4, Float4, Half4};
use tracing::trace;

impl Mipper {
    /// Applies [`MipSettings::premultiply`] and [`MipSettings::prezero`] to `src` in place.
    ///
    /// Call this once on level 0. Every level mipped from `src` afterwards inherits the
    /// preparation, so it must not be applied again to derived levels.
    ///
    /// - 8-bit linear and float storage are modified directly.
    /// - 8-bit sRGB storage additionally gets a linear half float copy
    ///   ([`PixelBuffer::linear_half`]) that later levels are averaged from. With
    ///   `premultiply` set the 8-bit pixels are re-encoded from the premultiplied copy, so
    ///   level 0 matches the levels below it.
    ///
    /// Does nothing when neither flag is set. Premultiplication is never undone.
    pub fn init_pixels_half_if_needed(&self, src: &mut PixelBuffer, settings: MipSettings) {
        if !settings.modifies_source() {
            return;
        }

        let is_srgb = src.is_srgb();
        match &mut src.pixels {
            Pixels::Unorm8(pixels) if is_srgb => {
                src.linear_half = Some(linearize_srgb(&self.tables, pixels, settings));
                trace!(
                    pixels = pixels.len(),
                    premultiply = settings.premultiply,
                    prezero = settings.prezero,
                    "Created linear half intermediate for sRGB source"
                );
            }
            Pixels::Unorm8(pixels) => {
                for pixel in pixels.iter_mut() {
                    *pixel = prepare_unorm8(*pixel, settings);
                }
            }
            Pixels::Half(pixels) => {
                for pixel in pixels.iter_mut() {
                    *pixel = to_half4(prepare_float4(from_half4(*pixel), settings));
                }
            }
            Pixels::Float(pixels) => {
                for pixel in pixels.iter_mut() {
                    *pixel = prepare_float4(*pixel, settings);
                }
            }
        }
    }
}

fn linearize_srgb(tables: &ColorSpaceTables, pixels: &mut [Color8888], settings: MipSettings) -> Vec<Half4> {
    pixels
        .iter_mut()
        .map(|pixel| {
            if settings.prezero && unlikely(pixel.a == 0) {
                *pixel = Color8888::default();
                return Half4::default();
            }

            let mut linear = tables.to_linear(*pixel);
            if settings.premultiply {
                let alpha = linear[3];
                for channel in &mut linear[..3] {
                    *channel *= alpha;
                }
                *pixel = Color8888::from_unorm_float4(linear_to_srgb(linear));
            }
            to_half4(linear)
        })
        .collect()
}

#[inline]
fn prepare_unorm8(pixel: Color8888, settings: MipSettings) -> Color8888 {
    if settings.prezero && unlikely(pixel.a == 0) {
        return Color8888::default();
    }

    if settings.premultiply {
        pixel.to_premul()
    } else {
        pixel
    }
}

#[inline]
fn prepare_float4(mut pixel: Float4, settings: MipSettings) -> Float4 {
    let alpha = pixel[3];
    if settings.prezero && unlikely(alpha == 0.0) {
        return [0.0; 4];
    }

    if settings.premultiply {
        for channel in &mut pixel[..3] {
            *channel *= alpha;
        }
    }
    pixel
}
