//! Types and helpers shared by the crate's tests.

pub use crate::{MipError, MipSettings, Mipper, PixelBuffer, PixelBufferError, PixelFormat, Pixels};
pub use half::f16;
pub use rstest::rstest;
pub use texprep_common::color_8888::Color8888;
pub use texprep_common::color_float::{from_half4, to_half4, Float4};

/// An 8-bit image filled with one colour.
pub(crate) fn solid_unorm8(width: u32, height: u32, color: Color8888) -> PixelBuffer {
    PixelBuffer::from_unorm8(width, height, vec![color; (width * height) as usize]).unwrap()
}

/// A float image filled with one colour.
pub(crate) fn solid_float(width: u32, height: u32, color: Float4) -> PixelBuffer {
    PixelBuffer::from_float(width, height, vec![color; (width * height) as usize]).unwrap()
}

/// Mips `src` into a freshly allocated level below it.
pub(crate) fn mip_once(src: &PixelBuffer) -> PixelBuffer {
    let mut dst = src.next_level();
    Mipper::new().mipmap(src, &mut dst).unwrap();
    dst
}

/// The 8-bit pixels of an image.
pub(crate) fn unorm8(image: &PixelBuffer) -> &[Color8888] {
    image.pixels().as_unorm8().unwrap()
}
