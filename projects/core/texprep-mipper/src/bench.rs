//! Internal kernels exposed for benchmarking.

use crate::mipper::reduce::Unorm8Reduce;
use crate::mipper::{even, LevelGeometry};
use texprep_common::color_8888::Color8888;

/// Mips one 8-bit level with even dimensions through the generic per-pixel kernel.
///
/// `dst` must hold `(src_width / 2) * (src_height / 2)` pixels.
pub fn mipmap_unorm8_generic(src_width: usize, src_height: usize, src: &[Color8888], dst: &mut [Color8888]) {
    let geometry = LevelGeometry::new(src_width, src_height, 1);
    even::mipmap_level(&geometry, &mut Unorm8Reduce { src, dst });
}

/// Mips one 8-bit level with even dimensions through the specialized loop.
///
/// `dst` must hold `(src_width / 2) * (src_height / 2)` pixels.
pub fn mipmap_unorm8_specialized(src_width: usize, src_height: usize, src: &[Color8888], dst: &mut [Color8888]) {
    let geometry = LevelGeometry::new(src_width, src_height, 1);
    even::mipmap_level_unorm8(&geometry, src, dst);
}
