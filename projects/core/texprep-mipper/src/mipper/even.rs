//! 2x2 box filter for sources with even width and height.

use super::reduce::BoxReduce;
use super::LevelGeometry;
#[cfg(not(feature = "no-runtime-cpu-detection"))]
use multiversion::multiversion;
use texprep_common::color_8888::Color8888;

/// Averages every 2x2 block of the source into one destination pixel.
///
/// Both source dimensions must be even.
pub(crate) fn mipmap_level<R: BoxReduce>(geometry: &LevelGeometry, reduce: &mut R) {
    debug_assert!(geometry.src_width % 2 == 0 && geometry.src_height % 2 == 0);

    for z in 0..geometry.depth {
        let src_slice = z * geometry.src_slice_len();
        let dst_slice = z * geometry.dst_slice_len();

        for y in 0..geometry.dst_height {
            let row0 = src_slice + 2 * y * geometry.src_width;
            let row1 = row0 + geometry.src_width;
            let dst_row = dst_slice + y * geometry.dst_width;

            for x in 0..geometry.dst_width {
                let x0 = 2 * x;
                reduce.reduce(dst_row + x, &[row0 + x0, row0 + x0 + 1, row1 + x0, row1 + x0 + 1]);
            }
        }
    }
}

/// Specialized [`mipmap_level`] for plain 8-bit data, the most common case.
///
/// Kept free of the generic kernel so the inner loop can be auto-vectorized per target.
#[cfg_attr(
    not(feature = "no-runtime-cpu-detection"),
    multiversion(targets(
        // x86-64-v3 without lahfsahf
        "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
        // x86-64-v2 without lahfsahf
        "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
    ))
)]
pub(crate) fn mipmap_level_unorm8(geometry: &LevelGeometry, src: &[Color8888], dst: &mut [Color8888]) {
    debug_assert!(geometry.src_width % 2 == 0 && geometry.src_height % 2 == 0);

    let src_width = geometry.src_width;
    let dst_width = geometry.dst_width;

    for (src_slice, dst_slice) in src
        .chunks_exact(geometry.src_slice_len())
        .zip(dst.chunks_exact_mut(geometry.dst_slice_len()))
    {
        for (src_rows, dst_row) in src_slice
            .chunks_exact(src_width * 2)
            .zip(dst_slice.chunks_exact_mut(dst_width))
        {
            let (row0, row1) = src_rows.split_at(src_width);
            for (x, out) in dst_row.iter_mut().enumerate() {
                let a = row0[2 * x];
                let b = row0[2 * x + 1];
                let c = row1[2 * x];
                let d = row1[2 * x + 1];
                *out = Color8888::new(
                    average4(a.r, b.r, c.r, d.r),
                    average4(a.g, b.g, c.g, d.g),
                    average4(a.b, b.b, c.b, d.b),
                    average4(a.a, b.a, c.a, d.a),
                );
            }
        }
    }
}

#[inline(always)]
fn average4(a: u8, b: u8, c: u8, d: u8) -> u8 {
    ((a as u16 + b as u16 + c as u16 + d as u16 + 2) / 4) as u8
}
