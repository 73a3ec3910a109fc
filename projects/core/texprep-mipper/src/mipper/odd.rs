//! Box filter for sources with an odd width or height.
//!
//! `ceil(n / 2)` destination pixels can't cover an odd axis with pairs. Each axis is treated
//! on its own: destination pixel `i` takes source `2i` and, when it exists, `2i + 1`. On an odd
//! axis the last destination pixel therefore comes from a 1 pixel wide strip, while even axes
//! still average pairs. A destination pixel ends up averaging 4, 2 or 1 source samples.
//!
//! ```text
//! 3x2 source        2x1 destination
//! [a][b][c]
//! [d][e][f]   ->    [avg(a,b,d,e)][avg(c,f)]
//! ```

use super::reduce::BoxReduce;
use super::LevelGeometry;

/// Downsamples a source where at least one dimension is odd.
pub(crate) fn mipmap_level_odd<R: BoxReduce>(geometry: &LevelGeometry, reduce: &mut R) {
    let mut taps = [0usize; 4];

    for z in 0..geometry.depth {
        let src_slice = z * geometry.src_slice_len();
        let dst_slice = z * geometry.dst_slice_len();

        for y in 0..geometry.dst_height {
            let rows = axis_taps(y, geometry.src_height);
            let dst_row = dst_slice + y * geometry.dst_width;

            for x in 0..geometry.dst_width {
                let columns = axis_taps(x, geometry.src_width);

                let mut count = 0;
                for row in rows.into_iter().flatten() {
                    let src_row = src_slice + row * geometry.src_width;
                    for column in columns.into_iter().flatten() {
                        taps[count] = src_row + column;
                        count += 1;
                    }
                }

                reduce.reduce(dst_row + x, &taps[..count]);
            }
        }
    }
}

/// Source coordinates covering destination coordinate `dst` on an axis of `src_len` pixels.
#[inline]
fn axis_taps(dst: usize, src_len: usize) -> [Option<usize>; 2] {
    let first = 2 * dst;
    let second = first + 1;
    [Some(first), (second < src_len).then_some(second)]
}
