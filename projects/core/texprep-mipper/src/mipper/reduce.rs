//! Per-representation averaging kernels.
//!
//! A kernel is handed the storage indices of the 1, 2 or 4 source samples that cover a
//! destination pixel and writes their average. The traversal in [`super::even`] and
//! [`super::odd`] decides which samples those are.

use crate::tables::ColorSpaceTables;
use texprep_common::color_8888::Color8888;
use texprep_common::color_float::{from_half4, linear_to_srgb, to_half4, Float4, Half4};

/// Averages a set of source samples into one destination pixel.
pub(crate) trait BoxReduce {
    fn reduce(&mut self, dst_index: usize, taps: &[usize]);
}

/// 8-bit data averaged as integers, rounding to nearest.
pub(crate) struct Unorm8Reduce<'a> {
    pub src: &'a [Color8888],
    pub dst: &'a mut [Color8888],
}

impl BoxReduce for Unorm8Reduce<'_> {
    #[inline]
    fn reduce(&mut self, dst_index: usize, taps: &[usize]) {
        let count = taps.len() as u32;
        let mut sum = [0u32; 4];
        for &tap in taps {
            let color = self.src[tap];
            sum[0] += color.r as u32;
            sum[1] += color.g as u32;
            sum[2] += color.b as u32;
            sum[3] += color.a as u32;
        }

        let round = count / 2;
        self.dst[dst_index] = Color8888::new(
            ((sum[0] + round) / count) as u8,
            ((sum[1] + round) / count) as u8,
            ((sum[2] + round) / count) as u8,
            ((sum[3] + round) / count) as u8,
        );
    }
}

/// 8-bit sRGB data, linearized through the tables, averaged, then encoded back.
pub(crate) struct SrgbReduce<'a> {
    pub tables: &'a ColorSpaceTables,
    pub src: &'a [Color8888],
    pub dst: &'a mut [Color8888],
}

impl BoxReduce for SrgbReduce<'_> {
    #[inline]
    fn reduce(&mut self, dst_index: usize, taps: &[usize]) {
        let average = average_float4(taps.iter().map(|&tap| self.tables.to_linear(self.src[tap])), taps.len());
        self.dst[dst_index] = Color8888::from_unorm_float4(linear_to_srgb(average));
    }
}

/// 8-bit sRGB data carrying a linear half intermediate.
///
/// Averages the intermediate, keeps the result for the next level and encodes it to sRGB for
/// the 8-bit output.
pub(crate) struct LinearHalfReduce<'a> {
    pub src_half: &'a [Half4],
    pub dst_half: &'a mut [Half4],
    pub dst: &'a mut [Color8888],
}

impl BoxReduce for LinearHalfReduce<'_> {
    #[inline]
    fn reduce(&mut self, dst_index: usize, taps: &[usize]) {
        let average = average_float4(taps.iter().map(|&tap| from_half4(self.src_half[tap])), taps.len());
        self.dst_half[dst_index] = to_half4(average);
        self.dst[dst_index] = Color8888::from_unorm_float4(linear_to_srgb(average));
    }
}

/// Half float data, averaged in single precision.
pub(crate) struct HalfReduce<'a> {
    pub src: &'a [Half4],
    pub dst: &'a mut [Half4],
}

impl BoxReduce for HalfReduce<'_> {
    #[inline]
    fn reduce(&mut self, dst_index: usize, taps: &[usize]) {
        let average = average_float4(taps.iter().map(|&tap| from_half4(self.src[tap])), taps.len());
        self.dst[dst_index] = to_half4(average);
    }
}

/// Full float data.
pub(crate) struct FloatReduce<'a> {
    pub src: &'a [Float4],
    pub dst: &'a mut [Float4],
}

impl BoxReduce for FloatReduce<'_> {
    #[inline]
    fn reduce(&mut self, dst_index: usize, taps: &[usize]) {
        self.dst[dst_index] = average_float4(taps.iter().map(|&tap| self.src[tap]), taps.len());
    }
}

#[inline]
fn average_float4(samples: impl Iterator<Item = Float4>, count: usize) -> Float4 {
    let mut sum = [0.0f32; 4];
    for sample in samples {
        for (total, value) in sum.iter_mut().zip(sample) {
            *total += value;
        }
    }

    let scale = 1.0 / count as f32;
    sum.map(|total| total * scale)
}
