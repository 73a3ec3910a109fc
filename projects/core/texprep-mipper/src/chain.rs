//! Building a full mip chain from level 0.

use crate::error::MipError;
use crate::pixel_buffer::PixelBuffer;
use crate::settings::MipChainSettings;
use crate::Mipper;
use core::mem;
use tracing::{debug, trace};

/// The levels produced by [`Mipper::build_chain`], largest first.
#[derive(Debug, Clone, PartialEq)]
pub struct MipChain {
    levels: Vec<PixelBuffer>,
}

impl MipChain {
    /// All levels, largest first.
    pub fn levels(&self) -> &[PixelBuffer] {
        &self.levels
    }

    /// Number of levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Whether the chain holds no levels. Never true for chains from [`Mipper::build_chain`].
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// The largest level kept.
    pub fn base(&self) -> Option<&PixelBuffer> {
        self.levels.first()
    }

    /// Iterates over the levels, largest first.
    pub fn iter(&self) -> core::slice::Iter<'_, PixelBuffer> {
        self.levels.iter()
    }

    /// Consumes the chain, returning its levels.
    pub fn into_levels(self) -> Vec<PixelBuffer> {
        self.levels
    }
}

impl IntoIterator for MipChain {
    type Item = PixelBuffer;
    type IntoIter = std::vec::IntoIter<PixelBuffer>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.into_iter()
    }
}

impl<'a> IntoIterator for &'a MipChain {
    type Item = &'a PixelBuffer;
    type IntoIter = core::slice::Iter<'a, PixelBuffer>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.iter()
    }
}

impl Mipper {
    /// Prepares `level0` with [`MipChainSettings::mip`] and mips it down.
    ///
    /// Generation stops at the first level whose larger dimension is at most
    /// [`MipChainSettings::mip_min`] (a 1x1 level always ends the chain), or once
    /// [`MipChainSettings::max_levels`] levels have been kept.
    ///
    /// Levels larger than [`MipChainSettings::mip_max`] are still generated, since the
    /// smaller ones derive from them, but are left out of the result. If no level fits, the
    /// smallest one generated is returned on its own.
    ///
    /// # Errors
    ///
    /// Only if a level fails to mip, see [`Mipper::mipmap`]. Levels are allocated with
    /// [`PixelBuffer::next_level`], so this does not happen for valid input.
    pub fn build_chain(
        &self,
        mut level0: PixelBuffer,
        settings: &MipChainSettings,
    ) -> Result<MipChain, MipError> {
        self.init_pixels_half_if_needed(&mut level0, settings.mip);

        let mip_min = settings.mip_min.max(1);
        let max_levels = settings.max_levels.map(|cap| cap.max(1));
        let mut levels = Vec::new();
        let mut current = level0;
        let mut level = 0usize;

        loop {
            let fits = current.max_dimension() <= settings.mip_max;
            let is_final = current.max_dimension() <= mip_min
                || (fits && max_levels.is_some_and(|cap| levels.len() + 1 >= cap));

            // level 0 is the caller's image, every later level was mipped here
            debug!(
                level,
                width = current.width(),
                height = current.height(),
                format = ?current.format(),
                generated = level > 0,
                kept = fits || is_final,
                "Mip level"
            );

            if is_final {
                levels.push(current);
                break;
            }

            let mut next = current.next_level();
            self.mipmap(&current, &mut next)?;
            let previous = mem::replace(&mut current, next);
            if fits {
                levels.push(previous);
            }
            level += 1;
        }

        trace!(
            generated = level + 1,
            kept = levels.len(),
            mip_min,
            mip_max = settings.mip_max,
            "Built mip chain"
        );
        Ok(MipChain { levels })
    }
}

/// Number of levels from a `width x height` image down to 1x1, halving with rounding up.
///
/// Returns 0 if either dimension is 0.
///
/// # Examples
///
/// ```
/// use texprep_mipper::mip_level_count;
///
/// assert_eq!(mip_level_count(256, 256), 9);
/// assert_eq!(mip_level_count(5, 3), 4); // 5x3, 3x2, 2x1, 1x1
/// ```
pub fn mip_level_count(width: u32, height: u32) -> usize {
    if width == 0 || height == 0 {
        return 0;
    }

    let mut size = width.max(height);
    let mut count = 1;
    while size > 1 {
        size = size.div_ceil(2);
        count += 1;
    }
    count
}
