//! Settings controlling how an image is prepared and how far a mip chain is built.

/// Controls how the top level of a mip chain is prepared before it is downsampled.
///
/// See [`Mipper::init_pixels_half_if_needed`](crate::Mipper::init_pixels_half_if_needed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct MipSettings {
    /// Multiply colour channels by alpha before averaging.
    ///
    /// Output levels stay premultiplied; they are never converted back to straight alpha.
    pub premultiply: bool,

    /// Clear the colour of fully transparent pixels before averaging, so whatever colour
    /// they happened to hold does not bleed into visible neighbours.
    pub prezero: bool,
}

impl MipSettings {
    /// Creates settings with premultiplication and zeroing both disabled.
    pub const fn new() -> Self {
        Self {
            premultiply: false,
            prezero: false,
        }
    }

    /// Sets [`Self::premultiply`].
    pub const fn with_premultiply(mut self, premultiply: bool) -> Self {
        self.premultiply = premultiply;
        self
    }

    /// Sets [`Self::prezero`].
    pub const fn with_prezero(mut self, prezero: bool) -> Self {
        self.prezero = prezero;
        self
    }

    /// Whether any preparation of the source is needed at all.
    pub const fn modifies_source(&self) -> bool {
        self.premultiply || self.prezero
    }
}

/// Controls which levels [`Mipper::build_chain`](crate::Mipper::build_chain) produces.
///
/// # Examples
///
/// ```
/// use texprep_mipper::{MipChainSettings, MipSettings};
///
/// // Skip anything larger than 1024, stop at 4x4 blocks, premultiply.
/// let settings = MipChainSettings::new()
///     .with_mip_max(1024)
///     .with_mip_min(4)
///     .with_mip(MipSettings::new().with_premultiply(true));
/// assert_eq!(settings.mip_max, 1024);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MipChainSettings {
    /// Generation stops once the larger dimension of a level is at or below this size.
    /// Values below 1 are treated as 1.
    pub mip_min: u32,

    /// Levels whose larger dimension exceeds this size are generated (the rest of the
    /// chain derives from them) but not returned.
    pub mip_max: u32,

    /// Maximum number of returned levels. `Some(0)` is treated as `Some(1)`.
    pub max_levels: Option<usize>,

    /// How the top level is prepared.
    pub mip: MipSettings,
}

impl MipChainSettings {
    /// Creates settings producing every level down to 1x1.
    pub const fn new() -> Self {
        Self {
            mip_min: 1,
            mip_max: u32::MAX,
            max_levels: None,
            mip: MipSettings::new(),
        }
    }

    /// Sets [`Self::mip_min`].
    pub const fn with_mip_min(mut self, mip_min: u32) -> Self {
        self.mip_min = mip_min;
        self
    }

    /// Sets [`Self::mip_max`].
    pub const fn with_mip_max(mut self, mip_max: u32) -> Self {
        self.mip_max = mip_max;
        self
    }

    /// Sets [`Self::max_levels`].
    pub const fn with_max_levels(mut self, max_levels: usize) -> Self {
        self.max_levels = Some(max_levels);
        self
    }

    /// Sets [`Self::mip`].
    pub const fn with_mip(mut self, mip: MipSettings) -> Self {
        self.mip = mip;
        self
    }
}

impl Default for MipChainSettings {
    fn default() -> Self {
        Self::new()
    }
}
