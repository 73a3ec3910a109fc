#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![warn(missing_docs)]

pub(crate) mod chain;
pub(crate) mod error;
pub(crate) mod mipper;
pub(crate) mod pixel_buffer;
pub(crate) mod settings;
pub(crate) mod tables;

#[cfg(feature = "bench")]
pub mod bench;

pub use chain::{mip_level_count, MipChain};
pub use error::{MipError, PixelBufferError};
pub use mipper::Mipper;
pub use pixel_buffer::{PixelBuffer, PixelFormat, Pixels};
pub use settings::{MipChainSettings, MipSettings};
pub use tables::ColorSpaceTables;

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;

#[cfg(test)]
mod tests;
