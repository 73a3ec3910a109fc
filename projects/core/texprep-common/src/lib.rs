#![doc = include_str!(concat!("../", std::env!("CARGO_PKG_README")))]

pub mod color_8888;
pub mod color_float;
pub mod endpoint_88;
pub mod pow2;
