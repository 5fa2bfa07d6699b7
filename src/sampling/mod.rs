//! Pixel sampling and quantization module
//!
//! This module turns a decoded pixel buffer into a ranked list of
//! representative colors.

pub mod buffer;
pub mod quantizer;

pub use buffer::PixelBuffer;
pub use quantizer::{ColorCount, ColorHistogram, PaletteExtractor, SamplingStats};
