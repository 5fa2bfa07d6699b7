//! Color representation helpers
//!
//! This module handles conversions between hex, RGB and HSL, and the
//! basic naming used to label palette entries.

pub mod conversion;
pub mod naming;

pub use conversion::{hex_to_hsl, hex_to_rgb, hsl_to_rgb, parse_hex, rgb_to_hex, rgb_to_hsl};
pub use naming::color_name;
