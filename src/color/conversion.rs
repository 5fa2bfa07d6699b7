//! Color space conversion utilities
//!
//! Pure conversions between the three representations carried by a
//! [`Color`](crate::Color):
//! - `#RRGGBB` hex strings
//! - 8-bit RGB triples
//! - integer HSL (degrees / percent)
//!
//! Every function is total: malformed hex input falls back to black.

use crate::{Hsl, Rgb};

/// Format an RGB triple as an uppercase `#RRGGBB` string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Parse a 6-digit hex color, with or without a leading `#`
///
/// Matching is case-insensitive. Anything that is not exactly six hex
/// digits yields black (`0, 0, 0`).
pub fn hex_to_rgb(hex: &str) -> Rgb {
    parse_hex(hex).unwrap_or_default()
}

/// Strict hex parser backing [`hex_to_rgb`]
pub fn parse_hex(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Convert RGB (0-255) to integer HSL
///
/// Hue is in degrees `[0, 360)`, saturation and lightness in percent.
/// A hue that rounds up to 360 wraps to 0.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
        } else if max == g {
            ((b - r) / d + 2.0) / 6.0
        } else {
            ((r - g) / d + 4.0) / 6.0
        };
        (h, s)
    };

    let hue = (h * 360.0).round() as u16 % 360;
    Hsl::new(hue, (s * 100.0).round() as u8, (l * 100.0).round() as u8)
}

/// Parse a hex color and convert it to HSL
pub fn hex_to_hsl(hex: &str) -> Hsl {
    let rgb = hex_to_rgb(hex);
    rgb_to_hsl(rgb.r, rgb.g, rgb.b)
}

/// Convert integer HSL back to RGB
///
/// Inverse of [`rgb_to_hsl`] up to rounding only. Integer percent
/// saturation and lightness lose precision, so a round trip through
/// [`rgb_to_hsl`] can move a channel by up to 5 (e.g. `(2, 228, 230)`
/// comes back as `(2, 223, 227)`). `Color::hsl` is always derived from
/// `Color::rgb`, never the other way round.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h as f64 / 360.0;
    let s = hsl.s as f64 / 100.0;
    let l = hsl.l as f64 / 100.0;

    if s == 0.0 {
        let v = (l * 255.0).round() as u8;
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    let hue_to_channel = |mut t: f64| {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        let v = if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        };
        (v * 255.0).round().clamp(0.0, 255.0) as u8
    };

    Rgb::new(
        hue_to_channel(h + 1.0 / 3.0),
        hue_to_channel(h),
        hue_to_channel(h - 1.0 / 3.0),
    )
}
