//! # Palette Scan
//!
//! A Rust crate for extracting color palettes from images.
//!
//! This library provides:
//! - Frequency-based palette extraction from decoded RGBA pixels
//! - Hex / RGB / HSL conversions for every extracted color
//! - WCAG luminance, contrast and conformance scoring
//! - Exports to JSON, CSS, SCSS, Tailwind, SVG, PNG, HTML and ASE
//!
//! ## Example
//!
//! ```rust,no_run
//! use palette_scan::{extract_palette_from_path, export::{export, ExportContext, ExportFormat}};
//! use std::path::Path;
//!
//! let palette = extract_palette_from_path(Path::new("photo.jpg"), 5)?;
//! println!("Dominant: {}", palette.dominant_color.hex);
//!
//! let ase = export(ExportFormat::Ase, &palette.colors, &ExportContext::now())?;
//! assert_eq!(ase.bytes.len(), 12 + 20 * palette.colors.len());
//! # Ok::<(), palette_scan::PaletteError>(())
//! ```

use std::path::Path;

use palette::Srgb;
use serde::{Deserialize, Serialize};

pub mod accessibility;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod image_loader;
pub mod sampling;

pub use accessibility::{AccessibilityReport, AccessibilityScore, AccessibilityScorer, WcagLevel};
pub use config::ExtractionConfig;
pub use error::{ErrorKind, PaletteError, Result};
pub use sampling::{PaletteExtractor, PixelBuffer};

/// 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels normalized to `[0, 1]`
    pub fn to_srgb(self) -> Srgb<f64> {
        Srgb::new(self.r, self.g, self.b).into_format()
    }
}

/// Integer HSL: hue in degrees `[0, 360)`, saturation and lightness in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }
}

/// A palette color in hex, RGB and HSL form
///
/// The three representations always describe the same color; HSL is
/// derived from RGB with integer rounding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Canonical `#RRGGBB`, uppercase
    pub hex: String,
    pub rgb: Rgb,
    pub hsl: Hsl,
    /// Human label, not necessarily unique
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Share of the surviving sampled pixels, 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<u8>,
}

impl Color {
    /// Build a color from RGB channels
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            hex: color::rgb_to_hex(r, g, b),
            rgb: Rgb::new(r, g, b),
            hsl: color::rgb_to_hsl(r, g, b),
            name: None,
            percentage: None,
        }
    }

    /// Build a color from a hex string; malformed input gives black
    pub fn from_hex(hex: &str) -> Self {
        let rgb = color::hex_to_rgb(hex);
        Self::from_rgb(rgb.r, rgb.g, rgb.b)
    }

    pub fn white() -> Self {
        Self::from_rgb(255, 255, 255)
    }

    pub fn black() -> Self {
        Self::from_rgb(0, 0, 0)
    }

    pub fn with_percentage(mut self, percentage: u8) -> Self {
        self.percentage = Some(percentage);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Extracted palette with its dominant color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteResult {
    /// Colors by descending share
    pub colors: Vec<Color>,
    /// First entry of `colors`
    pub dominant_color: Color,
    /// Identifier of the image the palette came from (path, URL, data URL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_image: Option<String>,
}

impl PaletteResult {
    /// Assemble a result, sorting colors by descending percentage
    ///
    /// # Errors
    ///
    /// Returns `EmptyPalette` if `colors` is empty.
    pub fn new(mut colors: Vec<Color>, source_image: Option<String>) -> Result<Self> {
        colors.sort_by(|a, b| b.percentage.unwrap_or(0).cmp(&a.percentage.unwrap_or(0)));
        let dominant_color = colors
            .first()
            .cloned()
            .ok_or(PaletteError::EmptyPalette { sampled: 0 })?;

        Ok(Self {
            colors,
            dominant_color,
            source_image,
        })
    }

    /// Score this palette for text contrast
    pub fn accessibility_report(&self) -> AccessibilityReport {
        AccessibilityScorer::new().report(&self.colors)
    }
}

/// Extract up to `color_count` colors from a decoded pixel buffer
///
/// This is the main entry point for callers that decode images themselves.
///
/// # Errors
///
/// Returns `PaletteError` if:
/// - `color_count` is zero
/// - Pixel access fails while sampling
/// - Every sampled pixel is transparent, near-white or near-black
pub fn extract_palette(buffer: &PixelBuffer, color_count: usize) -> Result<PaletteResult> {
    let config = ExtractionConfig::default().with_color_count(color_count);
    PaletteExtractor::with_config(config).extract(buffer, None)
}

/// Load an image file and extract up to `color_count` colors from it
///
/// The file contents are recorded as the result's source image in the
/// form of a base64 `data:` URL, so HTML exports are self-contained.
///
/// # Errors
///
/// In addition to the errors of [`extract_palette`], returns
/// `InvalidInput` for non-image files and `Decode` if decoding fails.
pub fn extract_palette_from_path(path: &Path, color_count: usize) -> Result<PaletteResult> {
    let config = ExtractionConfig::default().with_color_count(color_count);
    config.validate()?;
    let (buffer, data_url) = image_loader::load_image_embedded(path)?;
    PaletteExtractor::with_config(config).extract(&buffer, Some(data_url))
}
