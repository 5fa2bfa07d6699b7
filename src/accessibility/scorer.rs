//! WCAG contrast scoring
//!
//! Implements the WCAG 2.x relative luminance and contrast ratio formulas,
//! classifies ratios into conformance levels and scores whole palettes
//! against white and black reference text.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::wcag;
use crate::{Color, Rgb};

/// WCAG conformance level reached by a contrast ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AA (Large text)")]
    AaLargeText,
    #[serde(rename = "Fail")]
    Fail,
}

impl WcagLevel {
    /// Classify a contrast ratio
    pub fn from_contrast(ratio: f64) -> Self {
        if ratio >= wcag::AAA_MIN_CONTRAST {
            WcagLevel::Aaa
        } else if ratio >= wcag::AA_MIN_CONTRAST {
            WcagLevel::Aa
        } else if ratio >= wcag::AA_LARGE_MIN_CONTRAST {
            WcagLevel::AaLargeText
        } else {
            WcagLevel::Fail
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WcagLevel::Aaa => "AAA",
            WcagLevel::Aa => "AA",
            WcagLevel::AaLargeText => "AA (Large text)",
            WcagLevel::Fail => "Fail",
        }
    }

    /// AA or AAA (normal-size text)
    pub fn meets_aa(&self) -> bool {
        matches!(self, WcagLevel::Aa | WcagLevel::Aaa)
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Best achievable contrast of one palette color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityScore {
    /// Contrast ratio, rounded to 2 decimals
    pub contrast: f64,
    pub wcag: WcagLevel,
    /// `wcag != Fail`
    pub readable: bool,
}

/// Aggregated scores for a palette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityReport {
    /// One score per palette color, same order
    pub scores: Vec<AccessibilityScore>,
    /// Mean contrast, rounded to 2 decimals
    pub average_contrast: f64,
    #[serde(rename = "allWcagAA")]
    pub all_wcag_aa: bool,
    #[serde(rename = "allWcagAAA")]
    pub all_wcag_aaa: bool,
}

/// Contrast evaluation of a foreground/background pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPair {
    pub foreground: Color,
    pub background: Color,
    pub contrast_ratio: f64,
    pub wcag_level: WcagLevel,
}

/// Scorer holding the white and black text references
pub struct AccessibilityScorer {
    white: Color,
    black: Color,
}

impl Default for AccessibilityScorer {
    fn default() -> Self {
        Self::new()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl AccessibilityScorer {
    pub fn new() -> Self {
        Self {
            white: Color::white(),
            black: Color::black(),
        }
    }

    /// WCAG relative luminance in `[0, 1]`
    pub fn relative_luminance(&self, rgb: Rgb) -> f64 {
        let srgb = rgb.to_srgb();
        let linear = |v: f64| {
            if v <= wcag::LINEAR_THRESHOLD {
                v / 12.92
            } else {
                ((v + 0.055) / 1.055).powf(2.4)
            }
        };
        let [wr, wg, wb] = wcag::LUMINANCE_WEIGHTS;
        wr * linear(srgb.red) + wg * linear(srgb.green) + wb * linear(srgb.blue)
    }

    /// Contrast ratio between two colors, symmetric and at least 1.0
    pub fn contrast_ratio(&self, a: &Color, b: &Color) -> f64 {
        let la = self.relative_luminance(a.rgb);
        let lb = self.relative_luminance(b.rgb);
        let lighter = la.max(lb);
        let darker = la.min(lb);
        (lighter + 0.05) / (darker + 0.05)
    }

    /// Classify a contrast ratio
    pub fn wcag_level(&self, ratio: f64) -> WcagLevel {
        WcagLevel::from_contrast(ratio)
    }

    /// Score a color by its better contrast against white or black
    pub fn score(&self, color: &Color) -> AccessibilityScore {
        let on_white = self.contrast_ratio(color, &self.white);
        let on_black = self.contrast_ratio(color, &self.black);
        let best = on_white.max(on_black);
        let wcag = self.wcag_level(best);

        AccessibilityScore {
            contrast: round2(best),
            wcag,
            readable: wcag != WcagLevel::Fail,
        }
    }

    /// Score every palette color, preserving order
    pub fn palette_scores(&self, colors: &[Color]) -> Vec<AccessibilityScore> {
        colors.iter().map(|c| self.score(c)).collect()
    }

    /// White or black, whichever contrasts more with the background
    ///
    /// Ties go to white.
    pub fn best_text_color(&self, background: &Color) -> Color {
        let with_white = self.contrast_ratio(&self.white, background);
        let with_black = self.contrast_ratio(&self.black, background);
        if with_white >= with_black {
            self.white.clone()
        } else {
            self.black.clone()
        }
    }

    /// Perceived brightness, `round((299R + 587G + 114B) / 1000)`
    pub fn brightness(&self, rgb: Rgb) -> u32 {
        let [wr, wg, wb] = wcag::BRIGHTNESS_WEIGHTS;
        let weighted = wr * rgb.r as u32 + wg * rgb.g as u32 + wb * rgb.b as u32;
        (weighted + 500) / 1000
    }

    pub fn is_dark(&self, color: &Color) -> bool {
        self.brightness(color.rgb) < wcag::DARK_BRIGHTNESS
    }

    /// Evaluate a foreground color on a background
    pub fn pair(&self, foreground: &Color, background: &Color) -> ColorPair {
        let ratio = self.contrast_ratio(foreground, background);
        ColorPair {
            foreground: foreground.clone(),
            background: background.clone(),
            contrast_ratio: round2(ratio),
            wcag_level: self.wcag_level(ratio),
        }
    }

    /// Score a palette and aggregate the results
    ///
    /// An empty palette yields an average of 0 and vacuously true flags.
    pub fn report(&self, colors: &[Color]) -> AccessibilityReport {
        let scores = self.palette_scores(colors);
        let average_contrast = if scores.is_empty() {
            0.0
        } else {
            round2(scores.iter().map(|s| s.contrast).sum::<f64>() / scores.len() as f64)
        };

        AccessibilityReport {
            all_wcag_aa: scores.iter().all(|s| s.wcag.meets_aa()),
            all_wcag_aaa: scores.iter().all(|s| s.wcag == WcagLevel::Aaa),
            average_contrast,
            scores,
        }
    }
}
