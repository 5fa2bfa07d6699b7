//! Accessibility scoring module
//!
//! This module computes WCAG relative luminance and contrast ratios for
//! palette colors and picks readable text colors for them.

pub mod scorer;

pub use scorer::{AccessibilityReport, AccessibilityScore, AccessibilityScorer, ColorPair, WcagLevel};
