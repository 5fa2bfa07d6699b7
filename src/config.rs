//! Configuration for palette extraction.
//!
//! Collects the tunable sampling parameters in one serializable value so a
//! run can be reproduced from a JSON file:
//!
//! ```no_run
//! use palette_scan::ExtractionConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = ExtractionConfig::from_json_file(Path::new("extraction.json"))?;
//!
//! // Or use defaults with a different palette size
//! let config = ExtractionConfig::default().with_color_count(8);
//! # Ok::<(), palette_scan::PaletteError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::sampling;
use crate::error::{PaletteError, Result};

/// Sampling and filtering parameters for the pixel quantizer.
///
/// Missing fields in a JSON file fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Maximum number of colors in the palette (K)
    pub color_count: usize,

    /// Approximate number of pixels to visit; the stride is
    /// `floor(sqrt(pixels / target_samples))`
    pub target_samples: usize,

    /// Pixels with alpha below this are skipped
    pub min_alpha: u8,

    /// Pixels whose mean channel value exceeds this are skipped
    pub max_brightness: f32,

    /// Pixels whose mean channel value is below this are skipped
    pub min_brightness: f32,

    /// Attach a basic color name to each extracted color
    pub name_colors: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            color_count: sampling::DEFAULT_COLOR_COUNT,
            target_samples: sampling::TARGET_SAMPLES,
            min_alpha: sampling::MIN_ALPHA,
            max_brightness: sampling::MAX_BRIGHTNESS,
            min_brightness: sampling::MIN_BRIGHTNESS,
            name_colors: false,
        }
    }
}

impl ExtractionConfig {
    /// Default configuration with a custom palette size
    pub fn with_color_count(mut self, color_count: usize) -> Self {
        self.color_count = color_count;
        self
    }

    /// Enable or disable basic color naming
    pub fn with_names(mut self, name_colors: bool) -> Self {
        self.name_colors = name_colors;
        self
    }

    /// Apply command-line style overrides on top of a loaded configuration
    ///
    /// `None` keeps the configured color count; naming can only be switched on.
    pub fn with_overrides(mut self, color_count: Option<usize>, name_colors: bool) -> Self {
        if let Some(count) = color_count {
            self.color_count = count;
        }
        self.name_colors |= name_colors;
        self
    }

    /// Reject parameter combinations that cannot produce a palette
    pub fn validate(&self) -> Result<()> {
        if self.color_count == 0 {
            return Err(PaletteError::invalid_input(
                "color count must be at least 1",
            ));
        }
        if self.target_samples == 0 {
            return Err(PaletteError::config("target_samples must be at least 1"));
        }
        if self.min_brightness > self.max_brightness {
            return Err(PaletteError::config(format!(
                "min_brightness ({}) exceeds max_brightness ({})",
                self.min_brightness, self.max_brightness
            )));
        }
        Ok(())
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PaletteError::config_with_source(format!("cannot read {}", path.display()), e)
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            PaletteError::config_with_source(format!("cannot parse {}", path.display()), e)
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PaletteError::config_with_source("cannot serialize configuration", e))?;
        std::fs::write(path, json).map_err(|e| {
            PaletteError::config_with_source(format!("cannot write {}", path.display()), e)
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_defaults() {
        let config = ExtractionConfig::default();
        assert_eq!(config.color_count, 5);
        assert_eq!(config.target_samples, 1000);
        assert_eq!(config.min_alpha, 128);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_colors_rejected() {
        let err = ExtractionConfig::default()
            .with_color_count(0)
            .validate()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_inverted_brightness_window_rejected() {
        let config = ExtractionConfig {
            min_brightness: 200.0,
            max_brightness: 100.0,
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err().kind(), ErrorKind::Config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ExtractionConfig = serde_json::from_str(r#"{"color_count": 8}"#).unwrap();
        assert_eq!(config.color_count, 8);
        assert_eq!(config.min_alpha, 128);
        assert!(!config.name_colors);
    }

    #[test]
    fn test_json_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extraction.json");
        let config = ExtractionConfig::default().with_color_count(3).with_names(true);

        config.to_json_file(&path).unwrap();
        let loaded = ExtractionConfig::from_json_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_overrides_win_over_loaded_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extraction.json");
        ExtractionConfig::default()
            .with_color_count(9)
            .to_json_file(&path)
            .unwrap();

        let loaded = ExtractionConfig::from_json_file(&path).unwrap();
        let merged = loaded.clone().with_overrides(Some(3), true);
        assert_eq!(merged.color_count, 3);
        assert!(merged.name_colors);

        let untouched = loaded.with_overrides(None, false);
        assert_eq!(untouched.color_count, 9);
        assert!(!untouched.name_colors);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = ExtractionConfig::from_json_file(Path::new("does/not/exist.json")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }
}
