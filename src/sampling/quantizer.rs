//! Frequency-based palette extraction
//!
//! Extracts representative colors from a pixel buffer with:
//! - Strided sampling bounded to roughly a thousand pixels
//! - Filtering of transparent, near-white and near-black pixels
//! - Exact 24-bit quantization into a frequency table
//! - Ranking by occurrence with first-seen tie-breaking

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::color::{color_name, rgb_to_hex};
use crate::config::ExtractionConfig;
use crate::error::{PaletteError, Result};
use crate::sampling::PixelBuffer;
use crate::{Color, PaletteResult, Rgb};

/// Counters describing one sampling pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SamplingStats {
    /// Distance between visited pixels
    pub stride: usize,
    /// Pixels visited
    pub sampled: usize,
    /// Visited pixels that survived filtering
    pub kept: usize,
    /// Distinct 24-bit colors among the kept pixels
    pub distinct: usize,
}

/// One distinct color with its occurrence count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCount {
    pub rgb: Rgb,
    pub count: usize,
    first_seen: usize,
}

/// Ranked occurrence counts of the surviving sampled pixels
#[derive(Debug, Clone, Default)]
pub struct ColorHistogram {
    /// Distinct colors, most frequent first; ties in first-seen order
    pub entries: Vec<ColorCount>,
    pub stats: SamplingStats,
}

impl ColorHistogram {
    /// Total surviving pixel count, the denominator for percentages
    pub fn total(&self) -> usize {
        self.stats.kept
    }
}

/// Palette extractor implementing the sampling heuristic
pub struct PaletteExtractor {
    config: ExtractionConfig,
}

impl Default for PaletteExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteExtractor {
    /// Create an extractor with default parameters
    pub fn new() -> Self {
        Self {
            config: ExtractionConfig::default(),
        }
    }

    /// Create an extractor with custom parameters
    pub fn with_config(config: ExtractionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Sampling stride for an image of the given size
    ///
    /// `max(1, floor(sqrt(width * height / target_samples)))`
    pub fn stride(&self, width: u32, height: u32) -> usize {
        let pixels = width as f64 * height as f64;
        let stride = (pixels / self.config.target_samples.max(1) as f64).sqrt().floor();
        (stride as usize).max(1)
    }

    /// Whether a sampled pixel is kept for quantization
    pub fn accepts(&self, [r, g, b, a]: [u8; 4]) -> bool {
        if a < self.config.min_alpha {
            return false;
        }
        let brightness = (r as f32 + g as f32 + b as f32) / 3.0;
        brightness <= self.config.max_brightness && brightness >= self.config.min_brightness
    }

    /// Sample the buffer and count each surviving 24-bit color
    ///
    /// # Errors
    ///
    /// Returns `Extraction` if a visited pixel lies outside the buffer.
    pub fn histogram(&self, buffer: &PixelBuffer) -> Result<ColorHistogram> {
        let stride = self.stride(buffer.width(), buffer.height());
        let mut stats = SamplingStats {
            stride,
            ..Default::default()
        };

        // key: 0xRRGGBB, value: (count, first-seen order)
        let mut counts: HashMap<u32, (usize, usize)> = HashMap::new();

        for index in (0..buffer.pixel_count()).step_by(stride) {
            let rgba = buffer.pixel(index).ok_or_else(|| {
                PaletteError::extraction(format!("pixel {} is outside the buffer", index))
            })?;
            stats.sampled += 1;

            if !self.accepts(rgba) {
                continue;
            }
            stats.kept += 1;

            let key = u32::from_be_bytes([0, rgba[0], rgba[1], rgba[2]]);
            let next_order = counts.len();
            counts.entry(key).or_insert((0, next_order)).0 += 1;
        }

        let mut entries: Vec<ColorCount> = counts
            .into_iter()
            .map(|(key, (count, first_seen))| {
                let [_, r, g, b] = key.to_be_bytes();
                ColorCount {
                    rgb: Rgb::new(r, g, b),
                    count,
                    first_seen,
                }
            })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count).then(a.first_seen.cmp(&b.first_seen)));
        stats.distinct = entries.len();

        debug!(
            stride = stats.stride,
            sampled = stats.sampled,
            kept = stats.kept,
            distinct = stats.distinct,
            "sampled pixel buffer"
        );

        Ok(ColorHistogram { entries, stats })
    }

    /// Extract the top colors of a pixel buffer
    ///
    /// # Arguments
    ///
    /// * `buffer` - Decoded RGBA pixels
    /// * `source_image` - Optional identifier of the source image, carried
    ///   into the result for document exports
    ///
    /// # Returns
    ///
    /// `PaletteResult` ordered by descending share, at most `color_count` long
    ///
    /// # Errors
    ///
    /// Returns `PaletteError` if:
    /// - The configuration is invalid (e.g. zero colors requested)
    /// - Pixel access fails
    /// - Every sampled pixel was filtered out (`EmptyPalette`)
    pub fn extract(&self, buffer: &PixelBuffer, source_image: Option<String>) -> Result<PaletteResult> {
        self.config.validate()?;

        let histogram = self.histogram(buffer)?;
        let total = histogram.total();
        if total == 0 {
            warn!(
                sampled = histogram.stats.sampled,
                "every sampled pixel was filtered out"
            );
            return Err(PaletteError::EmptyPalette {
                sampled: histogram.stats.sampled,
            });
        }

        let colors: Vec<Color> = histogram
            .entries
            .iter()
            .take(self.config.color_count)
            .map(|entry| {
                let percentage = (entry.count as f64 / total as f64 * 100.0).round() as u8;
                let color = Color::from_rgb(entry.rgb.r, entry.rgb.g, entry.rgb.b)
                    .with_percentage(percentage);
                if self.config.name_colors {
                    let name = color_name(&rgb_to_hex(entry.rgb.r, entry.rgb.g, entry.rgb.b));
                    color.with_name(name)
                } else {
                    color
                }
            })
            .collect();

        let result = PaletteResult::new(colors, source_image)?;
        info!(
            colors = result.colors.len(),
            dominant = %result.dominant_color.hex,
            "extracted palette"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const RED: [u8; 4] = [255, 0, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];
    const GREEN: [u8; 4] = [0, 128, 0, 255];

    #[test]
    fn test_stride() {
        let extractor = PaletteExtractor::new();
        assert_eq!(extractor.stride(10, 10), 1);
        assert_eq!(extractor.stride(100, 100), 3); // sqrt(10) = 3.16
        assert_eq!(extractor.stride(1920, 1080), 45); // sqrt(2073.6) = 45.5
        assert_eq!(extractor.stride(0, 0), 1);
    }

    #[test]
    fn test_filters() {
        let extractor = PaletteExtractor::new();
        assert!(extractor.accepts(RED));
        assert!(!extractor.accepts([255, 0, 0, 127])); // transparent
        assert!(extractor.accepts([255, 0, 0, 128]));
        assert!(!extractor.accepts([250, 250, 250, 255])); // near-white
        assert!(extractor.accepts([245, 245, 245, 255])); // exactly 245 kept
        assert!(!extractor.accepts([5, 5, 5, 255])); // near-black
        assert!(extractor.accepts([10, 10, 10, 255])); // exactly 10 kept
    }

    #[test]
    fn test_ranking_by_count() {
        let pixels = [BLUE, RED, RED, GREEN, RED, BLUE];
        let buffer = PixelBuffer::from_pixels(6, 1, &pixels).unwrap();
        let histogram = PaletteExtractor::new().histogram(&buffer).unwrap();

        let counts: Vec<(Rgb, usize)> =
            histogram.entries.iter().map(|e| (e.rgb, e.count)).collect();
        assert_eq!(
            counts,
            vec![
                (Rgb::new(255, 0, 0), 3),
                (Rgb::new(0, 0, 255), 2),
                (Rgb::new(0, 128, 0), 1)
            ]
        );
        assert_eq!(histogram.stats.kept, 6);
        assert_eq!(histogram.stats.distinct, 3);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let pixels = [GREEN, BLUE, RED, RED, BLUE, GREEN];
        let buffer = PixelBuffer::from_pixels(3, 2, &pixels).unwrap();
        let result = PaletteExtractor::new().extract(&buffer, None).unwrap();

        let hexes: Vec<&str> = result.colors.iter().map(|c| c.hex.as_str()).collect();
        assert_eq!(hexes, vec!["#008000", "#0000FF", "#FF0000"]);
    }

    #[test]
    fn test_percentages_use_total_surviving_count() {
        // 4 red, 3 blue, 3 green; top-2 percentages do not sum to 100
        let mut pixels = vec![RED; 4];
        pixels.extend([BLUE; 3]);
        pixels.extend([GREEN; 3]);
        let buffer = PixelBuffer::from_pixels(10, 1, &pixels).unwrap();
        let extractor = PaletteExtractor::with_config(ExtractionConfig::default().with_color_count(2));

        let result = extractor.extract(&buffer, None).unwrap();
        let shares: Vec<Option<u8>> = result.colors.iter().map(|c| c.percentage).collect();
        assert_eq!(shares, vec![Some(40), Some(30)]);
    }

    #[test]
    fn test_fewer_colors_than_requested() {
        let buffer = PixelBuffer::filled(4, 4, RED);
        let result = PaletteExtractor::new().extract(&buffer, None).unwrap();
        assert_eq!(result.colors.len(), 1);
        assert_eq!(result.dominant_color.hex, "#FF0000");
        assert_eq!(result.dominant_color.percentage, Some(100));
    }

    #[test]
    fn test_filtered_pixels_do_not_count() {
        let pixels = [RED, [255, 255, 255, 255], [0, 0, 0, 255], [0, 0, 255, 0]];
        let buffer = PixelBuffer::from_pixels(2, 2, &pixels).unwrap();
        let histogram = PaletteExtractor::new().histogram(&buffer).unwrap();
        assert_eq!(histogram.stats.sampled, 4);
        assert_eq!(histogram.stats.kept, 1);
    }

    #[test]
    fn test_stride_skips_pixels() {
        // 100x100 -> stride 3, visits indices 0, 3, 6, ...
        let mut data = Vec::with_capacity(100 * 100 * 4);
        for i in 0..100 * 100 {
            data.extend(if i % 3 == 0 { RED } else { BLUE });
        }
        let buffer = PixelBuffer::new(100, 100, data).unwrap();
        let result = PaletteExtractor::new().extract(&buffer, None).unwrap();
        assert_eq!(result.colors.len(), 1);
        assert_eq!(result.colors[0].hex, "#FF0000");
    }

    #[test]
    fn test_all_transparent_is_empty_palette() {
        let buffer = PixelBuffer::filled(8, 8, [200, 50, 50, 10]);
        let err = PaletteExtractor::new().extract(&buffer, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyPalette);
    }

    #[test]
    fn test_empty_buffer_is_empty_palette() {
        let buffer = PixelBuffer::new(0, 0, Vec::new()).unwrap();
        let err = PaletteExtractor::new().extract(&buffer, None).unwrap_err();
        assert!(matches!(err, PaletteError::EmptyPalette { sampled: 0 }));
    }

    #[test]
    fn test_zero_color_count_rejected() {
        let buffer = PixelBuffer::filled(2, 2, RED);
        let extractor = PaletteExtractor::with_config(ExtractionConfig::default().with_color_count(0));
        assert_eq!(
            extractor.extract(&buffer, None).unwrap_err().kind(),
            ErrorKind::InvalidInput
        );
    }

    #[test]
    fn test_names_attached_when_enabled() {
        let buffer = PixelBuffer::from_pixels(2, 1, &[RED, GREEN]).unwrap();
        let extractor = PaletteExtractor::with_config(ExtractionConfig::default().with_names(true));
        let result = extractor.extract(&buffer, None).unwrap();
        assert_eq!(result.colors[0].name.as_deref(), Some("Red"));
        assert_eq!(result.colors[1].name.as_deref(), Some("Color"));
    }

    #[test]
    fn test_source_image_carried() {
        let buffer = PixelBuffer::filled(1, 1, RED);
        let result = PaletteExtractor::new()
            .extract(&buffer, Some("photo.png".to_string()))
            .unwrap();
        assert_eq!(result.source_image.as_deref(), Some("photo.png"));
    }
}
