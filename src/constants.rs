//! Thresholds, reference values and export geometry
//!
//! Compile-time constants shared by the sampler, the accessibility scorer
//! and the export encoders.

/// Pixel sampling and filtering parameters
pub mod sampling {
    /// Default number of palette colors to extract
    pub const DEFAULT_COLOR_COUNT: usize = 5;

    /// Approximate number of pixels visited per image; sets the stride
    pub const TARGET_SAMPLES: usize = 1000;

    /// Pixels with alpha below this are treated as transparent
    pub const MIN_ALPHA: u8 = 128;

    /// Average brightness above which a pixel counts as near-white
    pub const MAX_BRIGHTNESS: f32 = 245.0;

    /// Average brightness below which a pixel counts as near-black
    pub const MIN_BRIGHTNESS: f32 = 10.0;

    /// Bytes per RGBA pixel
    pub const CHANNELS: usize = 4;
}

/// WCAG 2.x contrast thresholds
pub mod wcag {
    pub const AAA_MIN_CONTRAST: f64 = 7.0;
    pub const AA_MIN_CONTRAST: f64 = 4.5;
    pub const AA_LARGE_MIN_CONTRAST: f64 = 3.0;

    /// sRGB linearization knee used by the WCAG luminance formula
    pub const LINEAR_THRESHOLD: f64 = 0.03928;

    /// Luminance coefficients (ITU-R BT.709)
    pub const LUMINANCE_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

    /// Perceived brightness weights (per mille)
    pub const BRIGHTNESS_WEIGHTS: [u32; 3] = [299, 587, 114];

    /// Colors with perceived brightness below this are considered dark
    pub const DARK_BRIGHTNESS: u32 = 128;
}

/// Export layout parameters
pub mod export {
    /// SVG swatch edge length
    pub const SVG_SWATCH_SIZE: u32 = 100;
    /// SVG document height (swatch plus label band)
    pub const SVG_HEIGHT: u32 = 150;
    /// Baseline of the SVG hex label
    pub const SVG_LABEL_Y: u32 = 125;

    /// PNG horizontal pitch between swatches
    pub const PNG_SWATCH_PITCH: u32 = 120;
    /// Gap between neighbouring PNG swatches
    pub const PNG_SWATCH_GAP: u32 = 10;
    /// PNG swatch height
    pub const PNG_SWATCH_HEIGHT: u32 = 80;
    /// PNG label band height below each swatch
    pub const PNG_LABEL_HEIGHT: u32 = 40;
    /// Canvas padding around all swatches
    pub const PNG_PADDING: u32 = 20;
    /// Distance from the swatch bottom to the label baseline
    pub const PNG_LABEL_OFFSET: u32 = 25;
    /// Swatch border color
    pub const PNG_BORDER: [u8; 3] = [0xCC, 0xCC, 0xCC];

    /// ASE file signature
    pub const ASE_SIGNATURE: &[u8; 4] = b"ASEF";
    pub const ASE_VERSION_MAJOR: u16 = 1;
    pub const ASE_VERSION_MINOR: u16 = 0;
    /// Block type tag for a color entry
    pub const ASE_COLOR_ENTRY: u16 = 0x0001;
    /// Length recorded for every color block
    pub const ASE_BLOCK_LENGTH: u32 = 20;
    /// Color type tag: global
    pub const ASE_COLOR_GLOBAL: u16 = 0x0000;
    /// Header size in bytes
    pub const ASE_HEADER_SIZE: usize = 12;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wcag_thresholds_ordered() {
        assert!(wcag::AAA_MIN_CONTRAST > wcag::AA_MIN_CONTRAST);
        assert!(wcag::AA_MIN_CONTRAST > wcag::AA_LARGE_MIN_CONTRAST);
    }

    #[test]
    fn test_luminance_weights_sum_to_one() {
        let sum: f64 = wcag::LUMINANCE_WEIGHTS.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        let brightness: u32 = wcag::BRIGHTNESS_WEIGHTS.iter().sum();
        assert_eq!(brightness, 1000);
    }

    #[test]
    fn test_brightness_window() {
        assert!(sampling::MIN_BRIGHTNESS < sampling::MAX_BRIGHTNESS);
    }

    #[test]
    fn test_ase_block_layout() {
        // type + length + three floats + color type
        let block = 2 + 4 + 3 * 4 + 2;
        assert_eq!(block, export::ASE_BLOCK_LENGTH as usize);
    }
}
