//! SVG swatch strip
//!
//! One 100x100 swatch per color, left to right, each labelled with its
//! hex code centered underneath.

use std::fmt::Write as _;

use crate::constants::export::{SVG_HEIGHT, SVG_LABEL_Y, SVG_SWATCH_SIZE};
use crate::Color;

/// Render the palette as an SVG document
pub fn to_svg(colors: &[Color]) -> String {
    let width = colors.len() as u32 * SVG_SWATCH_SIZE;
    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">",
        width, SVG_HEIGHT
    );

    for (index, color) in colors.iter().enumerate() {
        let x = index as u32 * SVG_SWATCH_SIZE;
        let _ = write!(
            svg,
            "\n  <rect x=\"{x}\" y=\"0\" width=\"{size}\" height=\"{size}\" fill=\"{hex}\" stroke=\"#ccc\" stroke-width=\"1\"/>\
             \n  <text x=\"{cx}\" y=\"{ly}\" text-anchor=\"middle\" font-size=\"12\" font-family=\"Arial\">{hex}</text>",
            x = x,
            size = SVG_SWATCH_SIZE,
            hex = color.hex,
            cx = x + SVG_SWATCH_SIZE / 2,
            ly = SVG_LABEL_Y,
        );
    }

    svg.push_str("\n</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_width_scales_with_colors() {
        let colors = vec![Color::from_hex("#112233"); 3];
        let svg = to_svg(&colors);
        assert!(svg.starts_with("<svg width=\"300\" height=\"150\""));
        assert!(svg.ends_with("\n</svg>"));
        assert_eq!(svg.matches("<rect").count(), 3);
    }

    #[test]
    fn test_swatch_and_label_positions() {
        let colors = vec![Color::from_hex("#FF0000"), Color::from_hex("#00FF00")];
        let svg = to_svg(&colors);
        assert!(svg.contains(
            "<rect x=\"100\" y=\"0\" width=\"100\" height=\"100\" fill=\"#00FF00\" stroke=\"#ccc\" stroke-width=\"1\"/>"
        ));
        assert!(svg.contains(
            "<text x=\"150\" y=\"125\" text-anchor=\"middle\" font-size=\"12\" font-family=\"Arial\">#00FF00</text>"
        ));
    }
}
