//! PNG swatch image
//!
//! Layout: a white canvas with 20 px padding, one bordered 110x80 swatch
//! every 120 px, and the hex code drawn in black below each swatch with a
//! built-in 5x7 bitmap font scaled 2x.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgb as Pixel, RgbImage};

use crate::constants::export::{
    PNG_BORDER, PNG_LABEL_HEIGHT, PNG_LABEL_OFFSET, PNG_PADDING, PNG_SWATCH_GAP,
    PNG_SWATCH_HEIGHT, PNG_SWATCH_PITCH,
};
use crate::error::{PaletteError, Result};
use crate::Color;

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;
const GLYPH_SCALE: u32 = 2;
const GLYPH_SPACING: u32 = 2;

const WHITE: Pixel<u8> = Pixel([255, 255, 255]);
const BLACK: Pixel<u8> = Pixel([0, 0, 0]);

/// Rows of a 5x7 glyph, most significant of the low 5 bits on the left
fn glyph(c: char) -> Option<[u8; 7]> {
    let rows = match c.to_ascii_uppercase() {
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        '#' => [0x0A, 0x0A, 0x1F, 0x0A, 0x1F, 0x0A, 0x0A],
        _ => return None,
    };
    Some(rows)
}

/// Canvas size for a palette of `count` colors
pub fn canvas_size(count: usize) -> (u32, u32) {
    let width = count as u32 * PNG_SWATCH_PITCH + PNG_PADDING * 2;
    let height = PNG_SWATCH_HEIGHT + PNG_LABEL_HEIGHT + PNG_PADDING * 2;
    (width, height)
}

/// Pixel width of a label rendered with the bitmap font
pub fn text_width(text: &str) -> u32 {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return 0;
    }
    chars * (GLYPH_WIDTH * GLYPH_SCALE + GLYPH_SPACING) - GLYPH_SPACING
}

fn fill_rect(canvas: &mut RgbImage, x: u32, y: u32, w: u32, h: u32, color: Pixel<u8>) {
    let x_end = (x + w).min(canvas.width());
    let y_end = (y + h).min(canvas.height());
    for py in y..y_end {
        for px in x..x_end {
            canvas.put_pixel(px, py, color);
        }
    }
}

fn stroke_rect(canvas: &mut RgbImage, x: u32, y: u32, w: u32, h: u32, color: Pixel<u8>) {
    fill_rect(canvas, x, y, w, 1, color);
    fill_rect(canvas, x, y + h - 1, w, 1, color);
    fill_rect(canvas, x, y, 1, h, color);
    fill_rect(canvas, x + w - 1, y, 1, h, color);
}

/// Draw `text` horizontally centered on `center_x` with its baseline at `baseline`
fn draw_label(canvas: &mut RgbImage, text: &str, center_x: u32, baseline: u32, color: Pixel<u8>) {
    let glyph_h = GLYPH_HEIGHT * GLYPH_SCALE;
    let mut x = center_x.saturating_sub(text_width(text) / 2);
    let top = baseline.saturating_sub(glyph_h);

    for c in text.chars() {
        if let Some(rows) = glyph(c) {
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                        fill_rect(
                            canvas,
                            x + col * GLYPH_SCALE,
                            top + row as u32 * GLYPH_SCALE,
                            GLYPH_SCALE,
                            GLYPH_SCALE,
                            color,
                        );
                    }
                }
            }
        }
        x += GLYPH_WIDTH * GLYPH_SCALE + GLYPH_SPACING;
    }
}

/// Paint the swatch strip onto a fresh canvas
pub fn render(colors: &[Color]) -> RgbImage {
    let (width, height) = canvas_size(colors.len());
    let mut canvas = RgbImage::from_pixel(width, height, WHITE);
    let swatch_width = PNG_SWATCH_PITCH - PNG_SWATCH_GAP;
    let border = Pixel(PNG_BORDER);

    for (index, color) in colors.iter().enumerate() {
        let x = PNG_PADDING + index as u32 * PNG_SWATCH_PITCH;
        let y = PNG_PADDING;
        let fill = Pixel([color.rgb.r, color.rgb.g, color.rgb.b]);

        fill_rect(&mut canvas, x, y, swatch_width, PNG_SWATCH_HEIGHT, fill);
        stroke_rect(&mut canvas, x, y, swatch_width, PNG_SWATCH_HEIGHT, border);
        draw_label(
            &mut canvas,
            &color.hex,
            x + swatch_width / 2,
            y + PNG_SWATCH_HEIGHT + PNG_LABEL_OFFSET,
            BLACK,
        );
    }

    canvas
}

/// Render the swatch strip and encode it as PNG
pub fn to_png(colors: &[Color]) -> Result<Vec<u8>> {
    let canvas = render(colors);
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(
            canvas.as_raw(),
            canvas.width(),
            canvas.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| PaletteError::encode("png", "cannot encode swatch image", e))?;
    Ok(bytes)
}
