//! Adobe Swatch Exchange (ASE) encoding
//!
//! Byte layout, all integers and floats big-endian:
//!
//! ```text
//! 0..4    "ASEF"
//! 4..8    version 1.0 (u16 major, u16 minor)
//! 8..12   u32 block count
//! per color (20 bytes):
//!         u16 block type 0x0001
//!         u32 block length 20
//!         f32 red, f32 green, f32 blue (channel / 255)
//!         u16 color type 0x0000 (global)
//! ```

use crate::constants::export::{
    ASE_BLOCK_LENGTH, ASE_COLOR_ENTRY, ASE_COLOR_GLOBAL, ASE_HEADER_SIZE, ASE_SIGNATURE,
    ASE_VERSION_MAJOR, ASE_VERSION_MINOR,
};
use crate::error::{PaletteError, Result};
use crate::Color;

/// Encode a palette; output is exactly `12 + 20 * colors.len()` bytes
pub fn to_ase(colors: &[Color]) -> Vec<u8> {
    let block = ASE_BLOCK_LENGTH as usize;
    let mut out = Vec::with_capacity(ASE_HEADER_SIZE + block * colors.len());

    out.extend_from_slice(ASE_SIGNATURE);
    out.extend_from_slice(&ASE_VERSION_MAJOR.to_be_bytes());
    out.extend_from_slice(&ASE_VERSION_MINOR.to_be_bytes());
    out.extend_from_slice(&(colors.len() as u32).to_be_bytes());

    for color in colors {
        out.extend_from_slice(&ASE_COLOR_ENTRY.to_be_bytes());
        out.extend_from_slice(&ASE_BLOCK_LENGTH.to_be_bytes());
        for channel in [color.rgb.r, color.rgb.g, color.rgb.b] {
            out.extend_from_slice(&(channel as f32 / 255.0).to_be_bytes());
        }
        out.extend_from_slice(&ASE_COLOR_GLOBAL.to_be_bytes());
    }

    debug_assert_eq!(out.len(), ASE_HEADER_SIZE + block * colors.len());
    out
}

/// Decode the normalized RGB channels of a buffer written by [`to_ase`]
///
/// # Errors
///
/// Returns `InvalidInput` if the signature, length or block headers do
/// not match the layout above.
pub fn read_ase(bytes: &[u8]) -> Result<Vec<[f32; 3]>> {
    let invalid = |what: &str| PaletteError::invalid_input(format!("malformed ASE data: {}", what));

    if bytes.len() < ASE_HEADER_SIZE || &bytes[0..4] != ASE_SIGNATURE {
        return Err(invalid("missing ASEF header"));
    }

    let count = u32::from_be_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]) as usize;
    let block = ASE_BLOCK_LENGTH as usize;
    let expected = block
        .checked_mul(count)
        .and_then(|body| body.checked_add(ASE_HEADER_SIZE))
        .ok_or_else(|| invalid("block count too large"))?;
    if bytes.len() != expected {
        return Err(invalid("length does not match block count"));
    }

    bytes[ASE_HEADER_SIZE..]
        .chunks_exact(block)
        .map(|chunk| {
            let block_type = u16::from_be_bytes([chunk[0], chunk[1]]);
            let length = u32::from_be_bytes([chunk[2], chunk[3], chunk[4], chunk[5]]);
            if block_type != ASE_COLOR_ENTRY || length != ASE_BLOCK_LENGTH {
                return Err(invalid("unexpected block header"));
            }
            let float_at = |at: usize| {
                f32::from_be_bytes([chunk[at], chunk[at + 1], chunk[at + 2], chunk[at + 3]])
            };
            Ok([float_at(6), float_at(10), float_at(14)])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_bytes() {
        let bytes = to_ase(&[Color::from_hex("#FF8000")]);
        assert_eq!(
            &bytes[..12],
            &[b'A', b'S', b'E', b'F', 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01]
        );
    }

    #[test]
    fn test_color_block_bytes() {
        let bytes = to_ase(&[Color::from_hex("#FF0000")]);
        let block = &bytes[12..];
        assert_eq!(block.len(), 20);
        assert_eq!(&block[0..2], &[0x00, 0x01]);
        assert_eq!(&block[2..6], &[0x00, 0x00, 0x00, 0x14]);
        assert_eq!(&block[6..10], &1.0f32.to_be_bytes());
        assert_eq!(&block[10..14], &[0, 0, 0, 0]);
        assert_eq!(&block[14..18], &[0, 0, 0, 0]);
        assert_eq!(&block[18..20], &[0x00, 0x00]);
    }

    #[test]
    fn test_read_back_channels() {
        let colors = vec![Color::from_hex("#336699"), Color::from_hex("#FFFFFF")];
        let channels = read_ase(&to_ase(&colors)).unwrap();
        assert_eq!(channels.len(), 2);
        assert_eq!(channels[0], [0x33 as f32 / 255.0, 0x66 as f32 / 255.0, 0x99 as f32 / 255.0]);
        assert_eq!(channels[1], [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_read_rejects_truncated_data() {
        let bytes = to_ase(&[Color::from_hex("#336699")]);
        assert!(read_ase(&bytes[..bytes.len() - 1]).is_err());
        assert!(read_ase(b"ASEX").is_err());
    }

    #[test]
    fn test_read_rejects_huge_block_count() {
        let mut bytes = to_ase(&[Color::from_hex("#336699")]);
        bytes[8..12].copy_from_slice(&u32::MAX.to_be_bytes());
        let err = read_ase(&bytes).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::InvalidInput);
    }
}
