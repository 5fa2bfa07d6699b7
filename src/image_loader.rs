//! Image loading into RGBA pixel buffers
//!
//! Decoding is delegated to the `image` crate; this module only checks
//! that the input looks like an image and converts the decoded result to
//! a [`PixelBuffer`].
//!
//! ## Supported Formats
//!
//! - JPEG, PNG, GIF (first frame), WebP, TIFF, BMP
//!
//! Non-image inputs are rejected as `InvalidInput` before any decoding is
//! attempted; decoder failures surface as `Decode`.

use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::ImageReader;
use tracing::debug;

use crate::error::{PaletteError, Result};
use crate::sampling::PixelBuffer;

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    /// First frame only
    Gif,
    WebP,
    Tiff,
    Bmp,
}

impl ImageFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<ImageFormat> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "gif" => Some(ImageFormat::Gif),
            "webp" => Some(ImageFormat::WebP),
            "tiff" | "tif" => Some(ImageFormat::Tiff),
            "bmp" => Some(ImageFormat::Bmp),
            _ => None,
        }
    }

    /// Detect format from the leading bytes of a file
    pub fn from_bytes(bytes: &[u8]) -> Option<ImageFormat> {
        match image::guess_format(bytes).ok()? {
            image::ImageFormat::Jpeg => Some(ImageFormat::Jpeg),
            image::ImageFormat::Png => Some(ImageFormat::Png),
            image::ImageFormat::Gif => Some(ImageFormat::Gif),
            image::ImageFormat::WebP => Some(ImageFormat::WebP),
            image::ImageFormat::Tiff => Some(ImageFormat::Tiff),
            image::ImageFormat::Bmp => Some(ImageFormat::Bmp),
            _ => None,
        }
    }

    fn to_image_format(self) -> image::ImageFormat {
        match self {
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Gif => image::ImageFormat::Gif,
            ImageFormat::WebP => image::ImageFormat::WebP,
            ImageFormat::Tiff => image::ImageFormat::Tiff,
            ImageFormat::Bmp => image::ImageFormat::Bmp,
        }
    }

    /// MIME type, e.g. for building data URLs
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::Gif => "image/gif",
            ImageFormat::WebP => "image/webp",
            ImageFormat::Tiff => "image/tiff",
            ImageFormat::Bmp => "image/bmp",
        }
    }
}

/// Load an image file and decode it to RGBA8
///
/// # Errors
///
/// Returns:
/// - `InvalidInput` if the extension is not a supported image format
/// - `Decode` if the file cannot be opened or decoded
///
/// # Example
///
/// ```rust,no_run
/// use palette_scan::image_loader::load_image;
/// use std::path::Path;
///
/// let buffer = load_image(Path::new("photo.jpg"))?;
/// println!("Loaded image: {}x{}", buffer.width(), buffer.height());
/// # Ok::<(), palette_scan::PaletteError>(())
/// ```
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    let format = format_for_path(path)?;

    let reader = ImageReader::open(path).map_err(|e| {
        PaletteError::decode(format!("failed to open {}", path.display()), e)
    })?;

    let image = reader.decode().map_err(|e| {
        PaletteError::decode(format!("failed to decode {}", path.display()), e)
    })?;

    debug!(
        ?format,
        width = image.width(),
        height = image.height(),
        "decoded image file"
    );
    Ok(PixelBuffer::from(image.to_rgba8()))
}

/// Load an image file and also return its contents as a `data:` URL
///
/// The URL lets exports such as HTML embed the source image instead of
/// referring to a local path.
///
/// # Errors
///
/// Same as [`load_image`].
pub fn load_image_embedded(path: &Path) -> Result<(PixelBuffer, String)> {
    let extension_format = format_for_path(path)?;

    let bytes = std::fs::read(path).map_err(|e| {
        PaletteError::decode(format!("failed to open {}", path.display()), e)
    })?;

    // Content wins over the extension when both are known
    let format = ImageFormat::from_bytes(&bytes).unwrap_or(extension_format);
    let buffer = decode_with_format(&bytes, format)?;
    Ok((buffer, encode_data_url(&bytes, format)))
}

/// Build a base64 `data:` URL for in-memory image bytes
///
/// # Errors
///
/// Returns `InvalidInput` if the bytes are not a recognizable image.
pub fn image_data_url(bytes: &[u8]) -> Result<String> {
    let format = ImageFormat::from_bytes(bytes)
        .ok_or_else(|| PaletteError::invalid_input("data is not a supported image"))?;
    Ok(encode_data_url(bytes, format))
}

fn encode_data_url(bytes: &[u8], format: ImageFormat) -> String {
    format!("data:{};base64,{}", format.mime_type(), STANDARD.encode(bytes))
}

fn format_for_path(path: &Path) -> Result<ImageFormat> {
    ImageFormat::from_extension(path).ok_or_else(|| {
        PaletteError::invalid_input(format!(
            "not a supported image file: {} (expected one of: {})",
            path.display(),
            supported_extensions().join(", ")
        ))
    })
}

fn decode_with_format(bytes: &[u8], format: ImageFormat) -> Result<PixelBuffer> {
    let image = image::load_from_memory_with_format(bytes, format.to_image_format())
        .map_err(|e| PaletteError::decode(format!("failed to decode {:?} data", format), e))?;

    debug!(?format, width = image.width(), height = image.height(), "decoded image bytes");
    Ok(PixelBuffer::from(image.to_rgba8()))
}

/// Decode an in-memory image to RGBA8
///
/// The format is sniffed from the content.
///
/// # Errors
///
/// Returns `InvalidInput` if the bytes are not a recognizable image and
/// `Decode` if decoding fails.
pub fn load_image_from_bytes(bytes: &[u8]) -> Result<PixelBuffer> {
    let format = ImageFormat::from_bytes(bytes)
        .ok_or_else(|| PaletteError::invalid_input("data is not a supported image"))?;
    decode_with_format(bytes, format)
}

/// Get list of all supported file extensions
pub fn supported_extensions() -> &'static [&'static str] {
    &["jpg", "jpeg", "png", "gif", "webp", "tiff", "tif", "bmp"]
}

/// Check if a file extension is supported
pub fn is_supported_extension(ext: &str) -> bool {
    let ext_lower = ext.to_lowercase();
    supported_extensions().contains(&ext_lower.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn png_bytes(image: &image::RgbaImage) -> Vec<u8> {
        let mut out = std::io::Cursor::new(Vec::new());
        image.write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(
            ImageFormat::from_extension(Path::new("photo.jpg")),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(
            ImageFormat::from_extension(Path::new("photo.JPEG")),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(
            ImageFormat::from_extension(Path::new("photo.png")),
            Some(ImageFormat::Png)
        );
        assert_eq!(ImageFormat::from_extension(Path::new("notes.txt")), None);
        assert_eq!(ImageFormat::from_extension(Path::new("noext")), None);
    }

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_extension("jpg"));
        assert!(is_supported_extension("PNG"));
        assert!(!is_supported_extension("heic"));
        assert!(!is_supported_extension("doc"));
    }

    #[test]
    fn test_non_image_path_is_invalid_input() {
        let err = load_image(Path::new("palette.txt")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_missing_file_is_decode_error() {
        let err = load_image(Path::new("nonexistent_file.png")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_garbage_bytes_are_invalid_input() {
        let err = load_image_from_bytes(b"definitely not an image").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_truncated_png_is_decode_error() {
        let bytes = png_bytes(&image::RgbaImage::from_pixel(8, 8, image::Rgba([1, 2, 3, 255])));
        let err = load_image_from_bytes(&bytes[..bytes.len() / 2]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_png_bytes_decode_to_rgba() {
        let bytes = png_bytes(&image::RgbaImage::from_pixel(3, 2, image::Rgba([200, 100, 50, 255])));
        let buffer = load_image_from_bytes(&bytes).unwrap();
        assert_eq!((buffer.width(), buffer.height()), (3, 2));
        assert_eq!(buffer.pixel(0), Some([200, 100, 50, 255]));
    }

    #[test]
    fn test_data_url_uses_sniffed_mime_type() {
        let bytes = png_bytes(&image::RgbaImage::from_pixel(2, 2, image::Rgba([9, 9, 9, 255])));
        let url = image_data_url(&bytes).unwrap();
        assert!(url.starts_with("data:image/png;base64,iVBORw0KGgo"));

        let err = image_data_url(b"plain text").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_load_embedded_returns_buffer_and_data_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("embedded.png");
        image::RgbaImage::from_pixel(4, 3, image::Rgba([70, 80, 90, 255]))
            .save(&path)
            .unwrap();

        let (buffer, url) = load_image_embedded(&path).unwrap();
        assert_eq!((buffer.width(), buffer.height()), (4, 3));
        assert_eq!(url, image_data_url(&std::fs::read(&path).unwrap()).unwrap());
    }

    #[test]
    fn test_load_embedded_error_kinds() {
        let not_image = load_image_embedded(Path::new("palette.txt")).unwrap_err();
        assert_eq!(not_image.kind(), ErrorKind::InvalidInput);
        assert!(not_image.to_string().contains("jpg, jpeg, png"));

        let missing = load_image_embedded(Path::new("nonexistent_file.png")).unwrap_err();
        assert_eq!(missing.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_load_png_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("swatch.png");
        image::RgbaImage::from_pixel(5, 5, image::Rgba([10, 200, 30, 255]))
            .save(&path)
            .unwrap();

        let buffer = load_image(&path).unwrap();
        assert_eq!(buffer.pixel_count(), 25);
        assert_eq!(buffer.pixel(24), Some([10, 200, 30, 255]));
    }
}
