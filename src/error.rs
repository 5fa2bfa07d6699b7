//! Error types for the palette_scan library

use thiserror::Error;

/// Result type alias for palette_scan operations
pub type Result<T> = std::result::Result<T, PaletteError>;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Coarse classification of a [`PaletteError`]
///
/// Lets callers tell the extraction failure kinds apart without matching
/// on every field of the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    Decode,
    Extraction,
    EmptyPalette,
    Export,
    Config,
}

/// Errors produced while loading, extracting, scoring or exporting palettes
#[derive(Error, Debug)]
pub enum PaletteError {
    /// Input is not an image, or the pixel buffer / parameters are malformed
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Image bytes could not be decoded
    #[error("Failed to decode image: {message}")]
    Decode {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// Pixel access failed while sampling
    #[error("Failed to extract colors from image: {message}")]
    Extraction {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// Every sampled pixel was filtered out
    #[error("No colors found: all {sampled} sampled pixels were transparent, near-white or near-black")]
    EmptyPalette { sampled: usize },

    /// An encoder was handed an empty palette
    #[error("Cannot export an empty palette as {format}")]
    EmptyExport { format: String },

    /// An encoder failed to serialize its output
    #[error("Failed to encode {format}: {message}")]
    Encode {
        format: String,
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// Configuration could not be read, parsed or validated
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },
}

impl PaletteError {
    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a decode error wrapping the decoder's failure
    pub fn decode<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Decode {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an extraction error without an underlying cause
    pub fn extraction(message: impl Into<String>) -> Self {
        Self::Extraction {
            message: message.into(),
            source: None,
        }
    }

    /// Create an encode error with context
    pub fn encode<E>(format: impl Into<String>, message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Encode {
            format: format.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with an underlying cause
    pub fn config_with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PaletteError::InvalidInput { .. } => ErrorKind::InvalidInput,
            PaletteError::Decode { .. } => ErrorKind::Decode,
            PaletteError::Extraction { .. } => ErrorKind::Extraction,
            PaletteError::EmptyPalette { .. } => ErrorKind::EmptyPalette,
            PaletteError::EmptyExport { .. } | PaletteError::Encode { .. } => ErrorKind::Export,
            PaletteError::Config { .. } => ErrorKind::Config,
        }
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            PaletteError::InvalidInput { .. } => {
                "Please select a valid image file.".to_string()
            }
            PaletteError::Decode { .. } => {
                "Could not load the image. Please check the file format and try again.".to_string()
            }
            PaletteError::EmptyPalette { .. } => {
                "No usable colors were found. The image may be mostly transparent, white or black."
                    .to_string()
            }
            PaletteError::EmptyExport { .. } => {
                "There are no colors to export yet.".to_string()
            }
            _ => "Failed to extract colors from image. Please try with a different image.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds_are_distinct() {
        let io = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad header");
        let errors = [
            PaletteError::invalid_input("not an image"),
            PaletteError::decode("broken png", io),
            PaletteError::extraction("buffer truncated"),
            PaletteError::EmptyPalette { sampled: 12 },
        ];
        let kinds: Vec<ErrorKind> = errors.iter().map(PaletteError::kind).collect();
        assert_eq!(
            kinds,
            vec![
                ErrorKind::InvalidInput,
                ErrorKind::Decode,
                ErrorKind::Extraction,
                ErrorKind::EmptyPalette
            ]
        );
    }

    #[test]
    fn test_extraction_message_is_generic() {
        let err = PaletteError::extraction("row 3 out of bounds");
        assert!(err.to_string().starts_with("Failed to extract colors from image"));
    }

    #[test]
    fn test_decode_keeps_source() {
        use std::error::Error as _;
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err = PaletteError::decode("truncated", io);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_user_message_for_empty_palette() {
        let err = PaletteError::EmptyPalette { sampled: 0 };
        assert!(err.user_message().contains("No usable colors"));
    }
}
