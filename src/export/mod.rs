//! Palette export encoders
//!
//! Each encoder is a pure function from an ordered color list (plus an
//! [`ExportContext`] for timestamps and the source image) to bytes.
//! [`export`] dispatches on [`ExportFormat`] and tags the output with its
//! filename and MIME type.

pub mod ase;
pub mod html;
pub mod raster;
pub mod svg;
pub mod text;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::{PaletteError, Result};
use crate::Color;

/// Output formats understood by [`export`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Json,
    Css,
    Scss,
    /// Tailwind `module.exports` color config
    Tailwind,
    Svg,
    Png,
    Html,
    /// Adobe Swatch Exchange
    Ase,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 8] = [
        ExportFormat::Json,
        ExportFormat::Css,
        ExportFormat::Scss,
        ExportFormat::Tailwind,
        ExportFormat::Svg,
        ExportFormat::Png,
        ExportFormat::Html,
        ExportFormat::Ase,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Css => "css",
            ExportFormat::Scss => "scss",
            ExportFormat::Tailwind => "tailwind",
            ExportFormat::Svg => "svg",
            ExportFormat::Png => "png",
            ExportFormat::Html => "html",
            ExportFormat::Ase => "ase",
        }
    }

    /// File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Tailwind => "js",
            other => other.name(),
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Css => "text/css",
            ExportFormat::Scss => "text/x-scss",
            ExportFormat::Tailwind => "text/javascript",
            ExportFormat::Svg => "image/svg+xml",
            ExportFormat::Png => "image/png",
            ExportFormat::Html => "text/html",
            ExportFormat::Ase => "application/octet-stream",
        }
    }

    pub fn default_filename(&self) -> &'static str {
        match self {
            ExportFormat::Json => "palette.json",
            ExportFormat::Css => "palette.css",
            ExportFormat::Scss => "palette.scss",
            ExportFormat::Tailwind => "tailwind-colors.js",
            ExportFormat::Svg => "palette.svg",
            ExportFormat::Png => "palette.png",
            ExportFormat::Html => "palette.html",
            ExportFormat::Ase => "palette.ase",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = PaletteError;

    /// Accepts a format name or extension, case-insensitive
    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().trim_start_matches('.').to_lowercase();
        ExportFormat::ALL
            .into_iter()
            .find(|f| f.name() == key || f.extension() == key)
            .ok_or_else(|| PaletteError::invalid_input(format!("unknown export format: {}", s)))
    }
}

/// Extra inputs shared by all encoders
#[derive(Debug, Clone, PartialEq)]
pub struct ExportContext {
    /// Image shown at the top of the HTML document
    pub source_image: Option<String>,
    /// Timestamp written into JSON and HTML exports
    pub generated_at: DateTime<Utc>,
}

impl ExportContext {
    /// Context stamped with the current time
    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    /// Context with a fixed timestamp
    pub fn at(generated_at: DateTime<Utc>) -> Self {
        Self {
            source_image: None,
            generated_at,
        }
    }

    pub fn with_source_image(mut self, source_image: impl Into<String>) -> Self {
        self.source_image = Some(source_image.into());
        self
    }
}

/// Encoded output of one format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub format: ExportFormat,
    pub filename: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl Artifact {
    fn new(format: ExportFormat, bytes: Vec<u8>) -> Self {
        Self {
            format,
            filename: format.default_filename().to_string(),
            mime_type: format.mime_type(),
            bytes,
        }
    }

    /// Output as UTF-8 text; `None` for binary formats
    pub fn as_text(&self) -> Option<&str> {
        match self.format {
            ExportFormat::Png | ExportFormat::Ase => None,
            _ => std::str::from_utf8(&self.bytes).ok(),
        }
    }

    /// Write the artifact to `dir/filename`, returning the path written
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.bytes).map_err(|e| {
            PaletteError::encode(self.format.name(), format!("cannot write {}", path.display()), e)
        })?;
        Ok(path)
    }
}

/// Encode a palette in the requested format
///
/// # Errors
///
/// Returns `EmptyExport` for an empty palette and `Encode` if the
/// underlying serializer fails.
pub fn export(format: ExportFormat, colors: &[Color], context: &ExportContext) -> Result<Artifact> {
    if colors.is_empty() {
        return Err(PaletteError::EmptyExport {
            format: format.name().to_string(),
        });
    }

    let bytes = match format {
        ExportFormat::Json => text::to_json(colors, context)?.into_bytes(),
        ExportFormat::Css => text::to_css(colors).into_bytes(),
        ExportFormat::Scss => text::to_scss(colors).into_bytes(),
        ExportFormat::Tailwind => text::to_tailwind(colors).into_bytes(),
        ExportFormat::Svg => svg::to_svg(colors).into_bytes(),
        ExportFormat::Png => raster::to_png(colors)?,
        ExportFormat::Html => html::to_html(colors, context).into_bytes(),
        ExportFormat::Ase => ase::to_ase(colors),
    };

    info!(format = format.name(), bytes = bytes.len(), "exported palette");
    Ok(Artifact::new(format, bytes))
}

/// Encode a palette in several formats, stopping at the first failure
pub fn export_many(
    formats: &[ExportFormat],
    colors: &[Color],
    context: &ExportContext,
) -> Result<Vec<Artifact>> {
    formats
        .iter()
        .map(|&format| export(format, colors, context))
        .collect()
}
