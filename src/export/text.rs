//! Text exports: JSON, CSS custom properties, SCSS variables and a
//! Tailwind color config

use std::fmt::Write as _;

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use super::ExportContext;
use crate::error::{PaletteError, Result};
use crate::{Color, Hsl, Rgb};

#[derive(Debug, Serialize, Deserialize)]
struct JsonColor {
    hex: String,
    rgb: Rgb,
    hsl: Hsl,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    percentage: Option<u8>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonDocument {
    colors: Vec<JsonColor>,
    exported_at: String,
}

/// Pretty-printed `{ "colors": [...], "exportedAt": "<ISO-8601>" }`
pub fn to_json(colors: &[Color], context: &ExportContext) -> Result<String> {
    let document = JsonDocument {
        colors: colors
            .iter()
            .map(|c| JsonColor {
                hex: c.hex.clone(),
                rgb: c.rgb,
                hsl: c.hsl,
                percentage: c.percentage,
            })
            .collect(),
        exported_at: context
            .generated_at
            .to_rfc3339_opts(SecondsFormat::Millis, true),
    };

    serde_json::to_string_pretty(&document)
        .map_err(|e| PaletteError::encode("json", "cannot serialize palette", e))
}

/// Parse a JSON export back into colors, in file order
pub fn from_json(json: &str) -> Result<Vec<Color>> {
    let document: JsonDocument = serde_json::from_str(json)
        .map_err(|e| PaletteError::invalid_input(format!("not a palette JSON export: {}", e)))?;

    Ok(document
        .colors
        .into_iter()
        .map(|c| Color {
            hex: c.hex,
            rgb: c.rgb,
            hsl: c.hsl,
            name: None,
            percentage: c.percentage,
        })
        .collect())
}

/// `:root` block with one `--color-N` custom property per color
pub fn to_css(colors: &[Color]) -> String {
    let mut css = String::from(":root {\n");
    for (index, color) in colors.iter().enumerate() {
        let _ = writeln!(css, "  --color-{}: {};", index + 1, color.hex);
    }
    css.push_str("}\n");
    css
}

/// One `$color-N` variable per line
pub fn to_scss(colors: &[Color]) -> String {
    colors
        .iter()
        .enumerate()
        .map(|(index, color)| format!("$color-{}: {};\n", index + 1, color.hex))
        .collect()
}

/// `module.exports` config extending the theme with `palette-N` colors
pub fn to_tailwind(colors: &[Color]) -> String {
    let entries: Vec<String> = colors
        .iter()
        .enumerate()
        .map(|(index, color)| format!("        'palette-{}': '{}',", index + 1, color.hex))
        .collect();

    format!(
        "module.exports = {{\n  theme: {{\n    extend: {{\n      colors: {{\n{}\n      }}\n    }}\n  }}\n}}",
        entries.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn colors() -> Vec<Color> {
        vec![
            Color::from_hex("#FF0000").with_percentage(60),
            Color::from_hex("#00FF00"),
        ]
    }

    fn context() -> ExportContext {
        ExportContext::at(chrono::Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap())
    }

    #[test]
    fn test_json_layout() {
        let json = to_json(&colors(), &context()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["exportedAt"], "2024-03-05T14:30:00.000Z");
        assert_eq!(value["colors"][0]["hex"], "#FF0000");
        assert_eq!(value["colors"][0]["rgb"]["r"], 255);
        assert_eq!(value["colors"][0]["hsl"]["l"], 50);
        assert_eq!(value["colors"][0]["percentage"], 60);
        assert!(value["colors"][1].get("percentage").is_none());
        assert!(json.contains("\n  \"colors\""));
    }

    #[test]
    fn test_json_parses_back() {
        let json = to_json(&colors(), &context()).unwrap();
        assert_eq!(from_json(&json).unwrap(), colors());
    }

    #[test]
    fn test_from_json_rejects_other_documents() {
        assert!(from_json("{\"palette\": []}").is_err());
    }

    #[test]
    fn test_css() {
        assert_eq!(
            to_css(&colors()),
            ":root {\n  --color-1: #FF0000;\n  --color-2: #00FF00;\n}\n"
        );
    }

    #[test]
    fn test_scss() {
        assert_eq!(to_scss(&colors()), "$color-1: #FF0000;\n$color-2: #00FF00;\n");
    }

    #[test]
    fn test_tailwind() {
        let expected = "module.exports = {\n  theme: {\n    extend: {\n      colors: {\n        'palette-1': '#FF0000',\n        'palette-2': '#00FF00',\n      }\n    }\n  }\n}";
        assert_eq!(to_tailwind(&colors()), expected);
    }
}
