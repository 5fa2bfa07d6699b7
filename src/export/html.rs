//! Standalone HTML palette page

use std::fmt::Write as _;

use super::ExportContext;
use crate::Color;

const STYLE: &str = r#"    * {
      margin: 0;
      padding: 0;
      box-sizing: border-box;
    }
    body {
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
      background: #f5f5f5;
      padding: 20px;
    }
    .container {
      max-width: 1000px;
      margin: 0 auto;
      background: white;
      border-radius: 8px;
      overflow: hidden;
      box-shadow: 0 2px 8px rgba(0,0,0,0.1);
    }
    .header {
      padding: 30px;
      text-align: center;
      background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
      color: white;
    }
    .header h1 {
      font-size: 32px;
      margin-bottom: 10px;
    }
    .image-section {
      padding: 20px 30px;
      text-align: center;
    }
    .image-section img {
      max-width: 100%;
      max-height: 400px;
      border-radius: 8px;
      box-shadow: 0 2px 8px rgba(0,0,0,0.1);
    }
    .palette-section {
      padding: 30px;
    }
    .palette-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
      gap: 20px;
      margin-bottom: 30px;
    }
    .color-card {
      border-radius: 8px;
      overflow: hidden;
      box-shadow: 0 2px 8px rgba(0,0,0,0.1);
    }
    .color-swatch {
      height: 150px;
    }
    .color-info {
      padding: 12px;
      background: #f9f9f9;
      border-top: 1px solid #eee;
    }
    .color-hex {
      font-family: 'Courier New', monospace;
      font-weight: bold;
      font-size: 14px;
      margin-bottom: 6px;
    }
    .color-percentage {
      font-size: 12px;
      color: #666;
    }
    .footer {
      padding: 20px 30px;
      border-top: 1px solid #eee;
      text-align: center;
      color: #666;
      font-size: 12px;
    }
"#;

/// Escape text for use inside an HTML attribute or element
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a self-contained page: optional source image, a grid of color
/// cards with hex code and share, and a generation timestamp
pub fn to_html(colors: &[Color], context: &ExportContext) -> String {
    let mut cards = String::new();
    for color in colors {
        let _ = write!(
            cards,
            "\n        <div class=\"color-card\">\
             \n          <div class=\"color-swatch\" style=\"background-color: {hex}\"></div>\
             \n          <div class=\"color-info\">\
             \n            <div class=\"color-hex\">{hex}</div>\
             \n            <div class=\"color-percentage\">{pct}%</div>\
             \n          </div>\
             \n        </div>",
            hex = escape(&color.hex),
            pct = color.percentage.unwrap_or(0),
        );
    }

    let image_section = context
        .source_image
        .as_deref()
        .map(|src| {
            format!(
                "<div class=\"image-section\"><img src=\"{}\" alt=\"Source image\"></div>",
                escape(src)
            )
        })
        .unwrap_or_default();

    let generated = context.generated_at.format("%Y-%m-%d %H:%M:%S UTC");

    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
  <meta charset=\"UTF-8\">
  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
  <title>Color Palette</title>
  <style>
{STYLE}  </style>
</head>
<body>
  <div class=\"container\">
    <div class=\"header\">
      <h1>Color Palette</h1>
      <p>Extracted palette colors</p>
    </div>
    {image_section}
    <div class=\"palette-section\">
      <div class=\"palette-grid\">{cards}
      </div>
    </div>
    <div class=\"footer\">
      <p>Generated on {generated}</p>
    </div>
  </div>
</body>
</html>"
    )
}
