//! Command-line interface for palette_scan
//!
//! Extracts a palette from an image, prints it with its accessibility
//! report, and optionally writes export files.

use palette_scan::export::{export_many, ExportContext, ExportFormat};
use palette_scan::{
    image_loader, AccessibilityReport, ExtractionConfig, PaletteExtractor, PaletteResult,
};
use serde_json::json;
use std::{env, path::{Path, PathBuf}, process};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    let mut config_path: Option<String> = None;
    let mut color_count: Option<usize> = None;
    let mut name_colors = false;
    let mut formats: Vec<ExportFormat> = Vec::new();
    let mut output_dir = PathBuf::from(".");
    let mut image_path_arg = None;

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--colors" | "-k" => {
                i += 1;
                match args.get(i).and_then(|v| v.parse::<usize>().ok()) {
                    Some(count) if count > 0 => color_count = Some(count),
                    _ => {
                        eprintln!("Error: --colors expects a positive integer");
                        process::exit(1);
                    }
                }
            }
            "--config" => {
                i += 1;
                match args.get(i) {
                    Some(path) => config_path = Some(path.clone()),
                    None => {
                        eprintln!("Error: --config expects a file path");
                        process::exit(1);
                    }
                }
            }
            "--format" | "-f" => {
                i += 1;
                match args.get(i).map(String::as_str) {
                    Some("all") => formats = ExportFormat::ALL.to_vec(),
                    Some(name) => match name.parse::<ExportFormat>() {
                        Ok(format) => formats.push(format),
                        Err(e) => {
                            eprintln!("Error: {}", e);
                            process::exit(1);
                        }
                    },
                    None => {
                        eprintln!("Error: --format expects a format name");
                        process::exit(1);
                    }
                }
            }
            "--out" | "-o" => {
                i += 1;
                match args.get(i) {
                    Some(dir) => output_dir = PathBuf::from(dir),
                    None => {
                        eprintln!("Error: --out expects a directory");
                        process::exit(1);
                    }
                }
            }
            "--names" => name_colors = true,
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with('-') => {
                if image_path_arg.is_none() {
                    image_path_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple image paths provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let Some(image_path_str) = image_path_arg else {
        print_help(&args[0]);
        process::exit(1);
    };
    let image_path = Path::new(&image_path_str);

    let has_supported_extension = image_path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(image_loader::is_supported_extension);
    if !has_supported_extension {
        eprintln!("Error: {} is not a supported image file", image_path.display());
        eprintln!("Supported extensions: {}", image_loader::supported_extensions().join(", "));
        process::exit(1);
    }

    // Config file first, then command-line overrides regardless of order
    let config = match config_path {
        Some(path) => match ExtractionConfig::from_json_file(Path::new(&path)) {
            Ok(loaded) => loaded,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => ExtractionConfig::default(),
    }
    .with_overrides(color_count, name_colors);

    let result = image_loader::load_image_embedded(image_path).and_then(|(buffer, data_url)| {
        PaletteExtractor::with_config(config)
            .extract(&buffer, Some(image_path.display().to_string()))
            .map(|palette| (palette, data_url))
    });

    let (palette, data_url) = match result {
        Ok(result) => result,
        Err(error) => {
            eprintln!("Extraction failed: {}", error);
            eprintln!("Suggestion: {}", error.user_message());
            process::exit(1);
        }
    };

    let report = palette.accessibility_report();
    print_result(&palette, &report);

    if formats.is_empty() {
        return;
    }

    // Exports embed the image itself, not its path
    let context = ExportContext::now().with_source_image(data_url);

    let artifacts = match export_many(&formats, &palette.colors, &context) {
        Ok(artifacts) => artifacts,
        Err(error) => {
            eprintln!("Export failed: {}", error);
            process::exit(1);
        }
    };

    if let Err(e) = std::fs::create_dir_all(&output_dir) {
        eprintln!("Error: cannot create {}: {}", output_dir.display(), e);
        process::exit(1);
    }

    for artifact in &artifacts {
        match artifact.write_to_dir(&output_dir) {
            Ok(path) => eprintln!("Wrote {} ({} bytes)", path.display(), artifact.bytes.len()),
            Err(e) => eprintln!("Warning: {}", e),
        }
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <image_path>", program_name);
    eprintln!();
    eprintln!("Extract a color palette from an image file.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --colors, -k N      Number of colors to extract (default: 5)");
    eprintln!("  --config FILE       Load extraction settings from a JSON file");
    eprintln!("  --format, -f F      Export format: json, css, scss, tailwind, svg, png,");
    eprintln!("                      html, ase, or all (repeatable)");
    eprintln!("  --out, -o DIR       Directory for exported files (default: .)");
    eprintln!("  --names             Attach basic color names");
    eprintln!("  --help, -h          Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} photo.jpg", program_name);
    eprintln!("  {} -k 8 -f css -f ase photo.png", program_name);
    eprintln!("  {} -f all -o exports/ photo.webp", program_name);
}

fn print_result(palette: &PaletteResult, report: &AccessibilityReport) {
    // JSON to stdout for programmatic use
    let document = json!({
        "palette": palette,
        "accessibility": report,
    });
    match serde_json::to_string_pretty(&document) {
        Ok(text) => println!("{}", text),
        Err(e) => eprintln!("Error serializing result: {}", e),
    }

    // Summary to stderr for human reading
    eprintln!();
    eprintln!("Palette Summary:");
    eprintln!("  Dominant: {}", palette.dominant_color.hex);
    for (color, score) in palette.colors.iter().zip(&report.scores) {
        eprintln!(
            "  {}  {:>3}%  contrast {:>5.2}  {}",
            color.hex,
            color.percentage.unwrap_or(0),
            score.contrast,
            score.wcag
        );
    }
    eprintln!("  Average contrast: {:.2}", report.average_contrast);

    if !report.all_wcag_aa {
        eprintln!("  Warning: some colors do not reach WCAG AA for normal text.");
    }
}
