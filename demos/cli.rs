//! Command-line interface for chroma_scan
//!
//! Decodes an image with the `image` crate, runs the full analysis, and
//! prints the report as JSON.

use std::{env, path::Path, path::PathBuf, process};

use chroma_scan::{analyze, AnalysisReport, AnalyzerConfig, PixelBuffer};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut config_path: Option<PathBuf> = None;
    let mut image_path_arg: Option<String> = None;

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --config requires a file path");
                    process::exit(1);
                }
                config_path = Some(PathBuf::from(&args[i + 1]));
                i += 1;
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
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

    let image_path_str = match image_path_arg {
        Some(path) => path,
        None => {
            print_help(&args[0]);
            process::exit(1);
        }
    };

    let image_path = Path::new(&image_path_str);
    if !image_path.exists() {
        eprintln!("Error: File '{}' does not exist", image_path.display());
        process::exit(1);
    }

    let config = match config_path {
        Some(path) => match AnalyzerConfig::from_json_file(&path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("Error: Failed to load config '{}': {}", path.display(), error);
                process::exit(1);
            }
        },
        None => AnalyzerConfig::default(),
    };

    let decoded = match image::open(image_path) {
        Ok(img) => img.to_rgba8(),
        Err(error) => {
            eprintln!("Error: Failed to decode image: {}", error);
            process::exit(1);
        }
    };

    let (width, height) = decoded.dimensions();
    let buffer = match PixelBuffer::new(width, height, decoded.as_raw()) {
        Ok(buffer) => buffer,
        Err(error) => {
            eprintln!("Analysis failed: {}", error);
            eprintln!("Suggestion: {}", error.user_message());
            process::exit(1);
        }
    };

    let report = analyze(&buffer, &config);
    print_report(&report);
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <image_path>", program_name);
    eprintln!();
    eprintln!("Analyze the dominant colors, zones, and temperature of an image.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config FILE    Load analyzer configuration from a JSON file");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} photo.jpg", program_name);
    eprintln!("  {} --config analyzer.json photo.png", program_name);
}

fn print_report(report: &AnalysisReport) {
    // JSON to stdout for programmatic use
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing report: {}", e);
            process::exit(1);
        }
    }

    // Summary to stderr for human reading
    eprintln!();
    eprintln!("Color Analysis Summary:");
    for entry in &report.colors {
        eprintln!(
            "  {}  {:>6.2}%  ({} px)",
            entry.sample.hex, entry.percentage, entry.count
        );
    }
    if let Some(temp) = &report.temperature {
        eprintln!(
            "  Temperature: {} ({:.1})",
            temp.category.label(),
            temp.average
        );
    }
}
