//! Generate a default swatchbook configuration file
//!
//! Creates a JSON config with all default parameters

use std::{env, path::Path, process};

use swatchbook::SwatchbookConfig;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <output_config.json>", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} config/swatchbook.json", args[0]);
        process::exit(1);
    }

    let output_path = Path::new(&args[1]);

    // Create parent directory if needed
    if let Some(parent) = output_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            process::exit(1);
        }
    }

    let config = SwatchbookConfig::default();

    match config.to_json_file(output_path) {
        Ok(_) => {
            eprintln!("Configuration saved to {}", output_path.display());
            eprintln!();
            eprintln!("Config summary:");
            eprintln!("  Default format: {}", config.default_format);
            eprintln!("  Default scheme: {}", config.default_scheme);
            eprintln!(
                "  Random colors: {} x {}, channels {}-{}",
                config.random.amount,
                config.random.format,
                config.random.min_channel,
                config.random.max_channel
            );
        }
        Err(e) => {
            eprintln!("Error saving config: {}", e);
            process::exit(1);
        }
    }
}
