//! Print random colors, or the colors of a named scheme, as a terminal swatch
//!
//! Colors are written to stdout as JSON for programmatic use; the swatch
//! preview goes to stderr.

use std::{env, path::Path, process, str::FromStr};

use env_logger::Env;
use swatchbook::{
    Color, ColorFormat, RandomColorOptions, SwatchbookConfig, random_color_with, render_ansi,
};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();

    let mut config = SwatchbookConfig::default();
    let mut options: Option<RandomColorOptions> = None;
    let mut scheme = None;

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1);
        match (args[i].as_str(), value) {
            ("--config", Some(path)) => {
                config = SwatchbookConfig::from_json_file(Path::new(path)).unwrap_or_else(|e| {
                    eprintln!("Error: {}", e);
                    process::exit(1);
                });
                i += 1;
            }
            ("--scheme", Some(name)) => {
                scheme = Some(name.clone());
                i += 1;
            }
            ("--format", Some(token)) => {
                let format: ColorFormat = token.parse().unwrap_or_else(|e| {
                    eprintln!("Error: {}", e);
                    process::exit(1);
                });
                options.get_or_insert(config.random).format = format;
                i += 1;
            }
            ("--amount", Some(n)) => {
                options.get_or_insert(config.random).amount = parse_number(n);
                i += 1;
            }
            ("--min", Some(n)) => {
                options.get_or_insert(config.random).min_channel = parse_number(n);
                i += 1;
            }
            ("--max", Some(n)) => {
                options.get_or_insert(config.random).max_channel = parse_number(n);
                i += 1;
            }
            ("--help" | "-h", _) => {
                print_help(&args[0]);
                process::exit(0);
            }
            (arg, _) => {
                eprintln!("Unknown option or missing value: {}", arg);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let colors = match scheme {
        Some(name) => config.registry().and_then(|registry| {
            let format = options.map_or(config.default_format, |o| o.format);
            registry.get_colors_from_scheme(&name, format)
        }),
        None => random_color_with(&mut rand::rng(), &options.unwrap_or(config.random))
            .map(|colors| colors.into_vec()),
    };

    match colors {
        Ok(colors) => print_colors(&colors),
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

fn parse_number<T: FromStr>(text: &str) -> T {
    text.parse().unwrap_or_else(|_| {
        eprintln!("Error: `{}` is not a valid number", text);
        process::exit(1);
    })
}

fn print_colors(colors: &[Color]) {
    match serde_json::to_string(colors) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing colors: {}", e),
    }

    match render_ansi(colors) {
        Ok(preview) => eprint!("{}", preview),
        Err(e) => eprintln!("Error rendering preview: {}", e),
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS]", program_name);
    eprintln!();
    eprintln!("Generate random colors or list a color scheme.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config FILE    Load settings and custom schemes from a JSON file");
    eprintln!("  --scheme NAME    List the colors of a scheme instead of random colors");
    eprintln!("  --format FMT     Output format: rgb or hex");
    eprintln!("  --amount N       Number of random colors (default: 1)");
    eprintln!("  --min N          Lowest channel value (default: 0)");
    eprintln!("  --max N          Highest channel value (default: 255)");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} --format hex --amount 5", program_name);
    eprintln!("  {} --scheme seaborn --format hex", program_name);
}
