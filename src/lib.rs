//! # Swatchbook
//!
//! A small Rust crate for working with colors in the two formats people
//! actually type: RGB triples and hex strings.
//!
//! This library provides:
//! - Validation and detection of RGB (`[31, 119, 180]`) and hex (`#1f77b4`, `#abc`) colors
//! - Conversion between the two, through a single [`convert_color`] entry point
//! - Named color schemes, with the "seaborn" palette built in
//! - Random color generation within channel bounds
//! - Swatch chart layout with legible label colors
//!
//! ## Example
//!
//! ```rust
//! use swatchbook::{ColorFormat, color_from_name, convert_color, hex_to_rgb, Rgb};
//!
//! let rgb = hex_to_rgb("#1f77b4")?;
//! assert_eq!(rgb, Rgb::new(31, 119, 180));
//!
//! let hex = convert_color(rgb, ColorFormat::Hex);
//! assert_eq!(hex.to_string(), "#1f77b4");
//!
//! let orange = color_from_name("orange", ColorFormat::Rgb, "seaborn")?;
//! println!("seaborn orange: {orange}");
//! # Ok::<(), swatchbook::ColorError>(())
//! ```
//!
//! Colors that arrive untyped (for example from JSON) are handled by
//! [`color::value`], which distinguishes wrong shapes ([`ErrorKind::Type`])
//! from illegal values ([`ErrorKind::Value`]).

pub mod error;
pub mod constants;
pub mod color;
pub mod scheme;
pub mod random;
pub mod swatch;
pub mod config;

pub use error::{ColorError, ErrorKind, Result};
pub use color::{
    Color, ColorFormat, HexColor, Rgb, convert_color, hex_to_rgb, is_legal_hex, is_legal_rgb,
    rgb_to_hex,
};
pub use config::SwatchbookConfig;
pub use random::{RandomColorOptions, RandomColors, random_color, random_color_with};
pub use scheme::{
    ColorScheme, SchemeRegistry, builtin_schemes, color_from_name, get_colors_from_scheme,
    scheme_names,
};
pub use swatch::{TextColor, legible_text_color, render_ansi, swatch_layout};
