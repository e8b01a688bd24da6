//! Conversions between RGB and hex colors
//!
//! - Hex to RGB, with 3-digit shorthand expanded by nibble duplication
//! - RGB to canonical lowercase `#rrggbb`
//! - [`convert_color`], the single entry point used by the rest of the crate
//!
//! Expansion of shorthand is one-way. `#abc` converts to `(170, 187, 204)`
//! and back to `#aabbcc`, never to `#abc` again.

use log::trace;

use crate::{
    Result,
    color::{Color, ColorFormat, HexColor, Rgb},
};

/// Parse a hex color string into RGB channels
///
/// # Arguments
///
/// * `hex` - `#rgb` or `#rrggbb`, any case
///
/// # Errors
///
/// Returns [`crate::ColorError::InvalidHex`] if `hex` is not a legal hex color
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let rgb = HexColor::parse(hex)?.to_rgb();
    trace!("hex_to_rgb {hex} -> {rgb}");
    Ok(rgb)
}

/// Format RGB channels as a lowercase `#rrggbb` string
///
/// Each channel is zero-padded to two digits.
pub fn rgb_to_hex(rgb: Rgb) -> HexColor {
    let hex = HexColor::from_rgb(rgb);
    trace!("rgb_to_hex {rgb} -> {hex}");
    hex
}

/// Convert `color` to `target`
///
/// A color already in `target` format is returned unchanged, including the
/// spelling of hex strings (`#Ffffff` stays `#Ffffff`).
pub fn convert_color(color: impl Into<Color>, target: ColorFormat) -> Color {
    match (color.into(), target) {
        (Color::Rgb(rgb), ColorFormat::Hex) => Color::Hex(rgb_to_hex(rgb)),
        (Color::Hex(hex), ColorFormat::Rgb) => Color::Rgb(hex.to_rgb()),
        (same, _) => same,
    }
}

impl Color {
    /// This color as RGB channels
    pub fn to_rgb(&self) -> Rgb {
        match self {
            Color::Rgb(rgb) => *rgb,
            Color::Hex(hex) => hex.to_rgb(),
        }
    }

    /// Convert to `target`, see [`convert_color`]
    pub fn convert(self, target: ColorFormat) -> Color {
        convert_color(self, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#ffffff").unwrap(), Rgb::new(255, 255, 255));
        assert_eq!(hex_to_rgb("#1f77b4").unwrap(), Rgb::new(31, 119, 180));
        assert_eq!(hex_to_rgb("#000").unwrap(), Rgb::new(0, 0, 0));
        assert_eq!(hex_to_rgb("#F0a").unwrap(), Rgb::new(255, 0, 170));
    }

    #[test]
    fn test_hex_to_rgb_invalid() {
        let err = hex_to_rgb("#fffff_").unwrap_err();
        assert!(err.is_value_error());
        assert!(hex_to_rgb("#ffff").is_err());
        assert!(hex_to_rgb("ffffff").is_err());
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex(Rgb::new(255, 255, 255)).as_str(), "#ffffff");
        assert_eq!(rgb_to_hex(Rgb::new(0, 0, 0)).as_str(), "#000000");
        assert_eq!(rgb_to_hex(Rgb::new(1, 2, 3)).as_str(), "#010203");
        assert_eq!(rgb_to_hex(Rgb::new(214, 39, 40)).as_str(), "#d62728");
    }

    #[test]
    fn test_rgb_hex_roundtrip_all_channels() {
        for value in 0..=255u8 {
            let rgb = Rgb::new(value, 255 - value, value / 3);
            assert_eq!(hex_to_rgb(rgb_to_hex(rgb).as_str()).unwrap(), rgb);
        }
    }

    #[test]
    fn test_shorthand_does_not_roundtrip() {
        let rgb = hex_to_rgb("#abc").unwrap();
        assert_eq!(rgb_to_hex(rgb).as_str(), "#aabbcc");
    }

    #[test]
    fn test_convert_color_identity() {
        let hex = Color::Hex(HexColor::parse("#Ffffff").unwrap());
        assert_eq!(convert_color(hex.clone(), ColorFormat::Hex), hex);

        let rgb = Color::from([1, 2, 3]);
        assert_eq!(convert_color(rgb.clone(), ColorFormat::Rgb), rgb);
    }

    #[test]
    fn test_convert_color_dispatch() {
        let hex = convert_color(Rgb::new(1, 2, 3), ColorFormat::Hex);
        assert_eq!(hex.as_hex().map(HexColor::as_str), Some("#010203"));

        let rgb = Color::Hex(HexColor::parse("#ffffff").unwrap()).convert(ColorFormat::Rgb);
        assert_eq!(rgb.as_rgb(), Some(Rgb::new(255, 255, 255)));
    }
}
