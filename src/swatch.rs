//! Swatch presentation helpers
//!
//! Computes what a color swatch chart shows without drawing it: one
//! full-width band per color on a 100×100 canvas, each labelled with the
//! color in every legal format. Label text is dark on bright bands and light
//! on dark ones. [`render_ansi`] turns the same rows into a terminal preview.

use std::fmt::Write as _;

use serde::Serialize;

use crate::{
    ColorError, Result,
    color::{Color, ColorFormat, Rgb, convert_color},
    constants::presentation,
};

/// Label color chosen for contrast against a swatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    Black,
    White,
}

impl TextColor {
    pub fn rgb(self) -> Rgb {
        match self {
            TextColor::Black => Rgb::new(0, 0, 0),
            TextColor::White => Rgb::new(255, 255, 255),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TextColor::Black => "black",
            TextColor::White => "white",
        }
    }
}

/// Black text on colors brighter than the threshold, white otherwise
pub fn legible_text_color(rgb: Rgb) -> TextColor {
    if rgb.brightness() > presentation::BRIGHTNESS_THRESHOLD {
        TextColor::Black
    } else {
        TextColor::White
    }
}

/// One text label on a swatch band
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwatchLabel {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub color: TextColor,
}

/// One color band of a swatch chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Swatch {
    /// The color as supplied
    pub color: Color,
    /// Fill color with channels in 0.0-1.0
    pub fill: [f32; 3],
    /// Lower edge of the band
    pub y_start: f32,
    pub height: f32,
    /// One label per legal format, left to right
    pub labels: Vec<SwatchLabel>,
}

/// Label text for `color` in `format`
///
/// RGB channels are right-aligned to three characters so labels line up:
/// `rgb: [ 31, 119, 180]`, `hex: #1f77b4`.
pub fn format_label(color: &Color, format: ColorFormat) -> String {
    match convert_color(color.clone(), format) {
        Color::Rgb(rgb) => format!(
            "{format}: [{:>3}, {:>3}, {:>3}]",
            rgb.red, rgb.green, rgb.blue
        ),
        Color::Hex(hex) => format!("{format}: {hex}"),
    }
}

/// Lay out `colors` as stacked bands, first color on top
///
/// # Errors
///
/// Returns [`ColorError::InvalidParameter`] if `colors` is empty.
pub fn swatch_layout(colors: &[Color]) -> Result<Vec<Swatch>> {
    if colors.is_empty() {
        return Err(ColorError::invalid_parameter(
            "colors",
            0,
            "expected at least 1 color",
        ));
    }

    let height = presentation::CANVAS_EXTENT / colors.len() as f32;
    let swatches = colors
        .iter()
        .enumerate()
        .map(|(i, color)| {
            let rgb = color.to_rgb();
            let y_start = presentation::CANVAS_EXTENT - (i + 1) as f32 * height;
            let text_color = legible_text_color(rgb);
            let labels = ColorFormat::ALL
                .iter()
                .enumerate()
                .map(|(j, format)| SwatchLabel {
                    x: presentation::LABEL_X_OFFSET + j as f32 * presentation::LABEL_X_STEP,
                    y: y_start + (height / 2.0).floor(),
                    text: format_label(color, *format),
                    color: text_color,
                })
                .collect();

            Swatch {
                color: color.clone(),
                fill: rgb.to_unit(),
                y_start,
                height,
                labels,
            }
        })
        .collect();

    Ok(swatches)
}

/// Render `colors` as 24-bit ANSI colored terminal rows
pub fn render_ansi(colors: &[Color]) -> Result<String> {
    let mut out = String::new();
    for swatch in swatch_layout(colors)? {
        let bg = swatch.color.to_rgb();
        let fg = swatch
            .labels
            .first()
            .map_or(TextColor::Black, |label| label.color)
            .rgb();
        let text = swatch
            .labels
            .iter()
            .map(|label| label.text.as_str())
            .collect::<Vec<_>>()
            .join("  ");

        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "\x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m {:<width$}\x1b[0m",
            bg.red,
            bg.green,
            bg.blue,
            fg.red,
            fg.green,
            fg.blue,
            text,
            width = presentation::ANSI_SWATCH_WIDTH,
        );
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::HexColor;

    #[test]
    fn test_legible_text_color() {
        assert_eq!(legible_text_color(Rgb::new(0, 0, 0)), TextColor::White);
        assert_eq!(legible_text_color(Rgb::new(255, 255, 255)), TextColor::Black);
        // Mean of exactly 50 is still dark
        assert_eq!(legible_text_color(Rgb::new(50, 50, 50)), TextColor::White);
        assert_eq!(legible_text_color(Rgb::new(51, 50, 50)), TextColor::Black);
        assert_eq!(legible_text_color(Rgb::new(150, 0, 0)), TextColor::White);
    }

    #[test]
    fn test_format_label() {
        let color = Color::Hex(HexColor::parse("#1f77b4").unwrap());
        assert_eq!(format_label(&color, ColorFormat::Rgb), "rgb: [ 31, 119, 180]");
        assert_eq!(format_label(&color, ColorFormat::Hex), "hex: #1f77b4");

        let color = Color::from([1, 2, 3]);
        assert_eq!(format_label(&color, ColorFormat::Rgb), "rgb: [  1,   2,   3]");
        assert_eq!(format_label(&color, ColorFormat::Hex), "hex: #010203");
    }

    #[test]
    fn test_swatch_layout_geometry() {
        let colors = [Color::from([255, 255, 255]), Color::from([0, 0, 0])];
        let swatches = swatch_layout(&colors).unwrap();
        assert_eq!(swatches.len(), 2);

        assert_eq!(swatches[0].y_start, 50.0);
        assert_eq!(swatches[1].y_start, 0.0);
        assert_eq!(swatches[0].height, 50.0);
        assert_eq!(swatches[0].fill, [1.0, 1.0, 1.0]);

        let xs: Vec<f32> = swatches[0].labels.iter().map(|l| l.x).collect();
        assert_eq!(xs, [5.0, 25.0]);
        assert_eq!(swatches[0].labels[0].y, 75.0);
        assert_eq!(swatches[0].labels[0].color, TextColor::Black);
        assert_eq!(swatches[1].labels[1].color, TextColor::White);
    }

    #[test]
    fn test_swatch_layout_empty() {
        assert!(swatch_layout(&[]).unwrap_err().is_value_error());
    }

    #[test]
    fn test_render_ansi() {
        let out = render_ansi(&[Color::from([31, 119, 180])]).unwrap();
        assert!(out.starts_with("\x1b[48;2;31;119;180m"));
        assert!(out.contains("hex: #1f77b4"));
        assert!(out.ends_with("\x1b[0m\n"));
    }
}
