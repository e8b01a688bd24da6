//! Color operations over untyped input
//!
//! Colors read from JSON documents arrive as [`serde_json::Value`]s of any
//! shape. These functions detect, validate and convert such values, failing
//! with a type error ([`crate::ErrorKind::Type`]) when the shape is wrong and
//! a value error ([`crate::ErrorKind::Value`]) when the shape is right but
//! the content is not.
//!
//! Only JSON integers count as channels. Floats (`3.0`) and booleans are
//! rejected even when numerically in range.

use serde_json::Value;

use crate::{
    ColorError, Result,
    color::{Color, ColorFormat, HexColor, Rgb, conversion, detection},
};

/// True if `value` is a string holding a legal hex color
pub fn is_legal_hex(value: &Value) -> bool {
    value.as_str().is_some_and(detection::is_legal_hex)
}

/// True if `value` is an array of exactly three integers in 0-255
pub fn is_legal_rgb(value: &Value) -> bool {
    integer_channels(value).is_some_and(|channels| detection::is_legal_rgb(&channels))
}

/// Detect the format of `value`, `None` if it is not a legal color
pub fn get_color_type(value: &Value) -> Option<ColorFormat> {
    if is_legal_hex(value) {
        Some(ColorFormat::Hex)
    } else if is_legal_rgb(value) {
        Some(ColorFormat::Rgb)
    } else {
        None
    }
}

/// Fail with a type error unless `value` is a legal color
pub fn assert_color(value: &Value) -> Result<()> {
    parse_color(value).map(|_| ())
}

/// Interpret `value` as a color of whichever format it matches
pub fn parse_color(value: &Value) -> Result<Color> {
    match get_color_type(value) {
        Some(ColorFormat::Hex) => Ok(Color::Hex(hex_checked(value)?)),
        Some(ColorFormat::Rgb) => Ok(Color::Rgb(rgb_checked(value)?)),
        None => Err(ColorError::UnrecognizedColor {
            value: value.to_string(),
        }),
    }
}

/// Decode a hex string value into RGB channels
///
/// # Errors
///
/// Type error if `value` is not a string, value error if the string is not
/// a legal hex color.
pub fn hex_to_rgb(value: &Value) -> Result<Rgb> {
    let text = value.as_str().ok_or_else(|| ColorError::WrongShape {
        expected: "a hex color string",
        value: value.to_string(),
    })?;
    conversion::hex_to_rgb(text)
}

/// Format an RGB array value as canonical hex
///
/// # Errors
///
/// Type error if `value` is not an array, value error if the array is not
/// three integer channels in 0-255.
pub fn rgb_to_hex(value: &Value) -> Result<HexColor> {
    if !value.is_array() {
        return Err(ColorError::WrongShape {
            expected: "an RGB channel array",
            value: value.to_string(),
        });
    }
    Ok(conversion::rgb_to_hex(rgb_checked(value)?))
}

/// Convert `value` to the format named by `target`
///
/// The target token is checked before the color.
///
/// # Errors
///
/// Value error for an unknown `target`, type error if `value` is not a legal
/// color.
pub fn convert_color(value: &Value, target: &str) -> Result<Color> {
    let target: ColorFormat = target.parse()?;
    let color = parse_color(value)?;
    Ok(conversion::convert_color(color, target))
}

fn integer_channels(value: &Value) -> Option<Vec<i64>> {
    value.as_array()?.iter().map(Value::as_i64).collect()
}

fn rgb_checked(value: &Value) -> Result<Rgb> {
    match integer_channels(value) {
        Some(channels) => Rgb::from_channels(&channels),
        None => Err(ColorError::InvalidRgb {
            value: value.to_string(),
        }),
    }
}

fn hex_checked(value: &Value) -> Result<HexColor> {
    match value.as_str() {
        Some(text) => HexColor::parse(text),
        None => Err(ColorError::InvalidHex {
            value: value.to_string(),
        }),
    }
}
