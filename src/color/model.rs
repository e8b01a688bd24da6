//! Color value types
//!
//! A [`Color`] is either an [`Rgb`] triple or a [`HexColor`] string. Both
//! types can only be built from legal input, so any `Color` in hand is valid.

use std::{fmt, str::FromStr};

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::{ColorError, Result, color::detection};

/// Output format of a color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// Three integer channels in 0-255
    #[default]
    Rgb,
    /// `#rrggbb` (or `#rgb`) string
    Hex,
}

impl ColorFormat {
    /// Every legal format, in presentation order
    pub const ALL: [ColorFormat; 2] = [ColorFormat::Rgb, ColorFormat::Hex];

    /// Format token as accepted by [`FromStr`]
    pub fn as_str(self) -> &'static str {
        match self {
            ColorFormat::Rgb => "rgb",
            ColorFormat::Hex => "hex",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorFormat {
    type Err = ColorError;

    fn from_str(token: &str) -> Result<Self> {
        match token {
            "rgb" => Ok(ColorFormat::Rgb),
            "hex" => Ok(ColorFormat::Hex),
            _ => Err(ColorError::UnknownFormat {
                token: token.to_string(),
            }),
        }
    }
}

/// RGB color with 8-bit channels
///
/// Serialized as a `[red, green, blue]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Build a color from wider integer channels
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidRgb`] unless `channels` holds exactly
    /// three values in 0-255.
    pub fn from_channels(channels: &[i64]) -> Result<Self> {
        if !detection::is_legal_rgb(channels) {
            return Err(ColorError::InvalidRgb {
                value: format!("{channels:?}"),
            });
        }

        // Range checked above
        Ok(Self::new(
            channels[0] as u8,
            channels[1] as u8,
            channels[2] as u8,
        ))
    }

    pub const fn channels(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Channels scaled to 0.0-1.0, as plotting surfaces expect them
    pub fn to_unit(self) -> [f32; 3] {
        let unit: Srgb<f32> = Srgb::<u8>::from(self).into_format();
        [unit.red, unit.green, unit.blue]
    }

    /// Arithmetic mean of the three channels (0.0-255.0)
    pub fn brightness(self) -> f32 {
        (self.red as f32 + self.green as f32 + self.blue as f32) / 3.0
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.channels()
    }
}

impl From<Srgb<u8>> for Rgb {
    fn from(srgb: Srgb<u8>) -> Self {
        Self::new(srgb.red, srgb.green, srgb.blue)
    }
}

impl From<Rgb> for Srgb<u8> {
    fn from(rgb: Rgb) -> Self {
        Srgb::new(rgb.red, rgb.green, rgb.blue)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.red, self.green, self.blue)
    }
}

/// Hex color string (`#rgb` or `#rrggbb`, any case)
///
/// Keeps the spelling it was parsed from, so equality compares text:
/// `#FFF` and `#ffffff` decode to the same [`Rgb`] but are different
/// `HexColor`s. Use [`HexColor::canonical`] to compare by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    text: String,
    rgb: Rgb,
}

impl HexColor {
    /// Validate and decode a hex color
    ///
    /// Three-digit shorthand expands by duplicating each digit (`#abc` is
    /// `#aabbcc`).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] if `text` is not `#` followed by
    /// exactly 3 or 6 hex digits.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || ColorError::InvalidHex {
            value: text.to_string(),
        };

        if !detection::is_legal_hex(text) {
            return Err(invalid());
        }
        let srgb = Srgb::<u8>::from_str(text).map_err(|_| invalid())?;

        Ok(Self {
            text: text.to_string(),
            rgb: srgb.into(),
        })
    }

    /// Canonical hex form of an RGB color: lowercase, six digits
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            text: format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue),
            rgb,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Decoded channels
    pub fn to_rgb(&self) -> Rgb {
        self.rgb
    }

    /// Same color in canonical form (`#abc` becomes `#aabbcc`)
    ///
    /// Expansion is one-way: shorthand is never produced.
    pub fn canonical(&self) -> HexColor {
        Self::from_rgb(self.rgb)
    }

    pub fn is_shorthand(&self) -> bool {
        self.text.len() == 4
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(text: &str) -> Result<Self> {
        Self::parse(text)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(text: String) -> Result<Self> {
        Self::parse(&text)
    }
}

impl From<HexColor> for String {
    fn from(hex: HexColor) -> Self {
        hex.text
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A legal color in one of the supported formats
///
/// Serialized untagged: RGB colors as arrays, hex colors as strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Rgb(Rgb),
    Hex(HexColor),
}

impl Color {
    /// Format this color is stored in
    pub fn format(&self) -> ColorFormat {
        match self {
            Color::Rgb(_) => ColorFormat::Rgb,
            Color::Hex(_) => ColorFormat::Hex,
        }
    }

    pub fn as_rgb(&self) -> Option<Rgb> {
        match self {
            Color::Rgb(rgb) => Some(*rgb),
            Color::Hex(_) => None,
        }
    }

    pub fn as_hex(&self) -> Option<&HexColor> {
        match self {
            Color::Rgb(_) => None,
            Color::Hex(hex) => Some(hex),
        }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb)
    }
}

impl From<[u8; 3]> for Color {
    fn from(channels: [u8; 3]) -> Self {
        Color::Rgb(channels.into())
    }
}

impl From<HexColor> for Color {
    fn from(hex: HexColor) -> Self {
        Color::Hex(hex)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(rgb) => fmt::Display::fmt(rgb, f),
            Color::Hex(hex) => fmt::Display::fmt(hex, f),
        }
    }
}
