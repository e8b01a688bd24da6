//! Color model and conversion module
//!
//! This module defines the supported color formats, the predicates that
//! recognize them, and the conversions between them.

pub mod model;
pub mod detection;
pub mod conversion;
pub mod value;

pub use model::{Color, ColorFormat, HexColor, Rgb};
pub use conversion::{convert_color, hex_to_rgb, rgb_to_hex};
pub use detection::{is_legal_hex, is_legal_rgb};
