//! Shape predicates for color input
//!
//! Predicates never fail: malformed input simply yields `false`. Typed
//! callers use these directly; untyped input goes through
//! [`crate::color::value`].

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{HEX_PATTERN, channel};

static HEX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(HEX_PATTERN).expect("valid regex"));

/// `#` followed by exactly 3 or 6 hex digits, either case
///
/// The match is anchored at both ends; trailing whitespace or newlines
/// make the string illegal.
pub fn is_legal_hex(text: &str) -> bool {
    HEX_RE.is_match(text)
}

/// Exactly three integer channels, each in 0-255
pub fn is_legal_rgb(channels: &[i64]) -> bool {
    channels.len() == 3 && channels.iter().all(|c| (channel::MIN..=channel::MAX).contains(c))
}
