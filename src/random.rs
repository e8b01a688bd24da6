//! Random color generation
//!
//! Channels are drawn independently and uniformly from an inclusive range.
//! A request for one color yields a bare [`Color`]; any larger request yields
//! a list (see [`RandomColors`]).

use log::trace;
use rand::{
    Rng,
    distr::{Distribution, Uniform},
};
use serde::{Deserialize, Serialize};

use crate::{
    ColorError, Result,
    color::{Color, ColorFormat, Rgb, convert_color},
    constants::{channel, random},
};

/// Parameters for [`random_color_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomColorOptions {
    /// Output format of every generated color
    pub format: ColorFormat,

    /// Number of colors to generate (at least 1)
    pub amount: usize,

    /// Lowest channel value, inclusive
    pub min_channel: i64,

    /// Highest channel value, inclusive (must exceed `min_channel`)
    pub max_channel: i64,
}

impl Default for RandomColorOptions {
    fn default() -> Self {
        Self {
            format: ColorFormat::default(),
            amount: random::DEFAULT_AMOUNT,
            min_channel: random::DEFAULT_MIN_CHANNEL,
            max_channel: random::DEFAULT_MAX_CHANNEL,
        }
    }
}

impl RandomColorOptions {
    pub fn new(format: ColorFormat, amount: usize, min_channel: i64, max_channel: i64) -> Self {
        Self {
            format,
            amount,
            min_channel,
            max_channel,
        }
    }

    /// Check every parameter
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidParameter`] if a channel bound lies
    /// outside 0-255, if `max_channel <= min_channel`, or if `amount < 1`.
    pub fn validate(&self) -> Result<()> {
        let channel_range = channel::MIN..=channel::MAX;
        if !channel_range.contains(&self.min_channel) {
            return Err(ColorError::invalid_parameter(
                "min_channel",
                self.min_channel,
                "expected a value in 0-255",
            ));
        }
        if !channel_range.contains(&self.max_channel) {
            return Err(ColorError::invalid_parameter(
                "max_channel",
                self.max_channel,
                "expected a value in 0-255",
            ));
        }
        if self.max_channel <= self.min_channel {
            return Err(ColorError::invalid_parameter(
                "max_channel",
                self.max_channel,
                "must be greater than min_channel",
            ));
        }
        if self.amount < 1 {
            return Err(ColorError::invalid_parameter(
                "amount",
                self.amount,
                "expected at least 1",
            ));
        }
        Ok(())
    }

    fn channel_distribution(&self) -> Result<Uniform<u8>> {
        self.validate()?;
        // Bounds are within 0-255 after validation
        Uniform::new_inclusive(self.min_channel as u8, self.max_channel as u8).map_err(|_| {
            ColorError::invalid_parameter("max_channel", self.max_channel, "empty channel range")
        })
    }
}

/// Result of a random color request
///
/// `Single` exactly when one color was requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RandomColors {
    Single(Color),
    Many(Vec<Color>),
}

impl RandomColors {
    pub fn len(&self) -> usize {
        match self {
            RandomColors::Single(_) => 1,
            RandomColors::Many(colors) => colors.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten into a list regardless of shape
    pub fn into_vec(self) -> Vec<Color> {
        match self {
            RandomColors::Single(color) => vec![color],
            RandomColors::Many(colors) => colors,
        }
    }
}

/// Generate `amount` random colors using the thread-local generator
///
/// # Example
///
/// ```
/// use swatchbook::{ColorFormat, RandomColors, random_color};
///
/// let colors = random_color(ColorFormat::Hex, 3, 120, 140)?;
/// assert_eq!(colors.len(), 3);
/// assert!(matches!(random_color(ColorFormat::Rgb, 1, 0, 255)?, RandomColors::Single(_)));
/// # Ok::<(), swatchbook::ColorError>(())
/// ```
pub fn random_color(
    format: ColorFormat,
    amount: usize,
    min_channel: i64,
    max_channel: i64,
) -> Result<RandomColors> {
    let options = RandomColorOptions::new(format, amount, min_channel, max_channel);
    random_color_with(&mut rand::rng(), &options)
}

/// Generate random colors from `rng`
///
/// All parameters are validated before anything is drawn.
pub fn random_color_with<R: Rng + ?Sized>(
    rng: &mut R,
    options: &RandomColorOptions,
) -> Result<RandomColors> {
    let distribution = options.channel_distribution()?;

    let mut colors: Vec<Color> = (0..options.amount)
        .map(|_| {
            let rgb = Rgb::new(
                distribution.sample(rng),
                distribution.sample(rng),
                distribution.sample(rng),
            );
            convert_color(rgb, options.format)
        })
        .collect();
    trace!("generated {} random colors", colors.len());

    Ok(match colors.len() {
        1 => RandomColors::Single(colors.remove(0)),
        _ => RandomColors::Many(colors),
    })
}
