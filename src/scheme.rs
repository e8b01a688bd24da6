//! Named color schemes (palettes)
//!
//! A [`ColorScheme`] maps color names to RGB values in a fixed order. A
//! [`SchemeRegistry`] holds schemes by name. The process-wide registry
//! returned by [`builtin_schemes`] is built once and never mutated;
//! applications that need more palettes build their own registry, for
//! example from [`crate::config::SwatchbookConfig`].

use std::sync::OnceLock;

use log::debug;

use crate::{
    ColorError, Result,
    color::{Color, ColorFormat, Rgb, convert_color},
    constants::seaborn,
};

/// Ordered mapping from color name to RGB value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScheme {
    name: String,
    colors: Vec<(String, Rgb)>,
}

impl ColorScheme {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colors: Vec::new(),
        }
    }

    /// The built-in "seaborn" scheme
    pub fn seaborn() -> Self {
        seaborn::COLORS
            .iter()
            .fold(Self::new(seaborn::NAME), |scheme, (name, rgb)| {
                scheme.with_color(*name, *rgb)
            })
    }

    /// Builder form of [`ColorScheme::insert`]
    pub fn with_color(mut self, name: impl Into<String>, rgb: impl Into<Rgb>) -> Self {
        self.insert(name, rgb);
        self
    }

    /// Add a color, replacing (in place) any color of the same name
    ///
    /// Returns the replaced value.
    pub fn insert(&mut self, name: impl Into<String>, rgb: impl Into<Rgb>) -> Option<Rgb> {
        let name = name.into();
        let rgb = rgb.into();
        match self.colors.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, rgb)),
            None => {
                self.colors.push((name, rgb));
                None
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, color_name: &str) -> Option<Rgb> {
        self.colors
            .iter()
            .find(|(name, _)| name == color_name)
            .map(|(_, rgb)| *rgb)
    }

    pub fn contains(&self, color_name: &str) -> bool {
        self.get(color_name).is_some()
    }

    pub fn color_names(&self) -> impl Iterator<Item = &str> {
        self.colors.iter().map(|(name, _)| name.as_str())
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Rgb)> {
        self.colors.iter().map(|(name, rgb)| (name.as_str(), *rgb))
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Collection of schemes addressable by name, in registration order
#[derive(Debug, Clone, Default)]
pub struct SchemeRegistry {
    schemes: Vec<ColorScheme>,
}

impl SchemeRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in scheme
    pub fn with_builtins() -> Self {
        Self {
            schemes: vec![ColorScheme::seaborn()],
        }
    }

    /// Add a scheme
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::DuplicateScheme`] if a scheme of the same name
    /// is already registered.
    pub fn register(&mut self, scheme: ColorScheme) -> Result<()> {
        if self.get(scheme.name()).is_some() {
            return Err(ColorError::DuplicateScheme {
                scheme: scheme.name().to_string(),
            });
        }
        debug!(
            "registering color scheme `{}` with {} colors",
            scheme.name(),
            scheme.len()
        );
        self.schemes.push(scheme);
        Ok(())
    }

    pub fn get(&self, scheme: &str) -> Option<&ColorScheme> {
        self.schemes.iter().find(|s| s.name() == scheme)
    }

    /// Registered scheme names, in registration order
    pub fn scheme_names(&self) -> Vec<&str> {
        self.schemes.iter().map(ColorScheme::name).collect()
    }

    /// Look up a scheme, failing with a value error if it is not registered
    pub fn assert_scheme(&self, scheme: &str) -> Result<&ColorScheme> {
        self.get(scheme).ok_or_else(|| ColorError::UnknownScheme {
            scheme: scheme.to_string(),
            legal: self.scheme_names().into_iter().map(String::from).collect(),
        })
    }

    /// Look up a color by name, failing with a value error if either the
    /// scheme or the color name is unknown
    pub fn assert_color_name(&self, color_name: &str, scheme: &str) -> Result<Rgb> {
        self.assert_scheme(scheme)?
            .get(color_name)
            .ok_or_else(|| ColorError::UnknownColorName {
                name: color_name.to_string(),
                scheme: scheme.to_string(),
            })
    }

    /// Color `color_name` of `scheme`, converted to `format`
    pub fn color_from_name(
        &self,
        color_name: &str,
        format: ColorFormat,
        scheme: &str,
    ) -> Result<Color> {
        let rgb = self.assert_color_name(color_name, scheme)?;
        Ok(convert_color(rgb, format))
    }

    /// Every color of `scheme` in palette order, converted to `format`
    pub fn get_colors_from_scheme(&self, scheme: &str, format: ColorFormat) -> Result<Vec<Color>> {
        let scheme = self.assert_scheme(scheme)?;
        Ok(scheme
            .iter()
            .map(|(_, rgb)| convert_color(rgb, format))
            .collect())
    }
}

/// Process-wide registry of built-in schemes
pub fn builtin_schemes() -> &'static SchemeRegistry {
    static BUILTIN: OnceLock<SchemeRegistry> = OnceLock::new();
    BUILTIN.get_or_init(|| {
        let registry = SchemeRegistry::with_builtins();
        debug!("built-in color schemes: {:?}", registry.scheme_names());
        registry
    })
}

/// Names of the built-in schemes
pub fn scheme_names() -> Vec<&'static str> {
    builtin_schemes().scheme_names()
}

/// Color `color_name` of built-in `scheme`, converted to `format`
///
/// # Example
///
/// ```
/// use swatchbook::{ColorFormat, color_from_name};
///
/// let blue = color_from_name("blue", ColorFormat::Hex, "seaborn")?;
/// assert_eq!(blue.to_string(), "#1f77b4");
/// # Ok::<(), swatchbook::ColorError>(())
/// ```
pub fn color_from_name(color_name: &str, format: ColorFormat, scheme: &str) -> Result<Color> {
    builtin_schemes().color_from_name(color_name, format, scheme)
}

/// Every color of built-in `scheme` in palette order, converted to `format`
pub fn get_colors_from_scheme(scheme: &str, format: ColorFormat) -> Result<Vec<Color>> {
    builtin_schemes().get_colors_from_scheme(scheme, format)
}
