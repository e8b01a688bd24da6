//! Configuration for applications built on swatchbook.
//!
//! Holds the preferred output format and scheme, the random color settings,
//! and any custom color schemes to register next to the built-in ones.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use swatchbook::SwatchbookConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = SwatchbookConfig::from_json_file(Path::new("swatchbook.json"))?;
//!
//! // Or use defaults
//! let config = SwatchbookConfig::default();
//! # Ok::<(), swatchbook::ColorError>(())
//! ```
//!
//! Custom scheme colors may be written as hex strings or RGB arrays:
//!
//! ```json
//! {
//!   "default_format": "hex",
//!   "default_scheme": "ink",
//!   "schemes": [
//!     { "name": "ink", "colors": [
//!         { "name": "midnight", "color": "#191970" },
//!         { "name": "oxblood", "color": [74, 0, 0] }
//!     ] }
//!   ]
//! }
//! ```

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    ColorError, Result,
    color::{Color, ColorFormat},
    constants::seaborn,
    random::{RandomColorOptions, RandomColors, random_color_with},
    scheme::{ColorScheme, SchemeRegistry},
};

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwatchbookConfig {
    /// Format colors are returned in unless a caller asks otherwise
    #[serde(default)]
    pub default_format: ColorFormat,

    /// Scheme used for name lookups unless a caller asks otherwise
    #[serde(default = "default_scheme_name")]
    pub default_scheme: String,

    /// Random color generation settings
    #[serde(default)]
    pub random: RandomColorOptions,

    /// Additional schemes, registered after the built-in ones
    #[serde(default)]
    pub schemes: Vec<SchemeDefinition>,
}

/// A custom color scheme as written in a configuration file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeDefinition {
    pub name: String,
    pub colors: Vec<NamedColor>,
}

/// One entry of a [`SchemeDefinition`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedColor {
    pub name: String,
    pub color: Color,
}

fn default_scheme_name() -> String {
    seaborn::NAME.to_string()
}

impl Default for SwatchbookConfig {
    fn default() -> Self {
        Self {
            default_format: ColorFormat::default(),
            default_scheme: default_scheme_name(),
            random: RandomColorOptions::default(),
            schemes: Vec::new(),
        }
    }
}

impl From<&SchemeDefinition> for ColorScheme {
    fn from(definition: &SchemeDefinition) -> Self {
        definition
            .colors
            .iter()
            .fold(ColorScheme::new(&definition.name), |scheme, entry| {
                scheme.with_color(&entry.name, entry.color.to_rgb())
            })
    }
}

impl SwatchbookConfig {
    /// Parse configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ColorError::config("invalid configuration JSON", e))
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ColorError::config(format!("could not read {}", path.display()), e)
        })?;
        let config = Self::from_json_str(&content)?;
        debug!(
            "loaded configuration from {} ({} custom schemes)",
            path.display(),
            config.schemes.len()
        );
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ColorError::config("could not serialize configuration", e))?;
        std::fs::write(path, json)
            .map_err(|e| ColorError::config(format!("could not write {}", path.display()), e))?;
        Ok(())
    }

    /// Built-in schemes plus the custom schemes of this configuration
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::DuplicateScheme`] if a custom scheme reuses a
    /// registered name.
    pub fn registry(&self) -> Result<SchemeRegistry> {
        let mut registry = SchemeRegistry::with_builtins();
        for definition in &self.schemes {
            registry.register(definition.into())?;
        }
        Ok(registry)
    }

    /// Check the random settings and that the default scheme exists
    pub fn validate(&self) -> Result<()> {
        self.random.validate()?;
        self.registry()?.assert_scheme(&self.default_scheme)?;
        Ok(())
    }

    /// Color `color_name` of the default scheme in the default format
    pub fn color_from_name(&self, color_name: &str) -> Result<Color> {
        self.registry()?
            .color_from_name(color_name, self.default_format, &self.default_scheme)
    }

    /// Random colors per the configured settings
    pub fn random_colors(&self) -> Result<RandomColors> {
        random_color_with(&mut rand::rng(), &self.random)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    const INK_CONFIG: &str = r##"{
        "default_format": "hex",
        "default_scheme": "ink",
        "random": { "amount": 2, "min_channel": 10, "max_channel": 20 },
        "schemes": [
            { "name": "ink", "colors": [
                { "name": "midnight", "color": "#191970" },
                { "name": "oxblood", "color": [74, 0, 0] }
            ] }
        ]
    }"##;

    #[test]
    fn test_default_config() {
        let config = SwatchbookConfig::default();
        assert_eq!(config.default_format, ColorFormat::Rgb);
        assert_eq!(config.default_scheme, "seaborn");
        config.validate().unwrap();
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = SwatchbookConfig::from_json_str("{}").unwrap();
        assert_eq!(config, SwatchbookConfig::default());
    }

    #[test]
    fn test_custom_schemes() {
        let config = SwatchbookConfig::from_json_str(INK_CONFIG).unwrap();
        config.validate().unwrap();

        let registry = config.registry().unwrap();
        assert_eq!(registry.scheme_names(), ["seaborn", "ink"]);

        let ink = registry.get("ink").unwrap();
        assert_eq!(ink.get("midnight"), Some(Rgb::new(0x19, 0x19, 0x70)));
        assert_eq!(ink.get("oxblood"), Some(Rgb::new(74, 0, 0)));

        let oxblood = config.color_from_name("oxblood").unwrap();
        assert_eq!(oxblood.to_string(), "#4a0000");
    }

    #[test]
    fn test_random_colors_from_config() {
        let config = SwatchbookConfig::from_json_str(INK_CONFIG).unwrap();
        let colors = config.random_colors().unwrap().into_vec();
        assert_eq!(colors.len(), 2);
        for color in colors {
            assert!(color.to_rgb().channels().iter().all(|c| (10..=20).contains(c)));
        }
    }

    #[test]
    fn test_invalid_configs() {
        let err = SwatchbookConfig::from_json_str(r#"{"default_format": "cmyk"}"#).unwrap_err();
        assert!(matches!(err, ColorError::ConfigError { .. }));

        let bad_color = r##"{"schemes": [{"name": "x", "colors": [{"name": "a", "color": "#12"}]}]}"##;
        assert!(SwatchbookConfig::from_json_str(bad_color).is_err());

        let duplicate = r#"{"schemes": [{"name": "seaborn", "colors": []}]}"#;
        let config = SwatchbookConfig::from_json_str(duplicate).unwrap();
        assert!(config.validate().unwrap_err().is_value_error());

        let unknown = r#"{"default_scheme": "nope"}"#;
        let config = SwatchbookConfig::from_json_str(unknown).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ColorError::UnknownScheme { .. })
        ));
    }

    #[test]
    fn test_json_file_roundtrip() {
        let path = std::env::temp_dir().join(format!(
            "swatchbook-config-{}.json",
            std::process::id()
        ));
        let config = SwatchbookConfig::from_json_str(INK_CONFIG).unwrap();
        config.to_json_file(&path).unwrap();

        let loaded = SwatchbookConfig::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file() {
        let err = SwatchbookConfig::from_json_file(Path::new("does/not/exist.json")).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Config);
    }
}
