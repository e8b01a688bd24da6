//! Error types for the swatchbook library

use thiserror::Error;

/// Result type alias for swatchbook operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// Broad classification of a [`ColorError`]
///
/// Color operations only ever produce [`ErrorKind::Type`] or [`ErrorKind::Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Argument has the wrong shape (not a color of any supported format)
    Type,
    /// Argument has the right shape but an illegal value
    Value,
    /// Configuration could not be read, written or decoded
    Config,
}

/// Error types for color validation, conversion and lookup
#[derive(Error, Debug)]
pub enum ColorError {
    /// Value is neither a legal hex string nor a legal RGB triple
    #[error("Color format cannot be interpreted: {value}. Legal color formats are: rgb, hex")]
    UnrecognizedColor { value: String },

    /// Argument was expected to have a different shape
    #[error("Expected {expected}, received {value}")]
    WrongShape { expected: &'static str, value: String },

    /// String is not a legal `#rgb` / `#rrggbb` color
    #[error("`{value}` is not recognized as a HEX color")]
    InvalidHex { value: String },

    /// Sequence is not three integer channels in 0-255
    #[error("`{value}` is not recognized as a RGB color")]
    InvalidRgb { value: String },

    /// Unknown color format token
    #[error("Received unknown color format `{token}`. Legal formats are: rgb, hex")]
    UnknownFormat { token: String },

    /// Scheme name is not registered
    #[error("Received unknown color scheme `{scheme}`. Legal schemes: {legal:?}")]
    UnknownScheme { scheme: String, legal: Vec<String> },

    /// Scheme is already registered
    #[error("Color scheme `{scheme}` is already registered")]
    DuplicateScheme { scheme: String },

    /// Color name is not present in a registered scheme
    #[error("Color `{name}` is not present in color scheme `{scheme}`")]
    UnknownColorName { name: String, scheme: String },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value} ({reason})")]
    InvalidParameter {
        parameter: &'static str,
        value: String,
        reason: &'static str,
    },

    /// Configuration file could not be processed
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ColorError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(
        parameter: &'static str,
        value: impl ToString,
        reason: &'static str,
    ) -> Self {
        Self::InvalidParameter {
            parameter,
            value: value.to_string(),
            reason,
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ColorError::UnrecognizedColor { .. } | ColorError::WrongShape { .. } => {
                ErrorKind::Type
            }
            ColorError::ConfigError { .. } => ErrorKind::Config,
            _ => ErrorKind::Value,
        }
    }

    /// True for errors caused by an argument of the wrong shape
    pub fn is_type_error(&self) -> bool {
        self.kind() == ErrorKind::Type
    }

    /// True for errors caused by a well-shaped argument with an illegal value
    pub fn is_value_error(&self) -> bool {
        self.kind() == ErrorKind::Value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let err = ColorError::UnrecognizedColor {
            value: "\"lalal\"".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Type);
        assert!(err.is_type_error());

        let err = ColorError::UnknownFormat {
            token: "cmyk".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Value);
        assert!(err.is_value_error());

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = ColorError::config("could not read config.json", io);
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_error_messages() {
        let err = ColorError::UnknownColorName {
            name: "teal".to_string(),
            scheme: "seaborn".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Color `teal` is not present in color scheme `seaborn`"
        );

        let err = ColorError::invalid_parameter("amount", 0, "expected at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid parameter: amount = 0 (expected at least 1)"
        );
    }
}
