//! # Theme Error Types
//!
//! Error types for the fallible edges of the theming system: palette and
//! config files, theme lookups and color parsing. Ramp construction itself
//! never fails and has no error type.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the theming system.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Theme with the specified name was not found.
    #[error("Theme '{name}' not found")]
    ThemeNotFound {
        /// The name of the theme that was not found.
        name: String,
    },

    /// The palette has no ramp for the requested hue.
    #[error("Palette has no colors for hue '{hue}'")]
    HueNotFound {
        /// The hue that was requested.
        hue: String,
    },

    /// A theme index outside the list of known themes.
    #[error("Theme index {index} out of range (have {len} themes)")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of available themes.
        len: usize,
    },

    /// A theme list was empty where at least one theme is required.
    #[error("At least one theme is required")]
    NoThemes,

    /// A color value is not a `#rrggbb` or `#rrggbbaa` hex string.
    #[error("Invalid hex color '{value}'")]
    InvalidColor {
        /// The offending value.
        value: String,
    },

    /// Palette or configuration file was not found.
    #[error("File not found: {path:?}")]
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Error parsing a palette or configuration file.
    #[error("Failed to parse {path:?}: {details}")]
    ParseError {
        /// The path of the file that failed to parse.
        path: PathBuf,
        /// Details about the parse error.
        details: String,
    },

    /// The file extension is not one of the supported formats.
    #[error("Unsupported file format: {path:?} (use .json or .toml)")]
    UnsupportedFormat {
        /// The path with the unsupported extension.
        path: PathBuf,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error serializing or deserializing theme data.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create a theme not found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::ThemeNotFound { name: name.into() }
    }

    /// Create a hue not found error.
    pub fn hue_not_found(hue: impl Into<String>) -> Self {
        Self::HueNotFound { hue: hue.into() }
    }

    /// Create an invalid color error.
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
        }
    }

    /// Create a file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a parse error.
    pub fn parse_error(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::ParseError {
            path: path.into(),
            details: details.into(),
        }
    }

    /// Create an unsupported format error.
    pub fn unsupported_format(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedFormat { path: path.into() }
    }
}

impl From<serde_json::Error> for ThemeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for ThemeError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
