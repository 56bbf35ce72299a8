//! # Palettes
//!
//! A [Palette] is a flat mapping from color-token names (`blue_10`,
//! `gray_100`, `white`) to color value strings. Entries keep their insertion
//! order so that derived ramps and theme variables come out in a
//! deterministic order.
//!
//! ## Usage Examples
//!
//! ```rust
//! use swatch_theme::palette::Palette;
//!
//! let palette: Palette = [("blue_10", "#e6eefc"), ("gray_10", "#fafafa")]
//!     .into_iter()
//!     .collect();
//!
//! assert_eq!(palette.get("blue_10"), Some("#e6eefc"));
//! assert_eq!(palette.keys().collect::<Vec<_>>(), ["blue_10", "gray_10"]);
//! ```
//!
//! Palettes can also be loaded from JSON or TOML files holding a single
//! string-to-string table:
//!
//! ```json
//! { "blue_10": "#e6eefc", "blue_20": "#c2dbfc" }
//! ```

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::color::parse_hex_color;
use crate::error::{ThemeError, ThemeResult};

/// The built-in base palette.
pub mod base;

/// An ordered mapping from color-token names to color values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    entries: IndexMap<String, String>,
}

impl Palette {
    /// Create an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in base palette (hue ramps `_10` to `_100` plus `white` and `black`).
    pub fn base() -> Self {
        base::BASE_COLORS.iter().copied().collect()
    }

    /// Insert or overwrite an entry.
    ///
    /// Overwriting keeps the original position of the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Look up a color value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether the palette contains `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the palette has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }

    /// Copy every entry of `other` into this palette, later entries winning.
    pub fn extend_from(&mut self, other: &Palette) {
        for (key, value) in other.iter() {
            self.insert(key, value);
        }
    }

    /// Keys whose values are not `#rrggbb` / `#rrggbbaa` hex colors.
    pub fn invalid_colors(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, value)| parse_hex_color(value).is_err())
            .map(|(key, _)| key)
            .collect()
    }

    /// Consume the palette and return the underlying map.
    pub fn into_inner(self) -> IndexMap<String, String> {
        self.entries
    }

    /// Parse a palette from a JSON object.
    pub fn from_json(content: &str) -> ThemeResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a palette from a TOML table.
    pub fn from_toml(content: &str) -> ThemeResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a palette from a `.json` or `.toml` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ThemeResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ThemeError::file_not_found(path));
        }

        let parse: fn(&str) -> ThemeResult<Self> =
            match path.extension().and_then(|ext| ext.to_str()) {
                Some("json") => Self::from_json,
                Some("toml") => Self::from_toml,
                _ => return Err(ThemeError::unsupported_format(path)),
            };

        let content = fs::read_to_string(path)?;
        let palette = parse(&content).map_err(|err| match err {
            ThemeError::Serialization(details) => ThemeError::parse_error(path, details),
            other => other,
        })?;

        log::debug!("Loaded {} palette colors from {:?}", palette.len(), path);
        Ok(palette)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Palette {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<IndexMap<String, String>> for Palette {
    fn from(entries: IndexMap<String, String>) -> Self {
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
