//! # Theme Configuration
//!
//! Selects the default hue, the palette file and the transition timing from
//! environment variables, a TOML file, or code.
//!
//! ## Environment Variables
//!
//! - `SWATCH_THEME`: Hue of the default theme (`blue`, `teal`, ...)
//! - `SWATCH_PALETTE`: Path to a `.json` or `.toml` palette file
//! - `SWATCH_THEME_CONFIG`: Path to a TOML configuration file. When it loads,
//!   it replaces the values above.
//!
//! ## Configuration File Format
//!
//! ```toml
//! [theme]
//! default = "teal"
//! palette = "./palette.json"
//! transition_ms = 350
//! transitions = true
//! ```
//!
//! ## Programmatic Configuration
//!
//! ```rust
//! use swatch_theme::config::ThemeConfig;
//!
//! let config = ThemeConfig::new().with_default_hue("magenta");
//! let theme = config.resolve_theme().unwrap();
//! assert_eq!(theme.name(), "Magenta");
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ThemeError, ThemeResult};
use crate::palette::base::DEFAULT_HUE;
use crate::palette::Palette;
use crate::theme::{create_theme, Theme};
use crate::transition::{ThemeSwitcher, TransitionConfig};

const ENV_THEME: &str = "SWATCH_THEME";
const ENV_PALETTE: &str = "SWATCH_PALETTE";
const ENV_CONFIG: &str = "SWATCH_THEME_CONFIG";

/// Theme settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    /// Hue of the default theme.
    pub default_hue: String,
    /// Palette file. The built-in base palette is used when unset.
    pub palette_path: Option<PathBuf>,
    /// Transition timing.
    pub transition: TransitionConfig,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    theme: ThemeSection,
}

#[derive(Debug, Default, Deserialize)]
struct ThemeSection {
    default: Option<String>,
    palette: Option<PathBuf>,
    transition_ms: Option<u64>,
    transitions: Option<bool>,
}

impl ThemeConfig {
    /// Default settings: blue theme, base palette, 350ms transitions.
    pub fn new() -> Self {
        Self {
            default_hue: DEFAULT_HUE.to_string(),
            palette_path: None,
            transition: TransitionConfig::default(),
        }
    }

    /// Read `SWATCH_THEME`, `SWATCH_PALETTE` and `SWATCH_THEME_CONFIG`.
    ///
    /// A config file that fails to load is logged and ignored.
    pub fn from_env_or_default() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new();

        if let Some(hue) = lookup(ENV_THEME).filter(|hue| !hue.trim().is_empty()) {
            config.default_hue = hue.trim().to_lowercase();
        }

        if let Some(path) = lookup(ENV_PALETTE).filter(|path| !path.is_empty()) {
            config.palette_path = Some(PathBuf::from(path));
        }

        if let Some(path) = lookup(ENV_CONFIG) {
            match Self::from_file(&path) {
                Ok(file_config) => config = file_config,
                Err(err) => log::warn!("Ignoring theme config {path}: {err}"),
            }
        }

        config
    }

    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ThemeResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ThemeError::file_not_found(path));
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("toml") {
            return Err(ThemeError::unsupported_format(path));
        }

        let content = fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content).map_err(|err| match err {
            ThemeError::Serialization(details) => ThemeError::parse_error(path, details),
            other => other,
        })?;

        // Relative palette paths are relative to the config file.
        if let (Some(palette), Some(dir)) = (config.palette_path.as_mut(), path.parent()) {
            if palette.is_relative() {
                *palette = dir.join(&*palette);
            }
        }

        Ok(config)
    }

    /// Parse settings from TOML content. Missing fields keep their defaults.
    pub fn from_toml(content: &str) -> ThemeResult<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        let defaults = TransitionConfig::default();

        Ok(Self {
            default_hue: file
                .theme
                .default
                .map(|hue| hue.to_lowercase())
                .unwrap_or_else(|| DEFAULT_HUE.to_string()),
            palette_path: file.theme.palette,
            transition: TransitionConfig::new(
                file.theme.transitions.unwrap_or(defaults.enabled),
                file.theme.transition_ms.unwrap_or(defaults.duration_ms),
            ),
        })
    }

    /// Set the default hue. Hue names are lowercased like palette keys.
    pub fn with_default_hue(mut self, hue: impl Into<String>) -> Self {
        self.default_hue = hue.into().to_lowercase();
        self
    }

    /// Set the palette file.
    pub fn with_palette_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.palette_path = Some(path.into());
        self
    }

    /// Set the transition timing.
    pub fn with_transition(mut self, transition: TransitionConfig) -> Self {
        self.transition = transition;
        self
    }

    /// Load the configured palette, or the base palette if none is set.
    pub fn resolve_palette(&self) -> ThemeResult<Palette> {
        match &self.palette_path {
            Some(path) => Palette::from_file(path),
            None => Ok(Palette::base()),
        }
    }

    /// Build the default theme from the configured palette.
    pub fn resolve_theme(&self) -> ThemeResult<Theme> {
        create_theme(&self.default_hue, &self.resolve_palette()?)
    }

    /// Build a [ThemeSwitcher] starting on the default theme.
    pub fn switcher(&self) -> ThemeResult<ThemeSwitcher> {
        ThemeSwitcher::new(
            self.resolve_palette()?,
            &self.default_hue,
            self.transition.clone(),
        )
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::new()
    }
}
