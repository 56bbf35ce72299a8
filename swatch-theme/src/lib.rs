#![warn(missing_docs)]

//! # Swatch Theming System
//!
//! Palettes, color ramps and theme variables for component libraries.
//!
//! ## Overview
//!
//! - **[Palette](palette::Palette)**: Ordered color-token to color-value mapping
//! - **[create_color_ramp](ramp::create_color_ramp)**: Renames a palette's
//!   prefixed keys into theme variables
//! - **[Theme](theme::Theme)**: Named theme variables built from a palette hue
//! - **[ThemeManager](manager::ThemeManager)**: A list of themes with one active
//! - **[ThemeSwitcher](transition::ThemeSwitcher)**: Theme changes with a
//!   transition window
//! - **[ThemeConfig](config::ThemeConfig)**: Configuration from environment
//!   variables and files
//!
//! ## Quick Start
//!
//! ```rust
//! use swatch_theme::palette::Palette;
//! use swatch_theme::ramp::create_color_ramp;
//! use swatch_theme::theme::create_theme;
//!
//! let palette = Palette::base();
//!
//! // Rename a hue ramp into theme variables
//! let ramp = create_color_ramp("blue", "color_theme", &palette);
//! assert_eq!(ramp.get("color_theme_10"), Some("#e6eefc"));
//! assert_eq!(ramp.get("color_theme_100"), Some("#0f397d"));
//!
//! // Or build a whole theme
//! let theme = create_theme("blue", &palette).unwrap();
//! assert_eq!(theme.get("color_theme_60"), theme.swatch());
//! ```
//!
//! ## Theme Switching
//!
//! ```rust
//! use swatch_theme::manager::ThemeManager;
//!
//! let mut manager = ThemeManager::builtin().unwrap();
//! manager.select_by_name("teal").unwrap();
//! assert_eq!(manager.active().name(), "Teal");
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade and never installs a logger.

/// Contains hex color parsing and blending.
pub mod color;
/// Contains the [config::ThemeConfig] struct for theme configuration.
pub mod config;
/// Contains the [error::ThemeError] type.
pub mod error;
/// Contains theme management and runtime switching.
pub mod manager;
/// Contains the [palette::Palette] type and the base palette.
pub mod palette;
/// Contains color ramp construction.
pub mod ramp;
/// Contains the [theme::Theme] struct and theme construction.
pub mod theme;
/// Contains theme transitions.
pub mod transition;

pub use peniko;
