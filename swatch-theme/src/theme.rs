//! # Theme System
//!
//! A [Theme] is a named, ordered set of theme variables. Color variables are
//! derived from a [Palette]: the theme hue's ramp becomes `color_theme_*`,
//! the gray ramp becomes `color_gray_*`, and `white`/`black` become
//! `color_white`/`color_black`.
//!
//! ## Usage Examples
//!
//! ```rust
//! use swatch_theme::palette::Palette;
//! use swatch_theme::theme::create_theme;
//!
//! let theme = create_theme("teal", &Palette::base()).unwrap();
//!
//! assert_eq!(theme.name(), "Teal");
//! assert_eq!(theme.get("color_theme_10"), Some("#e1f5f3"));
//! assert_eq!(theme.primary_ramp().len(), 10);
//! assert_eq!(theme.gray_ramp().len(), 10);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ThemeError, ThemeResult};
use crate::palette::base::{DEFAULT_HUE, HUES};
use crate::palette::Palette;
use crate::ramp::{create_color_ramp, select_prefixed, ColorRamp, RampKind};

/// Hue whose ramp every theme uses as its neutral ramp.
pub const GRAY_HUE: &str = "gray";

/// Ramp step used as a theme's representative swatch.
pub const SWATCH_STEP: u8 = 60;

/// Ramp step used for a theme's light highlight.
pub const HIGHLIGHT_STEP: u8 = 10;

/// A named set of theme variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    name: String,
    variables: Palette,
}

impl Theme {
    /// Create a theme from already computed variables.
    pub fn new(name: impl Into<String>, variables: Palette) -> Self {
        Self {
            name: name.into(),
            variables,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All variables in order.
    pub fn variables(&self) -> &Palette {
        &self.variables
    }

    /// Mutable access to the variables, for overriding individual values.
    pub fn variables_mut(&mut self) -> &mut Palette {
        &mut self.variables
    }

    /// Look up a variable.
    pub fn get(&self, variable: &str) -> Option<&str> {
        self.variables.get(variable)
    }

    /// Look up a step of the primary ramp, e.g. `color(60)` for `color_theme_60`.
    pub fn color(&self, step: u8) -> Option<&str> {
        self.get(&format!("{}_{step}", RampKind::Primary.variable_prefix()))
    }

    /// Representative swatch color (`color_theme_60`).
    pub fn swatch(&self) -> Option<&str> {
        self.color(SWATCH_STEP)
    }

    /// Light highlight color (`color_theme_10`).
    pub fn highlight(&self) -> Option<&str> {
        self.color(HIGHLIGHT_STEP)
    }

    /// The `color_theme_*` variables as a labelled ramp.
    pub fn primary_ramp(&self) -> ColorRamp {
        self.ramp(RampKind::Primary)
    }

    /// The `color_gray_*` variables as a labelled ramp.
    pub fn gray_ramp(&self) -> ColorRamp {
        self.ramp(RampKind::Gray)
    }

    /// A labelled ramp of either kind.
    pub fn ramp(&self, kind: RampKind) -> ColorRamp {
        ColorRamp::from_palette(kind, &select_prefixed(kind.variable_prefix(), &self.variables))
    }
}

/// Build the theme for `hue` from `palette`.
///
/// Fails if the palette has no `{hue}_*` entries. A palette without a gray
/// ramp still produces a theme, just without `color_gray_*` variables.
pub fn create_theme(hue: &str, palette: &Palette) -> ThemeResult<Theme> {
    let primary = create_color_ramp(
        &format!("{hue}_"),
        &format!("{}_", RampKind::Primary.variable_prefix()),
        palette,
    );
    if primary.is_empty() {
        return Err(ThemeError::hue_not_found(hue));
    }

    let grays = create_color_ramp(
        &format!("{GRAY_HUE}_"),
        &format!("{}_", RampKind::Gray.variable_prefix()),
        palette,
    );

    let mut variables = Palette::new();
    for base in ["white", "black"] {
        if let Some(value) = palette.get(base) {
            variables.insert(format!("color_{base}"), value);
        }
    }
    variables.extend_from(&primary);
    variables.extend_from(&grays);

    log::debug!(
        "Created theme '{}' ({} primary, {} gray colors)",
        hue,
        primary.len(),
        grays.len()
    );

    Ok(Theme::new(display_name(hue), variables))
}

/// The default theme built from the base palette.
pub fn default_theme() -> ThemeResult<Theme> {
    create_theme(DEFAULT_HUE, &Palette::base())
}

/// One theme per built-in hue, in [HUES] order.
pub fn builtin_themes() -> ThemeResult<Vec<Theme>> {
    let palette = Palette::base();
    HUES.iter().map(|hue| create_theme(hue, &palette)).collect()
}

/// `"magenta"` -> `"Magenta"`.
fn display_name(hue: &str) -> String {
    let mut chars = hue.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
