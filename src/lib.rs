#![warn(missing_docs)]

//! Color ramps and theme variables for component libraries.

pub use indexmap;

pub use swatch_theme as theme;

/// Exports `peniko` for working with parsed palette colors.
pub use swatch_theme::peniko as color;

/// A "prelude" for users of swatch.
///
/// Importing this module brings into scope the most common types
/// needed to derive theme variables from a palette.
///
/// ```rust
/// use swatch::prelude::*;
///
/// let theme = create_theme("teal", &Palette::base()).unwrap();
/// assert_eq!(theme.primary_ramp().caption(), "Theme primary");
/// ```
pub mod prelude {
    pub use crate::theme::config::ThemeConfig;
    pub use crate::theme::error::{ThemeError, ThemeResult};
    pub use crate::theme::manager::{SharedThemeManager, ThemeManager};
    pub use crate::theme::palette::Palette;
    pub use crate::theme::ramp::{create_color_ramp, select_prefixed, ColorRamp, RampKind, RampStep};
    pub use crate::theme::theme::{builtin_themes, create_theme, Theme};
    pub use crate::theme::transition::{ThemeSwitcher, ThemeTransition, TransitionConfig};
}
