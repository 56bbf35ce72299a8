use std::sync::{Arc, RwLock};

use crate::error::{ThemeError, ThemeResult};
use crate::theme::{builtin_themes, Theme};

/// A list of themes with one active entry, as offered by a theme picker.
#[derive(Debug, Clone)]
pub struct ThemeManager {
    themes: Vec<Theme>,
    index: usize,
}

impl ThemeManager {
    /// Create a manager over `themes` with the first one active.
    pub fn new(themes: Vec<Theme>) -> ThemeResult<Self> {
        if themes.is_empty() {
            return Err(ThemeError::NoThemes);
        }
        Ok(Self { themes, index: 0 })
    }

    /// Create a manager over the built-in hue themes.
    pub fn builtin() -> ThemeResult<Self> {
        Self::new(builtin_themes()?)
    }

    /// All themes in display order.
    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    /// Index of the active theme.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The active theme.
    pub fn active(&self) -> &Theme {
        // `new` rejects empty lists and `set_index` bounds-checks.
        &self.themes[self.index]
    }

    /// Whether the theme at `index` is the active one.
    pub fn is_active(&self, index: usize) -> bool {
        self.index == index
    }

    /// Make the theme at `index` active.
    pub fn set_index(&mut self, index: usize) -> ThemeResult<&Theme> {
        if index >= self.themes.len() {
            return Err(ThemeError::IndexOutOfRange {
                index,
                len: self.themes.len(),
            });
        }

        if index != self.index {
            log::debug!(
                "Switching theme '{}' -> '{}'",
                self.themes[self.index].name(),
                self.themes[index].name()
            );
        }
        self.index = index;
        Ok(self.active())
    }

    /// Make the theme called `name` active (case-insensitive).
    pub fn select_by_name(&mut self, name: &str) -> ThemeResult<&Theme> {
        let index = self
            .themes
            .iter()
            .position(|theme| theme.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ThemeError::not_found(name))?;
        self.set_index(index)
    }

    /// Append a theme to the end of the list.
    pub fn add_theme(&mut self, theme: Theme) {
        self.themes.push(theme);
    }

    /// Swatch shown on the option for the theme at `index` (`color_theme_60`).
    pub fn option_swatch(&self, index: usize) -> Option<&str> {
        self.themes.get(index).and_then(Theme::swatch)
    }

    /// Background of the option at `index` while active or hovered (`color_theme_10`).
    pub fn option_highlight(&self, index: usize) -> Option<&str> {
        self.themes.get(index).and_then(Theme::highlight)
    }
}

/// A thread-safe theme manager that can be shared across threads.
pub type SharedThemeManager = Arc<RwLock<ThemeManager>>;

/// Wrap a manager for sharing.
pub fn create_shared_theme_manager(manager: ThemeManager) -> SharedThemeManager {
    Arc::new(RwLock::new(manager))
}
