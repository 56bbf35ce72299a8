//! # Theme Transitions
//!
//! When the theme changes, the previous theme stays around for a while so
//! that anything drawn with it can fade over to the new one. A
//! [ThemeTransition] holds both themes, reports progress over the
//! configured duration and settles (old theme replaced by the new one) once
//! twice that duration has passed.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::color::blend_hex;
use crate::error::ThemeResult;
use crate::palette::Palette;
use crate::theme::{create_theme, Theme};

/// Configuration for theme transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Whether transitions are enabled.
    pub enabled: bool,
    /// Transition duration in milliseconds.
    pub duration_ms: u64,
}

impl TransitionConfig {
    /// Create a new transition configuration.
    pub fn new(enabled: bool, duration_ms: u64) -> Self {
        Self {
            enabled,
            duration_ms,
        }
    }

    /// Get the transition duration. Zero when transitions are disabled.
    pub fn duration(&self) -> Duration {
        if self.enabled {
            Duration::from_millis(self.duration_ms)
        } else {
            Duration::ZERO
        }
    }

    /// Check if transitions are enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_ms: 350,
        }
    }
}

/// State of an active theme transition.
#[derive(Debug, Clone)]
pub struct ThemeTransition {
    old_theme: Theme,
    new_theme: Theme,
    start_time: Instant,
    duration: Duration,
    settled: bool,
}

impl ThemeTransition {
    /// Start a transition now.
    pub fn begin(old_theme: Theme, new_theme: Theme, duration: Duration) -> Self {
        Self::begin_at(old_theme, new_theme, duration, Instant::now())
    }

    /// Start a transition at a given instant.
    pub fn begin_at(old_theme: Theme, new_theme: Theme, duration: Duration, start_time: Instant) -> Self {
        Self {
            old_theme,
            new_theme,
            start_time,
            duration,
            settled: false,
        }
    }

    /// A transition that is already settled on `theme`.
    pub fn settled(theme: Theme) -> Self {
        Self {
            old_theme: theme.clone(),
            new_theme: theme,
            start_time: Instant::now(),
            duration: Duration::ZERO,
            settled: true,
        }
    }

    /// The theme being transitioned to.
    pub fn new_theme(&self) -> &Theme {
        &self.new_theme
    }

    /// The theme being transitioned from. Equal to the new theme once settled.
    pub fn old_theme(&self) -> &Theme {
        &self.old_theme
    }

    /// How long after the start the old theme is dropped.
    pub fn settle_after(&self) -> Duration {
        self.duration * 2
    }

    /// Progress of the visible fade (0.0 to 1.0) at `now`.
    pub fn progress_at(&self, now: Instant) -> f32 {
        if self.settled || self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start_time);
        if elapsed >= self.duration {
            1.0
        } else {
            elapsed.as_secs_f32() / self.duration.as_secs_f32()
        }
    }

    /// Progress of the visible fade (0.0 to 1.0).
    pub fn progress(&self) -> f32 {
        self.progress_at(Instant::now())
    }

    /// Whether the old theme may be dropped at `now`.
    pub fn is_due_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start_time) >= self.settle_after()
    }

    /// Whether the transition has settled.
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Drop the old theme if it is due at `now`. Returns whether the
    /// transition is settled afterwards.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        if !self.settled && self.is_due_at(now) {
            self.settle();
        }
        self.settled
    }

    /// [Self::tick_at] with the current time.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    /// Drop the old theme immediately.
    pub fn settle(&mut self) {
        self.old_theme = self.new_theme.clone();
        self.settled = true;
    }

    /// Blend a variable between the old and new theme at `now`.
    ///
    /// Values that are not hex colors, or exist only in the new theme, are
    /// returned from the new theme unchanged.
    pub fn interpolated_at(&self, variable: &str, now: Instant) -> Option<String> {
        let target = self.new_theme.get(variable)?;
        let progress = self.progress_at(now);
        if progress >= 1.0 {
            return Some(target.to_string());
        }

        match self.old_theme.get(variable) {
            Some(start) => Some(blend_hex(start, target, progress).unwrap_or_else(|| target.to_string())),
            None => Some(target.to_string()),
        }
    }

    /// [Self::interpolated_at] with the current time.
    pub fn interpolated(&self, variable: &str) -> Option<String> {
        self.interpolated_at(variable, Instant::now())
    }
}

/// Switches between hue themes of one palette, keeping the previous theme
/// alive for the length of a transition.
#[derive(Debug, Clone)]
pub struct ThemeSwitcher {
    palette: Palette,
    config: TransitionConfig,
    transition: ThemeTransition,
}

impl ThemeSwitcher {
    /// Start on the theme for `hue`.
    pub fn new(palette: Palette, hue: &str, config: TransitionConfig) -> ThemeResult<Self> {
        let theme = create_theme(hue, &palette)?;
        Ok(Self {
            palette,
            config,
            transition: ThemeTransition::settled(theme),
        })
    }

    /// Change to the theme for `hue` at `now`.
    ///
    /// The old theme is a copy of the theme shown when the change happened,
    /// so changing again mid-transition starts from the newest theme.
    pub fn change_hue_at(&mut self, hue: &str, now: Instant) -> ThemeResult<&Theme> {
        let theme = create_theme(hue, &self.palette)?;
        let previous = self.transition.new_theme().clone();
        log::debug!("Theme change '{}' -> '{}'", previous.name(), theme.name());

        self.transition = if self.config.is_enabled() {
            ThemeTransition::begin_at(previous, theme, self.config.duration(), now)
        } else {
            ThemeTransition::settled(theme)
        };
        Ok(self.transition.new_theme())
    }

    /// [Self::change_hue_at] with the current time.
    pub fn change_hue(&mut self, hue: &str) -> ThemeResult<&Theme> {
        self.change_hue_at(hue, Instant::now())
    }

    /// The current theme.
    pub fn theme(&self) -> &Theme {
        self.transition.new_theme()
    }

    /// The previous theme, until the transition settles.
    pub fn old_theme(&self) -> &Theme {
        self.transition.old_theme()
    }

    /// The active transition.
    pub fn transition(&self) -> &ThemeTransition {
        &self.transition
    }

    /// Advance the transition to `now`.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        self.transition.tick_at(now)
    }

    /// The palette themes are built from.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}
