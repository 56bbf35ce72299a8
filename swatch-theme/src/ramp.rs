//! # Color Ramps
//!
//! A ramp is a numerically indexed series of related colors (`blue_10`
//! through `blue_100`). Themes do not refer to palette hues directly; they
//! expose ramps under stable variable names (`color_theme_10`, ...). This
//! module renames palette keys into those variables and reads them back out.
//!
//! ## Usage Examples
//!
//! ```rust
//! use swatch_theme::palette::Palette;
//! use swatch_theme::ramp::create_color_ramp;
//!
//! let palette: Palette = [
//!     ("blue_10", "#e6eefc"),
//!     ("blue_20", "#c2dbfc"),
//!     ("gray_10", "#fafafb"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let ramp = create_color_ramp("blue", "color_theme", &palette);
//! assert_eq!(ramp.get("color_theme_10"), Some("#e6eefc"));
//! assert_eq!(ramp.get("color_theme_20"), Some("#c2dbfc"));
//! assert_eq!(ramp.len(), 2);
//! ```

use serde::Serialize;

use crate::palette::Palette;

/// Build a palette of renamed keys from a color palette.
///
/// Every key of `colors` that starts with the literal prefix `in_key` is kept,
/// with that leading prefix replaced by `out_key`. The rest of the key and
/// the value are copied unchanged. Keys without the prefix are dropped.
///
/// `in_key` is never interpreted as a pattern. An empty `in_key` matches every
/// key. Output keys are collected with last-write-wins semantics, so the
/// later value wins if two entries ever map to the same output key.
pub fn create_color_ramp(in_key: &str, out_key: &str, colors: &Palette) -> Palette {
    colors
        .iter()
        .filter_map(|(key, value)| {
            key.strip_prefix(in_key)
                .map(|suffix| (format!("{out_key}{suffix}"), value))
        })
        .collect()
}

/// Keep the entries of `colors` whose keys start with `prefix`, keys unchanged.
pub fn select_prefixed(prefix: &str, colors: &Palette) -> Palette {
    colors
        .iter()
        .filter(|(key, _)| key.starts_with(prefix))
        .collect()
}

/// Which of a theme's two ramps a [ColorRamp] shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RampKind {
    /// The theme's hue ramp.
    Primary,
    /// The shared neutral ramp.
    Gray,
}

impl RampKind {
    /// Caption shown above the ramp.
    pub fn caption(&self) -> &'static str {
        match self {
            RampKind::Primary => "Theme primary",
            RampKind::Gray => "Theme gray",
        }
    }

    /// Theme variable prefix of this ramp.
    pub fn variable_prefix(&self) -> &'static str {
        match self {
            RampKind::Primary => "color_theme",
            RampKind::Gray => "color_gray",
        }
    }
}

/// One labelled color in a [ColorRamp].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RampStep {
    /// Display label, `theme_{index}`.
    pub label: String,
    /// The variable or palette key the color came from.
    pub key: String,
    /// The color value.
    pub color: String,
}

/// An ordered, labelled view of a ramp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorRamp {
    kind: RampKind,
    steps: Vec<RampStep>,
}

impl ColorRamp {
    /// Label every entry of `ramp` by its position.
    pub fn from_palette(kind: RampKind, ramp: &Palette) -> Self {
        let steps = ramp
            .iter()
            .enumerate()
            .map(|(index, (key, color))| RampStep {
                label: format!("theme_{index}"),
                key: key.to_string(),
                color: color.to_string(),
            })
            .collect();

        Self { kind, steps }
    }

    /// The ramp kind.
    pub fn kind(&self) -> RampKind {
        self.kind
    }

    /// Caption for this ramp.
    pub fn caption(&self) -> &'static str {
        self.kind.caption()
    }

    /// Get a step by position.
    pub fn get(&self, index: usize) -> Option<&RampStep> {
        self.steps.get(index)
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the ramp has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterate over steps in order.
    pub fn iter(&self) -> std::slice::Iter<'_, RampStep> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a ColorRamp {
    type Item = &'a RampStep;
    type IntoIter = std::slice::Iter<'a, RampStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blue_and_gray() -> Palette {
        [
            ("blue_10", "#e6eefc"),
            ("blue_20", "#c2dbfc"),
            ("gray_10", "#fff"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_renames_matching_keys() {
        let ramp = create_color_ramp("blue", "color_theme", &blue_and_gray());

        let expected: Palette = [("color_theme_10", "#e6eefc"), ("color_theme_20", "#c2dbfc")]
            .into_iter()
            .collect();
        assert_eq!(ramp, expected);
        assert!(!ramp.contains_key("gray_10"));
    }

    #[test]
    fn test_empty_in_key_matches_everything() {
        let palette: Palette = [("a", "#fff"), ("b", "#000")].into_iter().collect();
        let ramp = create_color_ramp("", "theme", &palette);

        assert_eq!(ramp.iter().collect::<Vec<_>>(), [("themea", "#fff"), ("themeb", "#000")]);
    }

    #[test]
    fn test_empty_out_key_strips_prefix() {
        let ramp = create_color_ramp("blue_", "", &blue_and_gray());
        assert_eq!(ramp.keys().collect::<Vec<_>>(), ["10", "20"]);
    }

    #[test]
    fn test_empty_palette() {
        assert!(create_color_ramp("blue", "color_theme", &Palette::new()).is_empty());
    }

    #[test]
    fn test_prefix_is_anchored() {
        let palette: Palette = [("navy_blue_10", "#000080"), ("blue_10", "#e6eefc")]
            .into_iter()
            .collect();
        let ramp = create_color_ramp("blue", "x", &palette);
        assert_eq!(ramp.keys().collect::<Vec<_>>(), ["x_10"]);
    }

    #[test]
    fn test_pattern_characters_are_literal() {
        let palette: Palette = [
            ("blue_10", "#e6eefc"),
            ("a.b_10", "#111111"),
            ("axb_10", "#222222"),
            ("[x]_10", "#333333"),
        ]
        .into_iter()
        .collect();

        assert!(create_color_ramp("b.ue", "t", &palette).is_empty());
        assert!(create_color_ramp(".*", "t", &palette).is_empty());
        assert!(create_color_ramp("^blue", "t", &palette).is_empty());

        let dotted = create_color_ramp("a.b", "t", &palette);
        assert_eq!(dotted.iter().collect::<Vec<_>>(), [("t_10", "#111111")]);

        let bracketed = create_color_ramp("[x]", "t", &palette);
        assert_eq!(bracketed.iter().collect::<Vec<_>>(), [("t_10", "#333333")]);
    }

    #[test]
    fn test_only_the_leading_occurrence_is_replaced() {
        let palette: Palette = [("blue_blue", "#e6eefc")].into_iter().collect();
        let ramp = create_color_ramp("blue", "teal", &palette);
        assert_eq!(ramp.keys().collect::<Vec<_>>(), ["teal_blue"]);
    }

    #[test]
    fn test_distinct_keys_keep_distinct_outputs() {
        let palette: Palette = [("k_1", "#111111"), ("kk_1", "#222222")].into_iter().collect();
        let ramp = create_color_ramp("k", "", &palette);
        assert_eq!(ramp.iter().collect::<Vec<_>>(), [("_1", "#111111"), ("k_1", "#222222")]);
    }

    #[test]
    fn test_merged_ramps_last_write_wins() {
        let palette: Palette = [("x_10", "#111111"), ("y_10", "#222222")].into_iter().collect();
        let merged: Palette = create_color_ramp("x", "z", &palette)
            .iter()
            .chain(create_color_ramp("y", "z", &palette).iter())
            .collect();
        assert_eq!(merged.len(), 1);
        assert_eq!(merged.get("z_10"), Some("#222222"));
    }

    #[test]
    fn test_input_is_not_mutated() {
        let palette = blue_and_gray();
        let before = palette.clone();
        let _ = create_color_ramp("blue", "color_theme", &palette);
        assert_eq!(palette, before);
    }

    #[test]
    fn test_select_prefixed_keeps_keys() {
        let theme: Palette = [
            ("color_theme_10", "#e6eefc"),
            ("color_gray_10", "#fafafb"),
            ("color_theme_20", "#c2dbfc"),
            ("color_white", "#ffffff"),
        ]
        .into_iter()
        .collect();

        let primaries = select_prefixed("color_theme", &theme);
        assert_eq!(
            primaries.keys().collect::<Vec<_>>(),
            ["color_theme_10", "color_theme_20"]
        );
        assert_eq!(select_prefixed("color_gray", &theme).len(), 1);
    }

    #[test]
    fn test_color_ramp_labels() {
        let ramp = ColorRamp::from_palette(
            RampKind::Primary,
            &create_color_ramp("blue", "color_theme", &blue_and_gray()),
        );

        assert_eq!(ramp.caption(), "Theme primary");
        assert_eq!(ramp.len(), 2);
        let labels: Vec<_> = ramp.iter().map(|step| step.label.as_str()).collect();
        assert_eq!(labels, ["theme_0", "theme_1"]);
        assert_eq!(ramp.get(1).map(|s| s.color.as_str()), Some("#c2dbfc"));
        assert_eq!(ramp.get(1).map(|s| s.key.as_str()), Some("color_theme_20"));
        assert!(ramp.get(2).is_none());
    }
}
