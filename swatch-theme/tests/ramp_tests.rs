use swatch_theme::manager::ThemeManager;
use swatch_theme::palette::Palette;
use swatch_theme::ramp::{create_color_ramp, select_prefixed, ColorRamp, RampKind};
use swatch_theme::theme::create_theme;

fn palettes() -> Vec<Palette> {
    vec![
        Palette::new(),
        Palette::base(),
        [
            ("blue_10", "#e6eefc"),
            ("blue_20", "#c2dbfc"),
            ("gray_10", "#fff"),
        ]
        .into_iter()
        .collect(),
        [
            ("a", "#fff"),
            ("b", "#000"),
            ("a.b_1", "#111111"),
            ("ab_1", "#222222"),
            ("", "#333333"),
        ]
        .into_iter()
        .collect(),
    ]
}

const PREFIXES: [&str; 8] = ["", "a", "a.b", "blue", "blue_", "gray_1", "x", "."];
const OUT_KEYS: [&str; 3] = ["", "color_theme", "t_"];

#[test]
fn test_blue_scenario() {
    let palette: Palette = [
        ("blue_10", "#e6eefc"),
        ("blue_20", "#c2dbfc"),
        ("gray_10", "#fff"),
    ]
    .into_iter()
    .collect();

    let result = create_color_ramp("blue", "color_theme", &palette);

    let expected: Palette = [("color_theme_10", "#e6eefc"), ("color_theme_20", "#c2dbfc")]
        .into_iter()
        .collect();
    assert_eq!(result, expected);
}

#[test]
fn test_empty_prefix_scenario() {
    let palette: Palette = [("a", "#fff"), ("b", "#000")].into_iter().collect();
    let result = create_color_ramp("", "theme", &palette);

    let expected: Palette = [("themea", "#fff"), ("themeb", "#000")].into_iter().collect();
    assert_eq!(result, expected);
}

#[test]
fn test_selection_size_matches_prefixed_keys() {
    for palette in palettes() {
        for in_key in PREFIXES {
            for out_key in OUT_KEYS {
                let result = create_color_ramp(in_key, out_key, &palette);
                let matching = palette.keys().filter(|k| k.starts_with(in_key)).count();
                assert_eq!(result.len(), matching, "in_key={in_key:?} out_key={out_key:?}");
            }
        }
    }
}

#[test]
fn test_keys_and_values_are_carried_over() {
    for palette in palettes() {
        for in_key in PREFIXES {
            for out_key in OUT_KEYS {
                let result = create_color_ramp(in_key, out_key, &palette);

                for (key, value) in palette.iter() {
                    if let Some(suffix) = key.strip_prefix(in_key) {
                        let out = format!("{out_key}{suffix}");
                        assert_eq!(result.get(&out), Some(value));
                    }
                }
                assert!(result.keys().all(|k| k.starts_with(out_key)));
            }
        }
    }
}

#[test]
fn test_excluded_keys_do_not_appear() {
    let palette: Palette = [
        ("blue_10", "#e6eefc"),
        ("gray_10", "#fafafb"),
        ("teal_10", "#e1f5f3"),
    ]
    .into_iter()
    .collect();

    let result = create_color_ramp("blue", "color_theme", &palette);
    assert_eq!(result.len(), 1);
    assert!(result.values().all(|v| v == "#e6eefc"));
    assert!(!result.keys().any(|k| k.contains("gray") || k.contains("teal")));
}

#[test]
fn test_input_is_unchanged() {
    for palette in palettes() {
        let before = palette.clone();
        for in_key in PREFIXES {
            let _ = create_color_ramp(in_key, "color_theme", &palette);
        }
        assert_eq!(palette, before);
    }
}

#[test]
fn test_theme_ramps_match_palette_ramps() {
    let palette = Palette::base();
    let theme = create_theme("sky", &palette).unwrap();

    let primaries = select_prefixed("color_theme", theme.variables());
    assert_eq!(primaries, create_color_ramp("sky", "color_theme", &palette));

    let ramp = ColorRamp::from_palette(
        RampKind::Gray,
        &select_prefixed("color_gray", theme.variables()),
    );
    assert_eq!(ramp, theme.gray_ramp());
    let colors: Vec<_> = ramp.iter().map(|step| step.color.as_str()).collect();
    let gray_palette = select_prefixed("gray_", &palette);
    let grays: Vec<_> = gray_palette.values().collect();
    assert_eq!(colors, grays);
}

#[test]
fn test_playground_flow() {
    let mut manager = ThemeManager::builtin().unwrap();
    let names: Vec<_> = manager.themes().iter().map(|t| t.name().to_string()).collect();
    assert!(names.contains(&"Magenta".to_string()));

    let index = names.iter().position(|n| n == "Magenta").unwrap();
    manager.set_index(index).unwrap();
    assert!(manager.is_active(index));
    assert_eq!(manager.option_swatch(index), Palette::base().get("magenta_60"));
}
