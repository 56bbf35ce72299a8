/// Hues available in [BASE_COLORS], in display order.
///
/// `gray` is deliberately absent: every theme uses the gray ramp as its
/// neutral ramp, so it is never offered as a theme hue.
pub const HUES: [&str; 8] = [
    "blue", "dusk", "magenta", "purple", "red", "sky", "slate", "teal",
];

/// The hue used when nothing else is configured.
pub const DEFAULT_HUE: &str = "blue";

/// Ramp indices shared by every hue.
pub const RAMP_STEPS: [u8; 10] = [10, 20, 30, 40, 50, 60, 70, 80, 90, 100];

/// Base palette entries.
pub const BASE_COLORS: &[(&str, &str)] = &[
    ("white", "#ffffff"),
    ("black", "#000000"),
    ("blue_10", "#e6eefc"),
    ("blue_20", "#c2dbfc"),
    ("blue_30", "#9dc2fa"),
    ("blue_40", "#72a5f2"),
    ("blue_50", "#4a89e8"),
    ("blue_60", "#2e6fd9"),
    ("blue_70", "#1f5dc2"),
    ("blue_80", "#164ea8"),
    ("blue_90", "#114091"),
    ("blue_100", "#0f397d"),
    ("dusk_10", "#f0eff5"),
    ("dusk_20", "#dedce8"),
    ("dusk_30", "#c6c2d9"),
    ("dusk_40", "#a9a3c4"),
    ("dusk_50", "#8d85ad"),
    ("dusk_60", "#736a96"),
    ("dusk_70", "#5f5682"),
    ("dusk_80", "#4d456b"),
    ("dusk_90", "#3e3757"),
    ("dusk_100", "#322c47"),
    ("magenta_10", "#fbedf4"),
    ("magenta_20", "#f7d4e6"),
    ("magenta_30", "#f0b1d1"),
    ("magenta_40", "#e587b6"),
    ("magenta_50", "#d4609a"),
    ("magenta_60", "#bf4582"),
    ("magenta_70", "#a6336d"),
    ("magenta_80", "#8a285a"),
    ("magenta_90", "#702049"),
    ("magenta_100", "#5c1a3c"),
    ("purple_10", "#f3effc"),
    ("purple_20", "#e3d9f9"),
    ("purple_30", "#cdbcf4"),
    ("purple_40", "#b199ec"),
    ("purple_50", "#9577e0"),
    ("purple_60", "#7d5bd1"),
    ("purple_70", "#6847bd"),
    ("purple_80", "#5639a3"),
    ("purple_90", "#462f87"),
    ("purple_100", "#3a2870"),
    ("red_10", "#fde8e8"),
    ("red_20", "#fbcaca"),
    ("red_30", "#f8a5a5"),
    ("red_40", "#f17b7b"),
    ("red_50", "#e55454"),
    ("red_60", "#d63a3a"),
    ("red_70", "#bd2a2a"),
    ("red_80", "#a02323"),
    ("red_90", "#851d1d"),
    ("red_100", "#6e1919"),
    ("sky_10", "#e5f4fb"),
    ("sky_20", "#c0e5f6"),
    ("sky_30", "#93d1ef"),
    ("sky_40", "#62b8e3"),
    ("sky_50", "#389fd4"),
    ("sky_60", "#1f86bf"),
    ("sky_70", "#146fa6"),
    ("sky_80", "#0f5b8a"),
    ("sky_90", "#0c4a71"),
    ("sky_100", "#0a3d5d"),
    ("slate_10", "#eef1f4"),
    ("slate_20", "#d7dde4"),
    ("slate_30", "#b9c3cf"),
    ("slate_40", "#96a4b5"),
    ("slate_50", "#76879c"),
    ("slate_60", "#5c6e84"),
    ("slate_70", "#4a5b70"),
    ("slate_80", "#3b495b"),
    ("slate_90", "#2f3b4a"),
    ("slate_100", "#27313d"),
    ("teal_10", "#e1f5f3"),
    ("teal_20", "#b7e6e1"),
    ("teal_30", "#84d3ca"),
    ("teal_40", "#4fbcb0"),
    ("teal_50", "#27a295"),
    ("teal_60", "#15897d"),
    ("teal_70", "#0f7368"),
    ("teal_80", "#0c5e56"),
    ("teal_90", "#0a4c46"),
    ("teal_100", "#093f3a"),
    ("gray_10", "#fafafb"),
    ("gray_20", "#ebeced"),
    ("gray_30", "#d9dbdd"),
    ("gray_40", "#c0c3c7"),
    ("gray_50", "#a0a5ab"),
    ("gray_60", "#80868d"),
    ("gray_70", "#636970"),
    ("gray_80", "#4b5056"),
    ("gray_90", "#383c40"),
    ("gray_100", "#2a2d30"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_hue_has_a_full_ramp() {
        for hue in HUES.iter().chain(std::iter::once(&"gray")) {
            for step in RAMP_STEPS {
                let key = format!("{hue}_{step}");
                assert!(
                    BASE_COLORS.iter().any(|(k, _)| *k == key),
                    "missing {key}"
                );
            }
        }
    }
}
