//! Hex color parsing, formatting and blending on [peniko::Color].
//!
//! Palette values are carried around as plain strings. This module is only
//! needed where a value has to be understood as a color: validating palette
//! files and blending two themes during a transition.

use peniko::Color;

use crate::error::{ThemeError, ThemeResult};

/// Parse a hex color string with optional alpha channel.
///
/// Supports `#rrggbb` (opaque) and `#rrggbbaa`. A single leading `#` is
/// optional.
pub fn parse_hex_color(value: &str) -> ThemeResult<Color> {
    let hex = value.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ThemeError::invalid_color(value));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| ThemeError::invalid_color(value))
    };

    match hex.len() {
        6 => Ok(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        8 => Ok(Color::from_rgba8(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
        )),
        _ => Err(ThemeError::invalid_color(value)),
    }
}

/// Format a color as lowercase hex, dropping the alpha channel when opaque.
pub fn to_hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    if rgba.a == 255 {
        format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

/// Linear interpolation between two colors.
///
/// `t` should be between 0.0 (start) and 1.0 (end).
pub fn lerp_color(start: Color, end: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let start_components = start.components;
    let end_components = end.components;

    let r = lerp(start_components[0], end_components[0], t);
    let g = lerp(start_components[1], end_components[1], t);
    let b = lerp(start_components[2], end_components[2], t);
    let a = lerp(start_components[3], end_components[3], t);

    Color::from_rgba8(to_channel(r), to_channel(g), to_channel(b), to_channel(a))
}

/// Blend two hex color strings. Returns `None` if either side does not parse.
pub fn blend_hex(start: &str, end: &str, t: f32) -> Option<String> {
    let start = parse_hex_color(start).ok()?;
    let end = parse_hex_color(end).ok()?;
    Some(to_hex(lerp_color(start, end, t)))
}

fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

fn to_channel(value: f32) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
