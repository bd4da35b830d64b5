// File: src/color_utils.rs
use std::hash::{Hash, Hasher};

/// Parses `#rgb` or `#rrggbb` into an RGB triple.
/// Event colors that parse are applied verbatim to their markers; anything
/// else falls back to `generate_color`.
pub fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            // #f00 means #ff0000: repeat each nibble.
            Some((r * 17, g * 17, b * 17))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// Generates a deterministic color based on the input string, for events
/// configured without one. Hue spans the full wheel; saturation and
/// lightness are kept in a readable band (S: 40-90, L: 65-90).
pub fn generate_color(name: &str) -> (u8, u8, u8) {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    name.hash(&mut hasher);
    let hash = hasher.finish();

    let h = (hash % 360) as f32;
    let s = 0.40 + (((hash >> 16) % 51) as f32 / 100.0);
    let l = 0.65 + (((hash >> 32) % 26) as f32 / 100.0);

    let (r, g, b) = hsl_to_rgb(h, s, l);
    ((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

/// The color an event's markers render with: the configured hex color when
/// it parses, a generated one otherwise.
pub fn event_color(name: &str, color: Option<&str>) -> (u8, u8, u8) {
    color
        .and_then(parse_hex)
        .unwrap_or_else(|| generate_color(name))
}

/// Helper: HSL to RGB conversion
fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if (0.0..60.0).contains(&h) {
        (c, x, 0.0)
    } else if (60.0..120.0).contains(&h) {
        (x, c, 0.0)
    } else if (120.0..180.0).contains(&h) {
        (0.0, c, x)
    } else if (180.0..240.0).contains(&h) {
        (0.0, x, c)
    } else if (240.0..300.0).contains(&h) {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (r + m, g + m, b + m)
}

/// Determines if text on top of this color should be black or white.
pub fn is_dark(r: u8, g: u8, b: u8) -> bool {
    let brightness =
        0.299 * (r as f32 / 255.0) + 0.587 * (g as f32 / 255.0) + 0.114 * (b as f32 / 255.0);
    brightness < 0.5
}
