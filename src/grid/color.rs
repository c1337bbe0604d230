//! Color resolution.
//!
//! Turns a [`ColorRef`] into a final display color. Resolution never fails:
//! references that cannot be represented come back as `None`, which callers
//! treat as "inherit" (the attribute is omitted).

use super::palette::indexed_color;
use crate::common::Color;
use crate::sheet::{ColorRef, ThemeTable};
use log::warn;

/// Resolve a color reference against the workbook theme.
///
/// - `Indexed`: palette lookup; the system sentinels 64/65 give `None`
/// - `Rgb`: parsed hex with the tint applied; unparsable hex gives `None`
/// - `Theme`: theme base color with the tint applied; an index past the
///   table gives transparent black
/// - `Auto`: opaque black
///
/// # Examples
///
/// ```rust
/// use sheetgrid::common::Color;
/// use sheetgrid::grid::resolve_color;
/// use sheetgrid::sheet::{ColorRef, ThemeTable};
///
/// let themes = ThemeTable::office();
/// let red = resolve_color(Some(&ColorRef::rgb("FFFF0000")), &themes);
/// assert_eq!(red, Some(Color::new(255, 0, 0)));
/// assert_eq!(resolve_color(Some(&ColorRef::Indexed(64)), &themes), None);
/// ```
pub fn resolve_color(color: Option<&ColorRef>, themes: &ThemeTable) -> Option<Color> {
    match color? {
        ColorRef::Indexed(index) => indexed_color(*index),
        ColorRef::Rgb { hex, tint } => match Color::from_hex(hex) {
            Some(base) => Some(apply_tint(base, *tint)),
            None => {
                warn!("ignoring unparsable RGB color {:?}", hex);
                None
            },
        },
        ColorRef::Theme { index, tint } => match themes.get(*index) {
            Some(base) => Some(apply_tint(base, *tint)),
            None => {
                warn!(
                    "theme color {} out of range (table has {}), using transparent",
                    index,
                    themes.len()
                );
                Some(Color::TRANSPARENT)
            },
        },
        ColorRef::Auto => Some(Color::BLACK),
    }
}

/// Resolve a color reference straight to a hex string.
///
/// Six digits (`RRGGBB`) by default, eight alpha-first digits (`AARRGGBB`)
/// when `with_alpha` is set.
pub fn resolve_color_hex(
    color: Option<&ColorRef>,
    themes: &ThemeTable,
    with_alpha: bool,
) -> Option<String> {
    resolve_color(color, themes).map(|c| c.hex(with_alpha))
}

/// Lighten (`tint > 0`) or darken (`tint < 0`) a color in HSL space.
///
/// Darkening scales lightness by `1 + tint`; lightening moves it toward white
/// by `L * (1 - tint) + tint`. A zero tint returns the input unchanged, and
/// tints outside `-1.0..=1.0` are clamped. Alpha is preserved.
pub fn apply_tint(color: Color, tint: f64) -> Color {
    if tint == 0.0 || tint.is_nan() {
        return color;
    }
    let tint = tint.clamp(-1.0, 1.0);

    let (h, s, l) = rgb_to_hsl(color.r, color.g, color.b);
    let l = if tint < 0.0 {
        l * (1.0 + tint)
    } else {
        l * (1.0 - tint) + tint
    };
    let (r, g, b) = hsl_to_rgb(h, s, l.clamp(0.0, 1.0));
    Color::with_alpha(color.a, r, g, b)
}

/// RGB bytes to `(hue, saturation, lightness)`, each in `0.0..=1.0`.
fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h / 6.0, s, l)
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    if s == 0.0 {
        let v = to_byte(l);
        return (v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    (
        to_byte(hue_to_channel(p, q, h + 1.0 / 3.0)),
        to_byte(hue_to_channel(p, q, h)),
        to_byte(hue_to_channel(p, q, h - 1.0 / 3.0)),
    )
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[inline]
fn to_byte(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}
