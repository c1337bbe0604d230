//! Border attribute extraction.

use super::color::resolve_color;
use super::types::{BorderAttr, BorderLine, LineKind};
use crate::common::{Color, Side, SideMap};
use crate::sheet::{BorderSideRaw, LineStyle, RawCell, ThemeTable};

/// Width and line kind for a SpreadsheetML line style.
///
/// `LineStyle::None` has no metrics: nothing was authored for that side.
pub const fn line_metrics(style: LineStyle) -> Option<(u8, LineKind)> {
    match style {
        LineStyle::None => None,
        LineStyle::Thin => Some((1, LineKind::Solid)),
        LineStyle::Medium => Some((2, LineKind::Solid)),
        LineStyle::Thick => Some((3, LineKind::Solid)),
        LineStyle::Double => Some((3, LineKind::Double)),
        LineStyle::Hair => Some((1, LineKind::Dotted)),
        LineStyle::Dotted => Some((1, LineKind::Dotted)),
        LineStyle::Dashed => Some((1, LineKind::Dashed)),
        LineStyle::DashDot => Some((1, LineKind::Dashed)),
        LineStyle::DashDotDot => Some((1, LineKind::Dotted)),
        LineStyle::MediumDashed => Some((2, LineKind::Dashed)),
        LineStyle::MediumDashDot => Some((2, LineKind::Dashed)),
        LineStyle::MediumDashDotDot => Some((2, LineKind::Dotted)),
        LineStyle::SlantDashDot => Some((2, LineKind::Dashed)),
    }
}

/// Derive the border attributes of one cell and flag fallback sides.
///
/// Four identical raw sides produce a single [`BorderAttr::Unified`] line with
/// all flags equal; anything else produces per-side lines. A side with no
/// authored style gets [`BorderLine::FALLBACK`] and its flag set.
pub fn extract_borders(cell: &RawCell, themes: &ThemeTable) -> (BorderAttr, SideMap<bool>) {
    let raw = &cell.border;

    if raw.is_uniform() {
        let (line, is_default) = resolve_side(&raw.top, themes);
        return (BorderAttr::Unified(line), SideMap::splat(is_default));
    }

    let mut lines = SideMap::splat(None);
    let mut defaults = SideMap::splat(false);
    for side in Side::ALL {
        let (line, is_default) = resolve_side(raw.side(side), themes);
        lines[side] = Some(line);
        defaults[side] = is_default;
    }
    (BorderAttr::Sides(lines), defaults)
}

fn resolve_side(raw: &BorderSideRaw, themes: &ThemeTable) -> (BorderLine, bool) {
    match line_metrics(raw.style) {
        Some((width_px, kind)) => {
            let color = resolve_color(raw.color.as_ref(), themes).unwrap_or(Color::BLACK);
            (BorderLine { width_px, kind, color }, false)
        },
        None => (BorderLine::FALLBACK, true),
    }
}
