//! Font and fill attribute extraction.

use super::color::resolve_color;
use super::types::FontStyle;
use crate::sheet::{RawCell, ThemeTable};

/// Derive the font and fill attributes of one cell.
///
/// Every underline variant collapses to one flag. The background is only
/// considered when the fill carries a pattern: the foreground color wins if
/// it resolves, then the background color, else the cell stays unfilled.
pub fn extract_font_style(cell: &RawCell, themes: &ThemeTable) -> FontStyle {
    let font = &cell.font;
    let fill = &cell.fill;

    let background = if fill.has_pattern() {
        resolve_color(fill.fg_color.as_ref(), themes)
            .or_else(|| resolve_color(fill.bg_color.as_ref(), themes))
    } else {
        None
    };

    FontStyle {
        italic: font.italic,
        bold: font.bold,
        underline: font.underline.is_some(),
        family: font.family.clone(),
        size: font.size,
        color: resolve_color(font.color.as_ref(), themes),
        background,
    }
}
