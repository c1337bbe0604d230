//! Pixel sizing of rendered cells.

use super::types::Span;
use crate::sheet::{CellRef, SheetLayout};

/// Pixels per character unit of column width.
pub const PIXELS_PER_CHAR: f64 = 7.0;

/// Pixels per point of row height (96 dpi / 72 pt).
pub const PIXELS_PER_POINT: f64 = 4.0 / 3.0;

/// Width of one column in pixels, rounded up.
#[inline]
pub fn column_width_px(layout: &SheetLayout, col: u32) -> u32 {
    to_px((layout.column_width(col) * PIXELS_PER_CHAR).ceil())
}

/// Height of one row in pixels, rounded to nearest.
#[inline]
pub fn row_height_px(layout: &SheetLayout, row: u32) -> u32 {
    to_px((layout.row_height(row) * PIXELS_PER_POINT).round())
}

/// Pixel `(width, height)` of a cell anchored at `at` covering `span`.
///
/// Each spanned column and row is converted separately and then summed, so a
/// merged cell is exactly as wide as the unmerged cells it replaces. Both
/// results are at least 1.
pub fn cell_size(at: CellRef, span: Span, layout: &SheetLayout) -> (u32, u32) {
    let width: u32 = (0..span.cols)
        .map(|i| column_width_px(layout, at.col.saturating_add(i)))
        .fold(0, u32::saturating_add);
    let height: u32 = (0..span.rows)
        .map(|i| row_height_px(layout, at.row.saturating_add(i)))
        .fold(0, u32::saturating_add);
    (width.max(1), height.max(1))
}

#[inline]
fn to_px(v: f64) -> u32 {
    if v.is_nan() || v <= 0.0 {
        0
    } else {
        v.min(u32::MAX as f64) as u32
    }
}
