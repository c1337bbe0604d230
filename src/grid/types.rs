//! Resolved grid types.
//!
//! Everything here is render-ready: colors are final, borders are concrete
//! lines, spans are clipped to the export window and sizes are in pixels.

use super::window::Window;
use crate::common::{Color, Side, SideMap};
use crate::sheet::{Alignment, CellRef};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Row and column span of a rendered cell. Both are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub rows: u32,
    pub cols: u32,
}

impl Span {
    /// A plain, unmerged cell.
    pub const SINGLE: Span = Span { rows: 1, cols: 1 };

    #[inline]
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }
}

/// Resolved font and fill attributes of a cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FontStyle {
    pub italic: bool,
    pub bold: bool,
    pub underline: bool,
    pub family: Option<String>,
    /// Size in points
    pub size: Option<f64>,
    /// Text color; `None` inherits
    pub color: Option<Color>,
    /// Fill color; `None` leaves the cell unfilled
    pub background: Option<Color>,
}

/// How a border line is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Solid,
    Dashed,
    Dotted,
    Double,
}

impl LineKind {
    /// CSS `border-style` keyword.
    #[inline]
    pub const fn css_name(self) -> &'static str {
        match self {
            LineKind::Solid => "solid",
            LineKind::Dashed => "dashed",
            LineKind::Dotted => "dotted",
            LineKind::Double => "double",
        }
    }
}

/// A concrete border line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BorderLine {
    pub width_px: u8,
    pub kind: LineKind,
    pub color: Color,
}

impl BorderLine {
    /// Grid line drawn where no border was authored: 1px solid light gray.
    pub const FALLBACK: BorderLine = BorderLine {
        width_px: 1,
        kind: LineKind::Solid,
        color: Color::new(0xD3, 0xD3, 0xD3),
    };
}

/// Border attributes of a cell: one shorthand line or independent sides.
///
/// A side missing from [`BorderAttr::Sides`] renders no line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorderAttr {
    Unified(BorderLine),
    Sides(SideMap<Option<BorderLine>>),
}

impl Default for BorderAttr {
    fn default() -> Self {
        BorderAttr::Unified(BorderLine::FALLBACK)
    }
}

impl BorderAttr {
    /// The line drawn on one side, if any.
    #[inline]
    pub fn side(&self, side: Side) -> Option<BorderLine> {
        match self {
            BorderAttr::Unified(line) => Some(*line),
            BorderAttr::Sides(lines) => lines[side],
        }
    }

    /// Remove the line on one side, expanding a shorthand into sides first.
    pub fn remove_side(&mut self, side: Side) {
        if let BorderAttr::Unified(line) = *self {
            *self = BorderAttr::Sides(SideMap::splat(Some(line)));
        }
        if let BorderAttr::Sides(lines) = self {
            lines[side] = None;
        }
    }

    #[inline]
    pub fn is_unified(&self) -> bool {
        matches!(self, BorderAttr::Unified(_))
    }
}

/// Where the current state of a border side comes from.
///
/// Pass 1 of conflict resolution moves fallback sides of filled cells to
/// [`UnderFill`](Self::UnderFill), pass 2 moves fallback sides facing a
/// claimed edge to [`Shared`](Self::Shared). Neither pass touches
/// [`Explicit`](Self::Explicit) sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderOrigin {
    /// An authored line style
    Explicit,
    /// The fallback grid line, still drawn
    Fallback,
    /// Fallback removed because the cell's fill covers it
    UnderFill,
    /// Fallback removed because the adjacent cell owns the edge
    Shared,
}

impl BorderOrigin {
    /// Origin of a freshly extracted side.
    #[inline]
    pub const fn from_default_flag(is_default: bool) -> Self {
        if is_default {
            BorderOrigin::Fallback
        } else {
            BorderOrigin::Explicit
        }
    }

    #[inline]
    pub const fn is_default(self) -> bool {
        matches!(self, BorderOrigin::Fallback)
    }

    /// Whether this side owns the shared edge and removes the facing
    /// fallback of the adjacent cell.
    ///
    /// A side that was itself removed in favor of a neighbor never claims.
    #[inline]
    pub const fn claims_edge(self) -> bool {
        matches!(self, BorderOrigin::Explicit | BorderOrigin::UnderFill)
    }
}

/// One visible cell of the output grid.
///
/// Only merge anchors and unmerged cells are materialized; the positions
/// covered by a merge's interior have no `ResolvedCell`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedCell {
    /// Sheet row (1-based)
    pub row: u32,
    /// Sheet column (1-based)
    pub col: u32,
    pub text: String,
    pub font: FontStyle,
    pub border: BorderAttr,
    /// Per-side origin of the border line
    pub border_origin: SideMap<BorderOrigin>,
    pub rowspan: u32,
    pub colspan: u32,
    pub width_px: u32,
    pub height_px: u32,
    pub alignment: Alignment,
    pub hyperlink: Option<String>,
}

impl ResolvedCell {
    #[inline]
    pub fn coord(&self) -> CellRef {
        CellRef::new(self.row, self.col)
    }

    #[inline]
    pub fn span(&self) -> Span {
        Span::new(self.rowspan, self.colspan)
    }

    /// Whether the side still carries the fallback grid line.
    #[inline]
    pub fn is_default_border(&self, side: Side) -> bool {
        self.border_origin[side].is_default()
    }

    /// Drop the border on one side and record why it was removed.
    pub fn remove_border_side(&mut self, side: Side, origin: BorderOrigin) {
        self.border.remove_side(side);
        self.border_origin[side] = origin;
    }
}

/// Render-ready grid for one export window, row-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    window: Window,
    rows: Vec<Vec<ResolvedCell>>,
}

impl Grid {
    /// Build a grid from one row vector per window row, cells in column order.
    #[inline]
    pub fn new(window: Window, rows: Vec<Vec<ResolvedCell>>) -> Self {
        Self { window, rows }
    }

    /// The clamped window this grid covers.
    #[inline]
    pub fn window(&self) -> &Window {
        &self.window
    }

    #[inline]
    pub fn rows(&self) -> &[Vec<ResolvedCell>] {
        &self.rows
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of materialized cells.
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Iterate all materialized cells row-major.
    pub fn cells(&self) -> impl Iterator<Item = &ResolvedCell> {
        self.rows.iter().flatten()
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut ResolvedCell> {
        self.rows.iter_mut().flatten()
    }

    pub(crate) fn cell_at_mut(&mut self, pos: (usize, usize)) -> &mut ResolvedCell {
        &mut self.rows[pos.0][pos.1]
    }

    pub(crate) fn cell_at(&self, pos: (usize, usize)) -> &ResolvedCell {
        &self.rows[pos.0][pos.1]
    }

    /// Look up the cell anchored at a sheet coordinate.
    ///
    /// Rows hold one entry per window row with cells in column order, so
    /// this indexes the row and binary-searches its columns.
    pub fn get(&self, row: u32, col: u32) -> Option<&ResolvedCell> {
        let i = row.checked_sub(self.window.min_row)? as usize;
        let cells = self.rows.get(i)?;
        let j = cells.binary_search_by_key(&col, |c| c.col).ok()?;
        Some(&cells[j]).filter(|c| c.row == row)
    }

    /// Map from anchor coordinate to `(row index, column index)` in `rows`.
    pub(crate) fn position_index(&self) -> HashMap<CellRef, (usize, usize)> {
        let mut index = HashMap::with_capacity(self.cell_count());
        for (i, row) in self.rows.iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                index.insert(cell.coord(), (i, j));
            }
        }
        index
    }

    /// Consume the grid and return its rows.
    pub fn into_rows(self) -> Vec<Vec<ResolvedCell>> {
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red_line() -> BorderLine {
        BorderLine {
            width_px: 2,
            kind: LineKind::Solid,
            color: Color::new(255, 0, 0),
        }
    }

    #[test]
    fn test_remove_side_expands_unified() {
        let mut border = BorderAttr::Unified(BorderLine::FALLBACK);
        border.remove_side(Side::Bottom);

        assert!(!border.is_unified());
        assert_eq!(border.side(Side::Bottom), None);
        for side in [Side::Top, Side::Right, Side::Left] {
            assert_eq!(border.side(side), Some(BorderLine::FALLBACK));
        }
    }

    #[test]
    fn test_remove_side_on_sides() {
        let mut border = BorderAttr::Sides(SideMap::new(
            Some(red_line()),
            None,
            Some(BorderLine::FALLBACK),
            Some(BorderLine::FALLBACK),
        ));
        border.remove_side(Side::Left);
        assert_eq!(border.side(Side::Top), Some(red_line()));
        assert_eq!(border.side(Side::Left), None);
        assert_eq!(border.side(Side::Right), None);
    }

    #[test]
    fn test_only_explicit_and_filled_sides_claim_edges() {
        assert!(BorderOrigin::Explicit.claims_edge());
        assert!(BorderOrigin::UnderFill.claims_edge());
        assert!(!BorderOrigin::Fallback.claims_edge());
        assert!(!BorderOrigin::Shared.claims_edge());
        assert!(BorderOrigin::from_default_flag(true).is_default());
        assert_eq!(BorderOrigin::from_default_flag(false), BorderOrigin::Explicit);
    }

    fn anchored(row: u32, col: u32, rowspan: u32, colspan: u32) -> ResolvedCell {
        ResolvedCell {
            row,
            col,
            text: format!("{row},{col}"),
            font: FontStyle::default(),
            border: BorderAttr::default(),
            border_origin: SideMap::splat(BorderOrigin::Fallback),
            rowspan,
            colspan,
            width_px: 60 * colspan,
            height_px: 20 * rowspan,
            alignment: Alignment::default(),
            hyperlink: None,
        }
    }

    #[test]
    fn test_get_uses_window_offset() {
        let window = Window {
            min_row: 3,
            max_row: 4,
            min_col: 2,
            max_col: 4,
        };
        let rows = vec![
            vec![anchored(3, 2, 2, 2), anchored(3, 4, 1, 1)],
            vec![anchored(4, 4, 1, 1)],
        ];
        let grid = Grid::new(window, rows);

        assert_eq!(grid.get(3, 2).unwrap().text, "3,2");
        assert_eq!(grid.get(3, 4).unwrap().text, "3,4");
        assert_eq!(grid.get(4, 4).unwrap().text, "4,4");
        // Merge interior and positions outside the window
        assert!(grid.get(4, 2).is_none());
        assert!(grid.get(3, 3).is_none());
        assert!(grid.get(2, 2).is_none());
        assert!(grid.get(5, 4).is_none());
        assert!(grid.get(0, 0).is_none());
    }

    #[test]
    fn test_fallback_is_light_gray() {
        assert_eq!(BorderLine::FALLBACK.color.to_hex(), "D3D3D3");
        assert_eq!(BorderLine::FALLBACK.width_px, 1);
    }
}
