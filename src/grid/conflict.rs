//! Border conflict resolution.
//!
//! Two whole-grid passes that drop fallback border sides which would
//! otherwise double up with a fill or with a neighbor's border:
//!
//! 1. [`suppress_under_fill`]: a filled cell loses every fallback side.
//! 2. [`suppress_against_neighbors`]: every side that claims its edge
//!    removes the facing fallback side of the adjacent cell.
//!
//! Pass 1 must run first. A side it removes is marked
//! [`BorderOrigin::UnderFill`] and claims its edge in pass 2, so the
//! neighbor's facing side goes too. A side removed by pass 2 is marked
//! [`BorderOrigin::Shared`] and claims nothing, which keeps the pass
//! independent of visiting order and leaves every such edge to the side
//! that faces it.

use super::types::{BorderOrigin, Grid, ResolvedCell};
use crate::common::Side;
use crate::sheet::CellRef;
use log::debug;
use smallvec::SmallVec;

/// Run both passes in order. Running it again on the result is a no-op.
pub fn resolve_conflicts(mut grid: Grid) -> Grid {
    let under_fill = suppress_under_fill(&mut grid);
    let against_neighbors = suppress_against_neighbors(&mut grid);
    debug!(
        "border conflicts: {} sides removed under fills, {} against neighbors",
        under_fill, against_neighbors
    );
    grid
}

/// Remove fallback sides from every cell that has a background.
///
/// Returns the number of sides removed.
pub fn suppress_under_fill(grid: &mut Grid) -> usize {
    let mut removed = 0;
    for cell in grid.cells_mut().filter(|c| c.font.background.is_some()) {
        for side in Side::ALL {
            if cell.is_default_border(side) {
                cell.remove_border_side(side, BorderOrigin::UnderFill);
                removed += 1;
            }
        }
    }
    removed
}

/// Remove fallback sides facing a side that claims the shared edge.
///
/// Neighbors are looked up by sheet coordinate along the whole edge of a
/// spanning cell. Positions outside the grid or inside a merge have no anchor
/// and are skipped. Returns the number of sides removed.
pub fn suppress_against_neighbors(grid: &mut Grid) -> usize {
    let index = grid.position_index();
    let mut positions: Vec<(usize, usize)> = index.values().copied().collect();
    positions.sort_unstable();

    let mut removed = 0;
    for pos in positions {
        for side in Side::ALL {
            let cell = grid.cell_at(pos);
            if !cell.border_origin[side].claims_edge() {
                continue;
            }
            let facing = side.opposite();
            for at in edge_neighbors(cell, side) {
                let Some(&other) = index.get(&at) else {
                    continue;
                };
                let neighbor = grid.cell_at_mut(other);
                if neighbor.is_default_border(facing) {
                    neighbor.remove_border_side(facing, BorderOrigin::Shared);
                    removed += 1;
                }
            }
        }
    }
    removed
}

/// Sheet coordinates just outside one side of a cell, across its full span.
fn edge_neighbors(cell: &ResolvedCell, side: Side) -> SmallVec<[CellRef; 4]> {
    let (row, col) = (cell.row, cell.col);
    let rows = row..row.saturating_add(cell.rowspan);
    let cols = col..col.saturating_add(cell.colspan);

    match side {
        Side::Top => match row.checked_sub(1) {
            Some(r) => cols.map(|c| CellRef::new(r, c)).collect(),
            None => SmallVec::new(),
        },
        Side::Bottom => {
            let r = row.saturating_add(cell.rowspan);
            cols.map(|c| CellRef::new(r, c)).collect()
        },
        Side::Left => match col.checked_sub(1) {
            Some(c) => rows.map(|r| CellRef::new(r, c)).collect(),
            None => SmallVec::new(),
        },
        Side::Right => {
            let c = col.saturating_add(cell.colspan);
            rows.map(|r| CellRef::new(r, c)).collect()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{Color, SideMap};
    use crate::grid::assemble::assemble_grid;
    use crate::grid::types::{BorderAttr, BorderLine, FontStyle, LineKind};
    use crate::grid::window::Window;
    use crate::sheet::{
        Alignment, BorderDescriptor, BorderSideRaw, ColorRef, FillDescriptor, LineStyle,
        MemorySheet, MergeRange, RawCell, ThemeTable,
    };
    use proptest::prelude::*;

    const EXPLICIT: BorderLine = BorderLine {
        width_px: 2,
        kind: LineKind::Solid,
        color: Color::BLACK,
    };

    fn plain(row: u32, col: u32) -> ResolvedCell {
        ResolvedCell {
            row,
            col,
            text: String::new(),
            font: FontStyle::default(),
            border: BorderAttr::default(),
            border_origin: SideMap::splat(BorderOrigin::Fallback),
            rowspan: 1,
            colspan: 1,
            width_px: 60,
            height_px: 20,
            alignment: Alignment::default(),
            hyperlink: None,
        }
    }

    fn with_explicit(mut cell: ResolvedCell, side: Side) -> ResolvedCell {
        if let BorderAttr::Unified(line) = cell.border {
            cell.border = BorderAttr::Sides(SideMap::splat(Some(line)));
        }
        if let BorderAttr::Sides(lines) = &mut cell.border {
            lines[side] = Some(EXPLICIT);
        }
        cell.border_origin[side] = BorderOrigin::Explicit;
        cell
    }

    fn grid_of(rows: Vec<Vec<ResolvedCell>>) -> Grid {
        let max_row = rows.iter().flatten().map(|c| c.row + c.rowspan - 1).max().unwrap_or(1);
        let max_col = rows.iter().flatten().map(|c| c.col + c.colspan - 1).max().unwrap_or(1);
        let window = Window {
            min_row: 1,
            max_row,
            min_col: 1,
            max_col,
        };
        Grid::new(window, rows)
    }

    #[test]
    fn test_fill_and_neighbor_share_no_line() {
        let mut a = plain(1, 1);
        a.font.background = Some(Color::new(255, 255, 0));
        let grid = grid_of(vec![vec![a], vec![plain(2, 1)]]);

        let grid = resolve_conflicts(grid);
        let a = grid.get(1, 1).unwrap();
        let b = grid.get(2, 1).unwrap();
        assert_eq!(a.border.side(Side::Bottom), None);
        assert_eq!(b.border.side(Side::Top), None);
        assert_eq!(b.border_origin[Side::Top], BorderOrigin::Shared);
        // Filled cell drops every fallback side
        for side in Side::ALL {
            assert_eq!(a.border.side(side), None);
            assert_eq!(a.border_origin[side], BorderOrigin::UnderFill);
        }
    }

    #[test]
    fn test_explicit_side_removes_neighbor_fallback() {
        let a = with_explicit(plain(1, 1), Side::Right);
        let grid = grid_of(vec![vec![a, plain(1, 2)]]);

        let mut grid = grid;
        assert_eq!(suppress_under_fill(&mut grid), 0);
        assert_eq!(suppress_against_neighbors(&mut grid), 1);

        let a = grid.get(1, 1).unwrap();
        let b = grid.get(1, 2).unwrap();
        assert_eq!(a.border.side(Side::Right), Some(EXPLICIT));
        assert_eq!(b.border.side(Side::Left), None);
        assert_eq!(b.border.side(Side::Top), Some(BorderLine::FALLBACK));
        assert!(!b.border.is_unified());
    }

    #[test]
    fn test_explicit_facing_sides_both_survive() {
        let a = with_explicit(plain(1, 1), Side::Right);
        let b = with_explicit(plain(1, 2), Side::Left);
        let mut grid = grid_of(vec![vec![a, b]]);

        assert_eq!(suppress_against_neighbors(&mut grid), 0);
        assert_eq!(grid.get(1, 1).unwrap().border.side(Side::Right), Some(EXPLICIT));
        assert_eq!(grid.get(1, 2).unwrap().border.side(Side::Left), Some(EXPLICIT));
    }

    #[test]
    fn test_spanning_cell_reaches_every_neighbor_below() {
        let mut top = with_explicit(plain(1, 1), Side::Bottom);
        top.colspan = 2;
        let mut grid = grid_of(vec![vec![top], vec![plain(2, 1), plain(2, 2)]]);

        assert_eq!(suppress_against_neighbors(&mut grid), 2);
        assert_eq!(grid.get(2, 1).unwrap().border.side(Side::Top), None);
        assert_eq!(grid.get(2, 2).unwrap().border.side(Side::Top), None);
    }

    #[test]
    fn test_right_neighbor_sits_past_span() {
        let mut wide = with_explicit(plain(1, 1), Side::Right);
        wide.colspan = 2;
        let mut grid = grid_of(vec![vec![wide, plain(1, 3)]]);

        assert_eq!(suppress_against_neighbors(&mut grid), 1);
        assert_eq!(grid.get(1, 3).unwrap().border.side(Side::Left), None);
    }

    #[test]
    fn test_shared_side_does_not_suppress_along_span() {
        // Wide cell on top, explicit top on the left cell below only
        let mut wide = plain(1, 1);
        wide.colspan = 2;
        let left = with_explicit(plain(2, 1), Side::Top);
        let mut grid = grid_of(vec![vec![wide], vec![left, plain(2, 2)]]);

        assert_eq!(suppress_against_neighbors(&mut grid), 1);
        let wide = grid.get(1, 1).unwrap();
        assert_eq!(wide.border.side(Side::Bottom), None);
        assert_eq!(wide.border_origin[Side::Bottom], BorderOrigin::Shared);
        // The right half of the edge is still drawn by the cell below it
        let right = grid.get(2, 2).unwrap();
        assert_eq!(right.border.side(Side::Top), Some(BorderLine::FALLBACK));
        assert!(right.is_default_border(Side::Top));
        assert_eq!(suppress_against_neighbors(&mut grid), 0);
    }

    #[test]
    fn test_fill_side_suppresses_along_span() {
        let mut wide = plain(1, 1);
        wide.colspan = 2;
        wide.font.background = Some(Color::new(0, 128, 0));
        let mut grid = grid_of(vec![vec![wide], vec![plain(2, 1), plain(2, 2)]]);

        assert_eq!(suppress_under_fill(&mut grid), 4);
        assert_eq!(suppress_against_neighbors(&mut grid), 2);
        assert_eq!(grid.get(2, 1).unwrap().border.side(Side::Top), None);
        assert_eq!(grid.get(2, 2).unwrap().border.side(Side::Top), None);
    }

    #[test]
    fn test_window_edge_is_noop() {
        let a = with_explicit(plain(1, 1), Side::Top);
        let mut grid = grid_of(vec![vec![a]]);
        assert_eq!(suppress_against_neighbors(&mut grid), 0);
    }

    /// Styling drawn for one sheet position: fill flag and explicit sides.
    type CellStyle = (bool, [bool; 4]);

    fn styled_cell(row: u32, col: u32, (filled, explicit): CellStyle) -> RawCell {
        let mut border = BorderDescriptor::default();
        for (side, e) in Side::ALL.into_iter().zip(explicit) {
            if e {
                *border.side_mut(side) = BorderSideRaw::new(LineStyle::Medium, None);
            }
        }
        let mut cell = RawCell::new(row, col).with_border(border);
        if filled {
            cell = cell.with_fill(FillDescriptor::solid(ColorRef::Indexed(22)));
        }
        cell
    }

    /// Keep the candidate merges that do not overlap an earlier one.
    fn disjoint_merges(candidates: Vec<(u32, u32, u32, u32)>) -> Vec<MergeRange> {
        let mut kept: Vec<MergeRange> = Vec::new();
        for (row, col, height, width) in candidates {
            let range = MergeRange::new(
                CellRef::new(row, col),
                CellRef::new(row + height - 1, col + width - 1),
            );
            let overlaps = kept.iter().any(|m| {
                m.first.row <= range.last.row
                    && range.first.row <= m.last.row
                    && m.first.col <= range.last.col
                    && range.first.col <= m.last.col
            });
            if !overlaps {
                kept.push(range);
            }
        }
        kept
    }

    fn grid_strategy() -> impl Strategy<Value = Grid> {
        (1u32..6, 1u32..6).prop_flat_map(|(rows, cols)| {
            let styles = proptest::collection::vec(
                (any::<bool>(), any::<[bool; 4]>()),
                (rows * cols) as usize,
            );
            let merges = proptest::collection::vec(
                (1..=rows, 1..=cols, 1u32..4, 1u32..4),
                0..4,
            );
            (styles, merges).prop_map(move |(styles, merges)| {
                let mut sheet = MemorySheet::new("S");
                for r in 1..=rows {
                    for c in 1..=cols {
                        let style = styles[((r - 1) * cols + (c - 1)) as usize];
                        sheet.insert_cell(styled_cell(r, c, style));
                    }
                }
                for range in disjoint_merges(merges) {
                    sheet.add_merge(range);
                }
                let window = Window {
                    min_row: 1,
                    max_row: rows,
                    min_col: 1,
                    max_col: cols,
                };
                assemble_grid(&sheet, &ThemeTable::office(), &window)
            })
        })
    }

    proptest! {
        #[test]
        fn prop_resolution_is_idempotent(grid in grid_strategy()) {
            let once = resolve_conflicts(grid);
            let twice = resolve_conflicts(once.clone());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_filled_cells_keep_no_fallback(grid in grid_strategy()) {
            let grid = resolve_conflicts(grid);
            for cell in grid.cells().filter(|c| c.font.background.is_some()) {
                for side in Side::ALL {
                    prop_assert!(!cell.is_default_border(side));
                }
            }
        }

        #[test]
        fn prop_claiming_sides_keep_their_state(grid in grid_strategy()) {
            let before: Vec<_> = grid.cells().map(|c| c.border_origin).collect();
            let after = resolve_conflicts(grid);
            for (origin, cell) in before.iter().zip(after.cells()) {
                for side in Side::ALL {
                    if origin[side] == BorderOrigin::Explicit {
                        prop_assert_eq!(cell.border_origin[side], BorderOrigin::Explicit);
                    }
                    if cell.border_origin[side] == BorderOrigin::Shared {
                        prop_assert_eq!(origin[side], BorderOrigin::Fallback);
                    }
                }
            }
        }

        #[test]
        fn prop_merge_interiors_are_not_materialized(grid in grid_strategy()) {
            let index = grid.position_index();
            for cell in grid.cells() {
                for r in cell.row..cell.row + cell.rowspan {
                    for c in cell.col..cell.col + cell.colspan {
                        if (r, c) != (cell.row, cell.col) {
                            prop_assert!(!index.contains_key(&CellRef::new(r, c)));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_overlapping_candidate_merge_is_dropped() {
        let mut sheet = MemorySheet::new("S");
        for (r, c) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
            sheet.insert_cell(styled_cell(r, c, (false, [false; 4])));
        }
        for range in disjoint_merges(vec![(1, 1, 1, 2), (1, 2, 2, 1)]) {
            sheet.add_merge(range);
        }
        let window = Window {
            min_row: 1,
            max_row: 2,
            min_col: 1,
            max_col: 2,
        };
        let grid = assemble_grid(&sheet, &ThemeTable::office(), &window);
        assert_eq!(grid.get(1, 1).unwrap().colspan, 2);
        assert_eq!(grid.cell_count(), 3);
    }
}
