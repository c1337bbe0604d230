//! Grid assembly: walks the export window and resolves each visible cell.

use super::border::extract_borders;
use super::merge::{clipped_span, find_merge, visible_anchor};
use super::sizing::cell_size;
use super::style::extract_font_style;
use super::types::{BorderOrigin, Grid, ResolvedCell, Span};
use super::window::Window;
use crate::sheet::{CellRef, RawCell, SheetSource, ThemeTable};
use log::trace;

/// Build the unresolved-conflict grid for one window of a sheet.
///
/// Positions are visited row-major. A merge contributes one cell at its
/// visible anchor and nothing for the rest of its area; when the window cuts
/// the merge, the visible anchor still takes its content and style from the
/// merge's own top-left cell. Positions the sheet stores nothing for resolve
/// as empty, unstyled cells.
///
/// Every window row gets an entry in the result, possibly empty when a merge
/// from an earlier row covers it completely.
pub fn assemble_grid<S>(sheet: &S, themes: &ThemeTable, window: &Window) -> Grid
where
    S: SheetSource + ?Sized,
{
    let merges = sheet.merges();
    let layout = sheet.layout();

    let mut rows = Vec::with_capacity(window.row_count() as usize);
    for row in window.rows() {
        let mut cells = Vec::new();
        for col in window.cols() {
            let at = CellRef::new(row, col);

            let (source, span) = match find_merge(at, merges) {
                Some(range) => {
                    if visible_anchor(range, window) != at {
                        continue;
                    }
                    if range.first != at {
                        trace!(
                            "merge {:?}..{:?} re-anchored at {:?} by the window",
                            range.first, range.last, at
                        );
                    }
                    (range.first, clipped_span(range, window))
                },
                None => (at, Span::SINGLE),
            };

            let empty;
            let raw = match sheet.cell(source) {
                Some(raw) => raw,
                None => {
                    empty = RawCell::new(source.row, source.col);
                    &empty
                },
            };
            cells.push(resolve_cell(raw, at, span, sheet, themes));
        }
        rows.push(cells);
    }

    Grid::new(*window, rows)
}

fn resolve_cell<S>(
    raw: &RawCell,
    at: CellRef,
    span: Span,
    sheet: &S,
    themes: &ThemeTable,
) -> ResolvedCell
where
    S: SheetSource + ?Sized,
{
    let (border, default_flags) = extract_borders(raw, themes);
    let (width_px, height_px) = cell_size(at, span, sheet.layout());

    ResolvedCell {
        row: at.row,
        col: at.col,
        text: raw.value.to_string(),
        font: extract_font_style(raw, themes),
        border,
        border_origin: default_flags.map(BorderOrigin::from_default_flag),
        rowspan: span.rows,
        colspan: span.cols,
        width_px,
        height_px,
        alignment: raw.alignment,
        hyperlink: raw.hyperlink.clone(),
    }
}
