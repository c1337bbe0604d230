//! Merge span resolution against the export window.

use super::types::Span;
use super::window::Window;
use crate::sheet::{CellRef, MergeRange};

/// First merge range covering a coordinate.
#[inline]
pub fn find_merge(at: CellRef, merges: &[MergeRange]) -> Option<&MergeRange> {
    merges.iter().find(|range| range.contains(at))
}

/// Where a merge is anchored when rendered: its top-left corner clipped to
/// the window. Differs from `range.first` when the window cuts the merge.
#[inline]
pub fn visible_anchor(range: &MergeRange, window: &Window) -> CellRef {
    clip_to_window(range, window).0
}

/// Clip a merge range's corners to the window, as `(top-left, bottom-right)`.
pub fn clip_to_window(range: &MergeRange, window: &Window) -> (CellRef, CellRef) {
    let first = CellRef::new(
        window.min_row.max(range.first.row),
        window.min_col.max(range.first.col),
    );
    let last = CellRef::new(
        window.max_row.min(range.last.row),
        window.max_col.min(range.last.col),
    );
    (first, last)
}

/// Rendered span of a merge range inside the window. Never below 1x1.
pub fn clipped_span(range: &MergeRange, window: &Window) -> Span {
    let (first, last) = clip_to_window(range, window);
    Span::new(
        last.row.saturating_sub(first.row) + 1,
        last.col.saturating_sub(first.col) + 1,
    )
}

/// Row and column span of the cell at `at`, clipped to the window.
///
/// Cells outside every merge span a single cell.
pub fn resolve_span(at: CellRef, merges: &[MergeRange], window: &Window) -> Span {
    find_merge(at, merges).map_or(Span::SINGLE, |range| clipped_span(range, window))
}
