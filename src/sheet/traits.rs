//! Traits for the spreadsheet reader that feeds the resolution engine.
//!
//! A reader decodes the workbook container and exposes, per sheet, the raw cell
//! descriptors, every merge range (including ones outside any export window),
//! the column/row layout and the sheet's real extents. Workbook-wide it exposes
//! the theme table.

use super::types::{CellRef, MergeRange, RawCell, SheetExtents, SheetLayout, ThemeTable};

/// Represents one worksheet's decoded presentation data.
pub trait SheetSource {
    /// Get the worksheet name.
    fn name(&self) -> &str;

    /// Get the real extent of the used area.
    fn extents(&self) -> SheetExtents;

    /// Get the raw descriptor of a cell (1-based), if the sheet stores one.
    fn cell(&self, at: CellRef) -> Option<&RawCell>;

    /// Get all merge ranges of the sheet, unclipped.
    fn merges(&self) -> &[MergeRange];

    /// Get column width and row height metadata.
    fn layout(&self) -> &SheetLayout;
}

/// Trait representing a decoded workbook.
pub trait WorkbookSource {
    /// Concrete worksheet type.
    type Sheet: SheetSource;

    /// Get the workbook theme colors.
    fn themes(&self) -> &ThemeTable;

    /// Get all worksheet names in workbook order.
    fn sheet_names(&self) -> Vec<String>;

    /// Get a worksheet by name.
    fn sheet_by_name(&self, name: &str) -> Option<&Self::Sheet>;

    /// Get a worksheet by index.
    fn sheet_by_index(&self, index: usize) -> Option<&Self::Sheet>;
}
