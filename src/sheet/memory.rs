//! In-memory workbook and worksheet.
//!
//! Useful when descriptors were decoded elsewhere (another process, a
//! serialized cache) or when building sheets by hand in tests.

use super::traits::{SheetSource, WorkbookSource};
use super::types::{CellRef, MergeRange, RawCell, SheetExtents, SheetLayout, ThemeTable};
use std::collections::HashMap;

/// A worksheet held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySheet {
    name: String,
    cells: HashMap<CellRef, RawCell>,
    merges: Vec<MergeRange>,
    layout: SheetLayout,
    extents: Option<SheetExtents>,
}

impl MemorySheet {
    /// Create an empty sheet with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Insert a cell, replacing any cell already stored at its coordinate.
    pub fn insert_cell(&mut self, cell: RawCell) {
        self.cells.insert(cell.coord(), cell);
    }

    /// Get a mutable cell, creating an empty one if absent.
    pub fn cell_mut(&mut self, row: u32, col: u32) -> &mut RawCell {
        self.cells
            .entry(CellRef::new(row, col))
            .or_insert_with(|| RawCell::new(row, col))
    }

    /// Add a merge range.
    pub fn add_merge(&mut self, range: MergeRange) {
        self.merges.push(range);
    }

    /// Set an explicit column width in character units.
    pub fn set_column_width(&mut self, col: u32, width: f64) {
        self.layout.column_widths.insert(col, width);
    }

    /// Set an explicit row height in points.
    pub fn set_row_height(&mut self, row: u32, height: f64) {
        self.layout.row_heights.insert(row, height);
    }

    /// Replace the whole layout.
    pub fn with_layout(mut self, layout: SheetLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Declare the sheet's extents instead of deriving them from content.
    pub fn with_extents(mut self, extents: SheetExtents) -> Self {
        self.extents = Some(extents);
        self
    }

    /// Number of stored cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

impl SheetSource for MemorySheet {
    fn name(&self) -> &str {
        &self.name
    }

    /// Declared extents, or the bounding box of cells and merges.
    fn extents(&self) -> SheetExtents {
        if let Some(extents) = self.extents {
            return extents;
        }

        let cells = self.cells.keys().copied();
        let merges = self.merges.iter().map(|m| m.last);
        cells
            .chain(merges)
            .fold(SheetExtents::new(0, 0), |acc, at| {
                SheetExtents::new(acc.max_row.max(at.row), acc.max_col.max(at.col))
            })
    }

    fn cell(&self, at: CellRef) -> Option<&RawCell> {
        self.cells.get(&at)
    }

    fn merges(&self) -> &[MergeRange] {
        &self.merges
    }

    fn layout(&self) -> &SheetLayout {
        &self.layout
    }
}

/// A workbook held entirely in memory.
#[derive(Debug, Clone)]
pub struct MemoryWorkbook {
    sheets: Vec<MemorySheet>,
    themes: ThemeTable,
}

impl Default for MemoryWorkbook {
    fn default() -> Self {
        Self {
            sheets: Vec::new(),
            themes: ThemeTable::office(),
        }
    }
}

impl MemoryWorkbook {
    /// Create an empty workbook using the default Office theme.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sheet.
    pub fn with_sheet(mut self, sheet: MemorySheet) -> Self {
        self.sheets.push(sheet);
        self
    }

    /// Replace the theme table.
    pub fn with_themes(mut self, themes: ThemeTable) -> Self {
        self.themes = themes;
        self
    }

    /// Append a sheet in place.
    pub fn push_sheet(&mut self, sheet: MemorySheet) {
        self.sheets.push(sheet);
    }
}

impl WorkbookSource for MemoryWorkbook {
    type Sheet = MemorySheet;

    fn themes(&self) -> &ThemeTable {
        &self.themes
    }

    fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|s| s.name.clone()).collect()
    }

    fn sheet_by_name(&self, name: &str) -> Option<&MemorySheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    fn sheet_by_index(&self, index: usize) -> Option<&MemorySheet> {
        self.sheets.get(index)
    }
}
