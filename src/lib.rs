//! Sheetgrid - turn a worksheet's cell presentation model into a render-ready grid
//!
//! Spreadsheet readers hand over per-cell style descriptors: fonts, fills, four
//! border sides, alignment, hyperlinks, plus the sheet's merge ranges, column
//! widths and row heights. This library resolves all of that into a rectangular
//! grid of cells whose style attributes can be serialized directly by a renderer.
//!
//! # Features
//!
//! - **Color resolution**: indexed palette, RGB + tint and theme + tint colors
//! - **Border resolution**: unified or per-side borders, with authored borders
//!   told apart from fallback grid lines
//! - **Conflict passes**: fills and explicit borders suppress neighboring
//!   fallback borders so a shared edge is drawn once
//! - **Windowed export**: merges cut by the export window keep their anchor style
//!   and are clipped to the window
//! - **HTML output**: a small table renderer for the resolved grid
//!
//! # Example
//!
//! ```rust
//! use sheetgrid::sheet::{CellValue, MemorySheet, MemoryWorkbook, RawCell};
//! use sheetgrid::{GridOptions, HtmlOptions, convert_sheet, render_html};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut sheet = MemorySheet::new("Sheet1");
//! sheet.insert_cell(RawCell::new(1, 1).with_value(CellValue::String("Total".into())));
//! sheet.insert_cell(RawCell::new(1, 2).with_value(CellValue::Int(42)));
//!
//! let workbook = MemoryWorkbook::new().with_sheet(sheet);
//! let grid = convert_sheet(&workbook, &GridOptions::new().with_sheet("Sheet1"))?;
//! assert_eq!(grid.row_count(), 1);
//!
//! let html = render_html(&grid, &HtmlOptions::default())?;
//! assert!(html.contains("Total"));
//! # Ok(())
//! # }
//! ```

/// Shared error, color and escaping utilities.
pub mod common;

/// The resolution engine: colors, styles, borders, merges, sizing and the
/// grid-wide border conflict passes.
pub mod grid;

/// HTML serialization of a resolved grid.
pub mod html;

/// Raw worksheet descriptors and the reader traits that supply them.
pub mod sheet;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use grid::{
    Grid, GridOptions, ResolvedCell, Window, WindowBounds, convert_sheet, resolve_conflicts,
};
pub use html::{HtmlOptions, render_html};
