//! HTML rendering of resolved grids.
//!
//! The renderer is a thin serializer: every style decision has already been
//! made by the [`grid`](crate::grid) module. Each grid row becomes a `<tr>`,
//! each resolved cell a `<td>` with `rowspan`/`colspan` when it spans, an
//! inline `style` built from its font, fill, borders, alignment and width,
//! and its escaped text (wrapped in a link when the cell has a hyperlink).
//!
//! # Quick Start
//!
//! ```rust
//! use sheetgrid::html::{HtmlOptions, render_html};
//! use sheetgrid::sheet::{CellValue, MemorySheet, MemoryWorkbook, RawCell};
//! use sheetgrid::{GridOptions, convert_sheet};
//!
//! # fn main() -> Result<(), sheetgrid::Error> {
//! let mut sheet = MemorySheet::new("Sheet1");
//! sheet.insert_cell(RawCell::new(1, 1).with_value(CellValue::String("a & b".into())));
//! let workbook = MemoryWorkbook::new().with_sheet(sheet);
//!
//! let grid = convert_sheet(&workbook, &GridOptions::default())?;
//! let options = HtmlOptions::new().with_styles(false).with_dimensions(false);
//! let html = render_html(&grid, &options)?;
//! assert!(html.contains("<td>a &amp; b</td>"));
//! # Ok(())
//! # }
//! ```

// Module declarations
mod config;
pub mod css;
mod traits;
mod writer;

// Re-export public API
pub use config::HtmlOptions;
pub use traits::{ToHtml, render_html};
