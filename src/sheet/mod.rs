//! Raw worksheet model and reader interface.
//!
//! The resolution engine never decodes files itself. A reader (anything that
//! implements [`WorkbookSource`]) supplies the per-cell descriptors defined in
//! [`types`]; [`MemoryWorkbook`] is a ready-made in-memory implementation.
//!
//! # Quick Start
//!
//! ```rust
//! use sheetgrid::sheet::{
//!     CellRef, CellValue, MemorySheet, MemoryWorkbook, MergeRange, RawCell, WorkbookSource,
//! };
//!
//! let mut sheet = MemorySheet::new("Report");
//! sheet.insert_cell(RawCell::new(1, 1).with_value(CellValue::String("Title".into())));
//! sheet.add_merge(MergeRange::new(CellRef::new(1, 1), CellRef::new(1, 3)));
//!
//! let workbook = MemoryWorkbook::new().with_sheet(sheet);
//! assert_eq!(workbook.sheet_names(), vec!["Report".to_string()]);
//! ```

// Submodule declarations
pub mod memory;
pub mod traits;
pub mod types;

// Re-exports
pub use memory::{MemorySheet, MemoryWorkbook};
pub use traits::{SheetSource, WorkbookSource};
pub use types::{
    Alignment, BorderDescriptor, BorderSideRaw, CellRef, CellValue, ColorRef, DEFAULT_COLUMN_WIDTH,
    DEFAULT_ROW_HEIGHT, FillDescriptor, FontDescriptor, HorizontalAlignment, LineStyle, MergeRange,
    RawCell, SheetExtents, SheetLayout, ThemeTable, Underline, VerticalAlignment,
};
