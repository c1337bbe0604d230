//! Sheet-to-grid conversion entry point.

use super::assemble::assemble_grid;
use super::config::GridOptions;
use super::conflict::resolve_conflicts;
use super::types::Grid;
use super::window::Window;
use crate::common::{Error, Result};
use crate::sheet::{SheetSource, WorkbookSource};
use log::debug;

/// Convert one worksheet of a workbook into a render-ready grid.
///
/// Selects the sheet named in `options` (the first sheet when none is named),
/// clamps the requested window to the sheet, assembles the grid and runs both
/// border conflict passes.
///
/// # Errors
///
/// - [`Error::SheetNotFound`] if the named sheet does not exist
/// - [`Error::EmptyWorkbook`] if no sheet is named and the workbook has none
/// - [`Error::InvalidWindow`] if the requested bounds are inverted
///
/// # Examples
///
/// ```rust
/// use sheetgrid::grid::{GridOptions, convert_sheet};
/// use sheetgrid::sheet::{CellValue, MemorySheet, MemoryWorkbook, RawCell};
///
/// let mut sheet = MemorySheet::new("Data");
/// for row in 1..=5 {
///     sheet.insert_cell(RawCell::new(row, 1).with_value(CellValue::Int(row as i64)));
/// }
/// let workbook = MemoryWorkbook::new().with_sheet(sheet);
///
/// let grid = convert_sheet(&workbook, &GridOptions::new().with_min_row(4)).unwrap();
/// assert_eq!(grid.row_count(), 2);
/// assert_eq!(grid.get(4, 1).unwrap().text, "4");
/// ```
pub fn convert_sheet<W>(source: &W, options: &GridOptions) -> Result<Grid>
where
    W: WorkbookSource + ?Sized,
{
    let sheet = match options.sheet.as_deref() {
        Some(name) => source
            .sheet_by_name(name)
            .ok_or_else(|| Error::SheetNotFound(name.to_string()))?,
        None => source.sheet_by_index(0).ok_or(Error::EmptyWorkbook)?,
    };

    let window = Window::clamp(&options.window, sheet.extents())?;
    debug!(
        "converting sheet {:?}: {} rows x {} cols, {} merges",
        sheet.name(),
        window.row_count(),
        window.col_count(),
        sheet.merges().len()
    );

    let grid = assemble_grid(sheet, source.themes(), &window);
    Ok(resolve_conflicts(grid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::{CellValue, MemorySheet, MemoryWorkbook, RawCell};

    fn workbook() -> MemoryWorkbook {
        let mut first = MemorySheet::new("First");
        first.insert_cell(RawCell::new(1, 1).with_value(CellValue::String("a".into())));
        let mut second = MemorySheet::new("Second");
        second.insert_cell(RawCell::new(2, 2).with_value(CellValue::String("b".into())));
        MemoryWorkbook::new().with_sheet(first).with_sheet(second)
    }

    #[test]
    fn test_defaults_to_first_sheet() {
        let grid = convert_sheet(&workbook(), &GridOptions::default()).unwrap();
        assert_eq!(grid.get(1, 1).unwrap().text, "a");
    }

    #[test]
    fn test_select_by_name() {
        let grid = convert_sheet(&workbook(), &GridOptions::new().with_sheet("Second")).unwrap();
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.get(2, 2).unwrap().text, "b");
    }

    #[test]
    fn test_unknown_sheet() {
        let err = convert_sheet(&workbook(), &GridOptions::new().with_sheet("Nope")).unwrap_err();
        assert!(matches!(err, Error::SheetNotFound(ref name) if name == "Nope"));
    }

    #[test]
    fn test_empty_workbook() {
        let err = convert_sheet(&MemoryWorkbook::new(), &GridOptions::default()).unwrap_err();
        assert!(matches!(err, Error::EmptyWorkbook));
    }

    #[test]
    fn test_inverted_window() {
        let options = GridOptions::new().with_min_col(2).with_max_col(1);
        let err = convert_sheet(&workbook(), &options.with_sheet("Second")).unwrap_err();
        assert!(matches!(err, Error::InvalidWindow(_)));
    }
}
