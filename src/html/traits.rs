//! Core trait for HTML conversion.

use super::config::HtmlOptions;
use super::writer::HtmlWriter;
use crate::common::Result;
use crate::grid::Grid;

/// Core trait for types that can be rendered as HTML.
///
/// # Examples
///
/// ```rust
/// use sheetgrid::html::ToHtml;
/// use sheetgrid::sheet::{MemorySheet, MemoryWorkbook};
/// use sheetgrid::{GridOptions, convert_sheet};
///
/// # fn main() -> Result<(), sheetgrid::Error> {
/// let workbook = MemoryWorkbook::new().with_sheet(MemorySheet::new("Empty"));
/// let grid = convert_sheet(&workbook, &GridOptions::default())?;
/// let html = grid.to_html()?;
/// assert!(html.starts_with("<table"));
/// # Ok(())
/// # }
/// ```
pub trait ToHtml {
    /// Render with default options.
    fn to_html(&self) -> Result<String> {
        self.to_html_with_options(&HtmlOptions::default())
    }

    /// Render with custom options.
    fn to_html_with_options(&self, options: &HtmlOptions) -> Result<String>;
}

impl ToHtml for Grid {
    fn to_html_with_options(&self, options: &HtmlOptions) -> Result<String> {
        let mut writer = HtmlWriter::new(options);
        writer.write_grid(self)?;
        Ok(writer.finish())
    }
}

/// Render a grid as an HTML table.
///
/// Shorthand for [`ToHtml::to_html_with_options`].
#[inline]
pub fn render_html(grid: &Grid, options: &HtmlOptions) -> Result<String> {
    grid.to_html_with_options(options)
}
