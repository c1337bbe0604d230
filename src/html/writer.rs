//! Low-level writer for HTML table generation.
//!
//! This module provides the `HtmlWriter` struct which serializes a resolved
//! grid into a `<table>`. All resolution has already happened; the writer only
//! turns attributes into markup.

use super::config::HtmlOptions;
use super::css::{cell_style, write_px};
use crate::common::Result;
use crate::common::markup::{escape_attr, escape_text};
use crate::grid::{Grid, ResolvedCell};
use std::fmt::Write as FmtWrite;

pub(crate) struct HtmlWriter<'a> {
    /// The output buffer
    buffer: String,
    /// Current options
    options: &'a HtmlOptions,
    /// One level of indentation
    indent: String,
}

impl<'a> HtmlWriter<'a> {
    /// Create a new writer with the given options.
    pub fn new(options: &'a HtmlOptions) -> Self {
        Self {
            buffer: String::with_capacity(4096),
            options,
            indent: " ".repeat(options.indent),
        }
    }

    /// Write a whole grid as one table.
    pub fn write_grid(&mut self, grid: &Grid) -> Result<()> {
        // Rough guess per cell: tags, style and a short text
        self.buffer.reserve(grid.cell_count() * 160);

        match &self.options.table_class {
            Some(class) => {
                writeln!(
                    self.buffer,
                    "<table class=\"{}\" style=\"border-collapse:collapse;\">",
                    escape_attr(class)
                )?;
            },
            None => self.buffer.push_str("<table style=\"border-collapse:collapse;\">\n"),
        }

        for row in grid.rows() {
            self.write_row(row)?;
        }

        self.buffer.push_str("</table>\n");
        Ok(())
    }

    fn write_row(&mut self, row: &[ResolvedCell]) -> Result<()> {
        self.buffer.push_str(&self.indent);
        match row_height(row).filter(|_| self.options.include_dimensions) {
            Some(height) => {
                self.buffer.push_str("<tr style=\"height:");
                write_px(&mut self.buffer, height);
                self.buffer.push_str(";\">\n");
            },
            None => self.buffer.push_str("<tr>\n"),
        }

        for cell in row {
            self.write_cell(cell)?;
        }

        writeln!(self.buffer, "{}</tr>", self.indent)?;
        Ok(())
    }

    fn write_cell(&mut self, cell: &ResolvedCell) -> Result<()> {
        write!(self.buffer, "{0}{0}<td", self.indent)?;

        if cell.rowspan > 1 {
            self.write_int_attr("rowspan", cell.rowspan);
        }
        if cell.colspan > 1 {
            self.write_int_attr("colspan", cell.colspan);
        }

        let style = cell_style(
            cell,
            self.options.include_styles,
            self.options.include_dimensions,
        );
        if !style.is_empty() {
            write!(self.buffer, " style=\"{}\"", escape_attr(&style))?;
        }
        self.buffer.push('>');

        let text = escape_text(&cell.text);
        match &cell.hyperlink {
            Some(target) => {
                write!(self.buffer, "<a href=\"{}\">{}</a>", escape_attr(target), text)?
            },
            None => self.buffer.push_str(&text),
        }

        self.buffer.push_str("</td>\n");
        Ok(())
    }

    fn write_int_attr(&mut self, name: &str, value: u32) {
        let mut b = itoa::Buffer::new();
        self.buffer.push(' ');
        self.buffer.push_str(name);
        self.buffer.push_str("=\"");
        self.buffer.push_str(b.format(value));
        self.buffer.push('"');
    }

    /// Get the final HTML output.
    pub fn finish(self) -> String {
        self.buffer
    }
}

/// Height of a row, taken from its first cell.
#[inline]
fn row_height(row: &[ResolvedCell]) -> Option<u32> {
    row.first().map(|c| c.height_px)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::SideMap;
    use crate::grid::{BorderAttr, BorderOrigin, FontStyle};
    use crate::sheet::Alignment;

    fn cell(col: u32, rowspan: u32, height_px: u32) -> ResolvedCell {
        ResolvedCell {
            row: 1,
            col,
            text: String::new(),
            font: FontStyle::default(),
            border: BorderAttr::default(),
            border_origin: SideMap::splat(BorderOrigin::Fallback),
            rowspan,
            colspan: 1,
            width_px: 60,
            height_px,
            alignment: Alignment::default(),
            hyperlink: None,
        }
    }

    #[test]
    fn test_row_height_comes_from_first_cell() {
        assert_eq!(row_height(&[cell(1, 3, 60), cell(2, 1, 20)]), Some(60));
        assert_eq!(row_height(&[cell(1, 1, 20), cell(2, 3, 60)]), Some(20));
        assert_eq!(row_height(&[cell(1, 2, 40)]), Some(40));
        assert_eq!(row_height(&[]), None);
    }
}
