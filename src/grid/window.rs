//! Export window: the row/column sub-rectangle being converted.

use crate::common::{Error, Result};
use crate::sheet::{CellRef, SheetExtents};
use log::debug;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Requested window bounds, each independently omittable (1-based, inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowBounds {
    pub min_row: Option<u32>,
    pub max_row: Option<u32>,
    pub min_col: Option<u32>,
    pub max_col: Option<u32>,
}

/// A clamped, inclusive, 1-based window that lies within the sheet's extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Window {
    pub min_row: u32,
    pub max_row: u32,
    pub min_col: u32,
    pub max_col: u32,
}

impl Window {
    /// The whole sheet.
    pub fn full(extents: SheetExtents) -> Self {
        Self {
            min_row: 1,
            max_row: extents.max_row.max(1),
            min_col: 1,
            max_col: extents.max_col.max(1),
        }
    }

    /// Clamp requested bounds to the sheet extents.
    ///
    /// Omitted bounds default to the sheet edge; bounds past the edge are pulled
    /// back onto it. An empty sheet is treated as a single cell. Only inverted
    /// bounds (min greater than max after clamping) are rejected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sheetgrid::grid::{Window, WindowBounds};
    /// use sheetgrid::sheet::SheetExtents;
    ///
    /// let bounds = WindowBounds { min_row: Some(3), max_col: Some(99), ..Default::default() };
    /// let window = Window::clamp(&bounds, SheetExtents::new(10, 5)).unwrap();
    /// assert_eq!((window.min_row, window.max_row), (3, 10));
    /// assert_eq!((window.min_col, window.max_col), (1, 5));
    /// ```
    pub fn clamp(bounds: &WindowBounds, extents: SheetExtents) -> Result<Self> {
        let full = Self::full(extents);
        let clamp_row = |v: u32| v.clamp(1, full.max_row);
        let clamp_col = |v: u32| v.clamp(1, full.max_col);

        let window = Self {
            min_row: bounds.min_row.map_or(full.min_row, clamp_row),
            max_row: bounds.max_row.map_or(full.max_row, clamp_row),
            min_col: bounds.min_col.map_or(full.min_col, clamp_col),
            max_col: bounds.max_col.map_or(full.max_col, clamp_col),
        };

        if window.min_row > window.max_row || window.min_col > window.max_col {
            return Err(Error::InvalidWindow(format!(
                "rows {}..={}, columns {}..={}",
                window.min_row, window.max_row, window.min_col, window.max_col
            )));
        }

        if window != full {
            debug!(
                "export window rows {}..={} cols {}..={} (sheet {}x{})",
                window.min_row,
                window.max_row,
                window.min_col,
                window.max_col,
                full.max_row,
                full.max_col
            );
        }
        Ok(window)
    }

    #[inline]
    pub fn rows(&self) -> RangeInclusive<u32> {
        self.min_row..=self.max_row
    }

    #[inline]
    pub fn cols(&self) -> RangeInclusive<u32> {
        self.min_col..=self.max_col
    }

    #[inline]
    pub fn row_count(&self) -> u32 {
        self.max_row - self.min_row + 1
    }

    #[inline]
    pub fn col_count(&self) -> u32 {
        self.max_col - self.min_col + 1
    }

    #[inline]
    pub fn contains(&self, at: CellRef) -> bool {
        self.rows().contains(&at.row) && self.cols().contains(&at.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds_cover_sheet() {
        let window = Window::clamp(&WindowBounds::default(), SheetExtents::new(4, 7)).unwrap();
        assert_eq!(window, Window::full(SheetExtents::new(4, 7)));
        assert_eq!(window.row_count(), 4);
        assert_eq!(window.col_count(), 7);
    }

    #[test]
    fn test_out_of_range_bounds_are_clamped() {
        let bounds = WindowBounds {
            min_row: Some(0),
            max_row: Some(1000),
            min_col: Some(50),
            max_col: None,
        };
        let window = Window::clamp(&bounds, SheetExtents::new(10, 6)).unwrap();
        assert_eq!(window.min_row, 1);
        assert_eq!(window.max_row, 10);
        assert_eq!(window.min_col, 6);
        assert_eq!(window.max_col, 6);
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let bounds = WindowBounds {
            min_row: Some(5),
            max_row: Some(2),
            ..Default::default()
        };
        let err = Window::clamp(&bounds, SheetExtents::new(10, 10)).unwrap_err();
        assert!(matches!(err, Error::InvalidWindow(_)));
    }

    #[test]
    fn test_empty_sheet_is_one_cell() {
        let window = Window::clamp(&WindowBounds::default(), SheetExtents::new(0, 0)).unwrap();
        assert_eq!(window.row_count(), 1);
        assert_eq!(window.col_count(), 1);
        assert!(window.contains(CellRef::new(1, 1)));
    }
}
