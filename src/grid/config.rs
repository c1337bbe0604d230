use super::window::WindowBounds;
use serde::{Deserialize, Serialize};

/// Configuration for sheet conversion.
///
/// Selects which worksheet is converted and which part of it.
///
/// # Examples
///
/// ```rust
/// use sheetgrid::grid::GridOptions;
///
/// // Whole first sheet
/// let options = GridOptions::default();
///
/// // Rows 3 and below of "Budget", first four columns
/// let options = GridOptions::new()
///     .with_sheet("Budget")
///     .with_min_row(3)
///     .with_max_col(4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    /// Worksheet to convert; the first sheet when unset
    pub sheet: Option<String>,
    /// Requested window bounds, clamped to the sheet on conversion
    pub window: WindowBounds,
}

impl GridOptions {
    /// Create a new `GridOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a worksheet by name.
    ///
    /// Conversion fails with [`Error::SheetNotFound`](crate::Error::SheetNotFound)
    /// when the workbook has no sheet of that name.
    #[inline]
    pub fn with_sheet(mut self, name: impl Into<String>) -> Self {
        self.sheet = Some(name.into());
        self
    }

    /// Replace all window bounds at once.
    #[inline]
    pub fn with_window(mut self, window: WindowBounds) -> Self {
        self.window = window;
        self
    }

    /// Set the first exported row (1-based).
    #[inline]
    pub fn with_min_row(mut self, row: u32) -> Self {
        self.window.min_row = Some(row);
        self
    }

    /// Set the last exported row (1-based, inclusive).
    #[inline]
    pub fn with_max_row(mut self, row: u32) -> Self {
        self.window.max_row = Some(row);
        self
    }

    /// Set the first exported column (1-based).
    #[inline]
    pub fn with_min_col(mut self, col: u32) -> Self {
        self.window.min_col = Some(col);
        self
    }

    /// Set the last exported column (1-based, inclusive).
    #[inline]
    pub fn with_max_col(mut self, col: u32) -> Self {
        self.window.max_col = Some(col);
        self
    }
}
