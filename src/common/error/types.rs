//! Unified error types for Sheetgrid.
use thiserror::Error;

/// Main error type for Sheetgrid operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Requested sheet does not exist in the workbook
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Workbook has no sheets to convert
    #[error("Workbook contains no sheets")]
    EmptyWorkbook,

    /// Window bounds are inverted (min greater than max)
    #[error("Invalid window: {0}")]
    InvalidWindow(String),

    /// Output serialization failed
    #[error("Render error: {0}")]
    Render(String),
}

/// Result type for Sheetgrid operations.
pub type Result<T> = std::result::Result<T, Error>;
