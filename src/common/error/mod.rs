//! Unified error types for Sheetgrid.
//!
//! Color, style, border, merge and sizing resolution never fail; errors only
//! arise when selecting a sheet, validating the export window or rendering.

// Submodule declarations
pub mod types;
pub mod conversions;

// Re-exports
pub use types::{Error, Result};
