//! Common style types.
//!
//! This module provides the color and side types shared by the raw sheet
//! descriptors and the resolved grid.

// Submodule declarations
pub mod color;
pub mod side;

// Re-exports
pub use color::Color;
pub use side::{Side, SideMap};
