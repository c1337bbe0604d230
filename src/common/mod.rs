//! Common types and utilities shared across the library.
//!
//! This module provides the unified error type, the color and side types used
//! by both the raw sheet descriptors and the resolved grid, and text escaping
//! for the renderer.

// Submodule declarations
pub mod error;
pub mod style;
pub mod markup;

// Re-exports for convenience
pub use error::{Error, Result};
pub use style::{Color, Side, SideMap};
