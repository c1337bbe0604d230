//! Style resolution engine.
//!
//! Turns a worksheet's raw presentation records into a [`Grid`] of
//! [`ResolvedCell`]s. Each stage is a free function over plain data:
//!
//! - [`resolve_color`]: color references to final colors
//! - [`extract_font_style`] and [`extract_borders`]: per-cell attributes
//! - [`resolve_span`] and [`cell_size`]: merge spans and pixel sizes
//! - [`assemble_grid`]: the row-major walk over the export window
//! - [`resolve_conflicts`]: grid-wide suppression of doubled border lines
//!
//! [`convert_sheet`] runs the whole pipeline for one sheet of a workbook.

// Submodule declarations
pub mod assemble;
pub mod border;
pub mod color;
pub mod config;
pub mod conflict;
pub mod convert;
pub mod merge;
pub mod palette;
pub mod sizing;
pub mod style;
pub mod types;
pub mod window;

// Re-exports
pub use assemble::assemble_grid;
pub use border::{extract_borders, line_metrics};
pub use color::{apply_tint, resolve_color, resolve_color_hex};
pub use config::GridOptions;
pub use conflict::{resolve_conflicts, suppress_against_neighbors, suppress_under_fill};
pub use convert::convert_sheet;
pub use merge::{clipped_span, find_merge, resolve_span, visible_anchor};
pub use palette::{INDEXED_PALETTE, indexed_color};
pub use sizing::{cell_size, column_width_px, row_height_px};
pub use style::extract_font_style;
pub use types::{
    BorderAttr, BorderLine, BorderOrigin, FontStyle, Grid, LineKind, ResolvedCell, Span,
};
pub use window::{Window, WindowBounds};
