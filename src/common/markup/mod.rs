//! Markup text utilities.

mod escape;

pub use escape::{escape_attr, escape_text};
