//! Feature modules - outer conversion surfaces
//!
//! This module contains functionality layered on top of the core converter:
//! - Display-format adaptation for rendering hosts
//! - Custom operator table files (feature `data-loading`)

pub mod render;
#[cfg(feature = "data-loading")]
pub mod table_file;

// Re-export commonly used items
pub use render::{adapt_delimiters, use_latex_delimiters, DelimiterStyle};
#[cfg(feature = "data-loading")]
pub use table_file::{load_tables, parse_tables, TableFormat};
