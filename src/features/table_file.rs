//! Custom operator table files
//!
//! Extra table entries can be kept in a TOML or JSON file with optional
//! `simple`, `symbols` and `unary` sections:
//!
//! ```toml
//! [symbols]
//! NN = '\mathbb{N}'
//!
//! [unary]
//! cal = '\mathcal'
//! ```
//!
//! Loaded entries are appended after the built-in defaults, in file order.

use std::fs;
use std::path::Path;

use log::debug;

use crate::data::operators::OperatorTables;
use crate::utils::error::{ConversionError, ConversionResult};

/// Table file encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Toml,
    Json,
}

impl TableFormat {
    /// Guess the format from a file extension (TOML unless `.json`)
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => TableFormat::Json,
            _ => TableFormat::Toml,
        }
    }
}

/// Parse table entries (without the defaults)
pub fn parse_tables(source: &str, format: TableFormat) -> ConversionResult<OperatorTables> {
    match format {
        TableFormat::Toml => {
            toml::from_str(source).map_err(|e| ConversionError::invalid_table(e.to_string()))
        }
        TableFormat::Json => {
            serde_json::from_str(source).map_err(|e| ConversionError::invalid_table(e.to_string()))
        }
    }
}

/// Load a table file and append its entries to the default tables
pub fn load_tables(path: &Path) -> ConversionResult<OperatorTables> {
    let source = fs::read_to_string(path).map_err(|e| {
        ConversionError::invalid_table(format!("{}: {}", path.display(), e))
    })?;
    let extra = parse_tables(&source, TableFormat::from_path(path))?;
    debug!("loaded {} table entries from {}", extra.len(), path.display());

    let mut tables = OperatorTables::default();
    tables.extend(extra);
    Ok(tables)
}
