//! Data layer - Static mappings
//!
//! This module contains the static tables used for Typst → MathJax conversion:
//! - Simple (argument-less) operators
//! - Symbols
//! - Unary operators

pub mod operators;

// Re-export commonly used items
pub use operators::{
    OperatorTable, OperatorTables, DEFAULT_TABLES, SIMPLE_OPERATORS, SYMBOLS, UNARY_OPERATORS,
};
