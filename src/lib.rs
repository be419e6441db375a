//! # typst2mathjax
//!
//! Minimal converter from inline Typst math to MathJax, written in Rust.
//!
//! ## Features
//!
//! - **Inline math**: finds `$...$` segments (an escaped `\$` stays literal)
//!   and wraps the translation in `\( \)`
//! - **Table driven**: operators, symbols and one-argument functions are
//!   translated from ordered tables that can be extended at runtime
//! - **Nesting aware**: `bold(f(x))` becomes `\mathbf{f(x)}`
//! - **WASM Support**: Compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ### Math Segment Conversion
//!
//! ```rust
//! use typst2mathjax::translate_math;
//!
//! let mathjax = translate_math("x in RR arrow CC").unwrap();
//! assert_eq!(mathjax, r"x \in \mathbb{R} \to \mathbb{C}");
//! ```
//!
//! ### Text Conversion
//!
//! ```rust
//! use typst2mathjax::{typst_to_mathjax, use_latex_delimiters};
//!
//! let out = typst_to_mathjax("A vector space $bold(V) = U + W$").unwrap();
//! assert_eq!(out, r"A vector space \(\mathbf{V} = U + W\)");
//!
//! // Hosts that only understand dollar delimiters
//! assert_eq!(use_latex_delimiters(&out), r"A vector space $\mathbf{V} = U + W$");
//! ```
//!
//! ### Known Limitations
//!
//! Operators and symbols are replaced as substrings, so a token inside a
//! longer identifier is replaced too (`verydot` → `very\cdot`). A unary
//! operator is only recognised at the start of a segment or after a space.

/// Core conversion modules
pub mod core;

/// Data layer - static mappings
pub mod data;

/// Feature modules - outer conversion surfaces
pub mod features;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core conversion functions
pub use core::typst2mathjax;
pub use core::typst2mathjax::{
    convert_line, found_typst_op_match, replace_tokens, rewrite_unary_op, scan_delimiters,
    segment_line, translate_math, translate_math_with, Segment, T2MOptions,
};

// Re-export data modules
pub use data::operators;
pub use data::{OperatorTable, OperatorTables, DEFAULT_TABLES};

// Re-export feature modules
pub use features::render;
pub use features::{adapt_delimiters, use_latex_delimiters, DelimiterStyle};
#[cfg(feature = "data-loading")]
pub use features::{load_tables, table_file};

// Re-export utilities
pub use utils::error::{ConversionError, ConversionOutput, ConversionResult, LineFailure};

/// Convert Typst text with inline math to MathJax
///
/// # Arguments
/// * `input` - Text, possibly spanning several lines, with `$...$` math
///
/// # Returns
/// The text with every math segment translated and wrapped in `\( \)`
///
/// # Errors
/// The first failing line's error, tagged with its line number
pub fn typst_to_mathjax(input: &str) -> ConversionResult<String> {
    core::convert_text(input, &DEFAULT_TABLES, &T2MOptions::default())
}

/// Convert Typst text with inline math to MathJax using custom tables and options
pub fn typst_to_mathjax_with(
    input: &str,
    tables: &OperatorTables,
    options: &T2MOptions,
) -> ConversionResult<String> {
    core::convert_text(input, tables, options)
}

/// Convert Typst text, keeping any line that fails as raw text
///
/// Failed lines are reported in [`ConversionOutput::failures`].
pub fn typst_to_mathjax_lossy(
    input: &str,
    tables: &OperatorTables,
    options: &T2MOptions,
) -> ConversionOutput {
    core::convert_text_lossy(input, tables, options)
}
