//! Core conversion modules
//!
//! This module contains the conversion engine:
//! - `typst2mathjax`: inline Typst math to MathJax converter

pub mod typst2mathjax;

// Re-export main types and functions from typst2mathjax
pub use typst2mathjax::{
    convert_line, convert_text, convert_text_lossy, found_typst_op_match, replace_tokens,
    rewrite_unary_op, scan_delimiters, segment_line, translate_math, translate_math_with,
    Segment, T2MOptions,
};
