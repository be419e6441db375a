//! Typst to MathJax converter
//!
//! This module implements the Typst to MathJax converter for inline math.
//! Each line is scanned for `$` delimiters, every math segment is translated
//! through the operator tables, and the result is wrapped in `\( \)`.

mod context;
mod delimiters;
mod markup;
mod math;

pub use context::T2MOptions;
pub use delimiters::{scan_delimiters, ESCAPE_CHAR, MATH_DELIMITER};
pub use markup::{
    convert_line, convert_text, convert_text_lossy, segment_line, Segment, INLINE_CLOSE,
    INLINE_OPEN,
};
pub use math::{
    found_typst_op_match, replace_tokens, rewrite_unary_op, translate_math, translate_math_with,
};
