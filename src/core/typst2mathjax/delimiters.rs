//! Math delimiter scanning
//!
//! Finds the `$` characters that open and close inline math on one line.

use crate::utils::error::{ConversionError, ConversionResult};

/// Character that opens and closes inline math
pub const MATH_DELIMITER: char = '$';

/// Character that escapes a following delimiter
pub const ESCAPE_CHAR: char = '\\';

/// Byte offsets of every unescaped `$` in `line`, in order.
///
/// A `$` directly after a backslash is literal. The first character of a line
/// has nothing before it and is never escaped. The result always has even
/// length; an odd count means a math segment is never closed.
pub fn scan_delimiters(line: &str) -> ConversionResult<Vec<usize>> {
    let mut offsets = Vec::new();
    let mut prev: Option<char> = None;

    for (idx, ch) in line.char_indices() {
        if ch == MATH_DELIMITER && prev != Some(ESCAPE_CHAR) {
            offsets.push(idx);
        }
        prev = Some(ch);
    }

    if offsets.len() % 2 != 0 {
        return Err(ConversionError::MalformedMathDelimiters {
            count: offsets.len(),
        });
    }
    Ok(offsets)
}
