//! Line segmentation and reassembly
//!
//! Splits each line into alternating text and math segments, translates the
//! math, and joins everything back with math wrapped in `\( \)`.

use log::{debug, warn};

use super::context::T2MOptions;
use super::delimiters::scan_delimiters;
use super::math::translate_math_with;
use crate::data::operators::OperatorTables;
use crate::utils::error::{ConversionOutput, ConversionResult, LineFailure};

/// Opening inline-math delimiter in MathJax output
pub const INLINE_OPEN: &str = r"\(";
/// Closing inline-math delimiter in MathJax output
pub const INLINE_CLOSE: &str = r"\)";

/// One piece of a line: literal text or the body of a `$...$` segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    /// Math body, without its delimiters
    Math(&'a str),
}

impl<'a> Segment<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Segment::Text(s) | Segment::Math(s) => *s,
        }
    }

    pub fn is_math(&self) -> bool {
        matches!(self, Segment::Math(_))
    }
}

/// Split one line into segments.
///
/// Segments strictly alternate starting with text, and the last segment is
/// always text (possibly empty), so a line with `n` math segments yields
/// `2n + 1` segments.
pub fn segment_line(line: &str) -> ConversionResult<Vec<Segment<'_>>> {
    let offsets = scan_delimiters(line)?;
    let mut segments = Vec::with_capacity(offsets.len() + 1);
    let mut start = 0;

    for pair in offsets.chunks_exact(2) {
        let (open, close) = (pair[0], pair[1]);
        segments.push(Segment::Text(&line[start..open]));
        segments.push(Segment::Math(&line[open + 1..close]));
        start = close + 1;
    }
    segments.push(Segment::Text(&line[start..]));

    Ok(segments)
}

/// Convert a single line (no newlines)
pub fn convert_line(
    line: &str,
    tables: &OperatorTables,
    options: &T2MOptions,
) -> ConversionResult<String> {
    let mut processed = String::with_capacity(line.len() + 8);

    for segment in segment_line(line)? {
        match segment {
            Segment::Text(text) => processed.push_str(text),
            Segment::Math(math) => {
                processed.push_str(INLINE_OPEN);
                processed.push_str(&translate_math_with(math, tables, options)?);
                processed.push_str(INLINE_CLOSE);
            }
        }
    }

    Ok(processed)
}

/// Convert multi-line text, failing on the first line that cannot be converted.
///
/// Errors are tagged with the 1-based line number and the raw line.
pub fn convert_text(
    text: &str,
    tables: &OperatorTables,
    options: &T2MOptions,
) -> ConversionResult<String> {
    let lines = text
        .split('\n')
        .enumerate()
        .map(|(idx, line)| {
            convert_line(line, tables, options).map_err(|err| err.at_line(idx + 1, line))
        })
        .collect::<ConversionResult<Vec<_>>>()?;

    debug!("converted {} line(s)", lines.len());
    Ok(lines.join("\n"))
}

/// Convert multi-line text, keeping any line that fails verbatim.
pub fn convert_text_lossy(
    text: &str,
    tables: &OperatorTables,
    options: &T2MOptions,
) -> ConversionOutput {
    let mut failures = Vec::new();
    let lines: Vec<String> = text
        .split('\n')
        .enumerate()
        .map(|(idx, line)| match convert_line(line, tables, options) {
            Ok(converted) => converted,
            Err(error) => {
                warn!("line {} left unconverted: {}", idx + 1, error);
                failures.push(LineFailure {
                    line: idx + 1,
                    error: error.at_line(idx + 1, line),
                });
                line.to_string()
            }
        })
        .collect();

    debug!(
        "converted {} line(s), {} left as-is",
        lines.len(),
        failures.len()
    );
    ConversionOutput::with_failures(lines.join("\n"), failures)
}
