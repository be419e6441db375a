//! Error handling for typst2mathjax conversions
//!
//! This module provides a unified error type and result type for all
//! conversion operations.

use std::fmt;

use thiserror::Error;

/// Conversion error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Odd number of unescaped `$` on a line: one math segment is never closed
    #[error("Malformed math delimiters: found {count} unescaped '$' (expected an even number)")]
    MalformedMathDelimiters { count: usize },

    /// Parenthesis nesting broke stack discipline while rewriting a unary operator
    #[error("Unbalanced brackets while rewriting '{operator}(' in: {segment}")]
    UnbalancedBrackets { operator: String, segment: String },

    /// A unary rewrite was requested for an operator that is absent from the text
    #[error("Operator '{operator}' not found in: {segment}")]
    OperatorContractViolation { operator: String, segment: String },

    /// A failure tagged with the (1-based) line it occurred on
    #[error("Line {line}: {source}")]
    AtLine {
        line: usize,
        content: String,
        #[source]
        source: Box<ConversionError>,
    },

    /// A custom operator table file could not be read or parsed
    #[error("Invalid table file: {message}")]
    InvalidTableFile { message: String },
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

// Convenience constructors for errors
impl ConversionError {
    pub fn unbalanced(operator: impl Into<String>, segment: impl Into<String>) -> Self {
        ConversionError::UnbalancedBrackets {
            operator: operator.into(),
            segment: segment.into(),
        }
    }

    pub fn missing_operator(operator: impl Into<String>, segment: impl Into<String>) -> Self {
        ConversionError::OperatorContractViolation {
            operator: operator.into(),
            segment: segment.into(),
        }
    }

    pub fn invalid_table(message: impl Into<String>) -> Self {
        ConversionError::InvalidTableFile {
            message: message.into(),
        }
    }

    /// Tag an error with the line it came from
    pub fn at_line(self, line: usize, content: impl Into<String>) -> Self {
        ConversionError::AtLine {
            line,
            content: content.into(),
            source: Box::new(self),
        }
    }

    /// The 1-based line number, if this error was tagged by the assembler
    pub fn line(&self) -> Option<usize> {
        match self {
            ConversionError::AtLine { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// The innermost error, with any line tagging removed
    pub fn root_cause(&self) -> &ConversionError {
        match self {
            ConversionError::AtLine { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// A line that could not be converted and was passed through unchanged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFailure {
    /// 1-based line number
    pub line: usize,
    pub error: ConversionError,
}

impl fmt::Display for LineFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} left unconverted: {}", self.line, self.error.root_cause())
    }
}

/// Conversion output with the lines that fell back to raw text
#[derive(Debug, Clone)]
pub struct ConversionOutput {
    /// The converted content
    pub content: String,
    /// Lines that failed to convert and were kept verbatim
    pub failures: Vec<LineFailure>,
}

impl ConversionOutput {
    pub fn new(content: String) -> Self {
        Self {
            content,
            failures: Vec::new(),
        }
    }

    pub fn with_failures(content: String, failures: Vec<LineFailure>) -> Self {
        Self { content, failures }
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display() {
        let err = ConversionError::MalformedMathDelimiters { count: 3 };
        let msg = err.to_string();
        assert!(msg.contains("Malformed math delimiters"));
        assert!(msg.contains('3'));
    }

    #[test]
    fn test_at_line_tagging() {
        let err = ConversionError::unbalanced("bold", "bold(x").at_line(4, "$bold(x$");
        assert_eq!(err.line(), Some(4));
        assert!(err.to_string().starts_with("Line 4:"));
        assert!(matches!(
            err.root_cause(),
            ConversionError::UnbalancedBrackets { .. }
        ));
    }

    #[test]
    fn test_untagged_error_has_no_line() {
        let err = ConversionError::missing_operator("bold", "x + y");
        assert_eq!(err.line(), None);
        assert_eq!(err.root_cause(), &err);
    }

    #[test]
    fn test_conversion_output() {
        let output = ConversionOutput::new("hello".to_string());
        assert!(!output.has_failures());

        let output = ConversionOutput::with_failures(
            "$x".to_string(),
            vec![LineFailure {
                line: 1,
                error: ConversionError::MalformedMathDelimiters { count: 1 },
            }],
        );
        assert!(output.has_failures());
        assert!(output.failures[0].to_string().contains("line 1"));
    }
}
