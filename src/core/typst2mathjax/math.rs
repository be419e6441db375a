//! Math mode conversion for Typst to MathJax
//!
//! Translates the body of one `$...$` segment in ordered passes:
//! 1. simple operators (`dot` → `\cdot`)
//! 2. symbols (`RR` → `\mathbb{R}`)
//! 3. unary operators (`bold(x)` → `\mathbf{x}`) via bracket matching
//! 4. quoted text (`"Var"` → `\mathrm{Var}`), when enabled
//!
//! Passes 1 and 2 are plain substring replacement. A token embedded in a
//! longer identifier is replaced too (`verydot` → `very\cdot`). Control words
//! and quoted runs already present in the segment are left alone, so text
//! that is already MathJax passes through unchanged. Commands produced by an
//! earlier entry are not shielded: `dotin` becomes `\cdot\in`.

use std::ops::Range;

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use super::context::T2MOptions;
use crate::data::operators::{OperatorTable, OperatorTables, DEFAULT_TABLES};
use crate::utils::error::{ConversionError, ConversionResult};

lazy_static! {
    /// A double-quoted run inside math
    static ref QUOTED_TEXT: Regex = Regex::new(r#""([^"]*)""#).unwrap();

    /// Input the table passes never rewrite: control words and quoted runs
    static ref VERBATIM: Regex = Regex::new(r#"\\[A-Za-z]+|"[^"]*""#).unwrap();
}

/// Translate a math segment using the default tables and options
pub fn translate_math(math: &str) -> ConversionResult<String> {
    translate_math_with(math, &DEFAULT_TABLES, &T2MOptions::default())
}

/// Translate a math segment using the given tables
pub fn translate_math_with(
    math: &str,
    tables: &OperatorTables,
    options: &T2MOptions,
) -> ConversionResult<String> {
    let mut processed = replace_outside_verbatim(math, &[&tables.simple, &tables.symbols]);

    for (typst_op, mathjax_op) in &tables.unary {
        if found_typst_op_match(&processed, typst_op) {
            processed = rewrite_unary_op(&processed, typst_op, mathjax_op)?;
        }
    }

    if options.quoted_text {
        processed = QUOTED_TEXT
            .replace_all(&processed, r"\mathrm{$1}")
            .into_owned();
    }

    trace!("math segment {:?} -> {:?}", math, processed);
    Ok(processed)
}

/// Run the table passes over every stretch of `input` between verbatim runs
fn replace_outside_verbatim(input: &str, tables: &[&OperatorTable]) -> String {
    let translate = |text: &str| {
        tables
            .iter()
            .fold(text.to_string(), |acc, table| replace_tokens(&acc, table))
    };

    let mut result = String::with_capacity(input.len());
    let mut last = 0;
    for verbatim in VERBATIM.find_iter(input) {
        result.push_str(&translate(&input[last..verbatim.start()]));
        result.push_str(verbatim.as_str());
        last = verbatim.end();
    }
    result.push_str(&translate(&input[last..]));
    result
}

/// Apply every entry of `table`, in order, as an unconditional substring
/// replacement
pub fn replace_tokens(input: &str, table: &OperatorTable) -> String {
    table
        .iter()
        .filter(|(typst, _)| !typst.is_empty())
        .fold(input.to_string(), |acc, (typst, mathjax)| {
            acc.replace(typst.as_str(), mathjax)
        })
}

/// Whether `typst_op` appears as a token in `input`.
///
/// True when the string starts with the name or the name follows a single
/// space. Other punctuation before the name (`x+bold(y)`) is not recognised,
/// and nothing after the name is checked.
pub fn found_typst_op_match(input: &str, typst_op: &str) -> bool {
    input.starts_with(typst_op) || input.contains(&format!(" {}", typst_op))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnaryToken<'a> {
    /// `<op>(`
    OperatorOpen,
    /// `(`
    Open,
    /// `)`
    Close,
    Text(&'a str),
}

/// Split `input` on `<op>(`, `(` and `)`, keeping every other run as text
fn tokenize_unary<'a>(input: &'a str, typst_op: &str) -> Vec<UnaryToken<'a>> {
    let mut tokens = Vec::new();
    let mut text_start = 0;
    let mut idx = 0;
    let mut quoted = quoted_ranges(input).into_iter().peekable();

    while idx < input.len() {
        // Parentheses inside a quoted run are text
        if let Some(range) = quoted.next_if(|range| range.start == idx) {
            idx = range.end;
            continue;
        }

        let rest = &input[idx..];
        let (token, len) = if rest.starts_with(typst_op) && rest[typst_op.len()..].starts_with('(')
        {
            (UnaryToken::OperatorOpen, typst_op.len() + 1)
        } else if rest.starts_with('(') {
            (UnaryToken::Open, 1)
        } else if rest.starts_with(')') {
            (UnaryToken::Close, 1)
        } else {
            idx += rest.chars().next().map_or(1, char::len_utf8);
            continue;
        };

        if text_start < idx {
            tokens.push(UnaryToken::Text(&input[text_start..idx]));
        }
        tokens.push(token);
        idx += len;
        text_start = idx;
    }

    if text_start < input.len() {
        tokens.push(UnaryToken::Text(&input[text_start..]));
    }
    tokens
}

fn quoted_ranges(input: &str) -> Vec<Range<usize>> {
    QUOTED_TEXT.find_iter(input).map(|m| m.range()).collect()
}

#[derive(Debug, Clone, Copy)]
enum Marker {
    /// Operator call; remembers where its argument starts in the accumulator
    Operator { start: usize },
    Plain,
}

/// Rewrite every `<typst_op>(...)` in `input` as `<mathjax_op>{...}`.
///
/// Plain parentheses inside the argument are kept verbatim and nested calls
/// of the same operator are rewritten in place. Nesting is tracked with an
/// explicit marker stack.
///
/// # Errors
/// `OperatorContractViolation` if `typst_op` does not occur in `input`;
/// `UnbalancedBrackets` if a `)` has no opener or an opener is never closed.
pub fn rewrite_unary_op(input: &str, typst_op: &str, mathjax_op: &str) -> ConversionResult<String> {
    if typst_op.is_empty() || !input.contains(typst_op) {
        return Err(ConversionError::missing_operator(typst_op, input));
    }

    let mut processed = String::with_capacity(input.len());
    let mut curr = String::new();
    let mut stack: Vec<Marker> = Vec::new();

    for token in tokenize_unary(input, typst_op) {
        match token {
            UnaryToken::OperatorOpen => stack.push(Marker::Operator { start: curr.len() }),
            UnaryToken::Open => {
                curr.push('(');
                stack.push(Marker::Plain);
            }
            UnaryToken::Close => match stack.pop() {
                Some(Marker::Operator { start }) => {
                    let argument = curr.split_off(start);
                    curr.push_str(mathjax_op);
                    curr.push('{');
                    curr.push_str(&argument);
                    curr.push('}');
                    if stack.is_empty() {
                        processed.push_str(&curr);
                        curr.clear();
                    }
                }
                Some(Marker::Plain) => curr.push(')'),
                None => return Err(ConversionError::unbalanced(typst_op, input)),
            },
            UnaryToken::Text(text) => curr.push_str(text),
        }
    }

    if !stack.is_empty() {
        return Err(ConversionError::unbalanced(typst_op, input));
    }
    processed.push_str(&curr);
    Ok(processed)
}
