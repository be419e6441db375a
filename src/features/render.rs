//! Display-format adaptation
//!
//! MathJax output uses `\( \)` for inline math and `\[ \]` for display math.
//! Some rendering hosts (Markdown renderers, notebook front-ends) only
//! understand dollar delimiters, so the output is rewritten for them here.

/// Math delimiter convention of the rendering host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DelimiterStyle {
    /// `\( \)` and `\[ \]` (output is left unchanged)
    #[default]
    MathJax,
    /// `$ $` and `$$ $$`
    Dollar,
}

/// Delimiter rewrites applied, in order, for [`DelimiterStyle::Dollar`]
const DOLLAR_REPLACEMENTS: [(&str, &str); 4] =
    [(r"\(", "$"), (r"\)", "$"), (r"\[", "$$"), (r"\]", "$$")];

/// Rewrite math delimiters in `text` for the given host style
pub fn adapt_delimiters(text: &str, style: DelimiterStyle) -> String {
    match style {
        DelimiterStyle::MathJax => text.to_string(),
        DelimiterStyle::Dollar => DOLLAR_REPLACEMENTS
            .iter()
            .fold(text.to_string(), |acc, (from, to)| acc.replace(from, to)),
    }
}

/// Shorthand for [`adapt_delimiters`] with [`DelimiterStyle::Dollar`]
pub fn use_latex_delimiters(text: &str) -> String {
    adapt_delimiters(text, DelimiterStyle::Dollar)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_delimiters() {
        assert_eq!(
            use_latex_delimiters(r"a set \(V\) with \(\mathbf{V}\)"),
            r"a set $V$ with $\mathbf{V}$"
        );
    }

    #[test]
    fn test_display_delimiters() {
        assert_eq!(use_latex_delimiters(r"\[x^2\]"), "$$x^2$$");
    }

    #[test]
    fn test_mathjax_style_is_identity() {
        let text = r"\(x\) and \[y\]";
        assert_eq!(adapt_delimiters(text, DelimiterStyle::MathJax), text);
    }

    #[test]
    fn test_other_commands_untouched() {
        assert_eq!(use_latex_delimiters(r"\(\cdot\)"), r"$\cdot$");
    }
}
