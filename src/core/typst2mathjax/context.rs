//! Conversion options for Typst to MathJax conversion

/// Options for Typst to MathJax conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct T2MOptions {
    /// Rewrite quoted text in math (`"Var"`) as `\mathrm{Var}`
    pub quoted_text: bool,
}

impl Default for T2MOptions {
    fn default() -> Self {
        Self { quoted_text: true }
    }
}

impl T2MOptions {
    /// Only the table-driven passes; quoted text is left as written
    pub fn literal() -> Self {
        Self { quoted_text: false }
    }
}
