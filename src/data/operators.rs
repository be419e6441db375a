//! Typst → MathJax operator and symbol tables
//!
//! Three tables drive math translation, each applied in declaration order:
//! - simple operators that take no argument (`dot` → `\cdot`)
//! - bare symbols (`RR` → `\mathbb{R}`)
//! - unary operators written as calls (`bold(x)` → `\mathbf{x}`)
//!
//! Order is significant: later entries see the output of earlier ones, so the
//! defaults are `phf` ordered maps rather than hashed maps.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use phf::phf_ordered_map;

/// Argument-less operators
pub static SIMPLE_OPERATORS: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "dot" => "\\cdot",
    "times" => "\\times",
    "in" => "\\in",
    "arrow" => "\\to",
    "lambda" => "\\lambda",
    "mu" => "\\mu",
};

/// Bare symbols (blackboard letters)
pub static SYMBOLS: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "RR" => "\\mathbb{R}",
    "CC" => "\\mathbb{C}",
};

/// One-argument operators: Typst function name → MathJax command
pub static UNARY_OPERATORS: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "bold" => "\\mathbf",
};

lazy_static! {
    /// Tables built from the static defaults, shared by the convenience entry points
    pub static ref DEFAULT_TABLES: OperatorTables = OperatorTables::default();
}

/// An ordered Typst → MathJax mapping
pub type OperatorTable = IndexMap<String, String>;

/// The three translation tables used by one conversion.
///
/// Built once, then borrowed by every translation call. Entries added with the
/// `with_*` builders are appended after the existing ones, and replacing an
/// existing key keeps its original position.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "data-loading", derive(serde::Deserialize))]
pub struct OperatorTables {
    #[cfg_attr(feature = "data-loading", serde(default))]
    pub simple: OperatorTable,
    #[cfg_attr(feature = "data-loading", serde(default))]
    pub symbols: OperatorTable,
    #[cfg_attr(feature = "data-loading", serde(default))]
    pub unary: OperatorTable,
}

impl Default for OperatorTables {
    fn default() -> Self {
        Self {
            simple: to_table(&SIMPLE_OPERATORS),
            symbols: to_table(&SYMBOLS),
            unary: to_table(&UNARY_OPERATORS),
        }
    }
}

impl OperatorTables {
    /// Tables with no entries at all
    pub fn empty() -> Self {
        Self {
            simple: OperatorTable::new(),
            symbols: OperatorTable::new(),
            unary: OperatorTable::new(),
        }
    }

    pub fn with_simple_operator(mut self, typst: &str, mathjax: &str) -> Self {
        self.simple.insert(typst.to_string(), mathjax.to_string());
        self
    }

    pub fn with_symbol(mut self, typst: &str, mathjax: &str) -> Self {
        self.symbols.insert(typst.to_string(), mathjax.to_string());
        self
    }

    pub fn with_unary_operator(mut self, typst: &str, mathjax: &str) -> Self {
        self.unary.insert(typst.to_string(), mathjax.to_string());
        self
    }

    /// Append every entry of `other` after the current entries
    pub fn extend(&mut self, other: OperatorTables) {
        self.simple.extend(other.simple);
        self.symbols.extend(other.symbols);
        self.unary.extend(other.unary);
    }

    /// Total number of entries across the three tables
    pub fn len(&self) -> usize {
        self.simple.len() + self.symbols.len() + self.unary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn to_table(map: &phf::OrderedMap<&'static str, &'static str>) -> OperatorTable {
    map.entries()
        .map(|(typst, mathjax)| (typst.to_string(), mathjax.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order_is_preserved() {
        let tables = OperatorTables::default();
        let simple: Vec<_> = tables.simple.keys().map(String::as_str).collect();
        assert_eq!(simple, ["dot", "times", "in", "arrow", "lambda", "mu"]);
        let symbols: Vec<_> = tables.symbols.keys().map(String::as_str).collect();
        assert_eq!(symbols, ["RR", "CC"]);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(SIMPLE_OPERATORS.get("arrow"), Some(&"\\to"));
        assert_eq!(SYMBOLS.get("RR"), Some(&"\\mathbb{R}"));
        assert_eq!(UNARY_OPERATORS.get("bold"), Some(&"\\mathbf"));
        assert_eq!(SIMPLE_OPERATORS.get("sum"), None);
    }

    #[test]
    fn test_builders_append() {
        let tables = OperatorTables::default()
            .with_symbol("NN", "\\mathbb{N}")
            .with_unary_operator("cal", "\\mathcal");
        assert_eq!(tables.symbols.keys().last().map(String::as_str), Some("NN"));
        assert_eq!(tables.unary.get("cal").map(String::as_str), Some("\\mathcal"));
        assert_eq!(tables.len(), DEFAULT_TABLES.len() + 2);
    }

    #[test]
    fn test_replacing_key_keeps_position() {
        let tables = OperatorTables::default().with_simple_operator("dot", "\\bullet");
        assert_eq!(
            tables.simple.first(),
            Some((&"dot".to_string(), &"\\bullet".to_string()))
        );
    }

    #[test]
    fn test_empty() {
        assert!(OperatorTables::empty().is_empty());
        assert!(!DEFAULT_TABLES.is_empty());
    }
}
