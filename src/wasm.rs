//! WASM bindings for typst2mathjax
//!
//! This module provides JavaScript-accessible functions for Typst → MathJax conversion.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::{
    data::DEFAULT_TABLES,
    features::render::{adapt_delimiters, DelimiterStyle},
    T2MOptions,
};

/// Conversion options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Rewrite quoted text in math as `\mathrm{...}`
    #[serde(default = "default_true")]
    pub quoted_text: bool,
    /// Emit `$ $` / `$$ $$` instead of `\( \)` / `\[ \]`
    #[serde(default)]
    pub latex_delimiters: bool,
    /// Keep lines that fail to convert instead of failing the whole input
    #[serde(default)]
    pub lossy: bool,
}

#[cfg(feature = "wasm")]
impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            quoted_text: true,
            latex_delimiters: false,
            lossy: false,
        }
    }
}

#[cfg(feature = "wasm")]
fn default_true() -> bool {
    true
}

/// Conversion result with additional metadata
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct ConvertResult {
    /// The converted output
    pub output: String,
    /// Whether the conversion was successful
    pub success: bool,
    /// Error message if conversion failed
    pub error: Option<String>,
    /// Lines that were left unconverted (lossy mode)
    pub failures: Vec<String>,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Convert Typst text with inline math to MathJax
///
/// Returns the input unchanged if it cannot be converted; use
/// `convertWithOptions` to see the error.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "typstToMathjax")]
pub fn typst_to_mathjax_wasm(input: &str) -> String {
    crate::typst_to_mathjax(input).unwrap_or_else(|_| input.to_string())
}

/// Rewrite `\( \)` / `\[ \]` as `$ $` / `$$ $$`
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "useLatexDelimiters")]
pub fn use_latex_delimiters_wasm(input: &str) -> String {
    crate::features::render::use_latex_delimiters(input)
}

/// Convert with options
///
/// # Arguments
/// * `input` - Typst text
/// * `options` - JavaScript object matching `ConvertOptions`
///
/// # Returns
/// A `ConvertResult` object
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "convertWithOptions")]
pub fn convert_with_options(input: &str, options: JsValue) -> JsValue {
    let opts: ConvertOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();
    let t2m = T2MOptions {
        quoted_text: opts.quoted_text,
    };
    let style = if opts.latex_delimiters {
        DelimiterStyle::Dollar
    } else {
        DelimiterStyle::MathJax
    };

    let result = if opts.lossy {
        let output = crate::typst_to_mathjax_lossy(input, &DEFAULT_TABLES, &t2m);
        ConvertResult {
            output: adapt_delimiters(&output.content, style),
            success: true,
            error: None,
            failures: output.failures.iter().map(|f| f.to_string()).collect(),
        }
    } else {
        match crate::typst_to_mathjax_with(input, &DEFAULT_TABLES, &t2m) {
            Ok(output) => ConvertResult {
                output: adapt_delimiters(&output, style),
                success: true,
                error: None,
                failures: Vec::new(),
            },
            Err(e) => ConvertResult {
                output: String::new(),
                success: false,
                error: Some(e.to_string()),
                failures: Vec::new(),
            },
        }
    };

    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
