//! Line-level scanning for symbol and property blocks.
//!
//! Locates blocks of the form:
//! ```text
//! (symbol
//!   (property "Name" "Value"
//!     ...
//!   )
//!   ...
//! )
//! ```
//! without building a parse tree. Block extents are found by counting
//! opening against closing parentheses per line until the running depth
//! returns to zero.

use regex::Regex;
use std::sync::LazyLock;

/// Regex matching the first line of a symbol block.
static SYMBOL_START_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\(symbol\b").expect("Invalid symbol start regex"));

/// Regex matching the first line of a property block, capturing the
/// quoted property name.
static PROPERTY_START_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*\(property\s+"([^"]+)"\s+"([^"]*)""#).expect("Invalid property start regex")
});

/// Inclusive line-index range of one top-level symbol block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolBounds {
    /// Line index of the `(symbol` line.
    pub start: usize,
    /// Line index where the parenthesis balance returns to zero.
    pub end: usize,
}

/// A property block found inside a symbol, with its exact line extent
/// and the literal lines it spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// The property name, as written in the file (original casing).
    pub name: String,
    /// Line index of the `(property` line.
    pub start: usize,
    /// Line index of the property's closing line.
    pub end: usize,
    /// The literal lines `[start, end]`, terminators included.
    pub text: Vec<String>,
}

/// Splits content into lines that retain their original terminators,
/// so the document can be reassembled byte-identically.
pub fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(String::from).collect()
}

/// Finds the line where the block starting at `start` closes.
///
/// Sums opening minus closing parentheses per line; the block ends on
/// the line where the running depth first returns to zero. If the file
/// is malformed and the depth never returns to zero, the block extends
/// to the last line (best effort, no error).
pub fn find_block_end(lines: &[String], start: usize) -> usize {
    let mut depth: isize = 0;
    for (i, line) in lines.iter().enumerate().skip(start) {
        depth += line.matches('(').count() as isize;
        depth -= line.matches(')').count() as isize;
        if depth == 0 {
            return i;
        }
    }
    lines.len().saturating_sub(1)
}

/// Locates every symbol block in the document, in file order.
///
/// Scanning resumes after each block's end, so parentheses nested
/// inside a symbol (including inner `symbol` units of a library
/// definition) are consumed by the balance count rather than reported
/// as separate blocks. A document with no symbols yields an empty list.
pub fn find_symbol_bounds(lines: &[String]) -> Vec<SymbolBounds> {
    let mut bounds = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        if SYMBOL_START_REGEX.is_match(&lines[i]) {
            let end = find_block_end(lines, i);
            bounds.push(SymbolBounds { start: i, end });
            i = end + 1;
        } else {
            i += 1;
        }
    }
    bounds
}

/// Extracts all property blocks inside `bounds`, in file order.
///
/// Lines that do not start a property (the symbol's own header, pins,
/// graphic items) are skipped. The first property's start line, when
/// needed as the reinsertion point, is `props.first().map(|p| p.start)`.
/// An empty result means the symbol has nothing to reorder.
pub fn extract_properties(lines: &[String], bounds: SymbolBounds) -> Vec<Property> {
    let mut props = Vec::new();
    let mut i = bounds.start;
    while i <= bounds.end && i < lines.len() {
        if let Some(caps) = PROPERTY_START_REGEX.captures(&lines[i]) {
            let end = find_block_end(lines, i);
            props.push(Property {
                name: caps[1].to_string(),
                start: i,
                end,
                text: lines[i..=end].to_vec(),
            });
            i = end + 1;
        } else {
            i += 1;
        }
    }
    props
}
