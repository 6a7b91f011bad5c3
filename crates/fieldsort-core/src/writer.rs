//! In-place rewriting of a document's property order.

use tracing::debug;

use crate::parser::{Property, extract_properties, find_symbol_bounds};
use crate::reorder::{Placement, normalize, reorder};

/// Before/after property name lists for one rewritten symbol, reported
/// for verbose output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolChange {
    pub before: Vec<String>,
    pub after: Vec<String>,
}

/// Replaces a symbol's property blocks with `ordered`, in place.
///
/// Removes each original property's line range, working from the last
/// property upward so earlier indices stay valid, then splices the
/// reordered text blocks back-to-back starting at the first original
/// property's start index. The ranges in `props` must come from the
/// same line sequence being mutated.
pub fn splice_properties(
    lines: &mut Vec<String>,
    props: &[Property],
    ordered: &[(String, Vec<String>)],
) {
    let Some(first) = props.first() else {
        return;
    };
    let insert_base = first.start;
    let len_before = lines.len();

    let mut by_start: Vec<&Property> = props.iter().collect();
    by_start.sort_by(|a, b| b.start.cmp(&a.start));
    for p in by_start {
        lines.drain(p.start..=p.end);
    }

    let mut insert_at = insert_base;
    for (_, text) in ordered {
        lines.splice(insert_at..insert_at, text.iter().cloned());
        insert_at += text.len();
    }

    // Reordering is a permutation, so the line count never moves.
    debug_assert_eq!(lines.len(), len_before);
}

/// Reorders the properties of every symbol in the document.
///
/// Symbols whose computed order already matches their current order
/// (by normalized name) are left untouched, as are symbols with no
/// properties. Returns one [`SymbolChange`] per rewritten symbol; an
/// empty result means the document is unchanged.
///
/// The line count is invariant under each rewrite, so symbol bounds
/// computed up front stay valid across the whole pass.
pub fn reorder_document(
    lines: &mut Vec<String>,
    wanted: &[String],
    placement: Placement,
) -> Vec<SymbolChange> {
    let mut changes = Vec::new();

    for bounds in find_symbol_bounds(lines) {
        let props = extract_properties(lines, bounds);
        if props.is_empty() {
            continue;
        }

        let before: Vec<String> = props.iter().map(|p| p.name.clone()).collect();
        let ordered = reorder(&props, wanted, placement);
        let after: Vec<String> = ordered.iter().map(|(n, _)| n.clone()).collect();

        let before_norm: Vec<String> = before.iter().map(|n| normalize(n)).collect();
        let after_norm: Vec<String> = after.iter().map(|n| normalize(n)).collect();
        if before_norm == after_norm {
            continue;
        }

        debug!(
            symbol_start = bounds.start,
            ?before,
            ?after,
            "reordering symbol properties"
        );
        splice_properties(lines, &props, &ordered);
        changes.push(SymbolChange { before, after });
    }

    changes
}
