//! Priority-order computation for extracted properties.

use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use crate::parser::Property;

/// Where properties whose name is not in the priority order are placed
/// relative to the listed ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Unlisted properties come first, listed ones after.
    Before,
    /// Listed properties come first, unlisted ones keep the tail.
    #[default]
    After,
}

impl FromStr for Placement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "before" => Ok(Self::Before),
            "after" => Ok(Self::After),
            other => Err(format!(
                "invalid placement '{}', expected 'before' or 'after'",
                other
            )),
        }
    }
}

/// Normalizes a property name for comparison: surrounding whitespace is
/// trimmed and the name is case-folded. Display always uses the original
/// casing from the file.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Splits a comma-separated priority-order string into names, trimming
/// each entry and dropping empty ones.
pub fn parse_order(spec: &str) -> Vec<String> {
    spec.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Computes the new `(name, text)` sequence for one symbol's properties.
///
/// Properties named in `wanted` form the listed group, in `wanted`'s
/// order. All others keep their original relative order as the unlisted
/// group, placed before or after the listed group per `placement`.
///
/// The name lookup is single-valued: when two properties share a
/// normalized name, the last occurrence in file order takes the listed
/// slot and every other same-named instance falls through to the
/// unlisted group. The output is always a permutation of the input.
pub fn reorder(
    props: &[Property],
    wanted: &[String],
    placement: Placement,
) -> Vec<(String, Vec<String>)> {
    let mut by_name: HashMap<String, &Property> = HashMap::new();
    for p in props {
        by_name.insert(normalize(&p.name), p);
    }

    let mut chosen: HashSet<usize> = HashSet::new();
    let mut listed = Vec::new();
    for w in wanted {
        if let Some(p) = by_name.get(&normalize(w))
            && chosen.insert(p.start)
        {
            listed.push((p.name.clone(), p.text.clone()));
        }
    }

    let rest: Vec<(String, Vec<String>)> = props
        .iter()
        .filter(|p| !chosen.contains(&p.start))
        .map(|p| (p.name.clone(), p.text.clone()))
        .collect();

    match placement {
        Placement::Before => [rest, listed].concat(),
        Placement::After => [listed, rest].concat(),
    }
}
