//! Symbol-property scanning and reordering for KiCad schematics.
//!
//! Rewrites `(property "Name" "Value" ...)` blocks inside `(symbol ...)`
//! blocks of a `.kicad_sch` document so they follow a caller-supplied
//! priority order, leaving every other line byte-identical. Blocks are
//! handled as opaque line ranges located by parenthesis-balance
//! counting; no parse tree is built.
//!
//! The pipeline, leaves first:
//!
//! 1. [`parser::find_symbol_bounds`] locates symbol blocks.
//! 2. [`parser::extract_properties`] finds each symbol's property blocks.
//! 3. [`reorder::reorder`] computes the new sequence.
//! 4. [`writer::splice_properties`] relocates the blocks in place.
//! 5. [`writer::reorder_document`] drives 1-4 over a whole document.
//!
//! This crate is pure text manipulation; reading, backup, and writing of
//! schematic files live in `fieldsort-fs`.

pub mod parser;
pub mod reorder;
pub mod writer;

pub use parser::{
    Property, SymbolBounds, extract_properties, find_block_end, find_symbol_bounds, split_lines,
};
pub use reorder::{Placement, normalize, parse_order, reorder};
pub use writer::{SymbolChange, reorder_document, splice_properties};
