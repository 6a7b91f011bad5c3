//! Integration tests for property reordering over whole documents.

use fieldsort_core::{Placement, normalize, parse_order, reorder_document, split_lines};
use pretty_assertions::assert_eq;
use rstest::rstest;

const SCHEMATIC: &str = r#"(kicad_sch
  (version 20231120)
  (symbol
    (lib_id "Device:R")
    (at 120.65 73.66 0)
    (property "Datasheet" "https://example.com/rc0603.pdf"
      (at 120.65 73.66 0)
      (effects
        (font
          (size 1.27 1.27)
        )
        (hide yes)
      )
    )
    (property "MPN" "RC0603FR-0710KL"
      (at 120.65 73.66 0)
    )
    (property "Note" "do not substitute"
      (at 120.65 73.66 0)
    )
    (property "LCSC" "C98220"
      (at 120.65 73.66 0)
    )
    (pin "1"
      (uuid "8f1a2b3c")
    )
  )
  (wire
    (pts (xy 100 100) (xy 110 100))
  )
)
"#;

fn apply(content: &str, order: &str, placement: Placement) -> (String, usize) {
    let mut lines = split_lines(content);
    let wanted = parse_order(order);
    let changes = reorder_document(&mut lines, &wanted, placement);
    (lines.concat(), changes.len())
}

fn property_names(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|l| {
            let rest = l.trim_start().strip_prefix("(property \"")?;
            Some(rest.split('"').next().unwrap().to_string())
        })
        .collect()
}

#[test]
fn test_unlisted_after_moves_listed_to_front() {
    let (out, changed) = apply(SCHEMATIC, "MPN,LCSC", Placement::After);
    assert_eq!(changed, 1);
    assert_eq!(property_names(&out), vec!["MPN", "LCSC", "Datasheet", "Note"]);
}

#[test]
fn test_unlisted_before_moves_listed_to_back() {
    let (out, changed) = apply(SCHEMATIC, "MPN,LCSC", Placement::Before);
    assert_eq!(changed, 1);
    assert_eq!(property_names(&out), vec!["Datasheet", "Note", "MPN", "LCSC"]);
}

#[test]
fn test_property_blocks_move_as_opaque_units() {
    let (out, _) = apply(SCHEMATIC, "MPN,LCSC", Placement::After);
    // The multi-line Datasheet block keeps its internal formatting.
    assert!(out.contains(
        "    (property \"Datasheet\" \"https://example.com/rc0603.pdf\"\n\
         \x20     (at 120.65 73.66 0)\n\
         \x20     (effects\n"
    ));
}

#[test]
fn test_rewrite_is_a_permutation_of_lines() {
    let (out, _) = apply(SCHEMATIC, "LCSC,Note,MPN,Datasheet", Placement::After);
    let mut before: Vec<&str> = SCHEMATIC.lines().collect();
    let mut after: Vec<&str> = out.lines().collect();
    assert_eq!(before.len(), after.len());
    before.sort_unstable();
    after.sort_unstable();
    assert_eq!(before, after);
}

#[test]
fn test_lines_outside_symbols_are_untouched() {
    let (out, _) = apply(SCHEMATIC, "MPN,LCSC", Placement::After);
    assert!(out.starts_with("(kicad_sch\n  (version 20231120)\n"));
    assert!(out.contains("  (wire\n    (pts (xy 100 100) (xy 110 100))\n  )\n"));
}

#[test]
fn test_second_pass_is_a_no_op() {
    let (once, changed) = apply(SCHEMATIC, "MPN,LCSC", Placement::After);
    assert_eq!(changed, 1);
    let (twice, changed_again) = apply(&once, "MPN,LCSC", Placement::After);
    assert_eq!(changed_again, 0);
    assert_eq!(twice, once);
}

#[rstest]
#[case(" mpn , lcsc ")]
#[case("MPN,LCSC")]
#[case("mpn,LCSC,")]
fn test_order_names_are_normalized(#[case] order: &str) {
    let (out, changed) = apply(SCHEMATIC, order, Placement::After);
    assert_eq!(changed, 1);
    assert_eq!(property_names(&out), vec!["MPN", "LCSC", "Datasheet", "Note"]);
}

#[test]
fn test_already_ordered_document_is_unchanged() {
    let (out, changed) = apply(SCHEMATIC, "Datasheet,MPN,Note,LCSC", Placement::After);
    assert_eq!(changed, 0);
    assert_eq!(out, SCHEMATIC);
}

#[test]
fn test_single_property_symbol_is_unchanged() {
    let content = "(symbol\n  (property \"Value\" \"10k\")\n)\n";
    let (out, changed) = apply(content, "MPN,LCSC,Value", Placement::After);
    assert_eq!(changed, 0);
    assert_eq!(out, content);
}

#[test]
fn test_unknown_order_names_are_ignored() {
    let (out, changed) = apply(SCHEMATIC, "Nonexistent,MPN", Placement::After);
    assert_eq!(changed, 1);
    assert_eq!(property_names(&out), vec!["MPN", "Datasheet", "Note", "LCSC"]);
}

#[test]
fn test_multiple_symbols_reordered_independently() {
    let content = "(kicad_sch\n\
                   (symbol\n\
                   \x20 (property \"B\" \"2\")\n\
                   \x20 (property \"A\" \"1\")\n\
                   )\n\
                   (symbol\n\
                   \x20 (property \"A\" \"1\")\n\
                   \x20 (property \"B\" \"2\")\n\
                   )\n\
                   )\n";
    let mut lines = split_lines(content);
    let changes = reorder_document(&mut lines, &parse_order("A,B"), Placement::After);
    // Only the first symbol is out of order.
    assert_eq!(changes.len(), 1);
    assert_eq!(
        changes[0].before.iter().map(|n| normalize(n)).collect::<Vec<_>>(),
        vec!["b", "a"]
    );
    assert_eq!(property_names(&lines.concat()), vec!["A", "B", "A", "B"]);
}
