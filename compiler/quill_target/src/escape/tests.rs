use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_empty_table() {
    let table = EscapeTable::empty();
    assert!(table.is_empty());
    assert_eq!(table.lookup('\n'), None);
}

#[test]
fn test_c_family_entries() {
    let table = EscapeTable::c_family();
    assert_eq!(table.len(), 8);
    assert_eq!(table.lookup('\n'), Some("\\n"));
    assert_eq!(table.lookup('\r'), Some("\\r"));
    assert_eq!(table.lookup('\t'), Some("\\t"));
    assert_eq!(table.lookup('\u{8}'), Some("\\b"));
    assert_eq!(table.lookup('\u{c}'), Some("\\f"));
    assert_eq!(table.lookup('\\'), Some("\\\\"));
    assert_eq!(table.lookup('\''), Some("\\'"));
    assert_eq!(table.lookup('"'), Some("\\\""));
    assert_eq!(table.lookup('a'), None);
}

#[test]
fn test_with_overrides_entry() {
    let table = EscapeTable::c_family().with('"', "\"\"");
    assert_eq!(table.escape_for(u32::from('"')), Some("\"\""));
    assert_eq!(table.len(), 8);
}

#[test]
fn test_lookup_outside_domain_is_none() {
    let table = EscapeTable::c_family();
    assert_eq!(table.lookup('\u{20ac}'), None);
    assert!(!EscapeTable::in_domain(0x20ac));
    assert!(EscapeTable::in_domain(255));
}

#[test]
#[should_panic(expected = "outside 0..256")]
fn test_escape_for_outside_domain_panics() {
    let _ = EscapeTable::c_family().escape_for(256);
}

#[test]
#[should_panic(expected = "outside the table domain")]
fn test_with_outside_domain_panics() {
    let _ = EscapeTable::empty().with('\u{2028}', "\\u2028");
}

#[test]
fn test_debug_lists_entries() {
    let table = EscapeTable::empty().with('\n', "\\n");
    assert_eq!(format!("{table:?}"), r#"{10: "\\n"}"#);
}
