//! Property-based tests for literal transcoding and rule augmentation.
//!
//! Checked for every C-family target:
//! 1. Pass-through escapes are re-emitted unchanged
//! 2. Escapes outside the pass-through set lose their backslash
//! 3. A bare quote character gains exactly one backslash
//! 4. Augmentation is idempotent and reaches every delegated rule

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use quill_grammar::{Alternative, Element, Grammar, GrammarBuilder, GrammarKind, Rule};
use quill_target::metadata::require_exception;
use quill_target::{Target, TargetKind, RECOGNITION_EXCEPTION};

/// Targets that share the backslash-escape literal grammar.
fn c_family() -> Vec<Box<dyn Target>> {
    vec![TargetKind::Java.create(), TargetKind::Apex.create()]
}

const PASS_THROUGH_LETTERS: [char; 7] = ['n', 'r', 't', 'b', 'f', '\\', 'u'];

#[test]
fn test_every_pass_through_escape_survives() {
    for target in c_family() {
        let q = target.quote_char();
        for e in PASS_THROUGH_LETTERS.into_iter().chain([q]) {
            let literal = format!("'\\{e}'");
            assert_eq!(
                target.string_literal_from_grammar(&literal),
                format!("{q}\\{e}{q}"),
                "{:?} lost the escape in {literal}",
                target.kind()
            );
        }
    }
}

#[test]
fn test_empty_literal_for_every_target() {
    for kind in TargetKind::ALL {
        let target = kind.create();
        let q = target.quote_char();
        assert_eq!(target.string_literal_from_grammar("''"), format!("{q}{q}"));
    }
}

// -- Strategies --

/// Interior text with no backslashes and no quote characters of any kind.
fn plain_interior() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 .,;:(){}<>=+*/-]{0,24}").expect("valid regex")
}

/// A character whose escape no C-family target keeps.
fn droppable_escape() -> impl Strategy<Value = char> {
    prop::char::range('a', 'z')
        .prop_filter("not a pass-through letter", |c| !PASS_THROUGH_LETTERS.contains(c))
}

fn rule_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z][a-z0-9]{0,6}", 0..6)
}

fn grammar_from(local: &[String], imported: &[String]) -> Grammar {
    let rule = |name: &String| Rule::new(name.clone(), [Alternative::new([Element::literal("'x'")])]);
    let delegate = imported
        .iter()
        .fold(GrammarBuilder::new("D", GrammarKind::Parser), |b, n| b.rule(rule(n)))
        .build();
    local
        .iter()
        .fold(GrammarBuilder::new("G", GrammarKind::Combined), |b, n| b.rule(rule(n)))
        .delegate(delegate)
        .build()
}

// -- Property Tests --

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Plain text only changes its delimiters.
    #[test]
    fn prop_plain_text_is_rewrapped(interior in plain_interior()) {
        for target in c_family() {
            let q = target.quote_char();
            let out = target.string_literal_from_grammar(&format!("'{interior}'"));
            prop_assert_eq!(out, format!("{q}{interior}{q}"));
        }
    }

    /// Escapes outside the pass-through set lose their backslash.
    #[test]
    fn prop_unlisted_escape_is_dropped(prefix in plain_interior(), c in droppable_escape()) {
        for target in c_family() {
            let q = target.quote_char();
            let out = target.string_literal_from_grammar(&format!("'{prefix}\\{c}'"));
            prop_assert_eq!(out, format!("{q}{prefix}{c}{q}"));
        }
    }

    /// Every bare quote character gets exactly one backslash.
    #[test]
    fn prop_bare_quote_is_escaped(parts in prop::collection::vec(plain_interior(), 1..5)) {
        // Java's quote is `"`, which grammar literals may contain unescaped.
        let java = TargetKind::Java.create();
        let interior = parts.join("\"");
        let out = java.string_literal_from_grammar(&format!("'{interior}'"));
        let expected = format!("\"{}\"", parts.join("\\\""));
        prop_assert_eq!(out, expected);
    }

    /// Raw text without table entries is copied unchanged.
    #[test]
    fn prop_raw_plain_text_unchanged(text in plain_interior()) {
        for kind in TargetKind::ALL {
            let target = kind.create();
            prop_assert_eq!(target.string_literal_from_raw(&text, false), text.clone());
        }
    }

    /// Augmenting twice is the same as augmenting once, and every rule
    /// reachable through delegation is annotated.
    #[test]
    fn prop_augmentation_idempotent(local in rule_names(), imported in rule_names()) {
        let mut grammar = grammar_from(&local, &imported);
        require_exception(&mut grammar, RECOGNITION_EXCEPTION);
        let once = grammar.clone();

        let stats = require_exception(&mut grammar, RECOGNITION_EXCEPTION);
        prop_assert_eq!(stats.added, 0);
        prop_assert_eq!(&grammar, &once);

        for rule in grammar.rules() {
            prop_assert!(rule.metadata().declares(RECOGNITION_EXCEPTION));
        }
        for rule in grammar.delegated_rules() {
            prop_assert!(rule.metadata().declares(RECOGNITION_EXCEPTION));
        }
    }
}
