use pretty_assertions::assert_eq;
use quill_grammar::{Alternative, Element, GrammarBuilder, GrammarKind, Rule};

use super::*;

fn single(name: &str, literal: &str) -> Rule {
    Rule::new(name, [Alternative::new([Element::literal(literal)])])
}

/// `Root { a }` imports `S { b, a }` which imports `U { c }`.
fn composite() -> Grammar {
    let u = GrammarBuilder::new("U", GrammarKind::Parser)
        .rule(single("c", "'c'"))
        .build();
    let s = GrammarBuilder::new("S", GrammarKind::Parser)
        .rule(single("b", "'b'"))
        .rule(single("a", "'s'"))
        .delegate(u)
        .build();
    GrammarBuilder::new("Root", GrammarKind::Combined)
        .rule(single("a", "'a'"))
        .delegate(s)
        .build()
}

fn all_declare(grammar: &Grammar, exception: &str) -> bool {
    grammar.rules().iter().all(|rule| rule.metadata().declares(exception))
        && grammar
            .delegated_rules()
            .iter()
            .all(|rule| rule.metadata().declares(exception))
}

#[test]
fn test_annotates_local_and_delegated_rules() {
    let mut grammar = composite();
    let stats = require_exception(&mut grammar, RECOGNITION_EXCEPTION);
    assert_eq!(
        stats,
        AugmentStats {
            rules: 1,
            delegated: 2,
            added: 3,
        }
    );
    assert_eq!(stats.visited(), 3);
    assert!(all_declare(&grammar, RECOGNITION_EXCEPTION));
}

#[test]
fn test_second_pass_adds_nothing() {
    let mut grammar = composite();
    require_exception(&mut grammar, RECOGNITION_EXCEPTION);
    let once = grammar.clone();

    let stats = require_exception(&mut grammar, RECOGNITION_EXCEPTION);
    assert_eq!(stats.added, 0);
    assert_eq!(stats.visited(), 3);
    assert_eq!(grammar, once);
}

#[test]
fn test_distinct_exceptions_accumulate() {
    let mut grammar = composite();
    require_exception(&mut grammar, RECOGNITION_EXCEPTION);
    require_exception(&mut grammar, "IOException");
    let rule = grammar.rule("a").unwrap();
    assert_eq!(
        rule.metadata().throws().collect::<Vec<_>>(),
        ["IOException", RECOGNITION_EXCEPTION]
    );
}

#[test]
fn test_overridden_delegate_rule_is_skipped() {
    let mut grammar = composite();
    require_exception(&mut grammar, RECOGNITION_EXCEPTION);
    // `S.a` is shadowed by `Root.a`. It is annotated by S's own run, not Root's.
    let shadowed = grammar.delegates()[0].rule("a").unwrap();
    assert!(!shadowed.metadata().declares(RECOGNITION_EXCEPTION));
}

#[test]
fn test_empty_grammar() {
    let mut grammar = GrammarBuilder::new("Empty", GrammarKind::Parser).build();
    let stats = require_exception(&mut grammar, RECOGNITION_EXCEPTION);
    assert_eq!(stats, AugmentStats::default());
}
