use pretty_assertions::assert_eq;

use super::*;
use crate::{Alternative, Element};

fn single(name: &str, literal: &str) -> Rule {
    Rule::new(name, [Alternative::new([Element::literal(literal)])])
}

/// `Root` imports `S` and `T`; `S` imports `U`.
///
/// `Root` defines `a`, `S` defines `a b c`, `T` defines `c d`, `U` defines
/// `d e`. Delegated rules: `b c` from `S`, `d e` from `U`; `T`'s `c` and `d`
/// are shadowed.
fn composite() -> Grammar {
    let u = GrammarBuilder::new("U", GrammarKind::Parser)
        .rule(single("d", "'u'"))
        .rule(single("e", "'e'"))
        .build();
    let s = GrammarBuilder::new("S", GrammarKind::Parser)
        .rule(single("a", "'s'"))
        .rule(single("b", "'b'"))
        .rule(single("c", "'c'"))
        .delegate(u)
        .build();
    let t = GrammarBuilder::new("T", GrammarKind::Parser)
        .rule(single("c", "'t'"))
        .rule(single("d", "'d'"))
        .build();
    GrammarBuilder::new("Root", GrammarKind::Combined)
        .rule(single("a", "'a'"))
        .delegate(s)
        .delegate(t)
        .build()
}

#[test]
fn test_builder_defines_literal_tokens() {
    let grammar = GrammarBuilder::new("T", GrammarKind::Parser)
        .token("ID")
        .rule(single("a", "'x'"))
        .build();
    assert_eq!(grammar.vocabulary().token_type("ID"), Some(TokenType::MIN));
    assert_eq!(grammar.vocabulary().token_type("'x'"), Some(TokenType::from_raw(5)));
    assert_eq!(grammar.token_display_name(TokenType::from_raw(5)), Some("'x'"));
}

#[test]
fn test_builder_merges_delegate_vocabulary() {
    let grammar = composite();
    for literal in ["'a'", "'s'", "'b'", "'c'", "'u'", "'e'", "'t'", "'d'"] {
        assert!(
            grammar.vocabulary().token_type(literal).is_some(),
            "{literal} missing from vocabulary"
        );
    }
}

#[test]
fn test_delegated_rules_skip_overridden() {
    let grammar = composite();
    let delegated: Vec<_> = grammar
        .delegated_rules()
        .into_iter()
        .map(|rule| rule.to_string())
        .collect();
    assert_eq!(
        delegated,
        ["b : 'b' ;", "c : 'c' ;", "d : 'u' ;", "e : 'e' ;"]
    );
}

#[test]
fn test_delegated_rules_empty_without_delegates() {
    let grammar = GrammarBuilder::new("T", GrammarKind::Parser)
        .rule(single("a", "'a'"))
        .build();
    assert!(grammar.delegated_rules().is_empty());
}

#[test]
fn test_delegated_rules_mut_visits_same_rules() {
    let mut grammar = composite();
    let mut visited = Vec::new();
    grammar.for_each_delegated_rule_mut(|rule| visited.push(rule.to_string()));
    let expected: Vec<_> = grammar
        .delegated_rules()
        .into_iter()
        .map(|rule| rule.to_string())
        .collect();
    assert_eq!(visited, expected);
}

#[test]
fn test_resolve_rule_prefers_local() {
    let grammar = composite();
    assert_eq!(grammar.resolve_rule("a").map(ToString::to_string).as_deref(), Some("a : 'a' ;"));
    assert_eq!(grammar.resolve_rule("d").map(ToString::to_string).as_deref(), Some("d : 'u' ;"));
    assert!(grammar.resolve_rule("zz").is_none());
}

#[test]
fn test_grammar_kind_display() {
    assert_eq!(GrammarKind::TreeParser.to_string(), "tree parser");
    assert_eq!(composite().kind(), GrammarKind::Combined);
    assert_eq!(composite().name(), "Root");
    assert_eq!(composite().delegates().len(), 2);
}

#[cfg(feature = "cache")]
#[test]
fn test_cache_roundtrip() {
    let mut grammar = composite();
    if let Some(rule) = grammar.rules_mut().first_mut() {
        rule.metadata_mut().require_exception("RecognitionException");
    }

    let bytes = bincode::serialize(&grammar).unwrap_or_else(|e| panic!("serialize failed: {e}"));
    let restored: Grammar =
        bincode::deserialize(&bytes).unwrap_or_else(|e| panic!("deserialize failed: {e}"));

    assert_eq!(restored, grammar);
    assert!(restored.rules()[0].metadata().declares("RecognitionException"));
    assert_eq!(restored.delegated_rules().len(), 4);
}
