//! Grammars, delegation, and rule lookup.

use std::fmt;

use rustc_hash::FxHashSet;

use crate::{Rule, TokenType, Vocabulary};

/// What kind of recognizer a grammar produces.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum GrammarKind {
    Lexer,
    Parser,
    TreeParser,
    /// Parser and lexer in one file.
    Combined,
}

impl GrammarKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            GrammarKind::Lexer => "lexer",
            GrammarKind::Parser => "parser",
            GrammarKind::TreeParser => "tree parser",
            GrammarKind::Combined => "combined",
        }
    }
}

impl fmt::Display for GrammarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An analysed grammar together with the grammars it imports.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Grammar {
    name: String,
    kind: GrammarKind,
    rules: Vec<Rule>,
    delegates: Vec<Grammar>,
    vocabulary: Vocabulary,
}

impl Grammar {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> GrammarKind {
        self.kind
    }

    /// Locally defined rules, in declaration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn rules_mut(&mut self) -> &mut [Rule] {
        &mut self.rules
    }

    /// Locally defined rule called `name`.
    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.name() == name)
    }

    /// Imported grammars, in import order.
    pub fn delegates(&self) -> &[Grammar] {
        &self.delegates
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn token_display_name(&self, ttype: TokenType) -> Option<&str> {
        self.vocabulary.display_name(ttype)
    }

    /// Rules imported through delegation that are not overridden.
    ///
    /// Delegates are visited depth-first in import order. A rule is skipped
    /// when its name is already defined locally or by a delegate visited
    /// earlier.
    pub fn delegated_rules(&self) -> Vec<&Rule> {
        let mut seen: FxHashSet<&str> = self.rules.iter().map(Rule::name).collect();
        let mut out = Vec::new();
        for delegate in &self.delegates {
            delegate.collect_imported(&mut seen, &mut out);
        }
        out
    }

    /// Mutable counterpart of [`Grammar::delegated_rules`].
    pub fn for_each_delegated_rule_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Rule),
    {
        let mut seen: FxHashSet<String> =
            self.rules.iter().map(|rule| rule.name().to_owned()).collect();
        for delegate in &mut self.delegates {
            delegate.visit_imported_mut(&mut seen, &mut f);
        }
    }

    /// Rule called `name`, local definitions first, then delegated ones.
    pub fn resolve_rule(&self, name: &str) -> Option<&Rule> {
        self.rule(name).or_else(|| {
            self.delegated_rules()
                .into_iter()
                .find(|rule| rule.name() == name)
        })
    }

    fn collect_imported<'a>(&'a self, seen: &mut FxHashSet<&'a str>, out: &mut Vec<&'a Rule>) {
        for rule in &self.rules {
            if seen.insert(rule.name()) {
                out.push(rule);
            }
        }
        for delegate in &self.delegates {
            delegate.collect_imported(seen, out);
        }
    }

    fn visit_imported_mut<F>(&mut self, seen: &mut FxHashSet<String>, f: &mut F)
    where
        F: FnMut(&mut Rule),
    {
        for rule in &mut self.rules {
            if seen.insert(rule.name().to_owned()) {
                f(rule);
            }
        }
        for delegate in &mut self.delegates {
            delegate.visit_imported_mut(seen, f);
        }
    }
}

/// Assembles a [`Grammar`], defining every referenced literal token.
#[derive(Debug)]
pub struct GrammarBuilder {
    name: String,
    kind: GrammarKind,
    rules: Vec<Rule>,
    delegates: Vec<Grammar>,
    tokens: Vec<String>,
}

impl GrammarBuilder {
    pub fn new(name: impl Into<String>, kind: GrammarKind) -> Self {
        GrammarBuilder {
            name: name.into(),
            kind,
            rules: Vec::new(),
            delegates: Vec::new(),
            tokens: Vec::new(),
        }
    }

    #[must_use]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Import `grammar`. Its vocabulary is merged into this grammar's.
    #[must_use]
    pub fn delegate(mut self, grammar: Grammar) -> Self {
        self.delegates.push(grammar);
        self
    }

    /// Declare a named token such as `ID`.
    #[must_use]
    pub fn token(mut self, name: impl Into<String>) -> Self {
        self.tokens.push(name.into());
        self
    }

    pub fn build(self) -> Grammar {
        let mut vocabulary = Vocabulary::new();
        for token in &self.tokens {
            vocabulary.define(token);
        }
        for element in self.rules.iter().flat_map(Rule::elements) {
            vocabulary.define(element.grammar_literal());
        }
        for delegate in &self.delegates {
            for (_, name) in delegate.vocabulary.iter() {
                vocabulary.define(name);
            }
        }

        tracing::debug!(
            grammar = %self.name,
            kind = %self.kind,
            rules = self.rules.len(),
            delegates = self.delegates.len(),
            tokens = vocabulary.len(),
            "built grammar"
        );

        Grammar {
            name: self.name,
            kind: self.kind,
            rules: self.rules,
            delegates: self.delegates,
            vocabulary,
        }
    }
}

#[cfg(test)]
mod tests;
