//! Grammar rules and their target-specific metadata.

use std::collections::BTreeSet;
use std::fmt;

use crate::literal;

/// How many times an element may match in sequence.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Repeat {
    /// Exactly once.
    #[default]
    Once,
    /// `x*`
    ZeroOrMore,
    /// `x+`
    OneOrMore,
}

impl Repeat {
    /// Suffix used when printing the element in grammar notation.
    pub const fn suffix(self) -> &'static str {
        match self {
            Repeat::Once => "",
            Repeat::ZeroOrMore => "*",
            Repeat::OneOrMore => "+",
        }
    }

    /// Whether the element may be skipped entirely.
    pub const fn is_optional(self) -> bool {
        matches!(self, Repeat::ZeroOrMore)
    }

    /// Whether the element may match again after matching once.
    pub const fn loops(self) -> bool {
        !matches!(self, Repeat::Once)
    }
}

/// A literal reference inside an alternative, e.g. `'b'*`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    literal: String,
    repeat: Repeat,
}

impl Element {
    /// Match `literal` exactly once.
    pub fn literal(literal: impl Into<String>) -> Self {
        Self::with_repeat(literal, Repeat::Once)
    }

    /// `literal*`
    pub fn star(literal: impl Into<String>) -> Self {
        Self::with_repeat(literal, Repeat::ZeroOrMore)
    }

    /// `literal+`
    pub fn plus(literal: impl Into<String>) -> Self {
        Self::with_repeat(literal, Repeat::OneOrMore)
    }

    pub fn with_repeat(literal: impl Into<String>, repeat: Repeat) -> Self {
        let literal = literal.into();
        // Validates the delimiters up front.
        let _ = literal::interior(&literal);
        Element { literal, repeat }
    }

    /// The literal in grammar notation, delimiters included.
    pub fn grammar_literal(&self) -> &str {
        &self.literal
    }

    pub fn repeat(&self) -> Repeat {
        self.repeat
    }

    /// The characters this element matches.
    pub fn value(&self) -> String {
        literal::unescape_grammar_literal(&self.literal)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.literal, self.repeat.suffix())
    }
}

/// One alternative of a rule: a sequence of elements.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Alternative {
    elements: Vec<Element>,
}

impl Alternative {
    pub fn new(elements: impl IntoIterator<Item = Element>) -> Self {
        Alternative {
            elements: elements.into_iter().collect(),
        }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{element}")?;
        }
        Ok(())
    }
}

/// Target-specific annotations attached to a rule after analysis.
///
/// Append-only. The exception set deduplicates and iterates in sorted
/// order so generated `throws` clauses are stable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleMetadata {
    throws: BTreeSet<String>,
}

impl RuleMetadata {
    /// Declare that the generated rule may raise `exception`.
    ///
    /// Returns `true` if the declaration was not present before.
    pub fn require_exception(&mut self, exception: &str) -> bool {
        if self.throws.contains(exception) {
            return false;
        }
        self.throws.insert(exception.to_owned())
    }

    /// Declared exception types, sorted.
    pub fn throws(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.throws.iter().map(String::as_str)
    }

    pub fn declares(&self, exception: &str) -> bool {
        self.throws.contains(exception)
    }
}

/// A grammar rule as produced by structural analysis.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    name: String,
    alternatives: Vec<Alternative>,
    metadata: RuleMetadata,
}

impl Rule {
    pub fn new(name: impl Into<String>, alternatives: impl IntoIterator<Item = Alternative>) -> Self {
        Rule {
            name: name.into(),
            alternatives: alternatives.into_iter().collect(),
            metadata: RuleMetadata::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alternatives in declaration order (alternative 1 first).
    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    pub fn metadata(&self) -> &RuleMetadata {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut RuleMetadata {
        &mut self.metadata
    }

    /// Every element of every alternative, in declaration order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> + '_ {
        self.alternatives.iter().flat_map(|alt| alt.elements().iter())
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} :", self.name)?;
        for (i, alt) in self.alternatives.iter().enumerate() {
            if i > 0 {
                f.write_str(" |")?;
            }
            if !alt.is_empty() {
                write!(f, " {alt}")?;
            }
        }
        f.write_str(" ;")
    }
}
