//! Post-analysis rule metadata augmentation.
//!
//! Targets whose generated rule methods must declare what they throw call
//! [`require_exception`] from [`Target::post_analysis`](crate::Target::post_analysis).
//! The walk covers the local rules and every delegated rule; declarations
//! are deduplicated by [`RuleMetadata`](quill_grammar::RuleMetadata), so
//! running it again changes nothing.

use quill_grammar::Grammar;

/// Exception raised by generated recognizers on a parse failure.
pub const RECOGNITION_EXCEPTION: &str = "RecognitionException";

/// What one augmentation pass did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AugmentStats {
    /// Local rules visited.
    pub rules: usize,
    /// Delegated rules visited.
    pub delegated: usize,
    /// Declarations that were not present before.
    pub added: usize,
}

impl AugmentStats {
    pub fn visited(&self) -> usize {
        self.rules + self.delegated
    }
}

/// Declare `exception` on every local and delegated rule of `grammar`.
#[tracing::instrument(level = "trace", skip(grammar), fields(grammar = %grammar.name()))]
pub fn require_exception(grammar: &mut Grammar, exception: &str) -> AugmentStats {
    let mut stats = AugmentStats::default();

    for rule in grammar.rules_mut() {
        stats.rules += 1;
        if rule.metadata_mut().require_exception(exception) {
            stats.added += 1;
        }
    }

    grammar.for_each_delegated_rule_mut(|rule| {
        stats.delegated += 1;
        if rule.metadata_mut().require_exception(exception) {
            tracing::trace!(rule = rule.name(), "declared on delegated rule");
            stats.added += 1;
        }
    });

    stats
}

#[cfg(test)]
mod tests;
