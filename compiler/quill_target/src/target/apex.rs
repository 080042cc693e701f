//! Salesforce Apex.
//!
//! Apex string literals are single-quoted and Apex methods must declare the
//! exceptions they propagate, so every generated rule declares
//! `RecognitionException`.

use quill_grammar::Grammar;

use crate::metadata::{self, RECOGNITION_EXCEPTION};
use crate::{DfaPlacement, EscapeTable, Target, TargetKind};

const QUOTE: char = '\'';

#[derive(Debug)]
pub struct ApexTarget {
    escapes: EscapeTable,
}

impl ApexTarget {
    pub fn new() -> Self {
        ApexTarget {
            escapes: EscapeTable::c_family().with(QUOTE, "\\'"),
        }
    }
}

impl Default for ApexTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl Target for ApexTarget {
    fn kind(&self) -> TargetKind {
        TargetKind::Apex
    }

    fn quote_char(&self) -> char {
        QUOTE
    }

    fn escape_table(&self) -> &EscapeTable {
        &self.escapes
    }

    // Double quotes need no escaping inside single-quoted Apex strings.
    fn is_raw_verbatim(&self, c: char) -> bool {
        c == '"'
    }

    fn use_base_templates_for_syn_pred_fragments(&self) -> bool {
        false
    }

    fn cyclic_dfa_placement(&self) -> DfaPlacement {
        DfaPlacement::Recognizer
    }

    #[tracing::instrument(level = "debug", skip_all, fields(grammar = %grammar.name()))]
    fn post_analysis(&self, grammar: &mut Grammar) {
        let stats = metadata::require_exception(grammar, RECOGNITION_EXCEPTION);
        tracing::debug!(
            rules = stats.rules,
            delegated = stats.delegated,
            added = stats.added,
            "declared {RECOGNITION_EXCEPTION} on rules"
        );
    }
}
