//! Code generation targets.
//!
//! A [`Target`] adapts grammar-level literal syntax and rule metadata to one
//! output language. The trait's provided methods implement the shared
//! C-family behaviour; each language overrides only what differs.
//!
//! | Target | Quote | Escapes | Post-analysis |
//! |--------|-------|---------|---------------|
//! | Java   | `"`   | C family | none |
//! | Apex   | `'`   | C family, `"` verbatim in raw strings | rules declare `RecognitionException` |
//! | Delphi | `'`   | quote doubling, `#nn` for control chars | none |

mod apex;
mod delphi;
mod java;

use std::fmt;
use std::str::FromStr;

use quill_grammar::{Grammar, GrammarKind, TokenType};

use crate::transcode::{self, PassThrough};
use crate::EscapeTable;

pub use apex::ApexTarget;
pub use delphi::DelphiTarget;
pub use java::JavaTarget;

/// Where the emission engine places cyclic DFA tables.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DfaPlacement {
    /// In their own template, next to the recognizer.
    #[default]
    Separate,
    /// Inline in the recognizer template.
    Recognizer,
}

/// One output language.
///
/// The emission engine creates one target per compilation run, calls
/// [`Target::post_analysis`] once after structural analysis, then queries
/// the literal methods for every literal it renders.
pub trait Target: fmt::Debug {
    fn kind(&self) -> TargetKind;

    /// Delimiter of the language's string literals.
    fn quote_char(&self) -> char;

    fn escape_table(&self) -> &EscapeTable;

    /// Escapes in grammar literals that survive into target literals.
    fn pass_through_escapes(&self) -> PassThrough {
        PassThrough::for_quote(self.quote_char())
    }

    /// Target string literal for a grammar literal such as `'a\n"'`.
    fn string_literal_from_grammar(&self, literal: &str) -> String {
        transcode::from_grammar_literal(literal, self.quote_char(), self.pass_through_escapes())
    }

    /// Whether raw-string conversion emits `c` without consulting the
    /// escape table.
    fn is_raw_verbatim(&self, _c: char) -> bool {
        false
    }

    /// Escape an arbitrary string, wrapping it in quotes if `quoted`.
    fn string_literal_from_raw(&self, text: &str, quoted: bool) -> String {
        transcode::from_raw_string(
            text,
            self.escape_table(),
            self.quote_char(),
            quoted,
            |c| self.is_raw_verbatim(c),
        )
    }

    /// Target character literal for a one-character grammar literal.
    fn char_literal_from_grammar(&self, literal: &str) -> String {
        transcode::char_literal_from_grammar(literal, self.escape_table())
    }

    /// Escape used when a character value is embedded in generated tables.
    fn encode_int_as_char_escape(&self, value: u32) -> String {
        transcode::encode_int_as_char_escape(value)
    }

    /// Largest character value generated lexers handle.
    fn max_char_value(&self) -> u32 {
        0xFFFF
    }

    /// Label used for `ttype` in generated code: the token name, or the
    /// number for literal and unknown tokens.
    fn token_type_as_target_label(&self, grammar: &Grammar, ttype: TokenType) -> String {
        match grammar.token_display_name(ttype) {
            Some(name) if !name.starts_with('\'') => name.to_owned(),
            _ => ttype.to_string(),
        }
    }

    /// Whether `@scope::name` actions are allowed in a grammar of `kind`.
    fn is_valid_action_scope(&self, kind: GrammarKind, scope: &str) -> bool {
        match kind {
            GrammarKind::Lexer => scope == "lexer",
            GrammarKind::Parser => scope == "parser",
            GrammarKind::Combined => matches!(scope, "parser" | "lexer"),
            GrammarKind::TreeParser => scope == "treeparser",
        }
    }

    /// Whether syntactic predicate fragments use the base templates.
    fn use_base_templates_for_syn_pred_fragments(&self) -> bool {
        true
    }

    fn cyclic_dfa_placement(&self) -> DfaPlacement {
        DfaPlacement::Separate
    }

    /// Hook run once per compilation, after analysis and before emission.
    fn post_analysis(&self, _grammar: &mut Grammar) {}
}

/// Supported output languages.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TargetKind {
    #[default]
    Java,
    Apex,
    Delphi,
}

impl TargetKind {
    pub const ALL: [TargetKind; 3] = [TargetKind::Java, TargetKind::Apex, TargetKind::Delphi];

    pub const fn name(self) -> &'static str {
        match self {
            TargetKind::Java => "Java",
            TargetKind::Apex => "Apex",
            TargetKind::Delphi => "Delphi",
        }
    }

    /// Create a fresh target for one compilation run.
    pub fn create(self) -> Box<dyn Target> {
        match self {
            TargetKind::Java => Box::new(JavaTarget::new()),
            TargetKind::Apex => Box::new(ApexTarget::new()),
            TargetKind::Delphi => Box::new(DelphiTarget::new()),
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A target name that matches no [`TargetKind`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown target language '{0}' (supported: Java, Apex, Delphi)")]
pub struct UnknownTarget(pub String);

impl FromStr for TargetKind {
    type Err = UnknownTarget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownTarget(s.to_owned()))
    }
}
