//! Analysed grammar model for the Quill parser generator.
//!
//! This crate holds the grammar as it looks once structural analysis has
//! finished: the locally defined rules, the grammars imported through
//! delegation, and the token vocabulary. Code generation targets read it
//! and, during their post-analysis hook, append per-rule metadata.
//!
//! # Architecture
//!
//! ```text
//! GrammarBuilder ──build()──► Grammar
//!                               │
//!                               ├── rules: Vec<Rule>          (local)
//!                               ├── delegates: Vec<Grammar>   (imported)
//!                               └── vocabulary: Vocabulary    (shared)
//! ```
//!
//! Literals are stored in grammar notation (`'a'`, single-quoted, with the
//! grammar's own escapes). The [`literal`] module decodes them.

mod grammar;
pub mod literal;
mod rule;
mod vocabulary;

pub use grammar::{Grammar, GrammarBuilder, GrammarKind};
pub use rule::{Alternative, Element, Repeat, Rule, RuleMetadata};
pub use vocabulary::{TokenType, Vocabulary};
