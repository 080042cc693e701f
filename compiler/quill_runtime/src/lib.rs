//! Reference recognizer for Quill grammars.
//!
//! Generated parsers report syntax errors in a fixed, byte-for-byte stable
//! format:
//!
//! ```text
//! line 1:1 no viable alternative at input 'e'
//! line 1:4 mismatched input 'x' expecting 'b'
//! line 2:0 no viable alternative at character '#'
//! ```
//!
//! Lines are 1-based, columns 0-based. This crate interprets an analysed
//! [`Grammar`](quill_grammar::Grammar) directly and produces exactly those
//! messages, so the output of a parser generated by any target can be
//! checked against it.

mod error;
mod lexer;
mod recognizer;
mod token;

pub use error::{token_error_display, RecognitionError, UnknownRule};
pub use lexer::Lexer;
pub use recognizer::{ParseOutcome, Recognizer};
pub use token::Token;
