//! Recognition errors and their message format.

use crate::Token;

/// A syntax error as reported by a generated recognizer.
///
/// `Display` is the exact text written to stderr, without the trailing
/// newline.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecognitionError {
    /// No alternative of a decision can continue with `found`.
    #[error("line {line}:{column} no viable alternative at input {found}")]
    NoViableAlt { line: u32, column: u32, found: String },

    /// The predicted alternative expected a different token.
    #[error("line {line}:{column} mismatched input {found} expecting {expecting}")]
    MismatchedToken {
        line: u32,
        column: u32,
        found: String,
        expecting: String,
    },

    /// The lexer could not start any token at this character.
    #[error("line {line}:{column} no viable alternative at character {found}")]
    NoViableChar { line: u32, column: u32, found: String },
}

impl RecognitionError {
    pub fn no_viable_alt(token: &Token) -> Self {
        RecognitionError::NoViableAlt {
            line: token.line,
            column: token.column,
            found: token_error_display(token),
        }
    }

    pub fn mismatched(token: &Token, expecting: impl Into<String>) -> Self {
        RecognitionError::MismatchedToken {
            line: token.line,
            column: token.column,
            found: token_error_display(token),
            expecting: expecting.into(),
        }
    }

    pub fn no_viable_char(c: char, line: u32, column: u32) -> Self {
        RecognitionError::NoViableChar {
            line,
            column,
            found: quote_display(c.encode_utf8(&mut [0; 4])),
        }
    }

    /// `(line, column)` of the offending input.
    pub fn position(&self) -> (u32, u32) {
        match self {
            RecognitionError::NoViableAlt { line, column, .. }
            | RecognitionError::MismatchedToken { line, column, .. }
            | RecognitionError::NoViableChar { line, column, .. } => (*line, *column),
        }
    }
}

/// How a token appears in error messages: quoted text with line breaks and
/// tabs made visible, or `<EOF>`.
pub fn token_error_display(token: &Token) -> String {
    if token.is_eof() {
        return "<EOF>".to_owned();
    }
    quote_display(&token.text)
}

fn quote_display(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for c in text.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// The requested start rule does not exist in the grammar.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("no rule named '{0}'")]
pub struct UnknownRule(pub String);
