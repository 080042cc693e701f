//! Literal-driven lexer.
//!
//! Matches the literal tokens of a grammar's vocabulary against the input,
//! longest match first. When two literals match the same length, the one
//! defined first wins.

use quill_grammar::{literal, Grammar, TokenType};

use crate::{RecognitionError, Token};

#[derive(Clone, Debug)]
pub struct Lexer {
    /// Decoded literal values, in token definition order.
    literals: Vec<(TokenType, String)>,
}

impl Lexer {
    pub fn new(grammar: &Grammar) -> Self {
        let literals = grammar
            .vocabulary()
            .literals()
            .map(|(ttype, lit)| (ttype, literal::unescape_grammar_literal(lit)))
            .filter(|(_, value)| !value.is_empty())
            .collect();
        Lexer { literals }
    }

    /// Tokenize `input`. The token list always ends with EOF; characters no
    /// literal can start with are reported and skipped.
    pub fn tokenize(&self, input: &str) -> (Vec<Token>, Vec<RecognitionError>) {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();
        let mut rest = input;
        let mut line = 1;
        let mut column = 0;

        while let Some(c) = rest.chars().next() {
            let matched = self.longest_match(rest);
            let text = match matched {
                Some((ttype, len)) => {
                    let text = &rest[..len];
                    tokens.push(Token::new(ttype, text, line, column));
                    text
                }
                None => {
                    tracing::trace!(line, column, ?c, "no token starts here");
                    errors.push(RecognitionError::no_viable_char(c, line, column));
                    &rest[..c.len_utf8()]
                }
            };
            for consumed in text.chars() {
                if consumed == '\n' {
                    line += 1;
                    column = 0;
                } else {
                    column += 1;
                }
            }
            rest = &rest[text.len()..];
        }

        tokens.push(Token::eof(line, column));
        (tokens, errors)
    }

    /// Longest literal that prefixes `rest`, as `(type, byte length)`.
    fn longest_match(&self, rest: &str) -> Option<(TokenType, usize)> {
        let mut best: Option<(TokenType, usize)> = None;
        for (ttype, value) in &self.literals {
            if rest.starts_with(value.as_str()) && best.map_or(true, |(_, len)| value.len() > len) {
                best = Some((*ttype, value.len()));
            }
        }
        best
    }
}
