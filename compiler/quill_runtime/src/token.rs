//! Tokens produced by the reference lexer.

use quill_grammar::TokenType;

/// A matched token and where it starts.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub ttype: TokenType,
    pub text: String,
    /// 1-based line.
    pub line: u32,
    /// 0-based column within the line.
    pub column: u32,
}

impl Token {
    pub fn new(ttype: TokenType, text: impl Into<String>, line: u32, column: u32) -> Self {
        Token {
            ttype,
            text: text.into(),
            line,
            column,
        }
    }

    /// End-of-input marker at the given position.
    pub fn eof(line: u32, column: u32) -> Self {
        Token::new(TokenType::EOF, "<EOF>", line, column)
    }

    pub fn is_eof(&self) -> bool {
        self.ttype == TokenType::EOF
    }
}
