//! Literal transcoding from grammar notation to target syntax.
//!
//! Two entry points:
//!
//! - [`from_grammar_literal`] rewrites a literal that is still in grammar
//!   notation (`'a\n"'`) into the target's literal syntax, keeping the
//!   escapes the target understands and dropping the ones it does not.
//! - [`from_raw_string`] escapes an arbitrary character sequence through a
//!   target's [`EscapeTable`].
//!
//! Both are single left-to-right passes that allocate only the result.

use std::fmt::Write;

use quill_grammar::literal::{self, ESCAPE};

use crate::EscapeTable;

/// Escaped characters a C-family target keeps as-is: its own quote
/// character plus `n r t b f \ u`. The set is closed; every other escape
/// is dropped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PassThrough {
    quote: char,
}

impl PassThrough {
    pub const fn for_quote(quote: char) -> Self {
        PassThrough { quote }
    }

    #[inline]
    pub fn contains(self, escaped: char) -> bool {
        escaped == self.quote || matches!(escaped, 'n' | 'r' | 't' | 'b' | 'f' | '\\' | 'u')
    }
}

/// Convert a grammar literal such as `'a\n"'` into a target literal
/// delimited by `quote`.
///
/// An escape whose character is in `pass_through` survives unchanged; any
/// other escape loses its backslash. An unescaped `quote` in the interior
/// gains one.
pub fn from_grammar_literal(literal: &str, quote: char, pass_through: PassThrough) -> String {
    let body = literal::interior(literal);
    let mut out = String::with_capacity(body.len() + 2);
    out.push(quote);

    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c == ESCAPE {
            let Some(escaped) = chars.next() else {
                panic!("grammar literal {literal:?} ends with a dangling escape");
            };
            if pass_through.contains(escaped) {
                out.push(ESCAPE);
            }
            out.push(escaped);
        } else {
            if c == quote {
                out.push(ESCAPE);
            }
            out.push(c);
        }
    }

    out.push(quote);
    out
}

/// Escape `text` through `table`, optionally wrapping it in `quote`.
///
/// Characters for which `verbatim` returns `true` bypass the table. Any
/// character without a table entry is emitted unchanged.
pub fn from_raw_string<V>(
    text: &str,
    table: &EscapeTable,
    quote: char,
    quoted: bool,
    verbatim: V,
) -> String
where
    V: Fn(char) -> bool,
{
    let mut out = String::with_capacity(text.len() + 2);
    if quoted {
        out.push(quote);
    }
    for c in text.chars() {
        match table.lookup(c) {
            Some(escape) if !verbatim(c) => out.push_str(escape),
            _ => out.push(c),
        }
    }
    if quoted {
        out.push(quote);
    }
    out
}

/// Target character literal (always `'`-delimited) for a one-character
/// grammar literal.
///
/// Uses the table escape when there is one, printable ASCII as-is, and
/// `\uXXXX` otherwise. Literals that do not denote exactly one character
/// become the NUL literal.
pub fn char_literal_from_grammar(literal: &str, table: &EscapeTable) -> String {
    let Some(c) = literal::char_value_of_grammar_literal(literal) else {
        return "'\\u0000'".to_owned();
    };

    let mut out = String::with_capacity(8);
    out.push('\'');
    if let Some(escape) = table.lookup(c) {
        out.push_str(escape);
    } else if c.is_ascii() && !c.is_ascii_control() {
        out.push(c);
    } else {
        let mut units = [0u16; 2];
        for unit in c.encode_utf16(&mut units) {
            // Writing to a String is infallible
            let _ = write!(out, "\\u{unit:04X}");
        }
    }
    out.push('\'');
    out
}

/// Escape for a character value in generated tables: octal up to 127,
/// four lower-case hex digits above.
pub fn encode_int_as_char_escape(value: u32) -> String {
    if value <= 127 {
        format!("\\{value:o}")
    } else {
        format!("\\u{:04x}", value & 0xFFFF)
    }
}
