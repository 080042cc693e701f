//! Delphi (Object Pascal).
//!
//! Pascal strings have no backslash escapes. A quote inside a string is
//! doubled and control characters are written as `#nn` character constants
//! juxtaposed with the quoted runs: `'a'#10'b'`. Grammar literals are
//! therefore decoded first and re-encoded from scratch.

use std::fmt::Write;

use quill_grammar::literal;

use crate::{EscapeTable, Target, TargetKind};

const QUOTE: char = '\'';

#[derive(Debug)]
pub struct DelphiTarget {
    escapes: EscapeTable,
}

impl DelphiTarget {
    pub fn new() -> Self {
        DelphiTarget {
            escapes: EscapeTable::empty().with(QUOTE, "''"),
        }
    }

    /// A complete Pascal literal for `value`.
    fn quoted(&self, value: &str) -> String {
        let mut out = String::with_capacity(value.len() + 2);
        let mut in_run = false;
        for c in value.chars() {
            if is_control(c) {
                if in_run {
                    out.push(QUOTE);
                    in_run = false;
                }
                // Writing to a String is infallible
                let _ = write!(out, "#{}", u32::from(c));
            } else {
                if !in_run {
                    out.push(QUOTE);
                    in_run = true;
                }
                self.push_escaped(&mut out, c);
            }
        }
        if in_run {
            out.push(QUOTE);
        } else if out.is_empty() {
            out.push(QUOTE);
            out.push(QUOTE);
        }
        out
    }

    /// The body of a Pascal literal for `value`, to be placed between
    /// quotes by the caller. Control characters close and reopen the run.
    fn unquoted(&self, value: &str) -> String {
        let mut out = String::with_capacity(value.len());
        for c in value.chars() {
            if is_control(c) {
                // Writing to a String is infallible
                let _ = write!(out, "'#{}'", u32::from(c));
            } else {
                self.push_escaped(&mut out, c);
            }
        }
        out
    }

    fn push_escaped(&self, out: &mut String, c: char) {
        match self.escapes.lookup(c) {
            Some(escape) => out.push_str(escape),
            None => out.push(c),
        }
    }
}

/// Characters below space have no printable form in a Pascal string.
fn is_control(c: char) -> bool {
    u32::from(c) < 0x20
}

impl Default for DelphiTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl Target for DelphiTarget {
    fn kind(&self) -> TargetKind {
        TargetKind::Delphi
    }

    fn quote_char(&self) -> char {
        QUOTE
    }

    fn escape_table(&self) -> &EscapeTable {
        &self.escapes
    }

    fn string_literal_from_grammar(&self, literal: &str) -> String {
        self.quoted(&literal::unescape_grammar_literal(literal))
    }

    fn string_literal_from_raw(&self, text: &str, quoted: bool) -> String {
        if quoted {
            self.quoted(text)
        } else {
            self.unquoted(text)
        }
    }

    fn char_literal_from_grammar(&self, literal: &str) -> String {
        match literal::char_value_of_grammar_literal(literal) {
            Some(c) => self.quoted(c.encode_utf8(&mut [0; 4])),
            None => "#0".to_owned(),
        }
    }

    fn encode_int_as_char_escape(&self, value: u32) -> String {
        format!("#{value}")
    }
}
