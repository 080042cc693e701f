//! Grammar literal decoding.
//!
//! Grammar literals are always delimited by single quotes and use a small
//! backslash escape vocabulary: `\n \r \t \b \f \\ \' \"` and `\uXXXX`.
//! Any other escaped character decodes to itself.

/// Delimiter of every literal in grammar notation.
pub const GRAMMAR_QUOTE: char = '\'';

/// Escape introducer of grammar notation.
pub const ESCAPE: char = '\\';

/// Strip the delimiters from a grammar literal.
///
/// The literal must open and close with [`GRAMMAR_QUOTE`]. Anything else is
/// a contract violation.
pub fn interior(literal: &str) -> &str {
    let mut chars = literal.chars();
    let (Some(GRAMMAR_QUOTE), Some(GRAMMAR_QUOTE)) = (chars.next(), chars.next_back()) else {
        panic!("grammar literal {literal:?} is missing its delimiters");
    };
    chars.as_str()
}

/// Decode a grammar literal to the characters it denotes.
///
/// `'a\nb'` becomes the three characters `a`, newline, `b`.
pub fn unescape_grammar_literal(literal: &str) -> String {
    let body = interior(literal);
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c != ESCAPE {
            out.push(c);
            continue;
        }
        let Some(escaped) = chars.next() else {
            panic!("grammar literal {literal:?} ends with a dangling escape");
        };
        match escaped {
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'u' => match decode_unicode_escape(chars.as_str()) {
                Some(decoded) => {
                    out.push(decoded);
                    // Skip the four hex digits just decoded.
                    chars.nth(3);
                }
                None => out.push('u'),
            },
            other => out.push(other),
        }
    }

    out
}

/// Value of a single-character grammar literal such as `'x'` or `'\n'`.
///
/// Returns `None` when the literal does not denote exactly one character.
pub fn char_value_of_grammar_literal(literal: &str) -> Option<char> {
    let decoded = unescape_grammar_literal(literal);
    let mut chars = decoded.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Decode the `XXXX` following a `\u` introducer.
fn decode_unicode_escape(rest: &str) -> Option<char> {
    let digits = rest.get(..4)?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let code = u32::from_str_radix(digits, 16).ok()?;
    char::from_u32(code)
}
