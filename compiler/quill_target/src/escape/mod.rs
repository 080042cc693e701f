//! Per-target escape tables.
//!
//! An [`EscapeTable`] maps a character code to the escape sequence a target
//! language needs in place of that character. Tables are assembled once when
//! a target is created and are read-only afterwards: [`EscapeTable::with`]
//! consumes the table, so overrides can only happen while building it.

/// Number of character codes an escape table covers (`0..ESCAPE_DOMAIN`).
pub const ESCAPE_DOMAIN: usize = 256;

/// Escape sequences indexed by character code.
#[derive(Clone, PartialEq, Eq)]
pub struct EscapeTable {
    entries: [Option<&'static str>; ESCAPE_DOMAIN],
}

impl EscapeTable {
    /// A table with no entries: every character is emitted verbatim.
    pub const fn empty() -> Self {
        EscapeTable {
            entries: [None; ESCAPE_DOMAIN],
        }
    }

    /// The language-agnostic default shared by C-family targets.
    pub fn c_family() -> Self {
        Self::empty()
            .with('\n', "\\n")
            .with('\r', "\\r")
            .with('\t', "\\t")
            .with('\u{8}', "\\b")
            .with('\u{c}', "\\f")
            .with('\\', "\\\\")
            .with('\'', "\\'")
            .with('"', "\\\"")
    }

    /// Set the escape for `c`, replacing any previous entry.
    #[must_use]
    pub fn with(mut self, c: char, escape: &'static str) -> Self {
        let code = c as usize;
        assert!(
            code < ESCAPE_DOMAIN,
            "escape table entry for {c:?} is outside the table domain"
        );
        self.entries[code] = Some(escape);
        self
    }

    /// Whether `code` lies inside the table domain.
    #[inline]
    pub const fn in_domain(code: u32) -> bool {
        (code as usize) < ESCAPE_DOMAIN
    }

    /// Escape sequence for character code `code`.
    ///
    /// Looking up a code outside the domain is a programming error.
    #[inline]
    pub fn escape_for(&self, code: u32) -> Option<&'static str> {
        assert!(
            Self::in_domain(code),
            "escape table lookup for code {code} outside 0..{ESCAPE_DOMAIN}"
        );
        self.entries[code as usize]
    }

    /// Escape sequence for `c`, or `None` when `c` has no entry or lies
    /// outside the domain.
    #[inline]
    pub fn lookup(&self, c: char) -> Option<&'static str> {
        let code = u32::from(c);
        if Self::in_domain(code) {
            self.escape_for(code)
        } else {
            None
        }
    }

    /// Number of characters with an escape.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for EscapeTable {
    fn default() -> Self {
        Self::c_family()
    }
}

impl std::fmt::Debug for EscapeTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (code, escape) in self.entries.iter().enumerate() {
            if let Some(escape) = escape {
                map.entry(&code, escape);
            }
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests;
