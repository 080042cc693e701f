//! Token vocabulary shared by a grammar and its delegates.

use std::fmt;

use rustc_hash::FxHashMap;

/// Token type number.
///
/// User-defined types start at [`TokenType::MIN`]; the values below it are
/// reserved for the runtime (end of input, tree navigation).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct TokenType(i32);

impl TokenType {
    /// End of input.
    pub const EOF: TokenType = TokenType(-1);

    /// First type handed out by [`Vocabulary::define`].
    pub const MIN: TokenType = TokenType(4);

    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        TokenType(raw)
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl fmt::Debug for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenType({})", self.0)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bidirectional mapping between token types and display names.
///
/// Literal tokens are named by their grammar literal (`'a'`), named tokens
/// by their identifier (`ID`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Vocabulary {
    names: Vec<String>,
    by_name: FxHashMap<String, TokenType>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define `name`, returning its token type. Defining a name twice
    /// returns the original type.
    pub fn define(&mut self, name: &str) -> TokenType {
        if let Some(&ttype) = self.by_name.get(name) {
            return ttype;
        }
        let offset = i32::try_from(self.names.len())
            .unwrap_or_else(|_| panic!("token vocabulary overflow defining {name}"));
        let ttype = TokenType(TokenType::MIN.0 + offset);
        self.names.push(name.to_owned());
        self.by_name.insert(name.to_owned(), ttype);
        ttype
    }

    pub fn token_type(&self, name: &str) -> Option<TokenType> {
        self.by_name.get(name).copied()
    }

    /// Display name of `ttype`; `EOF` for end of input.
    pub fn display_name(&self, ttype: TokenType) -> Option<&str> {
        if ttype == TokenType::EOF {
            return Some("EOF");
        }
        let index = usize::try_from(ttype.0.checked_sub(TokenType::MIN.0)?).ok()?;
        self.names.get(index).map(String::as_str)
    }

    /// All defined tokens in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenType, &str)> + '_ {
        (TokenType::MIN.0..)
            .zip(&self.names)
            .map(|(raw, name)| (TokenType(raw), name.as_str()))
    }

    /// Tokens defined by a grammar literal, in definition order.
    pub fn literals(&self) -> impl Iterator<Item = (TokenType, &str)> + '_ {
        self.iter()
            .filter(|(_, name)| name.starts_with(crate::literal::GRAMMAR_QUOTE))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
