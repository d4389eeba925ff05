//! Token-list model of an element's class attribute.

use std::fmt;
use std::str::FromStr;

/// An element's class attribute as an ordered list of whitespace-free tokens.
///
/// Membership checks are whole-token: the token `"on"` is never found in a
/// list parsed from `"online"`. Queries match case-sensitively; insert and
/// remove treat an existing token that differs only in ASCII case as the same
/// token, matching the behavior of the markup convention this models.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw class attribute. Splits on any run of whitespace; an empty
    /// or all-whitespace input yields an empty list.
    pub fn parse(raw: &str) -> Self {
        Self {
            tokens: raw.split_whitespace().map(String::from).collect(),
        }
    }

    /// Case-sensitive whole-token membership.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    fn contains_ignore_case(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t.eq_ignore_ascii_case(token))
    }

    /// Append `token` unless a case-insensitive match is already present.
    /// Returns true if the list changed.
    pub fn insert(&mut self, token: &str) -> bool {
        if self.contains_ignore_case(token) {
            return false;
        }
        self.tokens.push(token.to_string());
        true
    }

    /// Remove every case-insensitive match of `token`.
    /// Returns true if anything was removed.
    pub fn remove(&mut self, token: &str) -> bool {
        let before = self.tokens.len();
        self.tokens.retain(|t| !t.eq_ignore_ascii_case(token));
        self.tokens.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for ClassList {
    /// Serializes as single-space-joined tokens, no surrounding whitespace.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}

impl FromStr for ClassList {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
