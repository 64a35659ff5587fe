//! Token list owned by one scan.

use std::fmt;
use std::ops::Index;

use super::{Token, TokenTag};
use crate::Style;

/// The flat token stream of one document scan.
///
/// Keeps a parallel `tags` array so the semantic pass can test token
/// categories without touching the `TokenKind` payload. Tokens are only
/// ever appended; after lexing, [`TokenList::set_style`] is the single
/// mutation, so `tags[i] == tokens[i].tag()` holds for every `i`.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct TokenList {
    tokens: Vec<Token>,
    tags: Vec<TokenTag>,
}

impl TokenList {
    /// Create a new empty token list.
    #[inline]
    pub fn new() -> Self {
        TokenList {
            tokens: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Create a new token list with pre-allocated capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
            tags: Vec::with_capacity(capacity),
        }
    }

    /// Append a token and return its index.
    #[inline]
    pub fn push(&mut self, token: Token) -> usize {
        let index = self.tokens.len();
        self.tags.push(token.tag());
        self.tokens.push(token);
        index
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Tag of the token at `index`, or `Eof` past the end.
    #[inline]
    pub fn tag(&self, index: usize) -> TokenTag {
        self.tags.get(index).copied().unwrap_or(TokenTag::Eof)
    }

    /// Parallel tag array.
    #[inline]
    pub fn tags(&self) -> &[TokenTag] {
        &self.tags
    }

    /// Overwrite the style of the token at `index`.
    ///
    /// Out-of-range indices are ignored.
    #[inline]
    pub fn set_style(&mut self, index: usize, style: Option<Style>) {
        if let Some(token) = self.tokens.get_mut(index) {
            token.style = style;
        }
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.tokens).finish()
    }
}
