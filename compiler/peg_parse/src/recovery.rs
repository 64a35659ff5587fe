//! Token sets and resynchronization targets.
//!
//! Uses bitset-based O(1) membership testing over [`TokenTag`]
//! discriminants; every tag is below 64, so one `u64` covers them all.

use peg_ir::TokenTag;

/// A set of token tags.
///
/// # Example
/// ```
/// use peg_ir::TokenTag;
/// use peg_parse::TokenSet;
///
/// const REPEAT: TokenSet = TokenSet::new()
///     .with(TokenTag::QMark)
///     .with(TokenTag::Star)
///     .with(TokenTag::Plus);
///
/// assert!(REPEAT.contains(TokenTag::Star));
/// assert_eq!(REPEAT.format_expected(), "`?`, `+`, or `*`");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Create a token set containing a single tag.
    #[inline]
    pub const fn single(tag: TokenTag) -> Self {
        Self(1u64 << tag.index())
    }

    /// Add a tag to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, tag: TokenTag) -> Self {
        Self(self.0 | (1u64 << tag.index()))
    }

    #[inline]
    pub const fn contains(&self, tag: TokenTag) -> bool {
        (self.0 & (1u64 << tag.index())) != 0
    }

    /// Tags in this set, in discriminant order.
    pub fn iter(&self) -> impl Iterator<Item = TokenTag> + '_ {
        TokenTag::ALL.iter().copied().filter(|&tag| self.contains(tag))
    }

    /// Human-readable list for diagnostics: "`a`", "`a` or `b`",
    /// "`a`, `b`, or `c`".
    pub fn format_expected(&self) -> String {
        let names: Vec<&'static str> = self.iter().map(TokenTag::name).collect();

        match names.as_slice() {
            [] => "nothing".to_string(),
            [single] => format!("`{single}`"),
            [first, second] => format!("`{first}` or `{second}`"),
            [rest @ .., last] => {
                let rest_str = rest
                    .iter()
                    .map(|n| format!("`{n}`"))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{rest_str}, or `{last}`")
            }
        }
    }
}

/// Tokens that can begin a top-level construct. Resynchronization stops
/// in front of these (or right after a `;`).
pub const ITEM_START: TokenSet = TokenSet::new()
    .with(TokenTag::KwTypedef)
    .with(TokenTag::KwCode)
    .with(TokenTag::KwNamespace)
    .with(TokenTag::Ident)
    .with(TokenTag::Eof);

/// Tokens that end a sequence; anything else starts another term.
pub const SEQUENCE_STOP: TokenSet = TokenSet::new()
    .with(TokenTag::RParen)
    .with(TokenTag::Semicolon)
    .with(TokenTag::ColonColon)
    .with(TokenTag::Colon)
    .with(TokenTag::Comma)
    .with(TokenTag::Equal)
    .with(TokenTag::FSlash)
    .with(TokenTag::RAngle)
    .with(TokenTag::KwTypedef)
    .with(TokenTag::KwCode)
    .with(TokenTag::KwNamespace)
    .with(TokenTag::Unknown)
    .with(TokenTag::Eof);

/// Tokens that can begin a primary expression.
pub const PRIMARY_START: TokenSet = TokenSet::new()
    .with(TokenTag::LParen)
    .with(TokenTag::Ident)
    .with(TokenTag::KwEof)
    .with(TokenTag::String)
    .with(TokenTag::CharacterClass)
    .with(TokenTag::Amp)
    .with(TokenTag::EMark)
    .with(TokenTag::SnippetStart);

/// Postfix repetition operators.
pub const REPEAT_OPS: TokenSet = TokenSet::new()
    .with(TokenTag::QMark)
    .with(TokenTag::Star)
    .with(TokenTag::Plus);

/// What may follow `<` or `,` in a template list.
pub const TEMPLATE_ITEM: TokenSet = TokenSet::new()
    .with(TokenTag::KwTrue)
    .with(TokenTag::KwFalse)
    .with(TokenTag::Ident)
    .with(TokenTag::Comma)
    .with(TokenTag::RAngle);

#[cfg(test)]
mod tests;
