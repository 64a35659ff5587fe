//! Token types for the grammar lexer.

mod kind;
mod list;
mod tag;

pub use kind::TokenKind;
pub use list::TokenList;
pub use tag::TokenTag;

use std::fmt;

use crate::{Span, Style};

/// A token with its span and current display style.
///
/// `style` is `None` for unstyled tokens (whitespace, unknown grammar
/// input, the end-of-file marker).
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub style: Option<Style>,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span, style: Option<Style>) -> Self {
        Token { kind, span, style }
    }

    #[inline]
    pub fn tag(&self) -> TokenTag {
        self.kind.tag()
    }

    /// Identifier text, if this token is a grammar or code identifier.
    #[inline]
    pub fn text(&self) -> Option<&str> {
        self.kind.text()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)?;
        if let Some(style) = self.style {
            write!(f, " [{style}]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
