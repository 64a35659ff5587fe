//! Trivia-skipping cursor over a mutable token list.
//!
//! The semantic pass only sees grammar tokens: whitespace, comments and
//! every token inside a code snippet (the snippet end included) are
//! skipped. Consumed tokens are addressed by index into the underlying
//! [`TokenList`], so restyling through the source changes the list itself.

use peg_ir::{Span, Style, Token, TokenList, TokenTag};
use tracing::trace;

/// Filtering cursor used by the grammar parser.
pub struct TokenSource<'a> {
    tokens: &'a mut TokenList,
    /// Index of the next non-trivia token (or `tokens.len()`).
    pos: usize,
}

impl<'a> TokenSource<'a> {
    /// Create a source positioned on the first non-trivia token.
    pub fn new(tokens: &'a mut TokenList) -> Self {
        let mut source = TokenSource { tokens, pos: 0 };
        source.skip_trivia();
        source
    }

    fn skip_trivia(&mut self) {
        while self.pos < self.tokens.len() && self.tokens.tag(self.pos).is_trivia() {
            self.pos += 1;
        }
    }

    /// Index of the next non-trivia token.
    #[inline]
    pub fn peek_index(&self) -> usize {
        self.pos
    }

    /// Tag of the next non-trivia token; `Eof` once exhausted.
    #[inline]
    pub fn peek_tag(&self) -> TokenTag {
        self.tokens.tag(self.pos)
    }

    /// The next non-trivia token, if any.
    #[inline]
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Span of the next non-trivia token, or a point at the end.
    pub fn peek_span(&self) -> Span {
        match self.peek() {
            Some(token) => token.span,
            None => {
                let end = self.tokens.iter().last().map_or(0, |t| t.span.end);
                Span::point(end)
            }
        }
    }

    #[inline]
    pub fn check(&self, tag: TokenTag) -> bool {
        self.peek_tag() == tag
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.check(TokenTag::Eof)
    }

    /// Consume the next non-trivia token and return its index.
    ///
    /// The end-of-file token is never consumed: at the end this keeps
    /// returning its index.
    pub fn get(&mut self) -> usize {
        let current = self.pos;
        if !self.is_at_end() {
            trace!(pos = current, tag = self.peek_tag().name(), "get");
            self.pos += 1;
            self.skip_trivia();
        }
        current
    }

    /// Consume the next token and give it `style`.
    pub fn get_styled(&mut self, style: Style) -> usize {
        let index = self.get();
        self.restyle(index, Some(style));
        index
    }

    /// Consume the next token if it has `tag`.
    pub fn eat(&mut self, tag: TokenTag) -> Option<usize> {
        if self.check(tag) {
            Some(self.get())
        } else {
            None
        }
    }

    /// Overwrite the style of an already-consumed (or peeked) token.
    #[inline]
    pub fn restyle(&mut self, index: usize, style: Option<Style>) {
        self.tokens.set_style(index, style);
    }
}

#[cfg(test)]
mod tests;
