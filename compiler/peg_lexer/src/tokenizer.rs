//! Two-phase tokenizer: grammar text and embedded code snippets.
//!
//! One [`Tokenizer`] owns the cursor for the whole document. The grammar
//! phase (`grammar.rs`) dispatches on the first character of each token;
//! on `{` it hands the same cursor to the code phase (`code.rs`), which
//! runs until brace depth returns to zero or the input ends.
//!
//! # Output
//!
//! Tokens are contiguous and cover `[0, len)` exactly, followed by a
//! zero-length `Eof` token at `len`. Every token gets its initial style
//! here; the semantic pass may overwrite styles later but never adds,
//! removes or reorders tokens.
//!
//! Malformed input never stops the scan. Each problem is recorded as a
//! [`LexIssue`] next to the best-effort token.

mod code;
mod grammar;

use peg_ir::{Span, Style, Token, TokenKind, TokenList};
use tracing::debug;

use crate::cursor::Cursor;
use crate::document::{encoding_issues, Document};
use crate::{LexIssue, LexIssueKind};

/// Result of tokenizing one document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    pub tokens: TokenList,
    /// Issues in document order.
    pub issues: Vec<LexIssue>,
}

/// Preprocessor tracking inside a code snippet.
///
/// `StartOfLine -> GotPound -> {GotInclude | Other}`; a line break returns
/// to `StartOfLine`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum IncludeState {
    StartOfLine,
    GotPound,
    GotInclude,
    Other,
}

/// Stateful scanner over one document.
pub struct Tokenizer<'a, D: ?Sized> {
    cursor: Cursor<'a, D>,
    tokens: TokenList,
    issues: Vec<LexIssue>,
    /// Open braces in the current snippet; zero in grammar text.
    code_depth: u32,
    include_state: IncludeState,
    /// Index of the most recent single `#`, restyled when a directive follows.
    last_pound: Option<usize>,
}

impl<'a, D: Document + ?Sized> Tokenizer<'a, D> {
    pub fn new(doc: &'a D) -> Self {
        Tokenizer {
            cursor: Cursor::new(doc),
            tokens: TokenList::with_capacity(doc.len() as usize / 2 + 1),
            issues: encoding_issues(doc),
            code_depth: 0,
            include_state: IncludeState::Other,
            last_pound: None,
        }
    }

    /// Scan the whole document.
    pub fn run(mut self) -> LexOutput {
        while !self.cursor.is_eof() {
            self.next_token();
        }
        let end = self.cursor.pos();
        self.tokens
            .push(Token::new(TokenKind::Eof, Span::point(end), None));

        self.issues.sort_by_key(|issue| issue.span.start);
        debug!(
            len = end,
            tokens = self.tokens.len(),
            issues = self.issues.len(),
            "tokenized document"
        );
        LexOutput {
            tokens: self.tokens,
            issues: self.issues,
        }
    }

    /// Push a token spanning `start` to the cursor and return its index.
    #[inline]
    fn push(&mut self, kind: TokenKind, start: u32, style: Option<Style>) -> usize {
        let span = Span::new(start, self.cursor.pos());
        self.tokens.push(Token::new(kind, span, style))
    }

    /// Record an issue spanning `start` to the cursor.
    fn issue(&mut self, kind: LexIssueKind, start: u32) {
        self.issues
            .push(LexIssue::new(kind, Span::new(start, self.cursor.pos())));
    }

    /// Consume a block comment body after the opening `/*`.
    ///
    /// Closes only on a `/` directly after a `*`, so `/*/` does not close.
    fn block_comment_body(&mut self, start: u32) {
        loop {
            if self.cursor.is_eof() {
                self.issue(LexIssueKind::UnterminatedBlockComment, start);
                return;
            }
            let c = self.cursor.current();
            self.cursor.advance();
            if c == '*' && self.cursor.eat('/') {
                return;
            }
        }
    }
}
