//! Lexical issues recorded while scanning.
//!
//! The lexer never fails: a malformed construct still yields a best-effort
//! token, and the problem is recorded here so an editor can surface it.

use peg_ir::Span;

/// A lexical problem at `span`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{kind} at {span}")]
pub struct LexIssue {
    pub kind: LexIssueKind,
    pub span: Span,
}

impl LexIssue {
    #[inline]
    pub fn new(kind: LexIssueKind, span: Span) -> Self {
        LexIssue { kind, span }
    }
}

/// What went wrong.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LexIssueKind {
    /// `/*` with no closing `*/`, in grammar text or a snippet.
    #[error("unterminated block comment")]
    UnterminatedBlockComment,
    /// Grammar string ended by a line break or end of input.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// `[` with no closing `]` on the same line.
    #[error("unterminated character class")]
    UnterminatedCharacterClass,
    #[error("unterminated string literal in code snippet")]
    UnterminatedCodeString,
    #[error("unterminated character literal in code snippet")]
    UnterminatedCodeChar,
    /// Raw string whose `)delimiter"` never appears.
    #[error("unterminated raw string literal")]
    UnterminatedRawString,
    /// `#include <...` or `#include "...` without its terminator.
    #[error("unterminated header name")]
    UnterminatedHeaderName,
    /// End of input inside `{ ... }`.
    #[error("unterminated code snippet")]
    UnterminatedSnippet,
    /// A surrogate code unit that is not part of a valid pair.
    #[error("lone UTF-16 surrogate")]
    LoneSurrogate,
}
