//! Tokenizer for PEG grammar files with embedded C/C++ code snippets.
//!
//! The lexer works on UTF-16 code units through the [`Document`] trait and
//! produces a [`LexOutput`]: a [`TokenList`](peg_ir::TokenList) covering the
//! whole document plus any [`LexIssue`]s. Scanning is total; every input,
//! including the empty document, yields a token list ending in `Eof`.
//!
//! # Architecture
//!
//! ```text
//! Document ──▶ Cursor ──▶ Tokenizer ──┬─ grammar phase
//!                                     └─ code phase ({ ... })
//! ```

mod cursor;
mod document;
mod keywords;
mod lex_issue;
mod punctuator;
mod tokenizer;

pub use cursor::{Cursor, EOF_CHAR};
pub use document::{encoding_issues, Document, Utf16Document};
pub use lex_issue::{LexIssue, LexIssueKind};
pub use tokenizer::{LexOutput, Tokenizer};

/// Tokenize a whole document.
pub fn tokenize<D: Document + ?Sized>(doc: &D) -> LexOutput {
    Tokenizer::new(doc).run()
}
