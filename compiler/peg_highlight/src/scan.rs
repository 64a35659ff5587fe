//! Whole-document scanning and range clipping.

use peg_ir::{Span, Style, TokenList};
use peg_lexer::{tokenize, Document, LexIssue};
use peg_parse::{parse_grammar, ParseIssue};
use tracing::debug;

/// One token of a range scan, clipped to the requested window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StyledSpan {
    pub offset: u32,
    pub length: u32,
    pub style: Option<Style>,
    /// Set on the trailing end-of-file entry only.
    pub is_eof: bool,
}

/// Tokens and diagnostics from one full scan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Analysis {
    pub tokens: TokenList,
    pub lex_issues: Vec<LexIssue>,
    pub parse_issues: Vec<ParseIssue>,
}

/// Tokenize `doc` and run the grammar pass, keeping every diagnostic.
pub fn analyze<D: Document + ?Sized>(doc: &D) -> Analysis {
    let lexed = tokenize(doc);
    let mut tokens = lexed.tokens;
    let parse_issues = parse_grammar(&mut tokens);
    debug!(
        tokens = tokens.len(),
        lex_issues = lexed.issues.len(),
        parse_issues = parse_issues.len(),
        "analyzed document"
    );
    Analysis {
        tokens,
        lex_issues: lexed.issues,
        parse_issues,
    }
}

/// Tokenize `doc` and restyle by grammar context.
pub fn parse_whole_document<D: Document + ?Sized>(doc: &D) -> TokenList {
    analyze(doc).tokens
}

/// Styled tokens of a full scan, clipped to `[offset, offset + length)`.
///
/// Tokens ending at or before `offset` are left out. Straddling tokens are
/// truncated, tokens past the window shrink to zero length at its end, and
/// the end-of-file entry is always last. A window running past the end of
/// the document is clamped to it.
pub fn scan_range<D: Document + ?Sized>(doc: &D, offset: u32, length: u32) -> Vec<StyledSpan> {
    let doc_len = doc.len();
    let start = offset.min(doc_len);
    let window = Span::new(start, offset.saturating_add(length).min(doc_len));

    let tokens = parse_whole_document(doc);
    tokens
        .iter()
        .filter(|token| token.is_eof() || token.span.end > window.start)
        .map(|token| {
            let clipped = token.span.clip_to(window);
            StyledSpan {
                offset: clipped.start,
                length: clipped.len(),
                style: token.style,
                is_eof: token.is_eof(),
            }
        })
        .collect()
}
