//! Semantic pass for PEG grammar files.
//!
//! Walks the lexed token list once with a recursive-descent recognizer and
//! restyles tokens in place according to grammar context: rule names, type
//! names, template and result variables. The pass never fails; malformed
//! constructs are abandoned and the walk resynchronizes at the next
//! top-level construct, leaving a [`ParseIssue`] behind.

mod grammar;
mod issue;
mod outcome;
mod recovery;
mod source;
mod stack;

pub use issue::{ParseContext, ParseIssue};
pub use outcome::ParseOutcome;
pub use recovery::TokenSet;
pub use source::TokenSource;

use peg_ir::{Span, Style, TokenList, TokenTag};

/// Parser state.
pub struct GrammarParser<'a> {
    source: TokenSource<'a>,
    issues: Vec<ParseIssue>,
}

impl<'a> GrammarParser<'a> {
    /// Create a parser over a freshly lexed token list.
    pub fn new(tokens: &'a mut TokenList) -> Self {
        GrammarParser {
            source: TokenSource::new(tokens),
            issues: Vec::new(),
        }
    }

    // Source delegation.

    #[inline]
    fn peek_tag(&self) -> TokenTag {
        self.source.peek_tag()
    }

    #[inline]
    fn peek_index(&self) -> usize {
        self.source.peek_index()
    }

    #[inline]
    fn peek_span(&self) -> Span {
        self.source.peek_span()
    }

    #[inline]
    fn check(&self, tag: TokenTag) -> bool {
        self.source.check(tag)
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.source.is_at_end()
    }

    #[inline]
    fn get(&mut self) -> usize {
        self.source.get()
    }

    #[inline]
    fn get_styled(&mut self, style: Style) -> usize {
        self.source.get_styled(style)
    }

    #[inline]
    fn eat(&mut self, tag: TokenTag) -> Option<usize> {
        self.source.eat(tag)
    }

    #[inline]
    fn restyle(&mut self, index: usize, style: Option<Style>) {
        self.source.restyle(index, style);
    }
}

/// Restyle `tokens` by grammar context and return the structural issues.
pub fn parse_grammar(tokens: &mut TokenList) -> Vec<ParseIssue> {
    GrammarParser::new(tokens).parse()
}
