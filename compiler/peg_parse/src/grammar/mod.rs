//! Grammar recognition.
//!
//! # Module Structure
//!
//! - `item.rs`: type aliases, namespaces, top-level code blocks, rules
//! - `expr.rs`: alternation, sequence, repetition, primaries

mod expr;
mod item;

use peg_ir::TokenTag;
use tracing::debug;

use crate::recovery::ITEM_START;
use crate::{GrammarParser, ParseContext, ParseIssue, ParseOutcome, TokenSet};

impl GrammarParser<'_> {
    /// Walk every top-level construct, restyling as it goes.
    pub fn parse(mut self) -> Vec<ParseIssue> {
        while !self.is_at_end() {
            match self.peek_tag() {
                TokenTag::KwTypedef => self.type_alias(),
                TokenTag::KwCode => self.code_block(),
                TokenTag::KwNamespace => self.namespace(),
                TokenTag::Ident => self.rule(),
                _ => {
                    self.recover(ParseContext::Rule, TokenSet::single(TokenTag::Ident));
                }
            }
        }
        debug!(issues = self.issues.len(), "grammar pass finished");
        self.issues
    }

    /// Report the token at the cursor and resynchronize.
    pub(crate) fn recover(&mut self, context: ParseContext, expected: TokenSet) -> ParseOutcome {
        let issue = ParseIssue {
            span: self.peek_span(),
            found: self.peek_tag(),
            expected,
            context,
        };
        debug!(
            pos = self.peek_index(),
            found = issue.found.name(),
            context = %context,
            "resynchronizing"
        );
        self.issues.push(issue);
        self.skip_to_item_start();
        ParseOutcome::Recovered
    }

    /// Skip to the next top-level construct.
    ///
    /// Stops before a token that can start a construct, or right after a
    /// `;`. Returns the index of the first skipped token other than `;`.
    pub(crate) fn skip_to_item_start(&mut self) -> Option<usize> {
        let mut first_stray = None;
        while !ITEM_START.contains(self.peek_tag()) {
            let tag = self.peek_tag();
            let index = self.get();
            if tag == TokenTag::Semicolon {
                break;
            }
            first_stray.get_or_insert(index);
        }
        first_stray
    }

    /// Close a construct that matched, reporting anything left before its
    /// `;`.
    pub(crate) fn finish_item(&mut self) {
        let span = self.peek_span();
        let found = self.peek_tag();
        if self.skip_to_item_start().is_some() {
            debug!(found = found.name(), "stray tokens after construct");
            self.issues.push(ParseIssue {
                span,
                found,
                expected: TokenSet::single(TokenTag::Semicolon),
                context: ParseContext::ItemEnd,
            });
        }
    }
}

#[cfg(test)]
mod tests;
