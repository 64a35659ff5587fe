//! Rule bodies.
//!
//! ```text
//! expression := sequence ('/' sequence)*
//! sequence   := repeat+
//! repeat     := primary ('?' | '*' | '+')*
//! primary    := '(' [expression] ')' | ident [template_args] [binding]
//!             | 'EOF' | string | class [binding]
//!             | '&' primary | '!' primary | snippet
//! ```
//!
//! `code_allowed` is false under `!`: a snippet there is unstyled and a
//! binding names a plain identifier rather than a result variable.

use peg_ir::{Style, TokenTag};
use tracing::trace;

use crate::recovery::{PRIMARY_START, REPEAT_OPS, SEQUENCE_STOP, TEMPLATE_ITEM};
use crate::stack::ensure_sufficient_stack;
use crate::{GrammarParser, ParseContext, ParseOutcome};

impl GrammarParser<'_> {
    pub(crate) fn expression(&mut self, code_allowed: bool) -> ParseOutcome {
        ensure_sufficient_stack(|| {
            if self.sequence(code_allowed).is_recovered() {
                return ParseOutcome::Recovered;
            }
            while self.eat(TokenTag::FSlash).is_some() {
                if self.sequence(code_allowed).is_recovered() {
                    return ParseOutcome::Recovered;
                }
            }
            ParseOutcome::Matched
        })
    }

    fn sequence(&mut self, code_allowed: bool) -> ParseOutcome {
        loop {
            if self.repeat(code_allowed).is_recovered() {
                return ParseOutcome::Recovered;
            }
            if SEQUENCE_STOP.contains(self.peek_tag()) {
                return ParseOutcome::Matched;
            }
        }
    }

    fn repeat(&mut self, code_allowed: bool) -> ParseOutcome {
        if self.primary(code_allowed).is_recovered() {
            return ParseOutcome::Recovered;
        }
        while REPEAT_OPS.contains(self.peek_tag()) {
            self.get();
        }
        ParseOutcome::Matched
    }

    fn primary(&mut self, code_allowed: bool) -> ParseOutcome {
        ensure_sufficient_stack(|| match self.peek_tag() {
            TokenTag::LParen => {
                self.get();
                if self.eat(TokenTag::RParen).is_some() {
                    return ParseOutcome::Matched;
                }
                if self.expression(code_allowed).is_recovered() {
                    return ParseOutcome::Recovered;
                }
                self.eat(TokenTag::RParen);
                ParseOutcome::Matched
            }
            TokenTag::Ident => {
                self.get_styled(Style::RuleName);
                if self.check(TokenTag::LAngle) && self.template_args().is_recovered() {
                    return ParseOutcome::Recovered;
                }
                self.binding(code_allowed);
                ParseOutcome::Matched
            }
            TokenTag::KwEof | TokenTag::String => {
                self.get();
                ParseOutcome::Matched
            }
            TokenTag::CharacterClass => {
                self.get();
                self.binding(code_allowed);
                ParseOutcome::Matched
            }
            TokenTag::Amp => {
                let amp = self.get();
                if self.check(TokenTag::SnippetStart) {
                    // `&{ ... }` is a semantic predicate.
                    self.restyle(amp, Some(Style::Code));
                }
                self.primary(code_allowed)
            }
            TokenTag::EMark => {
                self.get();
                self.primary(false)
            }
            TokenTag::SnippetStart => {
                let snippet = self.get();
                if !code_allowed {
                    trace!(pos = snippet, "snippet under `!` left unstyled");
                    self.restyle(snippet, None);
                }
                ParseOutcome::Matched
            }
            _ => self.recover(ParseContext::Primary, PRIMARY_START),
        })
    }

    /// `< true, T, ... >` after a rule reference.
    fn template_args(&mut self) -> ParseOutcome {
        loop {
            // `<` or `,`
            self.get();
            match self.peek_tag() {
                TokenTag::KwTrue | TokenTag::KwFalse => {
                    self.get();
                }
                TokenTag::Ident => {
                    self.get_styled(Style::TemplateVariable);
                }
                TokenTag::Comma => continue,
                TokenTag::RAngle => break,
                _ => return self.recover(ParseContext::TemplateArgs, TEMPLATE_ITEM),
            }
            if !self.check(TokenTag::Comma) {
                break;
            }
        }
        self.eat(TokenTag::RAngle);
        ParseOutcome::Matched
    }

    /// Optional `: name` after a reference or character class.
    fn binding(&mut self, code_allowed: bool) {
        if self.eat(TokenTag::Colon).is_none() {
            return;
        }
        if self.check(TokenTag::Ident) {
            let style = if code_allowed {
                Style::ResultVariable
            } else {
                Style::Identifier
            };
            self.get_styled(style);
        }
    }
}
