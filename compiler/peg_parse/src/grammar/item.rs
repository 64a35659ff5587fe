//! Top-level constructs.

use peg_ir::{Style, TokenTag};

use crate::recovery::TEMPLATE_ITEM;
use crate::{GrammarParser, ParseContext, ParseOutcome, TokenSet};

const IDENT: TokenSet = TokenSet::single(TokenTag::Ident);

impl GrammarParser<'_> {
    /// `typedef [::] a :: b ... Name`
    ///
    /// The qualified path is code-styled; the final identifier is the new
    /// type name.
    pub(crate) fn type_alias(&mut self) {
        self.get();
        if let Some(index) = self.eat(TokenTag::ColonColon) {
            self.restyle(index, Some(Style::CodePunctuator));
        }
        if !self.check(TokenTag::Ident) {
            self.recover(ParseContext::TypeAlias, IDENT);
            return;
        }
        self.get_styled(Style::CodeIdentifier);
        while let Some(index) = self.eat(TokenTag::ColonColon) {
            self.restyle(index, Some(Style::CodePunctuator));
            if !self.check(TokenTag::Ident) {
                self.recover(ParseContext::TypeAlias, IDENT);
                return;
            }
            self.get_styled(Style::CodeIdentifier);
        }
        if !self.check(TokenTag::Ident) {
            self.recover(ParseContext::TypeAlias, IDENT.with(TokenTag::ColonColon));
            return;
        }
        self.get_styled(Style::TypeName);
        self.finish_item();
    }

    /// `namespace a :: b ...`
    pub(crate) fn namespace(&mut self) {
        self.get();
        if !self.check(TokenTag::Ident) {
            self.recover(ParseContext::Namespace, IDENT);
            return;
        }
        self.get_styled(Style::CodeIdentifier);
        while let Some(index) = self.eat(TokenTag::ColonColon) {
            self.restyle(index, Some(Style::CodePunctuator));
            if !self.check(TokenTag::Ident) {
                self.recover(ParseContext::Namespace, IDENT);
                return;
            }
            self.get_styled(Style::CodeIdentifier);
        }
        self.finish_item();
    }

    /// `code name { ... }`
    pub(crate) fn code_block(&mut self) {
        self.get();
        let section = self
            .source
            .peek()
            .filter(|token| token.tag() == TokenTag::Ident)
            .map(|token| token.text().is_some_and(is_code_section));
        let Some(is_section) = section else {
            self.recover(ParseContext::CodeBlock, IDENT);
            return;
        };
        if is_section {
            self.get_styled(Style::Keyword);
        } else {
            self.get();
        }
        self.eat(TokenTag::SnippetStart);
        self.finish_item();
    }

    /// `name [< params >] [: Type] = expression`
    pub(crate) fn rule(&mut self) {
        self.get_styled(Style::RuleName);
        if self.check(TokenTag::LAngle) && self.rule_params().is_recovered() {
            return;
        }
        if self.eat(TokenTag::Colon).is_some() {
            if !self.check(TokenTag::Ident) {
                self.recover(ParseContext::Rule, IDENT);
                return;
            }
            self.get_styled(Style::TypeName);
        }
        if self.eat(TokenTag::Equal).is_none() {
            self.recover(
                ParseContext::Rule,
                TokenSet::new()
                    .with(TokenTag::Equal)
                    .with(TokenTag::Colon)
                    .with(TokenTag::LAngle),
            );
            return;
        }
        if self.expression(true).is_matched() {
            self.finish_item();
        }
    }

    /// `< T [: Type], true, ... >`
    ///
    /// Called with the cursor on `<`. Empty slots between commas are
    /// tolerated, and a missing `>` is not an error.
    fn rule_params(&mut self) -> ParseOutcome {
        loop {
            // `<` or `,`
            self.get();
            match self.peek_tag() {
                TokenTag::Comma => continue,
                TokenTag::RAngle => break,
                TokenTag::KwTrue | TokenTag::KwFalse => {
                    self.get();
                }
                TokenTag::Ident => {
                    self.get_styled(Style::TemplateVariable);
                    self.eat(TokenTag::Colon);
                    match self.peek_tag() {
                        TokenTag::Comma => continue,
                        TokenTag::RAngle => break,
                        TokenTag::Ident => {
                            self.get_styled(Style::TypeName);
                        }
                        _ => {
                            return self.recover(
                                ParseContext::TemplateParams,
                                TokenSet::new()
                                    .with(TokenTag::Ident)
                                    .with(TokenTag::Comma)
                                    .with(TokenTag::RAngle),
                            );
                        }
                    }
                }
                _ => return self.recover(ParseContext::TemplateParams, TEMPLATE_ITEM),
            }
            if !self.check(TokenTag::Comma) {
                break;
            }
        }
        self.eat(TokenTag::RAngle);
        ParseOutcome::Matched
    }
}

/// Code block names that read as keywords.
fn is_code_section(name: &str) -> bool {
    matches!(name, "license" | "header" | "source" | "class")
}
