//! Grammar-phase scanning.

use peg_ir::{Style, TokenKind};

use super::Tokenizer;
use crate::document::Document;
use crate::keywords::grammar_keyword;
use crate::LexIssueKind;

#[inline]
fn is_grammar_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

#[inline]
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl<D: Document + ?Sized> Tokenizer<'_, D> {
    /// Scan one grammar token. The cursor is not at the end of input.
    pub(super) fn next_token(&mut self) {
        let start = self.cursor.pos();
        match self.cursor.current() {
            ' ' | '\t' | '\r' | '\n' => self.whitespace(start),
            'a'..='z' | 'A'..='Z' => self.identifier(start),
            '/' => self.slash_or_comment(start),
            '"' => self.delimited(
                start,
                '"',
                TokenKind::String,
                Style::String,
                LexIssueKind::UnterminatedString,
            ),
            '[' => self.delimited(
                start,
                ']',
                TokenKind::CharacterClass,
                Style::CharacterClass,
                LexIssueKind::UnterminatedCharacterClass,
            ),
            '{' => self.snippet(start),
            ';' => self.operator(start, TokenKind::Semicolon),
            '?' => self.operator(start, TokenKind::QMark),
            '+' => self.operator(start, TokenKind::Plus),
            '!' => self.operator(start, TokenKind::EMark),
            '*' => self.operator(start, TokenKind::Star),
            '=' => self.operator(start, TokenKind::Equal),
            '(' => self.operator(start, TokenKind::LParen),
            ')' => self.operator(start, TokenKind::RParen),
            '&' => self.operator(start, TokenKind::Amp),
            '<' => self.operator(start, TokenKind::LAngle),
            '>' => self.operator(start, TokenKind::RAngle),
            ',' => self.operator(start, TokenKind::Comma),
            ':' => self.colon(start),
            _ => self.unknown(start),
        }
    }

    // ─── Whitespace & Comments ───────────────────────────────────────────

    fn whitespace(&mut self, start: u32) {
        self.cursor.eat_while(is_grammar_whitespace);
        self.push(TokenKind::Whitespace, start, None);
    }

    fn slash_or_comment(&mut self, start: u32) {
        self.cursor.advance(); // consume '/'
        if self.cursor.eat('*') {
            self.block_comment_body(start);
            self.push(TokenKind::BlockComment, start, Some(Style::BlockComment));
        } else if self.cursor.eat('/') {
            self.cursor.eat_while(|c| c != '\r' && c != '\n');
            self.push(TokenKind::LineComment, start, Some(Style::LineComment));
        } else {
            self.push(TokenKind::FSlash, start, Some(Style::Operator));
        }
    }

    // ─── Identifiers & Keywords ──────────────────────────────────────────

    fn identifier(&mut self, start: u32) {
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.text_from(start);
        match grammar_keyword(&text) {
            Some(kind) => {
                self.push(kind, start, Some(Style::Keyword));
            }
            None => {
                self.push(
                    TokenKind::Ident(text.into_boxed_str()),
                    start,
                    Some(Style::Identifier),
                );
            }
        }
    }

    // ─── Strings & Character Classes ─────────────────────────────────────

    /// Scan a string or character class up to `close`.
    ///
    /// A backslash escapes the next character unless that character is a
    /// line break or the end of input. A raw line break ends the token
    /// without consuming it.
    fn delimited(
        &mut self,
        start: u32,
        close: char,
        kind: TokenKind,
        style: Style,
        unterminated: LexIssueKind,
    ) {
        self.cursor.advance(); // consume opener
        let terminated = loop {
            if self.cursor.is_eof() {
                break false;
            }
            match self.cursor.current() {
                c if c == close => {
                    self.cursor.advance();
                    break true;
                }
                '\r' | '\n' => break false,
                '\\' => {
                    self.cursor.advance();
                    if !self.cursor.is_eof() && !matches!(self.cursor.current(), '\r' | '\n') {
                        self.cursor.advance();
                    }
                }
                _ => self.cursor.advance(),
            }
        };
        if !terminated {
            self.issue(unterminated, start);
        }
        self.push(kind, start, Some(style));
    }

    // ─── Operators ───────────────────────────────────────────────────────

    #[inline]
    fn operator(&mut self, start: u32, kind: TokenKind) {
        self.cursor.advance();
        self.push(kind, start, Some(Style::Operator));
    }

    fn colon(&mut self, start: u32) {
        self.cursor.advance();
        let kind = if self.cursor.eat(':') {
            TokenKind::ColonColon
        } else {
            TokenKind::Colon
        };
        self.push(kind, start, Some(Style::Operator));
    }

    /// One code point the grammar has no use for; left unstyled.
    fn unknown(&mut self, start: u32) {
        self.cursor.advance();
        self.push(TokenKind::Unknown, start, None);
    }
}
