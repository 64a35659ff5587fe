//! Code-phase scanning: C/C++-like tokens inside `{ ... }`.
//!
//! Braces nest; strings, character literals and comments hide braces from
//! the depth count because they are consumed as whole tokens. The include
//! state makes `#include <x>` produce a header-name token rather than
//! `<`, `x`, `>`.

use peg_ir::{Style, TokenKind};
use smallvec::SmallVec;
use tracing::trace;

use super::{IncludeState, Tokenizer};
use crate::document::Document;
use crate::keywords::{is_code_keyword, is_directive};
use crate::punctuator::{longest_match, starts_punctuator};
use crate::LexIssueKind;

#[inline]
fn is_code_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0B' | '\x0C' | '\r' | '\n')
}

#[inline]
fn is_code_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[inline]
fn is_code_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Raw-string separators are `)` + delimiter + `"`; C++ caps the delimiter
/// at 16 characters.
type Separator = SmallVec<[u16; 20]>;

impl<D: Document + ?Sized> Tokenizer<'_, D> {
    /// Scan a whole snippet starting at `{`.
    pub(super) fn snippet(&mut self, start: u32) {
        self.cursor.advance(); // consume '{'
        self.push(TokenKind::SnippetStart, start, Some(Style::Code));
        self.code_depth = 1;
        self.include_state = IncludeState::StartOfLine;
        self.last_pound = None;
        trace!(pos = start, "enter code snippet");

        while self.code_depth > 0 && !self.cursor.is_eof() {
            self.next_code_token();
        }

        if self.code_depth > 0 {
            self.issue(LexIssueKind::UnterminatedSnippet, start);
            self.code_depth = 0;
        }
        trace!(pos = self.cursor.pos(), "leave code snippet");
    }

    /// Scan one code token. The cursor is not at the end of input.
    fn next_code_token(&mut self) {
        let start = self.cursor.pos();
        match self.cursor.current() {
            c if is_code_whitespace(c) => self.code_whitespace(start),
            '#' => self.pound(start),
            '<' | '"' if self.include_state == IncludeState::GotInclude => {
                self.header_name(start);
            }
            '/' => self.code_slash(start),
            c if is_code_ident_start(c) => self.code_identifier(start),
            c => {
                self.include_state = IncludeState::Other;
                self.code_other(start, c);
            }
        }
    }

    fn punct(&mut self, start: u32) -> usize {
        self.push(TokenKind::CodePunctuator, start, Some(Style::CodePunctuator))
    }

    // ─── Whitespace & Comments ───────────────────────────────────────────

    fn code_whitespace(&mut self, start: u32) {
        while !self.cursor.is_eof() && is_code_whitespace(self.cursor.current()) {
            if matches!(self.cursor.current(), '\r' | '\n') {
                self.include_state = IncludeState::StartOfLine;
            }
            self.cursor.advance();
        }
        self.push(TokenKind::Whitespace, start, None);
    }

    /// `/*` keeps the include state, so `#/**/include <x>` still works.
    fn code_slash(&mut self, start: u32) {
        self.cursor.advance(); // consume '/'
        if self.cursor.eat('*') {
            self.block_comment_body(start);
            self.push(
                TokenKind::CodeBlockComment,
                start,
                Some(Style::CodeBlockComment),
            );
            return;
        }
        self.include_state = IncludeState::Other;
        if self.cursor.eat('/') {
            self.cursor.eat_while(|c| c != '\r' && c != '\n');
            self.push(
                TokenKind::CodeLineComment,
                start,
                Some(Style::CodeLineComment),
            );
        } else {
            self.cursor.eat('=');
            self.punct(start);
        }
    }

    // ─── Preprocessor ────────────────────────────────────────────────────

    fn pound(&mut self, start: u32) {
        self.cursor.advance(); // consume '#'
        if self.cursor.eat('#') {
            self.include_state = IncludeState::Other;
            self.punct(start);
            return;
        }
        self.include_state = if self.include_state == IncludeState::StartOfLine {
            IncludeState::GotPound
        } else {
            IncludeState::Other
        };
        let index = self.punct(start);
        self.last_pound = Some(index);
    }

    /// `<...>` or `"..."` after `#include`, terminator inclusive.
    fn header_name(&mut self, start: u32) {
        let close = if self.cursor.current() == '<' { '>' } else { '"' };
        self.cursor.advance();
        self.cursor.eat_while(|c| c != close && c != '\r' && c != '\n');
        if !self.cursor.eat(close) {
            self.issue(LexIssueKind::UnterminatedHeaderName, start);
        }
        self.include_state = IncludeState::Other;
        self.push(
            TokenKind::CodeHeaderName,
            start,
            Some(Style::CodeHeaderName),
        );
    }

    // ─── Identifiers & Keywords ──────────────────────────────────────────

    fn code_identifier(&mut self, start: u32) {
        self.cursor.eat_while(is_code_ident_continue);
        let text = self.cursor.text_from(start);

        if self.include_state == IncludeState::GotPound {
            if is_directive(&text) {
                if let Some(pound) = self.last_pound {
                    self.tokens.set_style(pound, Some(Style::Keyword));
                }
                self.include_state = if text == "include" {
                    IncludeState::GotInclude
                } else {
                    IncludeState::Other
                };
                self.push(TokenKind::CodeKeyword, start, Some(Style::CodeKeyword));
            } else {
                self.include_state = IncludeState::Other;
                self.push(
                    TokenKind::CodeIdent(text.into_boxed_str()),
                    start,
                    Some(Style::CodeIdentifier),
                );
            }
            return;
        }

        self.include_state = IncludeState::Other;
        let next = self.cursor.current();
        if matches!(next, '\'' | '"') && matches!(text.as_str(), "u" | "U" | "u8" | "L") {
            self.code_literal(start);
        } else if next == '"' && text.ends_with('R') {
            self.raw_string(start);
        } else if is_code_keyword(&text) {
            self.push(TokenKind::CodeKeyword, start, Some(Style::CodeKeyword));
        } else {
            self.push(
                TokenKind::CodeIdent(text.into_boxed_str()),
                start,
                Some(Style::CodeIdentifier),
            );
        }
    }

    // ─── String & Character Literals ─────────────────────────────────────

    /// Literal starting at the quote under the cursor. `start` may lie
    /// before it when an encoding prefix (`u8`, `L`, ...) was consumed.
    fn code_literal(&mut self, start: u32) {
        let quote = self.cursor.current();
        self.cursor.advance();
        self.literal_body(start, quote);
    }

    /// Body after the opening quote. A backslash escapes any character,
    /// line breaks included; an unescaped line break ends the token.
    fn literal_body(&mut self, start: u32, quote: char) {
        let terminated = loop {
            if self.cursor.is_eof() {
                break false;
            }
            match self.cursor.current() {
                c if c == quote => {
                    self.cursor.advance();
                    break true;
                }
                '\r' | '\n' => break false,
                '\\' => {
                    self.cursor.advance();
                    self.cursor.advance();
                }
                _ => self.cursor.advance(),
            }
        };
        if terminated {
            self.literal_suffix();
        }

        let (kind, style, unterminated) = if quote == '\'' {
            (
                TokenKind::CodeChar,
                Style::CodeChar,
                LexIssueKind::UnterminatedCodeChar,
            )
        } else {
            (
                TokenKind::CodeString,
                Style::CodeString,
                LexIssueKind::UnterminatedCodeString,
            )
        };
        if !terminated {
            self.issue(unterminated, start);
        }
        self.push(kind, start, Some(style));
    }

    /// User-defined literal suffix, e.g. `"abc"_s`.
    fn literal_suffix(&mut self) {
        if is_code_ident_start(self.cursor.current()) {
            self.cursor.eat_while(is_code_ident_continue);
        }
    }

    /// `R"delim(...)delim"`, with the prefix identifier already consumed.
    ///
    /// A delimiter broken by a space, backslash, quote, `)` or line break
    /// is not a raw string; the rest is scanned as an ordinary string.
    fn raw_string(&mut self, start: u32) {
        self.cursor.advance(); // consume '"'
        let delim_start = self.cursor.pos();
        self.cursor.eat_while(|c| {
            !matches!(c, '(' | ')' | '"' | ' ' | '\\' | '\t' | '\r' | '\n')
        });
        if self.cursor.is_eof() || self.cursor.current() != '(' {
            self.literal_body(start, '"');
            return;
        }

        let mut separator = Separator::new();
        separator.push(u16::from(b')'));
        separator.extend(self.cursor.units(delim_start, self.cursor.pos()));
        separator.push(u16::from(b'"'));
        let separator_len = u32::try_from(separator.len()).unwrap_or(u32::MAX);
        self.cursor.advance(); // consume '('

        let terminated = loop {
            if self.cursor.is_eof() {
                break false;
            }
            if self.cursor.starts_with_units(&separator) {
                self.cursor.advance_units(separator_len);
                break true;
            }
            self.cursor.advance();
        };
        if terminated {
            self.literal_suffix();
        } else {
            self.issue(LexIssueKind::UnterminatedRawString, start);
        }
        self.push(TokenKind::CodeRawString, start, Some(Style::CodeString));
    }

    // ─── Everything Else ─────────────────────────────────────────────────

    /// Non-identifier, non-comment tokens. The include state is already
    /// `Other`.
    fn code_other(&mut self, start: u32, c: char) {
        match c {
            '.' => self.dot(start),
            '0'..='9' => self.number(start),
            '$' => self.substitution(start),
            '\'' | '"' => self.code_literal(start),
            '{' => {
                self.cursor.advance();
                self.code_depth += 1;
                self.punct(start);
            }
            '}' => {
                self.cursor.advance();
                self.code_depth -= 1;
                if self.code_depth == 0 {
                    self.push(TokenKind::SnippetEnd, start, Some(Style::Code));
                } else {
                    self.punct(start);
                }
            }
            '[' | ']' | '(' | ')' | ',' | ';' | '?' | '~' => {
                self.cursor.advance();
                self.punct(start);
            }
            c if starts_punctuator(c) => {
                let ahead = [
                    c,
                    self.cursor.peek(),
                    self.cursor.peek2(),
                    self.cursor.peek3(),
                ];
                for _ in 0..longest_match(ahead) {
                    self.cursor.advance();
                }
                self.punct(start);
            }
            _ => {
                self.cursor.advance();
                self.push(TokenKind::CodeUnknown, start, Some(Style::CodeUnknown));
            }
        }
    }

    /// `...`, `.*`, `.`, or a number starting with `.digit`.
    fn dot(&mut self, start: u32) {
        if self.cursor.peek().is_ascii_digit() {
            self.number(start);
            return;
        }
        self.cursor.advance(); // consume '.'
        if self.cursor.current() == '.' && self.cursor.peek() == '.' {
            self.cursor.advance();
            self.cursor.advance();
        } else {
            self.cursor.eat('*');
        }
        self.punct(start);
    }

    /// Preprocessing number: digits, letters, `_`, `.`, and a sign directly
    /// after `e`/`E`.
    fn number(&mut self, start: u32) {
        self.cursor.advance(); // first digit or '.'
        loop {
            match self.cursor.current() {
                'e' | 'E' => {
                    self.cursor.advance();
                    if matches!(self.cursor.current(), '+' | '-') {
                        self.cursor.advance();
                    }
                }
                c if c == '.' || is_code_ident_continue(c) => self.cursor.advance(),
                _ => break,
            }
        }
        self.push(TokenKind::CodeNumber, start, Some(Style::CodeNumber));
    }

    /// `$$`, `$_`, `$?`, or a lone `$` at the end of input.
    fn substitution(&mut self, start: u32) {
        self.cursor.advance(); // consume '$'
        let marker = self.cursor.is_eof()
            || self.cursor.eat('$')
            || self.cursor.eat('_')
            || self.cursor.eat('?');
        if marker {
            self.push(TokenKind::CodeSubstitution, start, Some(Style::Substitution));
        } else {
            self.push(TokenKind::CodeUnknown, start, Some(Style::CodeUnknown));
        }
    }
}
