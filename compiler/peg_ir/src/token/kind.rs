//! Token kinds for the grammar language and its embedded code snippets.

use super::TokenTag;

/// Token kind.
///
/// Only identifiers carry text; every other kind is fully described by its
/// span. Whitespace is one kind for both sub-languages.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Grammar trivia
    Whitespace,
    LineComment,
    BlockComment,

    // Grammar operators
    Semicolon,
    Colon,
    ColonColon,
    QMark,
    Plus,
    EMark,
    Star,
    FSlash,
    Equal,
    LParen,
    RParen,
    LAngle,
    RAngle,
    Amp,
    Comma,

    // Grammar literals and identifiers
    String,
    CharacterClass,
    Ident(Box<str>),

    // Grammar keywords
    KwEof,
    KwTypedef,
    KwNamespace,
    KwCode,
    KwTrue,
    KwFalse,

    // Snippet delimiters
    SnippetStart,
    SnippetEnd,

    // Code snippet tokens
    CodeSubstitution,
    CodeLineComment,
    CodeBlockComment,
    CodeKeyword,
    CodeIdent(Box<str>),
    CodeString,
    CodeRawString,
    CodeChar,
    CodeHeaderName,
    CodeNumber,
    CodePunctuator,
    CodeUnknown,

    // Special
    Unknown,
    Eof,
}

impl TokenKind {
    /// Discriminant tag for this kind.
    pub const fn tag(&self) -> TokenTag {
        match self {
            TokenKind::Whitespace => TokenTag::Whitespace,
            TokenKind::LineComment => TokenTag::LineComment,
            TokenKind::BlockComment => TokenTag::BlockComment,
            TokenKind::Semicolon => TokenTag::Semicolon,
            TokenKind::Colon => TokenTag::Colon,
            TokenKind::ColonColon => TokenTag::ColonColon,
            TokenKind::QMark => TokenTag::QMark,
            TokenKind::Plus => TokenTag::Plus,
            TokenKind::EMark => TokenTag::EMark,
            TokenKind::Star => TokenTag::Star,
            TokenKind::FSlash => TokenTag::FSlash,
            TokenKind::Equal => TokenTag::Equal,
            TokenKind::LParen => TokenTag::LParen,
            TokenKind::RParen => TokenTag::RParen,
            TokenKind::LAngle => TokenTag::LAngle,
            TokenKind::RAngle => TokenTag::RAngle,
            TokenKind::Amp => TokenTag::Amp,
            TokenKind::Comma => TokenTag::Comma,
            TokenKind::String => TokenTag::String,
            TokenKind::CharacterClass => TokenTag::CharacterClass,
            TokenKind::Ident(_) => TokenTag::Ident,
            TokenKind::KwEof => TokenTag::KwEof,
            TokenKind::KwTypedef => TokenTag::KwTypedef,
            TokenKind::KwNamespace => TokenTag::KwNamespace,
            TokenKind::KwCode => TokenTag::KwCode,
            TokenKind::KwTrue => TokenTag::KwTrue,
            TokenKind::KwFalse => TokenTag::KwFalse,
            TokenKind::SnippetStart => TokenTag::SnippetStart,
            TokenKind::SnippetEnd => TokenTag::SnippetEnd,
            TokenKind::CodeSubstitution => TokenTag::CodeSubstitution,
            TokenKind::CodeLineComment => TokenTag::CodeLineComment,
            TokenKind::CodeBlockComment => TokenTag::CodeBlockComment,
            TokenKind::CodeKeyword => TokenTag::CodeKeyword,
            TokenKind::CodeIdent(_) => TokenTag::CodeIdent,
            TokenKind::CodeString => TokenTag::CodeString,
            TokenKind::CodeRawString => TokenTag::CodeRawString,
            TokenKind::CodeChar => TokenTag::CodeChar,
            TokenKind::CodeHeaderName => TokenTag::CodeHeaderName,
            TokenKind::CodeNumber => TokenTag::CodeNumber,
            TokenKind::CodePunctuator => TokenTag::CodePunctuator,
            TokenKind::CodeUnknown => TokenTag::CodeUnknown,
            TokenKind::Unknown => TokenTag::Unknown,
            TokenKind::Eof => TokenTag::Eof,
        }
    }

    /// Identifier text, for grammar and code identifiers.
    pub fn text(&self) -> Option<&str> {
        match self {
            TokenKind::Ident(text) | TokenKind::CodeIdent(text) => Some(text),
            _ => None,
        }
    }
}
