//! Compact discriminant tag for `TokenKind`.

/// Compact discriminant tag for `TokenKind`, with semantic range layout.
///
/// Every value is below 64 so a set of tags fits in one `u64` bitset:
///
/// | Range | Category                    |
/// |-------|-----------------------------|
/// | 0-2   | Grammar trivia              |
/// | 8-22  | Grammar operators           |
/// | 24-26 | Grammar literals and idents |
/// | 28-33 | Grammar keywords            |
/// | 36-37 | Snippet delimiters          |
/// | 40-51 | Code-snippet tokens         |
/// | 62-63 | Special                     |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenTag {
    // === Grammar trivia (0-2) ===
    Whitespace = 0,
    LineComment = 1,
    BlockComment = 2,

    // === Grammar operators (8-22) ===
    Semicolon = 8,
    Colon = 9,
    ColonColon = 10,
    QMark = 11,
    Plus = 12,
    EMark = 13,
    Star = 14,
    FSlash = 15,
    Equal = 16,
    LParen = 17,
    RParen = 18,
    LAngle = 19,
    RAngle = 20,
    Amp = 21,
    Comma = 22,

    // === Grammar literals and identifiers (24-26) ===
    String = 24,
    CharacterClass = 25,
    Ident = 26,

    // === Grammar keywords (28-33) ===
    KwEof = 28,
    KwTypedef = 29,
    KwNamespace = 30,
    KwCode = 31,
    KwTrue = 32,
    KwFalse = 33,

    // === Snippet delimiters (36-37) ===
    SnippetStart = 36,
    SnippetEnd = 37,

    // === Code snippet tokens (40-51) ===
    CodeSubstitution = 40,
    CodeLineComment = 41,
    CodeBlockComment = 42,
    CodeKeyword = 43,
    CodeIdent = 44,
    CodeString = 45,
    CodeRawString = 46,
    CodeChar = 47,
    CodeHeaderName = 48,
    CodeNumber = 49,
    CodePunctuator = 50,
    CodeUnknown = 51,

    // === Special (62-63) ===
    Unknown = 62,
    Eof = 63,
}

impl TokenTag {
    /// Every tag, in discriminant order.
    pub const ALL: &'static [TokenTag] = &[
        TokenTag::Whitespace,
        TokenTag::LineComment,
        TokenTag::BlockComment,
        TokenTag::Semicolon,
        TokenTag::Colon,
        TokenTag::ColonColon,
        TokenTag::QMark,
        TokenTag::Plus,
        TokenTag::EMark,
        TokenTag::Star,
        TokenTag::FSlash,
        TokenTag::Equal,
        TokenTag::LParen,
        TokenTag::RParen,
        TokenTag::LAngle,
        TokenTag::RAngle,
        TokenTag::Amp,
        TokenTag::Comma,
        TokenTag::String,
        TokenTag::CharacterClass,
        TokenTag::Ident,
        TokenTag::KwEof,
        TokenTag::KwTypedef,
        TokenTag::KwNamespace,
        TokenTag::KwCode,
        TokenTag::KwTrue,
        TokenTag::KwFalse,
        TokenTag::SnippetStart,
        TokenTag::SnippetEnd,
        TokenTag::CodeSubstitution,
        TokenTag::CodeLineComment,
        TokenTag::CodeBlockComment,
        TokenTag::CodeKeyword,
        TokenTag::CodeIdent,
        TokenTag::CodeString,
        TokenTag::CodeRawString,
        TokenTag::CodeChar,
        TokenTag::CodeHeaderName,
        TokenTag::CodeNumber,
        TokenTag::CodePunctuator,
        TokenTag::CodeUnknown,
        TokenTag::Unknown,
        TokenTag::Eof,
    ];

    /// Raw discriminant, used as a bit index in token sets.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Whether the semantic pass skips this token.
    ///
    /// Trivia is whitespace and grammar comments plus every token produced
    /// inside a code snippet, including the snippet end. The snippet start is
    /// not trivia: it is a primary in grammar expressions.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenTag::Whitespace | TokenTag::LineComment | TokenTag::BlockComment
        ) || self.is_code()
    }

    /// Whether this tag is produced by the code sub-lexer.
    #[inline]
    pub const fn is_code(self) -> bool {
        matches!(self as u8, 37..=51)
    }

    /// Human-readable name for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            TokenTag::Whitespace => "whitespace",
            TokenTag::LineComment => "line comment",
            TokenTag::BlockComment => "block comment",
            TokenTag::Semicolon => ";",
            TokenTag::Colon => ":",
            TokenTag::ColonColon => "::",
            TokenTag::QMark => "?",
            TokenTag::Plus => "+",
            TokenTag::EMark => "!",
            TokenTag::Star => "*",
            TokenTag::FSlash => "/",
            TokenTag::Equal => "=",
            TokenTag::LParen => "(",
            TokenTag::RParen => ")",
            TokenTag::LAngle => "<",
            TokenTag::RAngle => ">",
            TokenTag::Amp => "&",
            TokenTag::Comma => ",",
            TokenTag::String => "string",
            TokenTag::CharacterClass => "character class",
            TokenTag::Ident => "identifier",
            TokenTag::KwEof => "EOF",
            TokenTag::KwTypedef => "typedef",
            TokenTag::KwNamespace => "namespace",
            TokenTag::KwCode => "code",
            TokenTag::KwTrue => "true",
            TokenTag::KwFalse => "false",
            TokenTag::SnippetStart => "{",
            TokenTag::SnippetEnd => "}",
            TokenTag::CodeSubstitution => "substitution",
            TokenTag::CodeLineComment => "code line comment",
            TokenTag::CodeBlockComment => "code block comment",
            TokenTag::CodeKeyword => "code keyword",
            TokenTag::CodeIdent => "code identifier",
            TokenTag::CodeString => "code string",
            TokenTag::CodeRawString => "code raw string",
            TokenTag::CodeChar => "code character",
            TokenTag::CodeHeaderName => "header name",
            TokenTag::CodeNumber => "code number",
            TokenTag::CodePunctuator => "code punctuator",
            TokenTag::CodeUnknown => "unknown code",
            TokenTag::Unknown => "unknown",
            TokenTag::Eof => "end of file",
        }
    }
}
