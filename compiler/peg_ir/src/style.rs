//! Display tags attached to tokens.
//!
//! A style names *what* a token is for presentation purposes; the palette in
//! `peg_highlight` decides how each style looks. Grammar-level styles come
//! first, code-snippet styles (prefixed `Code`) after.

use std::fmt;

/// Display tag for a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Style {
    // === Grammar ===
    Keyword,
    Identifier,
    RuleName,
    TypeName,
    ResultVariable,
    TemplateVariable,
    Operator,
    LineComment,
    BlockComment,
    String,
    CharacterClass,
    /// Snippet delimiters and the `&` of a semantic predicate.
    Code,

    // === Code snippets ===
    Substitution,
    CodeLineComment,
    CodeBlockComment,
    CodeKeyword,
    CodeIdentifier,
    CodeString,
    CodeChar,
    CodeHeaderName,
    CodeNumber,
    CodePunctuator,
    CodeUnknown,
}

impl Style {
    /// Number of styles.
    pub const COUNT: usize = 23;

    /// Every style, in declaration order.
    pub const ALL: [Style; Self::COUNT] = [
        Style::Keyword,
        Style::Identifier,
        Style::RuleName,
        Style::TypeName,
        Style::ResultVariable,
        Style::TemplateVariable,
        Style::Operator,
        Style::LineComment,
        Style::BlockComment,
        Style::String,
        Style::CharacterClass,
        Style::Code,
        Style::Substitution,
        Style::CodeLineComment,
        Style::CodeBlockComment,
        Style::CodeKeyword,
        Style::CodeIdentifier,
        Style::CodeString,
        Style::CodeChar,
        Style::CodeHeaderName,
        Style::CodeNumber,
        Style::CodePunctuator,
        Style::CodeUnknown,
    ];

    /// Dense index in `0..Style::COUNT`, usable for table lookups.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable lowercase name, used in configuration and diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Style::Keyword => "keyword",
            Style::Identifier => "identifier",
            Style::RuleName => "rule_name",
            Style::TypeName => "type_name",
            Style::ResultVariable => "result_variable",
            Style::TemplateVariable => "template_variable",
            Style::Operator => "operator",
            Style::LineComment => "line_comment",
            Style::BlockComment => "block_comment",
            Style::String => "string",
            Style::CharacterClass => "character_class",
            Style::Code => "code",
            Style::Substitution => "substitution",
            Style::CodeLineComment => "code_line_comment",
            Style::CodeBlockComment => "code_block_comment",
            Style::CodeKeyword => "code_keyword",
            Style::CodeIdentifier => "code_identifier",
            Style::CodeString => "code_string",
            Style::CodeChar => "code_char",
            Style::CodeHeaderName => "code_header_name",
            Style::CodeNumber => "code_number",
            Style::CodePunctuator => "code_punctuator",
            Style::CodeUnknown => "code_unknown",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn all_is_indexed_in_order() {
        for (i, style) in Style::ALL.iter().enumerate() {
            assert_eq!(style.index(), i);
        }
    }

    #[test]
    fn display_uses_snake_case_name() {
        assert_eq!(Style::RuleName.to_string(), "rule_name");
        assert_eq!(Style::CodeHeaderName.to_string(), "code_header_name");
    }
}
