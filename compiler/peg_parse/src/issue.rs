//! Structural issues found by the semantic pass.
//!
//! The pass never fails; each resynchronization leaves one [`ParseIssue`]
//! behind so an editor can point at the unexpected token.

use std::fmt;

use peg_ir::{Span, TokenTag};

use crate::TokenSet;

/// An unexpected token, with what would have been accepted instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error(
    "expected {}, found `{}` in {}",
    .expected.format_expected(),
    .found.name(),
    .context
)]
pub struct ParseIssue {
    pub span: Span,
    pub found: TokenTag,
    pub expected: TokenSet,
    pub context: ParseContext,
}

/// The construct being recognized when the issue was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParseContext {
    TypeAlias,
    Namespace,
    CodeBlock,
    Rule,
    TemplateParams,
    TemplateArgs,
    Primary,
    /// Tokens between a finished construct and its `;`.
    ItemEnd,
}

impl ParseContext {
    pub const fn description(self) -> &'static str {
        match self {
            ParseContext::TypeAlias => "type alias",
            ParseContext::Namespace => "namespace declaration",
            ParseContext::CodeBlock => "code block",
            ParseContext::Rule => "rule definition",
            ParseContext::TemplateParams => "template parameters",
            ParseContext::TemplateArgs => "template arguments",
            ParseContext::Primary => "expression",
            ParseContext::ItemEnd => "end of declaration",
        }
    }
}

impl fmt::Display for ParseContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
