//! PEG IR - token, span and style types shared by the highlighter crates.
//!
//! This crate holds the data the lexer produces and the semantic pass
//! mutates:
//! - [`Span`] for UTF-16 code-unit locations
//! - [`Style`] display tags
//! - [`TokenKind`], [`TokenTag`], [`Token`] and [`TokenList`]
//!
//! # Design Philosophy
//!
//! - **One list per scan**: tokens are created once and never reordered or
//!   deleted; only their styles change after lexing.
//! - **Parallel tags**: `TokenList` keeps a `TokenTag` per token so the
//!   parser dispatches on a `u8` without touching the payload.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod style;
mod token;

pub use span::Span;
pub use style::Style;
pub use token::{Token, TokenKind, TokenList, TokenTag};
