//! Longest-match C/C++ punctuator table for code snippets.
//!
//! Covers the operators that can start with `< > : % + - * ^ & | ! =`.
//! Single-character punctuators that never combine (`[ ] ( ) , ; ? ~`) and
//! the brace, dot, slash and hash forms are handled by dedicated scanner
//! arms instead.

/// Multi-character punctuators, longest first so the first hit is the
/// longest match.
const PUNCTUATORS: &[&str] = &[
    // 3 chars
    "<<=", ">>=", "->*",
    // 2 chars
    "<:", "<%", "<<", "<=", ":>", "::", "%>", "%:", "%=", "+=", "++", "-=", "--", "->", "*=",
    "^=", "&&", "&=", "||", "|=", "!=", "==", ">>", ">=",
    // 1 char
    "<", ">", ":", "%", "+", "-", "*", "^", "&", "|", "!", "=",
];

/// Whether `c` can start an entry of the punctuator table.
#[inline]
pub(crate) fn starts_punctuator(c: char) -> bool {
    matches!(
        c,
        '<' | '>' | ':' | '%' | '+' | '-' | '*' | '^' | '&' | '|' | '!' | '='
    )
}

/// Length in characters of the longest punctuator at the start of `ahead`.
///
/// `ahead` holds the current code point and the three after it. Applies the
/// `<::` rule: `<::` lexes as `<` followed by `::` unless the next character
/// is `:` or `>`, in which case `<:` is the digraph for `[`.
pub(crate) fn longest_match(ahead: [char; 4]) -> usize {
    if ahead[0] == '<' && ahead[1] == ':' && ahead[2] == ':' && !matches!(ahead[3], ':' | '>') {
        return 1;
    }
    PUNCTUATORS
        .iter()
        .find(|p| p.chars().zip(ahead).all(|(a, b)| a == b))
        .map_or(1, |p| p.len())
}
