//! Keyword tables for both sub-languages.
//!
//! Three lookups:
//! 1. **Grammar keywords**: `EOF`, `typedef`, `code`, `namespace`, `true`,
//!    `false`, resolved to dedicated token kinds.
//! 2. **Code keywords**: C/C++ reserved words plus the preprocessor helpers
//!    `defined` and `__has_include` and common compiler extensions.
//! 3. **Preprocessor directives**: the identifiers that make a preceding `#`
//!    a directive.
//!
//! Code-keyword lookup is length-bucketed: identifiers outside the 2-24
//! character range are rejected without any comparison.

use peg_ir::TokenKind;

/// Look up a grammar keyword.
#[inline]
pub(crate) fn grammar_keyword(text: &str) -> Option<TokenKind> {
    match text {
        "EOF" => Some(TokenKind::KwEof),
        "typedef" => Some(TokenKind::KwTypedef),
        "code" => Some(TokenKind::KwCode),
        "namespace" => Some(TokenKind::KwNamespace),
        "true" => Some(TokenKind::KwTrue),
        "false" => Some(TokenKind::KwFalse),
        _ => None,
    }
}

/// Whether `text` is reserved in embedded code.
pub(crate) fn is_code_keyword(text: &str) -> bool {
    match text.len() {
        2 => matches!(text, "do" | "if" | "or"),
        3 => matches!(text, "and" | "asm" | "for" | "int" | "new" | "not" | "try" | "xor"),
        4 => matches!(
            text,
            "auto"
                | "bool"
                | "case"
                | "char"
                | "else"
                | "enum"
                | "goto"
                | "long"
                | "this"
                | "true"
                | "void"
        ),
        5 => matches!(
            text,
            "__asm"
                | "bitor"
                | "break"
                | "catch"
                | "class"
                | "compl"
                | "const"
                | "false"
                | "final"
                | "float"
                | "or_eq"
                | "short"
                | "throw"
                | "union"
                | "using"
                | "while"
        ),
        6 => matches!(
            text,
            "and_eq"
                | "bitand"
                | "delete"
                | "double"
                | "export"
                | "extern"
                | "friend"
                | "import"
                | "inline"
                | "module"
                | "not_eq"
                | "public"
                | "return"
                | "signed"
                | "sizeof"
                | "static"
                | "struct"
                | "switch"
                | "typeid"
                | "xor_eq"
        ),
        7 => matches!(
            text,
            "_Pragma"
                | "alignas"
                | "alignof"
                | "concept"
                | "default"
                | "defined"
                | "mutable"
                | "nullptr"
                | "private"
                | "typedef"
                | "virtual"
                | "wchar_t"
        ),
        8 => matches!(
            text,
            "char16_t"
                | "char32_t"
                | "continue"
                | "decltype"
                | "explicit"
                | "noexcept"
                | "operator"
                | "override"
                | "register"
                | "requires"
                | "template"
                | "typename"
                | "unsigned"
                | "volatile"
        ),
        9 => matches!(text, "constexpr" | "namespace" | "protected"),
        10 => matches!(text, "__declspec" | "__restrict" | "const_cast"),
        11 => text == "static_cast",
        12 => matches!(text, "dynamic_cast" | "synchronized" | "thread_local"),
        13 => matches!(
            text,
            "__attribute__"
                | "__extension__"
                | "__has_include"
                | "atomic_cancel"
                | "atomic_commit"
                | "static_assert"
        ),
        15 => text == "atomic_noexcept",
        16 => matches!(text, "reinterpret_cast" | "transaction_safe"),
        24 => text == "transaction_safe_dynamic",
        _ => false,
    }
}

/// Whether `text` names a preprocessor directive.
#[inline]
pub(crate) fn is_directive(text: &str) -> bool {
    matches!(
        text,
        "include"
            | "define"
            | "undef"
            | "if"
            | "ifdef"
            | "ifndef"
            | "else"
            | "elif"
            | "endif"
            | "line"
            | "error"
            | "pragma"
            | "warning"
    )
}
