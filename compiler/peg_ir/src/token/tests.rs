use super::*;
use crate::{Span, Style};
use pretty_assertions::assert_eq;

fn ident(text: &str) -> TokenKind {
    TokenKind::Ident(text.into())
}

#[test]
fn tags_fit_in_a_u64_bitset() {
    let highest = TokenTag::ALL.iter().map(|tag| tag.index()).max();
    assert_eq!(highest, Some(TokenTag::Eof.index()));
    assert!(TokenTag::Eof.index() < 64);
}

#[test]
fn kind_tag_mapping() {
    assert_eq!(ident("rule").tag(), TokenTag::Ident);
    assert_eq!(TokenKind::CodeIdent("x".into()).tag(), TokenTag::CodeIdent);
    assert_eq!(TokenKind::ColonColon.tag(), TokenTag::ColonColon);
    assert_eq!(TokenKind::SnippetEnd.tag(), TokenTag::SnippetEnd);
    assert_eq!(TokenKind::Eof.tag(), TokenTag::Eof);
}

#[test]
fn only_identifiers_carry_text() {
    assert_eq!(ident("rule").text(), Some("rule"));
    assert_eq!(TokenKind::CodeIdent("foo".into()).text(), Some("foo"));
    assert_eq!(TokenKind::String.text(), None);
    assert_eq!(TokenKind::CodeKeyword.text(), None);
}

#[test]
fn trivia_classification() {
    for kind in [
        TokenKind::Whitespace,
        TokenKind::LineComment,
        TokenKind::BlockComment,
        TokenKind::SnippetEnd,
        TokenKind::CodeSubstitution,
        TokenKind::CodeIdent("x".into()),
        TokenKind::CodeUnknown,
    ] {
        assert!(kind.tag().is_trivia(), "{kind:?} should be trivia");
    }
    for kind in [
        TokenKind::SnippetStart,
        TokenKind::Ident("x".into()),
        TokenKind::Semicolon,
        TokenKind::Unknown,
        TokenKind::Eof,
    ] {
        assert!(!kind.tag().is_trivia(), "{kind:?} should not be trivia");
    }
}

#[test]
fn list_keeps_parallel_tags() {
    let mut list = TokenList::new();
    list.push(Token::new(ident("a"), Span::new(0, 1), Some(Style::Identifier)));
    list.push(Token::new(TokenKind::Equal, Span::new(1, 2), Some(Style::Operator)));
    let eof = list.push(Token::new(TokenKind::Eof, Span::point(2), None));

    assert_eq!(eof, 2);
    assert_eq!(
        list.tags(),
        &[TokenTag::Ident, TokenTag::Equal, TokenTag::Eof]
    );
    assert_eq!(list.tag(99), TokenTag::Eof);
}

#[test]
fn set_style_mutates_in_place() {
    let mut list = TokenList::new();
    list.push(Token::new(ident("a"), Span::new(0, 1), Some(Style::Identifier)));
    list.set_style(0, Some(Style::RuleName));
    list.set_style(5, Some(Style::Keyword));

    assert_eq!(list[0].style, Some(Style::RuleName));
    assert_eq!(list.len(), 1);
}

#[test]
fn token_debug_shows_style() {
    let token = Token::new(TokenKind::Semicolon, Span::new(4, 5), Some(Style::Operator));
    assert_eq!(format!("{token:?}"), "Semicolon @ 4..5 [operator]");
    let eof = Token::new(TokenKind::Eof, Span::point(5), None);
    assert_eq!(format!("{eof:?}"), "Eof @ 5..5");
}

#[test]
fn all_tags_are_in_discriminant_order() {
    assert_eq!(TokenTag::ALL.len(), 43);
    for pair in TokenTag::ALL.windows(2) {
        assert!(pair[0].index() < pair[1].index(), "{pair:?}");
    }
}
