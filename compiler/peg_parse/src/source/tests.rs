use super::*;
use peg_ir::TokenKind;
use peg_lexer::{tokenize, Utf16Document};
use pretty_assertions::assert_eq;

fn lex(src: &str) -> TokenList {
    tokenize(&Utf16Document::new(src)).tokens
}

#[test]
fn construction_skips_leading_trivia() {
    let mut tokens = lex("  // c\n/* b */ rule");
    let source = TokenSource::new(&mut tokens);
    assert_eq!(source.peek_tag(), TokenTag::Ident);
    assert_eq!(source.peek().map(Token::text), Some(Some("rule")));
}

#[test]
fn snippet_interior_and_end_are_trivia() {
    let mut tokens = lex("a { int x; } b");
    let mut source = TokenSource::new(&mut tokens);
    let mut seen = Vec::new();
    while !source.is_at_end() {
        seen.push(source.peek_tag());
        source.get();
    }
    assert_eq!(
        seen,
        vec![TokenTag::Ident, TokenTag::SnippetStart, TokenTag::Ident]
    );
}

#[test]
fn get_sticks_at_eof() {
    let mut tokens = lex("x");
    let mut source = TokenSource::new(&mut tokens);
    assert_eq!(source.get(), 0);
    let eof = source.get();
    assert_eq!(source.get(), eof);
    assert!(source.is_at_end());
    assert_eq!(source.peek_span(), Span::point(1));
}

#[test]
fn restyle_is_visible_in_list() {
    let mut tokens = lex("rule = x;");
    {
        let mut source = TokenSource::new(&mut tokens);
        source.get_styled(Style::RuleName);
        assert_eq!(source.eat(TokenTag::Colon), None);
        assert!(source.eat(TokenTag::Equal).is_some());
    }
    assert_eq!(tokens[0].kind, TokenKind::Ident("rule".into()));
    assert_eq!(tokens[0].style, Some(Style::RuleName));
}

#[test]
fn empty_list_reads_as_eof() {
    let mut tokens = TokenList::new();
    let mut source = TokenSource::new(&mut tokens);
    assert!(source.is_at_end());
    assert_eq!(source.get(), 0);
    assert_eq!(source.peek_span(), Span::point(0));
}
