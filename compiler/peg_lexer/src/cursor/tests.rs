use super::*;
use crate::Utf16Document;
use pretty_assertions::assert_eq;

// === Basic Navigation ===

#[test]
fn current_and_advance() {
    let doc = Utf16Document::new("ab");
    let mut cursor = Cursor::new(&doc);
    assert_eq!(cursor.current(), 'a');
    cursor.advance();
    assert_eq!(cursor.current(), 'b');
    assert_eq!(cursor.pos(), 1);
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), EOF_CHAR);
}

#[test]
fn advance_at_eof_is_noop() {
    let doc = Utf16Document::new("");
    let mut cursor = Cursor::new(&doc);
    cursor.advance();
    assert_eq!(cursor.pos(), 0);
    assert!(cursor.is_eof());
}

// === Peek ===

#[test]
fn peek_lookahead() {
    let doc = Utf16Document::new("<::>");
    let cursor = Cursor::new(&doc);
    assert_eq!(cursor.peek(), ':');
    assert_eq!(cursor.peek2(), ':');
    assert_eq!(cursor.peek3(), '>');
}

#[test]
fn peek_past_end_is_eof_char() {
    let doc = Utf16Document::new("a");
    let cursor = Cursor::new(&doc);
    assert_eq!(cursor.peek(), EOF_CHAR);
    assert_eq!(cursor.peek2(), EOF_CHAR);
}

// === Surrogates ===

#[test]
fn surrogate_pair_is_one_code_point() {
    let doc = Utf16Document::new("\u{1F600}x");
    let mut cursor = Cursor::new(&doc);
    assert_eq!(cursor.current(), '\u{1F600}');
    assert_eq!(cursor.peek(), 'x');
    cursor.advance();
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current(), 'x');
}

#[test]
fn lone_surrogate_is_one_unit_replacement() {
    let doc = Utf16Document::from_units(vec![0xDC00, 0x61]);
    let mut cursor = Cursor::new(&doc);
    assert_eq!(cursor.current(), char::REPLACEMENT_CHARACTER);
    cursor.advance();
    assert_eq!(cursor.pos(), 1);
    assert_eq!(cursor.current(), 'a');
}

#[test]
fn high_surrogate_at_end_is_lone() {
    let doc = Utf16Document::from_units(vec![0x61, 0xD83D]);
    let mut cursor = Cursor::new(&doc);
    cursor.advance();
    assert_eq!(cursor.current(), char::REPLACEMENT_CHARACTER);
    cursor.advance();
    assert!(cursor.is_eof());
}

// === Interior NUL ===

#[test]
fn interior_nul_is_not_eof() {
    let doc = Utf16Document::new("\0a");
    let cursor = Cursor::new(&doc);
    assert_eq!(cursor.current(), EOF_CHAR);
    assert!(!cursor.is_eof());
}

// === Helpers ===

#[test]
fn eat_and_eat_while() {
    let doc = Utf16Document::new("::abc1 x");
    let mut cursor = Cursor::new(&doc);
    assert!(cursor.eat(':'));
    assert!(cursor.eat(':'));
    assert!(!cursor.eat(':'));
    let start = cursor.pos();
    cursor.eat_while(|c| c.is_ascii_alphanumeric());
    assert_eq!(cursor.text_from(start), "abc1");
}

#[test]
fn eat_while_stops_at_eof() {
    let doc = Utf16Document::new("aaa");
    let mut cursor = Cursor::new(&doc);
    cursor.eat_while(|_| true);
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn starts_with_units_matches_and_fails_at_eof() {
    let doc = Utf16Document::new(")ab\"");
    let mut cursor = Cursor::new(&doc);
    let sep: Vec<u16> = ")ab\"".encode_utf16().collect();
    assert!(cursor.starts_with_units(&sep));
    cursor.advance();
    assert!(!cursor.starts_with_units(&sep));
    cursor.advance_units(10);
    assert_eq!(cursor.pos(), 4);
}
