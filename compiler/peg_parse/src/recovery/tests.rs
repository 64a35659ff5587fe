use super::*;
use pretty_assertions::assert_eq;

#[test]
fn empty_set() {
    let set = TokenSet::new();
    assert_eq!(set, TokenSet::default());
    assert!(!set.contains(TokenTag::Ident));
    assert_eq!(set.iter().count(), 0);
    assert_eq!(set.format_expected(), "nothing");
}

#[test]
fn single_and_with() {
    let set = TokenSet::single(TokenTag::Semicolon);
    assert!(set.contains(TokenTag::Semicolon));
    assert!(!set.contains(TokenTag::Colon));

    let set = set.with(TokenTag::Colon).with(TokenTag::Eof);
    assert_eq!(
        set.iter().collect::<Vec<_>>(),
        vec![TokenTag::Semicolon, TokenTag::Colon, TokenTag::Eof]
    );
}

#[test]
fn highest_tag_fits() {
    let set = TokenSet::single(TokenTag::Eof);
    assert!(set.contains(TokenTag::Eof));
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![TokenTag::Eof]);
}

#[test]
fn format_expected_lists() {
    assert_eq!(TokenSet::single(TokenTag::Equal).format_expected(), "`=`");
    assert_eq!(
        TokenSet::single(TokenTag::Comma)
            .with(TokenTag::RAngle)
            .format_expected(),
        "`>` or `,`"
    );
    assert_eq!(
        REPEAT_OPS.format_expected(),
        "`?`, `+`, or `*`"
    );
}

#[test]
fn sequence_stop_excludes_term_starts() {
    for tag in PRIMARY_START.iter() {
        assert!(!SEQUENCE_STOP.contains(tag), "{tag:?}");
    }
    assert!(!SEQUENCE_STOP.contains(TokenTag::QMark));
    assert!(SEQUENCE_STOP.contains(TokenTag::Unknown));
}

#[test]
fn item_start_includes_eof() {
    assert!(ITEM_START.contains(TokenTag::Eof));
    assert!(ITEM_START.contains(TokenTag::Ident));
    assert!(!ITEM_START.contains(TokenTag::Semicolon));
}
