use crate::{parse_grammar, ParseContext, ParseIssue};
use peg_ir::{Span, Style, TokenList, TokenTag};
use peg_lexer::{tokenize, Utf16Document};
use pretty_assertions::assert_eq;

fn parse(src: &str) -> (Utf16Document, TokenList, Vec<ParseIssue>) {
    let doc = Utf16Document::new(src);
    let mut tokens = tokenize(&doc).tokens;
    let issues = parse_grammar(&mut tokens);
    (doc, tokens, issues)
}

/// `(text, style)` for every token the grammar pass can see.
fn grammar_styles(src: &str) -> Vec<(String, Option<Style>)> {
    let (doc, tokens, _) = parse(src);
    tokens
        .iter()
        .filter(|t| !t.tag().is_trivia() && !t.is_eof())
        .map(|t| (doc.slice(t.span), t.style))
        .collect()
}

fn s(text: &str, style: Style) -> (String, Option<Style>) {
    (text.to_string(), Some(style))
}

fn issues(src: &str) -> Vec<ParseIssue> {
    parse(src).2
}

// ─── Rules ──────────────────────────────────────────────────────────────

#[test]
fn simple_rule() {
    let (_, tokens, issues) = parse(r#"rule = "a" "b";"#);
    let tags: Vec<TokenTag> = tokens
        .tags()
        .iter()
        .copied()
        .filter(|t| !t.is_trivia())
        .collect();
    assert_eq!(
        tags,
        vec![
            TokenTag::Ident,
            TokenTag::Equal,
            TokenTag::String,
            TokenTag::String,
            TokenTag::Semicolon,
            TokenTag::Eof,
        ]
    );
    assert_eq!(tokens[0].style, Some(Style::RuleName));
    assert!(issues.is_empty());
}

#[test]
fn rule_with_params_result_type_and_alternatives() {
    let src = "a<T> : r = b? c+ / d;";
    assert_eq!(
        grammar_styles(src),
        vec![
            s("a", Style::RuleName),
            s("<", Style::Operator),
            s("T", Style::TemplateVariable),
            s(">", Style::Operator),
            s(":", Style::Operator),
            s("r", Style::TypeName),
            s("=", Style::Operator),
            s("b", Style::RuleName),
            s("?", Style::Operator),
            s("c", Style::RuleName),
            s("+", Style::Operator),
            s("/", Style::Operator),
            s("d", Style::RuleName),
            s(";", Style::Operator),
        ]
    );
    assert!(issues(src).is_empty());
}

#[test]
fn typed_params_and_boolean_params() {
    let styles = grammar_styles("a<T: Int, true, U> = x;");
    assert_eq!(styles[2], s("T", Style::TemplateVariable));
    assert_eq!(styles[4], s("Int", Style::TypeName));
    assert_eq!(styles[6], s("true", Style::Keyword));
    assert_eq!(styles[8], s("U", Style::TemplateVariable));
    assert_eq!(styles[11], s("x", Style::RuleName));
    assert!(issues("a<T: Int, true, U> = x;").is_empty());
}

#[test]
fn template_args_on_reference() {
    let styles = grammar_styles("a = b<true, T>;");
    assert_eq!(styles[2], s("b", Style::RuleName));
    assert_eq!(styles[4], s("true", Style::Keyword));
    assert_eq!(styles[6], s("T", Style::TemplateVariable));
}

#[test]
fn bindings_depend_on_code_context() {
    let src = "r = a:x !(b:y) [0-9]:z;";
    let styles = grammar_styles(src);
    assert_eq!(styles[4], s("x", Style::ResultVariable));
    assert_eq!(styles[7], s("b", Style::RuleName));
    assert_eq!(styles[9], s("y", Style::Identifier));
    assert_eq!(styles[11], s("[0-9]", Style::CharacterClass));
    assert_eq!(styles[13], s("z", Style::ResultVariable));
    assert!(issues(src).is_empty());
}

#[test]
fn snippets_and_predicates() {
    assert_eq!(
        grammar_styles("r = a {x} / !{y} &{z} &b;"),
        vec![
            s("r", Style::RuleName),
            s("=", Style::Operator),
            s("a", Style::RuleName),
            s("{", Style::Code),
            s("/", Style::Operator),
            s("!", Style::Operator),
            ("{".to_string(), None),
            s("&", Style::Code),
            s("{", Style::Code),
            s("&", Style::Operator),
            s("b", Style::RuleName),
            s(";", Style::Operator),
        ]
    );
}

#[test]
fn empty_group_and_eof_keyword() {
    let src = "r = () (a / EOF) \"s\"*;";
    assert!(issues(src).is_empty());
    let styles = grammar_styles(src);
    assert_eq!(styles[5], s("a", Style::RuleName));
    assert_eq!(styles[7], s("EOF", Style::Keyword));
}

#[test]
fn deep_nesting_does_not_overflow() {
    let depth = 5000;
    let src = format!("r = {}b{};", "(".repeat(depth), ")".repeat(depth));
    let (doc, tokens, issues) = parse(&src);
    assert!(issues.is_empty());
    let b = tokens
        .iter()
        .find(|t| doc.slice(t.span) == "b")
        .map(|t| t.style);
    assert_eq!(b, Some(Some(Style::RuleName)));
}

// ─── Declarations ───────────────────────────────────────────────────────

#[test]
fn qualified_type_alias() {
    let src = "typedef ::Foo::Bar Baz;";
    assert_eq!(
        grammar_styles(src),
        vec![
            s("typedef", Style::Keyword),
            s("::", Style::CodePunctuator),
            s("Foo", Style::CodeIdentifier),
            s("::", Style::CodePunctuator),
            s("Bar", Style::CodeIdentifier),
            s("Baz", Style::TypeName),
            s(";", Style::Operator),
        ]
    );
    assert!(issues(src).is_empty());
}

#[test]
fn namespace_declaration() {
    let styles = grammar_styles("namespace a::b; x = y;");
    assert_eq!(
        &styles[..5],
        &[
            s("namespace", Style::Keyword),
            s("a", Style::CodeIdentifier),
            s("::", Style::CodePunctuator),
            s("b", Style::CodeIdentifier),
            s(";", Style::Operator),
        ]
    );
    assert_eq!(styles[5], s("x", Style::RuleName));
}

#[test]
fn code_blocks() {
    let src = "code header { #include <x> }\ncode other { }\nrule = a;";
    assert_eq!(
        grammar_styles(src),
        vec![
            s("code", Style::Keyword),
            s("header", Style::Keyword),
            s("{", Style::Code),
            s("code", Style::Keyword),
            s("other", Style::Identifier),
            s("{", Style::Code),
            s("rule", Style::RuleName),
            s("=", Style::Operator),
            s("a", Style::RuleName),
            s(";", Style::Operator),
        ]
    );
    assert!(issues(src).is_empty());
}

// ─── Recovery ───────────────────────────────────────────────────────────

#[test]
fn empty_document() {
    assert!(issues("").is_empty());
    assert!(issues("  // only a comment\n").is_empty());
}

#[test]
fn empty_body_recovers_at_semicolon() {
    let src = "a = ; b = c;";
    let found = issues(src);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].context, ParseContext::Primary);
    assert_eq!(found[0].found, TokenTag::Semicolon);
    assert_eq!(found[0].span, Span::new(4, 5));
    assert!(found[0].to_string().ends_with("found `;` in expression"));

    let styles = grammar_styles(src);
    assert_eq!(styles[3], s("b", Style::RuleName));
    assert_eq!(styles[5], s("c", Style::RuleName));
}

#[test]
fn missing_equal_resumes_at_next_identifier() {
    let src = "a b = c;";
    let found = issues(src);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].context, ParseContext::Rule);
    assert_eq!(found[0].found, TokenTag::Ident);
    assert_eq!(found[0].span, Span::new(2, 3));
    assert!(found[0].expected.contains(TokenTag::Equal));

    let styles = grammar_styles(src);
    assert_eq!(styles[0], s("a", Style::RuleName));
    assert_eq!(styles[1], s("b", Style::RuleName));
    assert_eq!(styles[3], s("c", Style::RuleName));
}

#[test]
fn stray_tokens_after_body_are_reported_once() {
    let found = issues("a = b ) ;");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].context, ParseContext::ItemEnd);
    assert_eq!(found[0].found, TokenTag::RParen);
    assert_eq!(found[0].span, Span::new(6, 7));
}

#[test]
fn leading_junk_is_skipped() {
    let src = "; = a = b;";
    let found = issues(src);
    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|issue| issue.context == ParseContext::Rule));
    let styles = grammar_styles(src);
    assert_eq!(styles[2], s("a", Style::RuleName));
    assert_eq!(styles[4], s("b", Style::RuleName));
}

#[test]
fn incomplete_declarations() {
    assert_eq!(issues("typedef ;")[0].context, ParseContext::TypeAlias);
    assert_eq!(issues("typedef a:: ;")[0].context, ParseContext::TypeAlias);
    assert_eq!(issues("namespace ;")[0].context, ParseContext::Namespace);
    assert_eq!(issues("code ;")[0].context, ParseContext::CodeBlock);
    assert_eq!(issues("a = b<;")[0].context, ParseContext::TemplateArgs);
    assert_eq!(issues("a<= b;")[0].context, ParseContext::TemplateParams);
}

#[test]
fn truncated_rule_reports_end_of_file() {
    let found = issues("a");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].found, TokenTag::Eof);
    assert_eq!(found[0].span, Span::point(1));
}

#[test]
fn recovered_construct_keeps_lexical_styles() {
    let styles = grammar_styles("a = \"s\" < ;");
    assert_eq!(styles[2], s("\"s\"", Style::String));
    assert_eq!(styles[3], s("<", Style::Operator));
}

#[allow(clippy::disallowed_types, reason = "proptest macros internally use Arc")]
mod proptest_grammar {
    use super::parse;
    use proptest::prelude::*;

    const FRAGMENTS: &[&str] = &[
        "rule", "x", "T", "EOF", "typedef", "code", "namespace", "true", " ", "\n", "=", ";",
        "/", "(", ")", "<", ">", ":", "::", ",", "?", "*", "+", "!", "&", "\"s\"", "[a]",
        "{ y }", "{", "}", "@", "// c\n",
    ];

    fn grammar_like() -> impl Strategy<Value = String> {
        proptest::collection::vec(proptest::sample::select(FRAGMENTS), 0..48)
            .prop_map(|parts| parts.concat())
    }

    proptest! {
        #[test]
        fn pass_is_deterministic(src in grammar_like()) {
            let (_, first, first_issues) = parse(&src);
            let (_, second, second_issues) = parse(&src);
            prop_assert_eq!(first, second);
            prop_assert_eq!(first_issues, second_issues);
        }

        #[test]
        fn pass_only_touches_styles(src in grammar_like()) {
            let doc = peg_lexer::Utf16Document::new(&src);
            let lexed = peg_lexer::tokenize(&doc).tokens;
            let mut parsed = lexed.clone();
            crate::parse_grammar(&mut parsed);
            prop_assert_eq!(lexed.len(), parsed.len());
            for (before, after) in lexed.iter().zip(parsed.iter()) {
                prop_assert_eq!(&before.kind, &after.kind);
                prop_assert_eq!(before.span, after.span);
            }
        }

        #[test]
        fn second_pass_changes_nothing(src in grammar_like()) {
            let (_, once, _) = parse(&src);
            let mut twice = once.clone();
            crate::parse_grammar(&mut twice);
            prop_assert_eq!(once, twice);
        }
    }
}
