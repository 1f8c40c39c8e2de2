use lol::lexer::scan;
use lol::lexer::token::TokenKind;
use lol::{LexError, LolError};
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    scan(source).tokens.into_iter().map(|t| t.kind).collect()
}

#[test]
fn unterminated_string_at_end_of_input() {
    let output = scan("\"abc");
    assert_eq!(kinds("\"abc"), vec![TokenKind::Eof]);
    assert_eq!(output.messages(), vec!["unterminated string on line 1"]);
}

#[test]
fn unexpected_character_is_skipped() {
    let output = scan("1 $ 2");
    let texts: Vec<(TokenKind, String)> = output
        .tokens
        .iter()
        .map(|t| (t.kind, t.text.clone()))
        .collect();
    assert_eq!(
        texts,
        vec![
            (TokenKind::Number, "1".to_owned()),
            (TokenKind::Number, "2".to_owned()),
            (TokenKind::Eof, String::new()),
        ]
    );
    assert_eq!(output.messages(), vec!["Unexpected character '$' on line 1"]);
}

#[test]
fn every_bad_character_is_reported() {
    let output = scan("a @ b\n# c ?");
    assert_eq!(
        output.messages(),
        vec![
            "Unexpected character '@' on line 1",
            "Unexpected character '#' on line 2",
            "Unexpected character '?' on line 2",
        ]
    );
    assert_eq!(
        kinds("a @ b\n# c ?"),
        vec![
            TokenKind::Ident,
            TokenKind::Ident,
            TokenKind::Newline,
            TokenKind::Ident,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn non_ascii_character_is_reported_once() {
    let output = scan("x é y");
    assert_eq!(output.messages(), vec!["Unexpected character 'é' on line 1"]);
    assert_eq!(
        output.tokens.iter().map(|t| t.text.as_str()).collect::<Vec<_>>(),
        vec!["x", "y", ""]
    );
}

#[test]
fn newline_inside_string_is_reported_and_consumed() {
    let output = scan("\"a\nb\"");
    assert_eq!(output.messages(), vec!["unterminated string on line 1"]);
    assert_eq!(output.tokens[0].kind, TokenKind::String);
    assert_eq!(output.tokens[0].text, "a\nb");
    assert_eq!(output.tokens[1].kind, TokenKind::Eof);
    assert_eq!(output.tokens[1].line, 2);
}

#[test]
fn each_newline_in_string_is_reported() {
    let output = scan("\"a\nb\nc");
    assert_eq!(
        output.messages(),
        vec![
            "unterminated string on line 1",
            "unterminated string on line 2",
            "unterminated string on line 3",
        ]
    );
    assert_eq!(kinds("\"a\nb\nc"), vec![TokenKind::Eof]);
}

#[test]
fn errors_keep_later_tokens() {
    let output = scan("let $x = \"open\nlet y = 1");
    assert!(output.has_errors());
    assert_eq!(output.diagnostics.len(), 3);
    assert!(matches!(
        output.diagnostics[0],
        LexError::UnexpectedCharacter { ch: '$', line: 1, .. }
    ));
    assert!(matches!(
        output.diagnostics[1],
        LexError::UnterminatedString { line: 1, .. }
    ));
    assert!(matches!(
        output.diagnostics[2],
        LexError::UnterminatedString { line: 2, .. }
    ));
    assert_eq!(
        kinds("let $x = \"open\nlet y = 1"),
        vec![
            TokenKind::Let,
            TokenKind::Ident,
            TokenKind::Assign,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn diagnostics_carry_spans() {
    let output = scan("ab $");
    let span = output.diagnostics[0].span();
    assert_eq!(span.offset(), 3);
    assert_eq!(span.len(), 1);

    let output = scan("x \"abc");
    let span = output.diagnostics[0].span();
    assert_eq!(span.offset(), 2);
    assert_eq!(span.len(), 4);
}

#[test]
fn into_result_reports_all_diagnostics() {
    let clean = scan("let a = 1").into_result("clean.lol", "let a = 1");
    assert_eq!(clean.map(|t| t.len()).ok(), Some(5));

    let source = "$ %";
    match scan(source).into_result("bad.lol", source) {
        Err(LolError::Lex { diagnostics, .. }) => assert_eq!(diagnostics.len(), 2),
        other => panic!("expected lex error, got {other:?}"),
    }
}

#[test]
fn lol_error_message_counts_diagnostics() {
    let source = "$ %";
    let err = scan(source)
        .into_result("bad.lol", source)
        .expect_err("scan should fail");
    assert_eq!(err.to_string(), "2 lexical error(s) in bad.lol");
}
