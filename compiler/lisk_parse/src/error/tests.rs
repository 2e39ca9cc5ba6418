use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_unexpected_token_message() {
    let token = Token::new(TokenKind::Number, "4", Span::new(10, 11));
    let err = ParseError::unexpected_token(Expected::Token(TokenKind::RParen), &token, 5);
    assert_eq!(err.to_string(), "expected `)`, found number `4`");
    assert_eq!(err.span, Span::new(10, 11));
    assert_eq!(err.position, 5);
    assert_eq!(err.code(), ErrorCode::E1001);
}

#[test]
fn test_punctuation_is_named_once() {
    let token = Token::new(TokenKind::RParen, ")", Span::new(1, 2));
    let err = ParseError::unexpected_token(Expected::Expression, &token, 1);
    assert_eq!(err.to_string(), "expected an expression, found `)`");
}

#[test]
fn test_unexpected_eof_message() {
    let err = ParseError::unexpected_eof(Expected::Token(TokenKind::RParen), Span::point(4), 3);
    assert_eq!(err.to_string(), "unexpected end of input, expected `)`");
    assert_eq!(err.code(), ErrorCode::E1002);
    assert!(matches!(err.kind, ParseErrorKind::UnexpectedEof { .. }));
}

#[test]
fn test_diagnostic_carries_span_and_note() {
    let token = Token::new(TokenKind::Number, "1", Span::new(1, 2));
    let diag = ParseError::unexpected_token(Expected::FormHead, &token, 1).to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1001);
    assert_eq!(diag.span, Some(Span::new(1, 2)));
    assert_eq!(diag.notes.len(), 1);
    assert_eq!(
        diag.message,
        "expected `if` or a function name, found number `1`"
    );
}

#[test]
fn test_syntax_error_is_transparent() {
    let lex = LexError::unrecognized("#", Span::new(0, 1));
    let err = SyntaxError::from(lex);
    assert_eq!(err.to_string(), "unrecognized token `#`");
    assert!(matches!(err, SyntaxError::Lex(ref e) if e.span == Span::new(0, 1)));
}

fn eof_notes(expected: Expected) -> Vec<String> {
    ParseError::unexpected_eof(expected, Span::point(0), 0)
        .to_diagnostic()
        .notes
}

#[test]
fn test_eof_note_follows_expectation() {
    assert_eq!(
        eof_notes(Expected::Token(TokenKind::RParen)),
        vec!["a form is missing its closing `)`"]
    );
    assert_eq!(
        eof_notes(Expected::FormHead),
        vec!["`(` must be followed by `if` or the name of a function"]
    );
    assert_eq!(
        eof_notes(Expected::Token(TokenKind::LParen)),
        vec!["`'` must be followed by a parenthesized list"]
    );
    assert_eq!(
        eof_notes(Expected::Expression),
        vec!["an `if` form needs a condition and two branches"]
    );
}

#[test]
fn test_eof_note_from_parsed_source() {
    let note = |source: &str| match crate::parse_source(source) {
        Err(SyntaxError::Parse(err)) => err.to_diagnostic().notes,
        other => panic!("expected a parse error for {source:?}, got {other:?}"),
    };
    assert_eq!(note("(+ 1"), vec!["a form is missing its closing `)`"]);
    assert_eq!(note("'(1 2"), vec!["a form is missing its closing `)`"]);
    assert_eq!(
        note("("),
        vec!["`(` must be followed by `if` or the name of a function"]
    );
    assert_eq!(note("'"), vec!["`'` must be followed by a parenthesized list"]);
    assert_eq!(
        note("(if 1 2"),
        vec!["an `if` form needs a condition and two branches"]
    );
}
