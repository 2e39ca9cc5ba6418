use super::*;
use lisk_ir::Span;
use pretty_assertions::assert_eq;

#[test]
fn test_io_messages() {
    let not_found = Error::Io {
        path: PathBuf::from("missing.lisk"),
        source: io::Error::from(io::ErrorKind::NotFound),
    };
    assert_eq!(not_found.to_string(), "cannot find file 'missing.lisk'");
    assert_eq!(not_found.code(), ErrorCode::E9001);

    let diag = not_found.to_diagnostic();
    assert_eq!(diag.span, None);
    assert_eq!(diag.message, "cannot find file 'missing.lisk'");
}

#[test]
fn test_syntax_error_converts_by_phase() {
    let lex = SyntaxError::Lex(LexError::unrecognized("#", Span::new(0, 1)));
    assert!(matches!(Error::from(lex), Error::Lex(_)));

    let parse = lisk_parse::parse_source("(+ 1").unwrap_err();
    let err = Error::from(parse);
    assert!(matches!(err, Error::Parse(_)));
    assert_eq!(err.code(), ErrorCode::E1002);
}

#[test]
fn test_eval_error_keeps_span() {
    let eval = EvalError::new(lisk_eval::EvalErrorKind::DivisionByZero, Span::new(3, 9));
    let diag = Error::from(eval).to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E6004);
    assert_eq!(diag.span, Some(Span::new(3, 9)));
}
