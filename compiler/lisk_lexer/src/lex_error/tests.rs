use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_unrecognized_message_and_code() {
    let err = LexError::unrecognized("x#y", Span::new(3, 6));
    assert_eq!(err.to_string(), "unrecognized token `x#y`");
    assert_eq!(err.code(), ErrorCode::E0001);

    let diag = err.to_diagnostic();
    assert_eq!(diag.span, Some(Span::new(3, 6)));
    assert_eq!(diag.notes.len(), 1);
}

#[test]
fn test_integer_overflow_message() {
    let err = LexError::integer_overflow("99999999999999999999", Span::new(0, 20));
    assert_eq!(
        err.to_string(),
        "integer literal `99999999999999999999` does not fit in 64 bits"
    );
    assert_eq!(err.code(), ErrorCode::E0002);
}

#[test]
fn test_source_too_large_has_no_span() {
    let diag = LexError::source_too_large().to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E0003);
    assert_eq!(diag.span, None);
}
