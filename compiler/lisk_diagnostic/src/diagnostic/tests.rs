use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_builder_collects_fields() {
    let diag = Diagnostic::error(ErrorCode::E1002)
        .with_message("unexpected end of input, expected `)`")
        .with_span(Span::point(4))
        .with_note("every `(` needs a matching `)`");

    assert_eq!(diag.code, ErrorCode::E1002);
    assert_eq!(diag.span, Some(Span::point(4)));
    assert_eq!(diag.notes.len(), 1);
}

#[test]
fn test_display_is_single_header_line() {
    let diag = Diagnostic::error(ErrorCode::E0001)
        .with_message("bad chunk")
        .with_note("not shown in the header");
    assert_eq!(diag.to_string(), "error[E0001]: bad chunk");
}
