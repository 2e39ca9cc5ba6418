use super::*;
use pretty_assertions::assert_eq;

#[test]
fn buffer_handler_println_captures_with_newline() {
    let handler = BufferPrintHandler::new();
    handler.println("hello");
    handler.println("(1 2)");
    assert_eq!(handler.get_output(), "hello\n(1 2)\n");
}

#[test]
fn buffer_handler_accumulates_across_calls() {
    let handler = buffer_handler();
    handler.println("42");
    handler.println("");
    assert_eq!(handler.get_output(), "42\n\n");
}

#[test]
fn stdout_handler_captures_nothing() {
    let handler = stdout_handler();
    assert_eq!(handler.get_output(), "");
}

#[test]
fn shared_handler_sees_writes_through_clone() {
    let handler = buffer_handler();
    let writer = Arc::clone(&handler);
    writer.println("x");
    assert_eq!(handler.get_output(), "x\n");
}
