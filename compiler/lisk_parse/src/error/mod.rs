//! Parse error types.
//!
//! Parsing is fail-fast: the first structural mismatch ends the parse, so
//! there is exactly one error per failed parse and no recovery state.

use std::fmt;

use lisk_diagnostic::{Diagnostic, ErrorCode};
use lisk_ir::{Span, Token, TokenKind};
use lisk_lexer::LexError;

/// What the parser was looking for when it failed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Expected {
    /// A specific token kind, e.g. the closing `)` of a form.
    Token(TokenKind),
    /// The start of any expression.
    Expression,
    /// `if` or a function name right after `(`.
    FormHead,
    /// A number or symbol inside a quoted list.
    ListAtom,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token(kind) => f.write_str(kind.display_name()),
            Expected::Expression => f.write_str("an expression"),
            Expected::FormHead => f.write_str("`if` or a function name"),
            Expected::ListAtom => f.write_str("a number or symbol"),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("expected {expected}, found {}", describe_found(.found, .text))]
    UnexpectedToken {
        expected: Expected,
        found: TokenKind,
        text: String,
    },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: Expected },
}

fn describe_found(kind: &TokenKind, text: &str) -> String {
    if kind.is_punctuation() {
        kind.display_name().to_string()
    } else {
        format!("{} `{text}`", kind.display_name())
    }
}

/// A parse error with the token index and span where it happened.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    /// Index of the offending token in the stream.
    pub position: usize,
}

impl ParseError {
    #[cold]
    pub fn unexpected_token(expected: Expected, found: &Token, position: usize) -> Self {
        ParseError {
            kind: ParseErrorKind::UnexpectedToken {
                expected,
                found: found.kind,
                text: found.text.clone(),
            },
            span: found.span,
            position,
        }
    }

    #[cold]
    pub fn unexpected_eof(expected: Expected, span: Span, position: usize) -> Self {
        ParseError {
            kind: ParseErrorKind::UnexpectedEof { expected },
            span,
            position,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::UnexpectedEof { .. } => ErrorCode::E1002,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_span(self.span);
        match &self.kind {
            ParseErrorKind::UnexpectedEof { expected } => diag.with_note(eof_note(*expected)),
            ParseErrorKind::UnexpectedToken {
                expected: Expected::FormHead,
                ..
            } => diag.with_note("a parenthesized form starts with `if` or the name of a function"),
            ParseErrorKind::UnexpectedToken {
                expected: Expected::ListAtom,
                ..
            } => diag.with_note("quoted lists are flat and cannot nest"),
            ParseErrorKind::UnexpectedToken { .. } => diag,
        }
    }
}

/// What input would have to follow for the parse to continue.
fn eof_note(expected: Expected) -> &'static str {
    match expected {
        Expected::FormHead => "`(` must be followed by `if` or the name of a function",
        Expected::Token(TokenKind::LParen) => "`'` must be followed by a parenthesized list",
        Expected::Expression => "an `if` form needs a condition and two branches",
        Expected::Token(_) | Expected::ListAtom => "a form is missing its closing `)`",
    }
}

/// Error from turning source text into a program: lexing or parsing.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SyntaxError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[cfg(test)]
mod tests;
