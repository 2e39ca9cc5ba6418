//! Lexer error types.

use lisk_diagnostic::{Diagnostic, ErrorCode};
use lisk_ir::Span;

/// A lexer error: what went wrong and where.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// A chunk matching none of the token shapes.
    #[error("unrecognized token `{text}`")]
    UnrecognizedToken { text: String },
    /// An all-digit chunk too large for `i64`.
    #[error("integer literal `{text}` does not fit in 64 bits")]
    IntegerOverflow { text: String },
    #[error("source text is too large to lex")]
    SourceTooLarge,
}

impl LexError {
    #[cold]
    pub fn unrecognized(text: &str, span: Span) -> Self {
        LexError {
            kind: LexErrorKind::UnrecognizedToken {
                text: text.to_string(),
            },
            span,
        }
    }

    #[cold]
    pub fn integer_overflow(text: &str, span: Span) -> Self {
        LexError {
            kind: LexErrorKind::IntegerOverflow {
                text: text.to_string(),
            },
            span,
        }
    }

    #[cold]
    pub fn source_too_large() -> Self {
        LexError {
            kind: LexErrorKind::SourceTooLarge,
            span: Span::DUMMY,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnrecognizedToken { .. } => ErrorCode::E0001,
            LexErrorKind::IntegerOverflow { .. } => ErrorCode::E0002,
            LexErrorKind::SourceTooLarge => ErrorCode::E0003,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self.kind {
            LexErrorKind::SourceTooLarge => diag,
            LexErrorKind::UnrecognizedToken { .. } => diag.with_span(self.span).with_note(
                "tokens are `(`, `)`, `'`, `if`, integers, and symbols made of letters, digits, `_`, `+`, `-`, `*`, `/`",
            ),
            LexErrorKind::IntegerOverflow { .. } => diag.with_span(self.span),
        }
    }
}

#[cfg(test)]
mod tests;
