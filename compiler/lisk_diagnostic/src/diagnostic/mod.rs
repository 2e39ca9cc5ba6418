//! Core diagnostic type.

use lisk_ir::Span;
use std::fmt;

use crate::ErrorCode;

/// A reportable error: code, message, and where it happened.
///
/// Built with the `with_*` methods:
///
/// ```
/// use lisk_diagnostic::{Diagnostic, ErrorCode};
/// use lisk_ir::Span;
///
/// let diag = Diagnostic::error(ErrorCode::E6004)
///     .with_message("division by zero")
///     .with_span(Span::new(0, 8));
/// assert_eq!(diag.to_string(), "error[E6004]: division by zero");
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    /// Primary location. `None` for errors with no source position (IO).
    pub span: Option<Span>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            span: None,
            notes: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

/// Header line only: `error[E1001]: message`.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)
    }
}

#[cfg(test)]
mod tests;
