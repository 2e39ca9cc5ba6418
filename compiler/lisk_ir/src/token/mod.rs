//! Token types produced by the lexer.
//!
//! A token is an immutable classified lexeme: its kind, the exact text it
//! was cut from, the parsed integer for `Number` tokens, and its span.

mod kind;
mod list;

pub use kind::TokenKind;
pub use list::TokenList;

use std::fmt;

use super::Span;

/// A classified lexeme with its span in the source.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// Parsed value of a `Number` token; `None` for every other kind.
    pub value: Option<i64>,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            value: None,
            span,
        }
    }

    /// Create a `Number` token carrying its parsed value.
    #[inline]
    pub fn number(text: impl Into<String>, value: i64, span: Span) -> Self {
        Token {
            kind: TokenKind::Number,
            text: text.into(),
            value: Some(value),
            span,
        }
    }

    /// True if both tokens are the same lexeme, ignoring where they sit in
    /// the source.
    #[inline]
    pub fn same_lexeme(&self, other: &Token) -> bool {
        self.kind == other.kind && self.text == other.text && self.value == other.value
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Number | TokenKind::Symbol => {
                write!(f, "{:?}({}) @ {}", self.kind, self.text, self.span)
            }
            _ => write!(f, "{:?} @ {}", self.kind, self.span),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
