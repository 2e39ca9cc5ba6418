//! Token kinds.

use std::fmt;

/// The six lexical categories of the language.
///
/// Payloads live on [`Token`](super::Token) rather than here, so kinds are
/// `Copy` and cheap to compare in the parser's dispatch.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    LParen,
    RParen,
    Quote,
    /// The reserved word `if`.
    If,
    Number,
    Symbol,
}

impl TokenKind {
    /// Human-readable name used in parse error messages.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::Quote => "`'`",
            TokenKind::If => "`if`",
            TokenKind::Number => "number",
            TokenKind::Symbol => "symbol",
        }
    }

    /// True for kinds whose text is fixed by the kind itself.
    pub fn is_punctuation(self) -> bool {
        matches!(
            self,
            TokenKind::LParen | TokenKind::RParen | TokenKind::Quote | TokenKind::If
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
