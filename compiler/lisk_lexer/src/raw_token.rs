//! Raw chunk classifier generated by logos.

use logos::Logos;

/// Shape of a whitespace- and paren-delimited chunk.
///
/// `Number` outranks `Symbol` (all-digit chunks match both), and the `if`
/// literal outranks `Symbol` by logos' default literal priority. Longest match
/// still wins, so `iffy` and `12ab` are symbols.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawToken {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("'")]
    Quote,
    #[token("if")]
    If,
    #[regex("[0-9]+", priority = 3)]
    Number,
    #[regex(r"[A-Za-z0-9_+\-*/]+")]
    Symbol,
}

impl RawToken {
    /// Classify a whole chunk, or `None` if no single token spans all of it.
    pub(crate) fn classify(chunk: &str) -> Option<RawToken> {
        let mut lexer = RawToken::lexer(chunk);
        match lexer.next() {
            Some(Ok(raw)) if lexer.span().end == chunk.len() => Some(raw),
            _ => None,
        }
    }
}
