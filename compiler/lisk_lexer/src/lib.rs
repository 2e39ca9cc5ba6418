//! Lexer for Lisk.
//!
//! Tokenizing is split-and-classify:
//! 1. [`chunks`] cuts the source at whitespace and around every parenthesis,
//!    so `(+ 1 2)` and `( + 1 2 )` produce the same chunks.
//! 2. Each chunk is classified by the logos-derived [`RawToken`]. A chunk is
//!    accepted only when a single raw token covers all of it.
//!
//! There are no string literals or comments, and `+ - * /` are ordinary
//! symbol characters, so one pass is enough.

mod chunks;
mod lex_error;
mod raw_token;

use lisk_ir::{Span, Token, TokenKind, TokenList};
use tracing::{debug, trace};

use chunks::chunks;
pub use lex_error::{LexError, LexErrorKind};
use raw_token::RawToken;

/// Tokenize `source`.
///
/// Fails on the first chunk that is not a token.
pub fn tokenize(source: &str) -> Result<TokenList, LexError> {
    let mut tokens = TokenList::new();

    for range in chunks(source) {
        let text = &source[range.clone()];
        let span = Span::try_from_range(range).map_err(|_| LexError::source_too_large())?;
        let token = classify(text, span)?;
        trace!(kind = ?token.kind, text, %span, "token");
        tokens.push(token);
    }

    debug!(count = tokens.len(), bytes = source.len(), "lexed source");
    Ok(tokens)
}

/// Classify one chunk of text.
fn classify(text: &str, span: Span) -> Result<Token, LexError> {
    let kind = match RawToken::classify(text) {
        Some(RawToken::LParen) => TokenKind::LParen,
        Some(RawToken::RParen) => TokenKind::RParen,
        Some(RawToken::Quote) => TokenKind::Quote,
        Some(RawToken::If) => TokenKind::If,
        Some(RawToken::Symbol) => TokenKind::Symbol,
        Some(RawToken::Number) => {
            // Only ASCII digits reach here, so overflow is the sole failure.
            let value = text
                .parse::<i64>()
                .map_err(|_| LexError::integer_overflow(text, span))?;
            return Ok(Token::number(text, value, span));
        }
        None => return Err(LexError::unrecognized(text, span)),
    };
    Ok(Token::new(kind, text, span))
}
