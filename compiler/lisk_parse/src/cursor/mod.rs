//! Token cursor for navigating the token stream.
//!
//! The cursor owns its tokens and a single index. Unlike a sentinel-token
//! design there is no trailing EOF token: `index == len` is the end, and
//! `current()` returns `None` there.

use lisk_ir::{Span, Token, TokenKind, TokenList};
use tracing::debug;

pub struct TokenCursor {
    tokens: TokenList,
    index: usize,
    /// Zero-length span just past the last token.
    eof_span: Span,
}

impl TokenCursor {
    /// Create a cursor positioned at the first token.
    pub fn new(tokens: TokenList) -> Self {
        let eof_span = tokens
            .as_slice()
            .last()
            .map_or(Span::DUMMY, |last| Span::point(last.span.end));
        TokenCursor {
            tokens,
            index: 0,
            eof_span,
        }
    }

    /// Current index into the token stream. Equal to the token count at the end.
    #[inline]
    pub fn position(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.index >= self.tokens.len()
    }

    #[inline]
    pub fn current(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    #[inline]
    pub fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|t| t.kind)
    }

    /// Token after the current one, if any.
    #[inline]
    pub fn peek_next(&self) -> Option<&Token> {
        self.tokens.get(self.index + 1)
    }

    /// Span of the current token, or a point just past the input at the end.
    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().map_or(self.eof_span, |t| t.span)
    }

    /// Span used for "unexpected end of input" errors.
    #[inline]
    pub fn eof_span(&self) -> Span {
        self.eof_span
    }

    /// Move to the next token. Saturates at the end of the stream.
    #[inline]
    pub fn advance(&mut self) {
        if self.index < self.tokens.len() {
            self.index += 1;
        }
    }

    /// Check the current token against `kind`.
    ///
    /// A mismatch is logged, not raised. The caller decides whether it is
    /// fatal.
    pub fn expect(&self, kind: TokenKind) -> bool {
        let found = self.current_kind();
        if found == Some(kind) {
            return true;
        }
        debug!(
            expected = %kind,
            found = ?found,
            position = self.index,
            "token mismatch"
        );
        false
    }

    /// Advance past the current token if it is `kind`.
    pub fn advance_if_expected(&mut self, kind: TokenKind) -> bool {
        let matched = self.expect(kind);
        if matched {
            self.advance();
        }
        matched
    }
}
