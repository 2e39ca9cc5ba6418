//! Recursive descent parser for Lisk.
//!
//! ```text
//! program      := expr*
//! expr         := value | list_literal | if_expr | call_expr
//! value        := NUMBER | SYMBOL
//! list_literal := QUOTE LPAREN (NUMBER | SYMBOL | IF)* RPAREN
//! if_expr      := LPAREN IF expr expr expr RPAREN
//! call_expr    := LPAREN SYMBOL expr* RPAREN
//! ```
//!
//! One token of lookahead past `(` picks between `if_expr` and `call_expr`.
//! Every other decision is made on the current token.

mod cursor;
mod error;
mod grammar;

pub use cursor::TokenCursor;
pub use error::{Expected, ParseError, ParseErrorKind, SyntaxError};

use lisk_ir::{Program, Span, Token, TokenKind, TokenList};
use tracing::debug;

/// Parser state.
pub struct Parser {
    cursor: TokenCursor,
}

impl Parser {
    pub fn new(cursor: TokenCursor) -> Self {
        Parser { cursor }
    }

    /// Parse a whole program. Stops at the first error.
    pub fn parse_program(mut self) -> Result<Program, ParseError> {
        let mut exprs = Vec::new();
        while !self.cursor.is_at_end() {
            exprs.push(self.parse_expr()?);
        }
        debug!(
            exprs = exprs.len(),
            tokens = self.cursor.token_count(),
            "parsed program"
        );
        Ok(Program::new(exprs))
    }

    /// Error for the current token, or for end of input if there is none.
    #[cold]
    fn error_here(&self, expected: Expected) -> ParseError {
        let position = self.cursor.position();
        match self.cursor.current() {
            Some(token) => ParseError::unexpected_token(expected, token, position),
            None => ParseError::unexpected_eof(expected, self.cursor.eof_span(), position),
        }
    }

    /// Consume a required token, returning its span.
    fn expect_token(&mut self, kind: TokenKind) -> Result<Span, ParseError> {
        let span = self.cursor.current_span();
        if self.cursor.advance_if_expected(kind) {
            Ok(span)
        } else {
            Err(self.error_here(Expected::Token(kind)))
        }
    }

    /// Take the current token and move past it.
    fn bump(&mut self) -> Option<Token> {
        let token = self.cursor.current().cloned();
        self.cursor.advance();
        token
    }
}

/// Parse the tokens held by `cursor` into a program.
pub fn parse(cursor: TokenCursor) -> Result<Program, ParseError> {
    Parser::new(cursor).parse_program()
}

/// Parse an already-lexed token list.
pub fn parse_tokens(tokens: TokenList) -> Result<Program, ParseError> {
    parse(TokenCursor::new(tokens))
}

/// Tokenize and parse `source`.
pub fn parse_source(source: &str) -> Result<Program, SyntaxError> {
    let tokens = lisk_lexer::tokenize(source)?;
    Ok(parse_tokens(tokens)?)
}
