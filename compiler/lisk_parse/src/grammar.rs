//! Grammar productions.

use lisk_ir::{Atom, CallExpr, Expr, IfElseExpr, Literal, TokenKind, ValueExpr};
use lisk_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{Expected, ParseError, Parser};

impl Parser {
    /// Parse one expression starting at the current token.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_expr_inner())
    }

    fn parse_expr_inner(&mut self) -> Result<Expr, ParseError> {
        let Some(kind) = self.cursor.current_kind() else {
            return Err(self.error_here(Expected::Expression));
        };
        trace!(?kind, position = self.cursor.position(), "parse_expr");

        match kind {
            TokenKind::Number | TokenKind::Symbol => self.parse_value(),
            TokenKind::Quote => self.parse_list(),
            TokenKind::LParen => match self.cursor.peek_next().map(|t| t.kind) {
                Some(TokenKind::If) => self.parse_if(),
                Some(TokenKind::Symbol) => self.parse_call(),
                _ => {
                    // Report the head token (or end of input), not the `(`.
                    self.cursor.advance();
                    Err(self.error_here(Expected::FormHead))
                }
            },
            TokenKind::RParen | TokenKind::If => Err(self.error_here(Expected::Expression)),
        }
    }

    /// `NUMBER | SYMBOL`. The caller has checked the current kind.
    fn parse_value(&mut self) -> Result<Expr, ParseError> {
        let Some(token) = self.bump() else {
            return Err(self.error_here(Expected::Expression));
        };
        // Only number tokens carry a value.
        let literal = match token.value {
            Some(n) => Literal::Int(n),
            None => Literal::Symbol(token.text),
        };
        Ok(Expr::Value(ValueExpr::new(literal, token.span)))
    }

    /// `QUOTE LPAREN atom* RPAREN`
    fn parse_list(&mut self) -> Result<Expr, ParseError> {
        let start = self.expect_token(TokenKind::Quote)?;
        self.expect_token(TokenKind::LParen)?;

        let mut atoms = Vec::new();
        loop {
            match self.cursor.current_kind() {
                Some(TokenKind::RParen) => break,
                Some(TokenKind::Number | TokenKind::Symbol | TokenKind::If) => {
                    if let Some(token) = self.bump() {
                        atoms.push(match token.value {
                            Some(n) => Atom::Int(n),
                            None => Atom::Symbol(token.text),
                        });
                    }
                }
                Some(TokenKind::LParen | TokenKind::Quote) => {
                    return Err(self.error_here(Expected::ListAtom));
                }
                None => return Err(self.error_here(Expected::Token(TokenKind::RParen))),
            }
        }

        let end = self.expect_token(TokenKind::RParen)?;
        Ok(Expr::Value(ValueExpr::new(
            Literal::List(atoms),
            start.merge(end),
        )))
    }

    /// `LPAREN SYMBOL expr* RPAREN`
    fn parse_call(&mut self) -> Result<Expr, ParseError> {
        let start = self.expect_token(TokenKind::LParen)?;
        if !self.cursor.expect(TokenKind::Symbol) {
            return Err(self.error_here(Expected::FormHead));
        }
        let name = self.bump().map(|t| t.text).unwrap_or_default();

        let mut args = Vec::new();
        loop {
            match self.cursor.current_kind() {
                Some(TokenKind::RParen) => break,
                None => return Err(self.error_here(Expected::Token(TokenKind::RParen))),
                Some(_) => args.push(self.parse_expr()?),
            }
        }

        let end = self.expect_token(TokenKind::RParen)?;
        trace!(%name, args = args.len(), "parsed call");
        Ok(Expr::Call(CallExpr {
            name,
            args,
            span: start.merge(end),
        }))
    }

    /// `LPAREN IF expr expr expr RPAREN`
    fn parse_if(&mut self) -> Result<Expr, ParseError> {
        let start = self.expect_token(TokenKind::LParen)?;
        self.expect_token(TokenKind::If)?;

        let cond = self.parse_expr()?;
        let then_branch = self.parse_expr()?;
        let else_branch = self.parse_expr()?;

        let end = self.expect_token(TokenKind::RParen)?;
        Ok(Expr::IfElse(IfElseExpr {
            cond: Box::new(cond),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
            span: start.merge(end),
        }))
    }
}
