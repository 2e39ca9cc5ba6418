//! Lisk IR - shared data types for the interpreter pipeline.
//!
//! This crate contains the data structures every phase agrees on:
//! - Spans for source locations
//! - Tokens and `TokenList` for lexer output
//! - AST nodes (`Expr`, `Program`) for parser output
//!
//! Nothing in here does any work on its own. The lexer, parser and
//! evaluator crates build on these types.

pub mod ast;
mod span;
mod token;

pub use ast::{Atom, CallExpr, Expr, IfElseExpr, Literal, Program, ValueExpr};
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
