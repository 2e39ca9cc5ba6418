//! Diagnostic system for error reporting.
//!
//! Every phase turns its errors into a [`Diagnostic`]:
//! - an [`ErrorCode`] for searchability
//! - a one-line message saying what went wrong
//! - an optional span saying where
//!
//! The [`emitter::TerminalEmitter`] renders diagnostics for humans, resolving
//! spans to `line:col` when it has the source text.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
