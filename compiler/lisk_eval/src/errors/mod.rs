//! Evaluation errors.

use lisk_diagnostic::{Diagnostic, ErrorCode};
use lisk_ir::Span;

use crate::value::Arity;

#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("unbound function `{name}`")]
    UnboundFunction { name: String },
    #[error("cannot call `{name}`, which holds a value of type {found}")]
    NotCallable { name: String, found: &'static str },
    #[error("`{name}` expects integer arguments, found {found}")]
    TypeMismatch {
        name: &'static str,
        found: &'static str,
    },
    #[error("division by zero")]
    DivisionByZero,
    #[error("`if` condition must be an integer, found {found}")]
    NonNumericCondition { found: &'static str },
    #[error("`def` target must evaluate to a symbol, found {found}")]
    InvalidBindingTarget { found: &'static str },
    #[error("`def` takes exactly 2 arguments, got {got}")]
    DefArity { got: usize },
    #[error("`{name}` takes {expected}, got {got}")]
    ArityMismatch {
        name: &'static str,
        expected: Arity,
        got: usize,
    },
    #[error("integer overflow in `{op}`")]
    IntegerOverflow { op: &'static str },
}

impl EvalErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalErrorKind::UnboundFunction { .. } => ErrorCode::E6001,
            EvalErrorKind::NotCallable { .. } => ErrorCode::E6002,
            EvalErrorKind::TypeMismatch { .. } => ErrorCode::E6003,
            EvalErrorKind::DivisionByZero => ErrorCode::E6004,
            EvalErrorKind::NonNumericCondition { .. } => ErrorCode::E6005,
            EvalErrorKind::InvalidBindingTarget { .. } => ErrorCode::E6006,
            EvalErrorKind::DefArity { .. } | EvalErrorKind::ArityMismatch { .. } => {
                ErrorCode::E6007
            }
            EvalErrorKind::IntegerOverflow { .. } => ErrorCode::E6008,
        }
    }
}

/// An evaluation error and the span of the expression that raised it.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Span,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind, span: Span) -> Self {
        EvalError { kind, span }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_span(self.span);
        if let EvalErrorKind::InvalidBindingTarget { .. } = self.kind {
            return diag.with_note(
                "the first argument of `def` is evaluated, so a bound name yields its value",
            );
        }
        diag
    }
}

// Factory functions, one per error kind. Built-ins return the bare kind; the
// evaluator pairs it with a span.

#[cold]
pub fn unbound_function(name: &str) -> EvalErrorKind {
    EvalErrorKind::UnboundFunction {
        name: name.to_string(),
    }
}

#[cold]
pub fn not_callable(name: &str, found: &'static str) -> EvalErrorKind {
    EvalErrorKind::NotCallable {
        name: name.to_string(),
        found,
    }
}

#[cold]
pub fn type_mismatch(name: &'static str, found: &'static str) -> EvalErrorKind {
    EvalErrorKind::TypeMismatch { name, found }
}

#[cold]
pub fn division_by_zero() -> EvalErrorKind {
    EvalErrorKind::DivisionByZero
}

#[cold]
pub fn non_numeric_condition(found: &'static str) -> EvalErrorKind {
    EvalErrorKind::NonNumericCondition { found }
}

#[cold]
pub fn invalid_binding_target(found: &'static str) -> EvalErrorKind {
    EvalErrorKind::InvalidBindingTarget { found }
}

#[cold]
pub fn def_arity(got: usize) -> EvalErrorKind {
    EvalErrorKind::DefArity { got }
}

#[cold]
pub fn arity_mismatch(name: &'static str, expected: Arity, got: usize) -> EvalErrorKind {
    EvalErrorKind::ArityMismatch {
        name,
        expected,
        got,
    }
}

#[cold]
pub fn integer_overflow(op: &'static str) -> EvalErrorKind {
    EvalErrorKind::IntegerOverflow { op }
}
