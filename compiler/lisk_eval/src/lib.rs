//! Tree-walking evaluator for Lisk.
//!
//! Evaluation is a direct recursive walk over [`Expr`](lisk_ir::Expr)
//! against an explicit, caller-owned [`Environment`]. There is no global
//! state: two environments never see each other's bindings.
//!
//! `def` is the only special form. Every other call looks its name up in the
//! environment, evaluates the arguments left to right, and invokes the
//! built-in bound there.

mod builtins;
mod environment;
pub mod errors;
mod interpreter;
mod print_handler;
mod value;

pub use environment::Environment;
pub use errors::{EvalError, EvalErrorKind};
pub use interpreter::{eval, eval_program, eval_program_in};
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
};
pub use value::{Arity, Builtin, BuiltinFn, Value};
