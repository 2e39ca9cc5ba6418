//! Long-lived evaluation state for the REPL.

use lisk_eval::{stdout_handler, Environment, SharedPrintHandler, Value};
use tracing::trace;

use crate::Error;

/// One environment fed many independent inputs.
///
/// Each call to [`Session::eval_line`] lexes, parses and evaluates its input
/// on its own; only the bindings carry over. An error in one input leaves
/// the bindings made before it in place.
#[derive(Debug, Default)]
pub struct Session {
    env: Environment,
    lines: usize,
}

impl Session {
    pub fn new() -> Self {
        Session::with_print_handler(stdout_handler())
    }

    pub fn with_print_handler(handler: SharedPrintHandler) -> Self {
        Session {
            env: Environment::with_print_handler(handler),
            lines: 0,
        }
    }

    /// Evaluate one input, returning the value of its last expression.
    pub fn eval_line(&mut self, line: &str) -> Result<Option<Value>, Error> {
        self.lines += 1;
        trace!(line = self.lines, "eval_line");
        let program = lisk_parse::parse_source(line)?;
        Ok(lisk_eval::eval_program_in(&program, &mut self.env)?)
    }

    /// Number of inputs evaluated so far, including failed ones.
    pub fn lines_evaluated(&self) -> usize {
        self.lines
    }
}
