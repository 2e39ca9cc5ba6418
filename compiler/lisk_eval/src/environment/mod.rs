//! Flat global environment.
//!
//! One frame, no scopes: a binding made by `def` is visible to every later
//! expression evaluated through the same environment.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::builtins::BUILTINS;
use crate::print_handler::{stdout_handler, PrintHandlerImpl, SharedPrintHandler};
use crate::value::Value;

pub struct Environment {
    bindings: FxHashMap<String, Value>,
    print_handler: SharedPrintHandler,
}

impl Environment {
    /// Fresh environment with the built-ins bound, printing to stdout.
    pub fn new() -> Self {
        Self::with_print_handler(stdout_handler())
    }

    /// Fresh environment with the built-ins bound, printing through `handler`.
    pub fn with_print_handler(handler: SharedPrintHandler) -> Self {
        let mut bindings = FxHashMap::default();
        for builtin in BUILTINS {
            bindings.insert(builtin.name.to_string(), Value::Callable(*builtin));
        }
        Environment {
            bindings,
            print_handler: handler,
        }
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Bind `name`, returning the previous value if there was one.
    pub fn define(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.bindings.insert(name.into(), value)
    }

    /// Binding names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[inline]
    pub fn print_handler(&self) -> &PrintHandlerImpl {
        &self.print_handler
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("bindings", &self.names())
            .finish_non_exhaustive()
    }
}
