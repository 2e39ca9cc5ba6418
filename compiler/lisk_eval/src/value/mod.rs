//! Runtime values.

use std::fmt;

use lisk_ir::Atom;

use crate::errors::EvalErrorKind;
use crate::print_handler::PrintHandlerImpl;

/// Signature shared by every built-in.
///
/// Built-ins see their arguments already evaluated, plus the print handler
/// of the environment they were called from. Errors carry no span; the
/// evaluator attaches the call's span.
pub type BuiltinFn = fn(&[Value], &PrintHandlerImpl) -> Result<Value, EvalErrorKind>;

/// How many arguments a built-in accepts.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (prefix, n) = match self {
            Arity::Exactly(n) => ("exactly", n),
            Arity::AtLeast(n) => ("at least", n),
        };
        let plural = if *n == 1 { "" } else { "s" };
        write!(f, "{prefix} {n} argument{plural}")
    }
}

/// A named built-in function.
#[derive(Copy, Clone)]
pub struct Builtin {
    pub name: &'static str,
    pub arity: Arity,
    pub func: BuiltinFn,
}

impl Builtin {
    pub const fn new(name: &'static str, arity: Arity, func: BuiltinFn) -> Self {
        Builtin { name, arity, func }
    }
}

// Built-ins are identified by name; function pointer comparison is not
// meaningful across codegen units.
impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Builtin {}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// A runtime value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    Int(i64),
    /// A symbol name, produced by an unbound reference or a quoted list element.
    Symbol(String),
    List(Vec<Value>),
    Callable(Builtin),
}

impl Value {
    /// Name of the value's type, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Symbol(_) => "symbol",
            Value::List(_) => "list",
            Value::Callable(_) => "function",
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<&Atom> for Value {
    fn from(atom: &Atom) -> Self {
        match atom {
            Atom::Int(n) => Value::Int(*n),
            Atom::Symbol(s) => Value::Symbol(s.clone()),
        }
    }
}

/// The textual form written by `print` and echoed by the REPL.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Symbol(name) => f.write_str(name),
            Value::List(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
            Value::Callable(builtin) => write!(f, "<builtin {}>", builtin.name),
        }
    }
}

#[cfg(test)]
mod tests;
