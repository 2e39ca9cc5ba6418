//! Tree-walking evaluation.

use lisk_ir::{CallExpr, Expr, IfElseExpr, Literal, Program, ValueExpr};
use lisk_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::environment::Environment;
use crate::errors::{
    arity_mismatch, def_arity, invalid_binding_target, non_numeric_condition, not_callable,
    unbound_function, EvalError,
};
use crate::value::Value;

/// Name of the binding special form.
const DEF: &str = "def";

/// Evaluate one expression against `env`.
pub fn eval(expr: &Expr, env: &mut Environment) -> Result<Value, EvalError> {
    ensure_sufficient_stack(|| match expr {
        Expr::Value(value) => Ok(eval_value(value, env)),
        Expr::Call(call) if call.name == DEF => eval_def(call, env),
        Expr::Call(call) => eval_call(call, env),
        Expr::IfElse(if_expr) => eval_if(if_expr, env),
    })
}

/// Evaluate a program against a fresh environment.
pub fn eval_program(program: &Program) -> Result<(), EvalError> {
    let mut env = Environment::new();
    eval_program_in(program, &mut env).map(|_| ())
}

/// Evaluate a program against `env`, returning the value of the last
/// expression. Stops at the first error; bindings made before it remain.
pub fn eval_program_in(program: &Program, env: &mut Environment) -> Result<Option<Value>, EvalError> {
    let mut last = None;
    for expr in program {
        last = Some(eval(expr, env)?);
    }
    Ok(last)
}

/// A bound symbol yields its binding; an unbound one yields itself.
fn eval_value(value: &ValueExpr, env: &Environment) -> Value {
    match &value.literal {
        Literal::Int(n) => Value::Int(*n),
        Literal::Symbol(name) => env
            .get(name)
            .cloned()
            .unwrap_or_else(|| Value::Symbol(name.clone())),
        Literal::List(atoms) => Value::List(atoms.iter().map(Value::from).collect()),
    }
}

fn eval_def(call: &CallExpr, env: &mut Environment) -> Result<Value, EvalError> {
    let [target, value] = call.args.as_slice() else {
        return Err(EvalError::new(def_arity(call.args.len()), call.span));
    };

    // Both sides are evaluated before the environment is touched.
    let name = match eval(target, env)? {
        Value::Symbol(name) => name,
        other => {
            return Err(EvalError::new(
                invalid_binding_target(other.type_name()),
                target.span(),
            ))
        }
    };
    let value = eval(value, env)?;

    debug!(%name, %value, "def");
    env.define(name, value.clone());
    Ok(value)
}

fn eval_call(call: &CallExpr, env: &mut Environment) -> Result<Value, EvalError> {
    let builtin = match env.get(&call.name) {
        None => return Err(EvalError::new(unbound_function(&call.name), call.span)),
        Some(Value::Callable(builtin)) => *builtin,
        Some(other) => {
            return Err(EvalError::new(
                not_callable(&call.name, other.type_name()),
                call.span,
            ))
        }
    };

    let args = call
        .args
        .iter()
        .map(|arg| eval(arg, env))
        .collect::<Result<Vec<_>, _>>()?;

    trace!(name = %call.name, builtin = builtin.name, args = args.len(), "call");
    if !builtin.arity.accepts(args.len()) {
        return Err(EvalError::new(
            arity_mismatch(builtin.name, builtin.arity, args.len()),
            call.span,
        ));
    }
    (builtin.func)(&args, env.print_handler()).map_err(|kind| EvalError::new(kind, call.span))
}

fn eval_if(if_expr: &IfElseExpr, env: &mut Environment) -> Result<Value, EvalError> {
    let cond = eval(&if_expr.cond, env)?;
    let Some(n) = cond.as_int() else {
        return Err(EvalError::new(
            non_numeric_condition(cond.type_name()),
            if_expr.cond.span(),
        ));
    };
    let branch = if n == 0 {
        &if_expr.else_branch
    } else {
        &if_expr.then_branch
    };
    eval(branch, env)
}

#[cfg(test)]
mod tests;
