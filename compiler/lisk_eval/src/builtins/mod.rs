//! Built-in functions seeded into every environment.
//!
//! Arithmetic folds left to right over at least one integer argument, with
//! checked operations so overflow is an error rather than a wrap.

use crate::errors::{
    arity_mismatch, division_by_zero, integer_overflow, type_mismatch, EvalErrorKind,
};
use crate::print_handler::PrintHandlerImpl;
use crate::value::{Arity, Builtin, Value};

/// Every built-in, in the order they are installed.
pub const BUILTINS: &[Builtin] = &[
    Builtin::new("print", Arity::Exactly(1), builtin_print),
    Builtin::new("+", Arity::AtLeast(1), builtin_add),
    Builtin::new("-", Arity::AtLeast(1), builtin_sub),
    Builtin::new("*", Arity::AtLeast(1), builtin_mul),
    Builtin::new("/", Arity::AtLeast(1), builtin_div),
];

/// Write the argument's textual form and a newline; return the argument.
fn builtin_print(args: &[Value], out: &PrintHandlerImpl) -> Result<Value, EvalErrorKind> {
    let [value] = args else {
        return Err(arity_mismatch("print", Arity::Exactly(1), args.len()));
    };
    out.println(&value.to_string());
    Ok(value.clone())
}

fn builtin_add(args: &[Value], _: &PrintHandlerImpl) -> Result<Value, EvalErrorKind> {
    fold_ints("+", args, i64::checked_add)
}

fn builtin_sub(args: &[Value], _: &PrintHandlerImpl) -> Result<Value, EvalErrorKind> {
    fold_ints("-", args, i64::checked_sub)
}

fn builtin_mul(args: &[Value], _: &PrintHandlerImpl) -> Result<Value, EvalErrorKind> {
    fold_ints("*", args, i64::checked_mul)
}

/// Floor division: rounds toward negative infinity, so `(/ -7 2)` is `-4`.
fn builtin_div(args: &[Value], _: &PrintHandlerImpl) -> Result<Value, EvalErrorKind> {
    let ints = integers("/", args)?;
    let Some((&first, rest)) = ints.split_first() else {
        return Err(arity_mismatch("/", Arity::AtLeast(1), 0));
    };
    rest.iter()
        .try_fold(first, |acc, &divisor| floor_div(acc, divisor))
        .map(Value::Int)
}

fn floor_div(lhs: i64, rhs: i64) -> Result<i64, EvalErrorKind> {
    if rhs == 0 {
        return Err(division_by_zero());
    }
    // checked_div fails only for i64::MIN / -1.
    let quotient = lhs.checked_div(rhs).ok_or_else(|| integer_overflow("/"))?;
    if lhs % rhs != 0 && ((lhs < 0) != (rhs < 0)) {
        Ok(quotient - 1)
    } else {
        Ok(quotient)
    }
}

fn fold_ints(
    name: &'static str,
    args: &[Value],
    op: fn(i64, i64) -> Option<i64>,
) -> Result<Value, EvalErrorKind> {
    let ints = integers(name, args)?;
    let Some((&first, rest)) = ints.split_first() else {
        return Err(arity_mismatch(name, Arity::AtLeast(1), 0));
    };
    rest.iter()
        .try_fold(first, |acc, &n| op(acc, n).ok_or_else(|| integer_overflow(name)))
        .map(Value::Int)
}

/// Check every argument is an integer, before any arithmetic happens.
fn integers(name: &'static str, args: &[Value]) -> Result<Vec<i64>, EvalErrorKind> {
    args.iter()
        .map(|v| v.as_int().ok_or_else(|| type_mismatch(name, v.type_name())))
        .collect()
}
