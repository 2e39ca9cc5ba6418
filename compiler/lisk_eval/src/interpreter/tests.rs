#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::errors::EvalErrorKind;
use crate::print_handler::{buffer_handler, SharedPrintHandler};
use lisk_ir::Span;
use pretty_assertions::assert_eq;

/// Environment capturing `print` output, plus the handle to read it.
fn capture_env() -> (Environment, SharedPrintHandler) {
    let handler = buffer_handler();
    (Environment::with_print_handler(handler.clone()), handler)
}

fn run_in(source: &str, env: &mut Environment) -> Result<Option<Value>, EvalError> {
    let program = lisk_parse::parse_source(source).unwrap();
    eval_program_in(&program, env)
}

fn run(source: &str) -> Result<Value, EvalError> {
    let (mut env, _) = capture_env();
    run_in(source, &mut env).map(|v| v.unwrap())
}

fn run_err(source: &str) -> EvalErrorKind {
    run(source).unwrap_err().kind
}

#[test]
fn test_arithmetic() {
    assert_eq!(run("(+ 1 2)"), Ok(Value::Int(3)));
    assert_eq!(run("(- 10 (* 2 3))"), Ok(Value::Int(4)));
    assert_eq!(run("(/ 100 5 2)"), Ok(Value::Int(10)));
}

#[test]
fn test_def_binds_and_persists() {
    let (mut env, _) = capture_env();
    assert_eq!(run_in("(def x 5) (+ x x)", &mut env), Ok(Some(Value::Int(10))));
    assert_eq!(env.get("x"), Some(&Value::Int(5)));
    assert_eq!(run_in("(* x 3)", &mut env), Ok(Some(Value::Int(15))));
}

#[test]
fn test_def_returns_bound_value() {
    assert_eq!(run("(def y (+ 2 2))"), Ok(Value::Int(4)));
}

#[test]
fn test_def_can_alias_builtin() {
    let (mut env, _) = capture_env();
    let result = run_in("(def plus +) (plus 1 2 3)", &mut env);
    assert_eq!(result, Ok(Some(Value::Int(6))));
    assert_eq!(env.get("plus").unwrap().to_string(), "<builtin +>");
}

#[test]
fn test_if_uses_numeric_truthiness() {
    assert_eq!(run("(if 0 1 2)"), Ok(Value::Int(2)));
    assert_eq!(run("(if 7 1 2)"), Ok(Value::Int(1)));
    assert_eq!(run("(if -1 1 2)"), Ok(Value::Int(1)));
    assert_eq!(run("(if (- 3 3) yes no)"), Ok(Value::Symbol("no".into())));
}

#[test]
fn test_if_evaluates_only_the_taken_branch() {
    assert_eq!(run("(if 1 5 (/ 1 0))"), Ok(Value::Int(5)));
    assert_eq!(run("(if 0 (undefined) 6)"), Ok(Value::Int(6)));
}

#[test]
fn test_unbound_symbol_evaluates_to_itself() {
    assert_eq!(run("hello"), Ok(Value::Symbol("hello".into())));
}

#[test]
fn test_quoted_list_is_not_evaluated() {
    let (mut env, _) = capture_env();
    let result = run_in("(def a 1) '(a 2 if)", &mut env);
    assert_eq!(
        result,
        Ok(Some(Value::List(vec![
            Value::Symbol("a".into()),
            Value::Int(2),
            Value::Symbol("if".into()),
        ])))
    );
}

#[test]
fn test_print_writes_to_handler() {
    let (mut env, out) = capture_env();
    let result = run_in("(print (+ 1 2)) (print '(1 2 3)) (print foo)", &mut env);
    assert_eq!(result, Ok(Some(Value::Symbol("foo".into()))));
    assert_eq!(out.get_output(), "3\n(1 2 3)\nfoo\n");
}

#[test]
fn test_division_by_zero_reports_call_span() {
    let err = run("(/ 10 0)").unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    assert_eq!(err.span, Span::new(0, 8));
}

#[test]
fn test_unbound_function() {
    assert_eq!(
        run_err("(frobnicate 1)"),
        EvalErrorKind::UnboundFunction {
            name: "frobnicate".into()
        }
    );
}

#[test]
fn test_unbound_function_skips_argument_evaluation() {
    let (mut env, out) = capture_env();
    assert!(run_in("(nope (print 1))", &mut env).is_err());
    assert_eq!(out.get_output(), "");
}

#[test]
fn test_not_callable() {
    assert_eq!(
        run_err("(def x 5) (x 1)"),
        EvalErrorKind::NotCallable {
            name: "x".into(),
            found: "integer"
        }
    );
}

#[test]
fn test_type_mismatch() {
    assert_eq!(
        run_err("(+ 1 foo)"),
        EvalErrorKind::TypeMismatch {
            name: "+",
            found: "symbol"
        }
    );
    assert_eq!(
        run_err("(* 2 '(1))"),
        EvalErrorKind::TypeMismatch {
            name: "*",
            found: "list"
        }
    );
}

#[test]
fn test_non_numeric_condition() {
    let err = run("(if '(1) 1 2)").unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::NonNumericCondition { found: "list" }
    );
    assert_eq!(err.span, Span::new(4, 8));
}

#[test]
fn test_def_arity() {
    assert_eq!(run_err("(def x)"), EvalErrorKind::DefArity { got: 1 });
    assert_eq!(run_err("(def x 1 2)"), EvalErrorKind::DefArity { got: 3 });
}

#[test]
fn test_def_of_bound_name_is_invalid_target() {
    let (mut env, _) = capture_env();
    run_in("(def x 5)", &mut env).unwrap();
    let err = run_in("(def x 6)", &mut env).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::InvalidBindingTarget { found: "integer" }
    );
    assert_eq!(env.get("x"), Some(&Value::Int(5)));
}

#[test]
fn test_failed_def_leaves_environment_untouched() {
    let (mut env, _) = capture_env();
    let before: Vec<String> = env.names().into_iter().map(String::from).collect();
    assert!(run_in("(def z (/ 1 0))", &mut env).is_err());
    assert_eq!(env.get("z"), None);
    assert_eq!(env.names(), before);
}

#[test]
fn test_builtin_arity() {
    assert_eq!(
        run_err("(print 1 2)"),
        EvalErrorKind::ArityMismatch {
            name: "print",
            expected: crate::value::Arity::Exactly(1),
            got: 2
        }
    );
    assert!(matches!(
        run_err("(+)"),
        EvalErrorKind::ArityMismatch { name: "+", got: 0, .. }
    ));
}

#[test]
fn test_error_stops_program_but_keeps_earlier_bindings() {
    let (mut env, out) = capture_env();
    let result = run_in("(def a 1) (print a) (/ a 0) (print 2)", &mut env);
    assert!(result.is_err());
    assert_eq!(out.get_output(), "1\n");
    assert_eq!(env.get("a"), Some(&Value::Int(1)));
}

#[test]
fn test_empty_program() {
    let (mut env, _) = capture_env();
    assert_eq!(run_in("", &mut env), Ok(None));
    let program = lisk_parse::parse_source("").unwrap();
    assert_eq!(eval_program(&program), Ok(()));
}

#[test]
fn test_eval_program_uses_fresh_environment() {
    let program = lisk_parse::parse_source("(def x 1) (+ x 1)").unwrap();
    assert_eq!(eval_program(&program), Ok(()));
    let program = lisk_parse::parse_source("(+ x 1)").unwrap();
    assert!(eval_program(&program).is_err());
}

#[test]
fn test_deep_nesting_evaluates() {
    let depth = 200_000;
    let mut source = "(+ 1 ".repeat(depth);
    source.push('0');
    source.push_str(&")".repeat(depth));
    let program = lisk_parse::parse_source(&source).unwrap();
    let (mut env, _) = capture_env();
    let result = eval_program_in(&program, &mut env);
    assert_eq!(result, Ok(Some(Value::Int(200_000))));
    drop(program);
}
