use super::*;
use pretty_assertions::assert_eq;

fn noop(_: &[Value], _: &PrintHandlerImpl) -> Result<Value, EvalErrorKind> {
    Ok(Value::Int(0))
}

#[test]
fn test_display_forms() {
    assert_eq!(Value::Int(-12).to_string(), "-12");
    assert_eq!(Value::Symbol("foo".into()).to_string(), "foo");
    assert_eq!(
        Value::List(vec![
            Value::Int(1),
            Value::Symbol("a".into()),
            Value::List(vec![]),
        ])
        .to_string(),
        "(1 a ())"
    );
    let builtin = Builtin::new("noop", Arity::AtLeast(0), noop);
    assert_eq!(Value::Callable(builtin).to_string(), "<builtin noop>");
}

#[test]
fn test_builtins_compare_by_name() {
    let a = Builtin::new("f", Arity::Exactly(1), noop);
    let b = Builtin::new("f", Arity::Exactly(1), noop);
    let c = Builtin::new("g", Arity::Exactly(1), noop);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_arity() {
    assert!(Arity::Exactly(1).accepts(1));
    assert!(!Arity::Exactly(1).accepts(2));
    assert!(Arity::AtLeast(1).accepts(5));
    assert!(!Arity::AtLeast(1).accepts(0));
    assert_eq!(Arity::Exactly(1).to_string(), "exactly 1 argument");
    assert_eq!(Arity::AtLeast(2).to_string(), "at least 2 arguments");
}

#[test]
fn test_from_atom() {
    assert_eq!(Value::from(&Atom::Int(3)), Value::Int(3));
    assert_eq!(
        Value::from(&Atom::Symbol("if".into())),
        Value::Symbol("if".into())
    );
}

#[test]
fn test_accessors() {
    assert_eq!(Value::Int(4).as_int(), Some(4));
    assert_eq!(Value::Symbol("x".into()).as_int(), None);
    assert_eq!(Value::List(vec![]).type_name(), "list");
}
