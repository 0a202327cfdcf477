use crate::builtin::builtins;
use crate::eval::{Arity, EvalErr};
use crate::value::Value;

macro_rules! fuzzy_eq {
    ($lhs:expr, $rhs:expr) => {
        match $lhs {
            Value::Number(n) => assert!((n - $rhs).abs() < 1.0e-10, "{} != {}", n, $rhs),
            other => panic!("expected a number, got {}", other),
        }
    }
}

fn call(name: &str, args: Vec<Value>) -> Result<Value, EvalErr> {
    match builtins().get(name) {
        Some(Value::Builtin(b)) => b.call(&args),
        _ => panic!("no builtin {}", name),
    }
}

fn nums(ns: &[f64]) -> Vec<Value> {
    ns.iter().map(|&n| Value::Number(n)).collect()
}

#[test]
fn arithmetic_folds_left() {
    fuzzy_eq!(call("+", nums(&[1.0, 2.0, 3.0])).unwrap(), 6.0);
    fuzzy_eq!(call("-", nums(&[10.0, 3.0, 2.0])).unwrap(), 5.0);
    fuzzy_eq!(call("*", nums(&[2.0, 3.0, 4.0])).unwrap(), 24.0);
    fuzzy_eq!(call("/", nums(&[1.0, 4.0, 2.0])).unwrap(), 0.125);
    fuzzy_eq!(call("-", nums(&[7.0])).unwrap(), 7.0);
}

#[test]
fn division_by_zero_is_ieee() {
    assert_eq!(call("/", nums(&[1.0, 0.0])).unwrap(), Value::Number(f64::INFINITY));
    assert_eq!(call("/", nums(&[-1.0, 0.0])).unwrap(), Value::Number(f64::NEG_INFINITY));
    match call("/", nums(&[0.0, 0.0])).unwrap() {
        Value::Number(n) => assert!(n.is_nan()),
        other => panic!("unexpected {}", other),
    }
}

#[test]
fn arithmetic_errors() {
    assert_eq!(call("+", vec![]),
               Err(EvalErr::ArgCount{name: "+".to_string(), expected: Arity::AtLeast(1), found: 0}));
    assert_eq!(call("*", vec![Value::Number(1.0), Value::symbol("a")]),
               Err(EvalErr::TypeMismatch{
                   name: "*".to_string(), expected: "number", found: "symbol a".to_string()}));
}

#[test]
fn comparisons_are_binary() {
    assert_eq!(call(">", nums(&[4.0, 2.0])), Ok(Value::Boolean(true)));
    assert_eq!(call(">=", nums(&[2.0, 2.0])), Ok(Value::Boolean(true)));
    assert_eq!(call("<", nums(&[4.0, 2.0])), Ok(Value::Boolean(false)));
    assert_eq!(call("<=", nums(&[1.0, 2.0])), Ok(Value::Boolean(true)));
    assert_eq!(call("<", nums(&[1.0, 2.0, 0.0])),
               Err(EvalErr::ArgCount{name: "<".to_string(), expected: Arity::Exactly(2), found: 3}));
    assert!(call(">", vec![Value::Number(1.0), Value::nil()]).is_err());
}

#[test]
fn equality_is_structural() {
    let a = Value::list(nums(&[1.0, 2.0]));
    assert_eq!(call("equal?", vec![a.clone(), Value::list(nums(&[1.0, 2.0]))]),
               Ok(Value::Boolean(true)));
    assert_eq!(call("==", nums(&[1.0, 1.0])), Ok(Value::Boolean(true)));
    assert_eq!(call("==", vec![Value::symbol("a"), Value::symbol("b")]),
               Ok(Value::Boolean(false)));
    assert_eq!(call("equal?", vec![a, Value::nil()]), Ok(Value::Boolean(false)));
    assert!(call("==", nums(&[1.0])).is_err());
}

#[test]
fn list_operations() {
    let l = Value::list(nums(&[1.0, 2.0, 3.0]));
    assert_eq!(call("car", vec![l.clone()]), Ok(Value::Number(1.0)));
    assert_eq!(call("cdr", vec![l.clone()]), Ok(Value::list(nums(&[2.0, 3.0]))));
    assert_eq!(call("cdr", vec![Value::list(nums(&[1.0]))]), Ok(Value::nil()));
    assert_eq!(call("length", vec![l.clone()]), Ok(Value::Number(3.0)));
    assert_eq!(call("null?", vec![Value::nil()]), Ok(Value::Boolean(true)));
    assert_eq!(call("null?", vec![l.clone()]), Ok(Value::Boolean(false)));
    assert_eq!(call("cons", vec![Value::Number(0.0), l.clone()]),
               Ok(Value::list(nums(&[0.0, 1.0, 2.0, 3.0]))));
    assert_eq!(call("cons", nums(&[1.0, 2.0])), Ok(Value::list(nums(&[1.0, 2.0]))));
    assert_eq!(call("append", vec![l.clone(), Value::nil(), Value::list(nums(&[4.0]))]),
               Ok(Value::list(nums(&[1.0, 2.0, 3.0, 4.0]))));
    assert_eq!(call("append", vec![]), Ok(Value::nil()));
    assert_eq!(call("list", nums(&[5.0])), Ok(Value::list(nums(&[5.0]))));
}

#[test]
fn list_operation_errors() {
    assert_eq!(call("car", vec![Value::nil()]), Err(EvalErr::EmptyList("car")));
    assert_eq!(call("cdr", vec![Value::nil()]), Err(EvalErr::EmptyList("cdr")));
    assert!(matches!(call("car", nums(&[1.0])), Err(EvalErr::TypeMismatch{..})));
    assert!(matches!(call("length", vec![Value::symbol("x")]), Err(EvalErr::TypeMismatch{..})));
    assert!(matches!(call("append", vec![Value::nil(), Value::Number(1.0)]),
                     Err(EvalErr::TypeMismatch{..})));
    assert!(matches!(call("cons", nums(&[1.0])), Err(EvalErr::ArgCount{..})));
    assert!(matches!(call("null?", vec![]), Err(EvalErr::ArgCount{..})));
}
