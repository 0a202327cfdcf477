use crate::eval::{Arity, EvalErr};
use crate::procedure::Builtin;
use crate::value::Value;
use std::collections::HashMap;
use std::rc::Rc;
use std::{cmp, ops};

fn arity(name: &str, args: &[Value], expected: Arity) -> Result<(), EvalErr> {
    if expected.accepts(args.len()) {
        Ok(())
    } else {
        Err(EvalErr::ArgCount{name: name.to_string(), expected, found: args.len()})
    }
}

fn num(name: &str, arg: &Value) -> Result<f64, EvalErr> {
    match arg {
        Value::Number(n) => Ok(*n),
        other => Err(EvalErr::type_mismatch(name, "number", other))
    }
}

fn items<'a>(name: &str, arg: &'a Value) -> Result<&'a [Value], EvalErr> {
    match arg {
        Value::List(l) => Ok(&l[..]),
        other => Err(EvalErr::type_mismatch(name, "list", other))
    }
}

// left fold seeded with the first argument, (- 10 3 2) is 5
fn foldop<T>(name: &str, op: T, args: &[Value]) -> Result<Value, EvalErr>
        where T: Fn(f64, f64) -> f64 {
    arity(name, args, Arity::AtLeast(1))?;
    let base = num(name, &args[0])?;
    args[1..].iter()
        .try_fold(base, |acc, arg| num(name, arg).map(|n| op(acc, n)))
        .map(Value::Number)
}

fn compare<T>(name: &str, op: T, args: &[Value]) -> Result<Value, EvalErr>
        where T: Fn(&f64, &f64) -> bool {
    arity(name, args, Arity::Exactly(2))?;
    Ok(Value::Boolean(op(&num(name, &args[0])?, &num(name, &args[1])?)))
}

fn equal(name: &str, args: &[Value]) -> Result<Value, EvalErr> {
    arity(name, args, Arity::Exactly(2))?;
    Ok(Value::Boolean(args[0] == args[1]))
}

pub fn car(args: &[Value]) -> Result<Value, EvalErr> {
    arity("car", args, Arity::Exactly(1))?;
    match items("car", &args[0])?.first() {
        Some(head) => Ok(head.clone()),
        None => Err(EvalErr::EmptyList("car"))
    }
}

pub fn cdr(args: &[Value]) -> Result<Value, EvalErr> {
    arity("cdr", args, Arity::Exactly(1))?;
    match items("cdr", &args[0])? {
        [] => Err(EvalErr::EmptyList("cdr")),
        [_, tail @ ..] => Ok(Value::list(tail.to_vec()))
    }
}

// consing onto a non-list makes a two element list
pub fn cons(args: &[Value]) -> Result<Value, EvalErr> {
    arity("cons", args, Arity::Exactly(2))?;
    match args[1] {
        Value::List(ref tail) => {
            let mut list = Vec::with_capacity(tail.len() + 1);
            list.push(args[0].clone());
            list.extend(tail.iter().cloned());
            Ok(Value::list(list))
        },
        _ => Ok(Value::list(args.to_vec()))
    }
}

pub fn append(args: &[Value]) -> Result<Value, EvalErr> {
    let mut list = Vec::new();
    for arg in args {
        list.extend(items("append", arg)?.iter().cloned());
    }
    Ok(Value::list(list))
}

pub fn list(args: &[Value]) -> Result<Value, EvalErr> {
    Ok(Value::list(args.to_vec()))
}

fn length(args: &[Value]) -> Result<Value, EvalErr> {
    arity("length", args, Arity::Exactly(1))?;
    Ok(Value::Number(items("length", &args[0])?.len() as f64))
}

fn null(args: &[Value]) -> Result<Value, EvalErr> {
    arity("null?", args, Arity::Exactly(1))?;
    Ok(Value::Boolean(items("null?", &args[0])?.is_empty()))
}

fn install<F>(procs: &mut HashMap<Rc<str>, Value>, name: &str, fp: F)
        where F: Fn(&[Value]) -> Result<Value, EvalErr> + 'static {
    procs.insert(Rc::from(name), Value::Builtin(Builtin::new(name, Rc::new(fp))));
}

/// The primitive library bound in the root environment.
pub fn builtins() -> HashMap<Rc<str>, Value> {
    let mut procs = HashMap::new();
    // division by zero yields inf or NaN
    install(&mut procs, "+", |args| foldop("+", ops::Add::add, args));
    install(&mut procs, "-", |args| foldop("-", ops::Sub::sub, args));
    install(&mut procs, "*", |args| foldop("*", ops::Mul::mul, args));
    install(&mut procs, "/", |args| foldop("/", ops::Div::div, args));
    install(&mut procs, "<", |args| compare("<", cmp::PartialOrd::lt, args));
    install(&mut procs, "<=", |args| compare("<=", cmp::PartialOrd::le, args));
    install(&mut procs, ">", |args| compare(">", cmp::PartialOrd::gt, args));
    install(&mut procs, ">=", |args| compare(">=", cmp::PartialOrd::ge, args));
    install(&mut procs, "==", |args| equal("==", args));
    install(&mut procs, "equal?", |args| equal("equal?", args));
    install(&mut procs, "length", length);
    install(&mut procs, "null?", null);
    install(&mut procs, "cons", cons);
    install(&mut procs, "car", car);
    install(&mut procs, "cdr", cdr);
    install(&mut procs, "append", append);
    install(&mut procs, "list", list);
    procs
}
