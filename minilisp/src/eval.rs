use crate::builtin;
use crate::env::Environment;
use crate::parser::{ParseError, Parser};
use crate::procedure::Closure;
use crate::value::Value;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

macro_rules! check {
    ($argcheck:expr, $err:expr) => {
        if ! $argcheck { return Err($err); }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(&self, n: usize) -> bool {
        match *self {
            Arity::Exactly(expected) => n == expected,
            Arity::AtLeast(min) => n >= min,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "{}", n),
            Arity::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

#[derive(Error, PartialEq, Debug)]
pub enum EvalErr {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("unbound symbol '{0}'")]
    UnboundSymbol(String),
    #[error("unknown procedure '{0}'")]
    UnknownFunction(String),
    #[error("{0} is not a procedure")]
    NotCallable(String),
    #[error("{name}: expected {expected}, found {found}")]
    TypeMismatch { name: String, expected: &'static str, found: String },
    #[error("{name}: expected {expected} argument(s), got {found}")]
    ArgCount { name: String, expected: Arity, found: usize },
    #[error("{0}: empty list")]
    EmptyList(&'static str),
    #[error("malformed form, expected {0}")]
    InvalidForm(&'static str),
    #[error("recursion too deep, more than {0} nested evaluations")]
    RecursionDepth(usize),
}

impl EvalErr {
    pub fn type_mismatch(name: &str, expected: &'static str, found: &Value) -> EvalErr {
        EvalErr::TypeMismatch{
            name: name.to_string(),
            expected,
            found: format!("{} {}", found.type_name(), found),
        }
    }
}

/// Parse the first form in `expr` and evaluate it in `env`.
pub fn eval_str(expr: &str, env: &Rc<Environment>) -> Result<Value, EvalErr> {
    let expr = Parser::parse_str(expr)?;
    eval(&expr, env)
}

/// Nested evaluations allowed under one root before giving up, well short of
/// exhausting the native stack.
pub const MAX_DEPTH: usize = 512;

pub fn eval(expr: &Value, env: &Rc<Environment>) -> Result<Value, EvalErr> {
    match expr {
        Value::Number(_) | Value::Boolean(_) |
        Value::Builtin(_) | Value::Closure(_) => Ok(expr.clone()),
        Value::Symbol(sym) => resolve(sym, env),
        Value::List(list) if list.is_empty() => Ok(expr.clone()),
        Value::List(list) => {
            let _depth = env.descend(MAX_DEPTH).ok_or(EvalErr::RecursionDepth(MAX_DEPTH))?;
            form(list, env)
        }
    }
}

// a non-empty list: special form or application
fn form(list: &[Value], env: &Rc<Environment>) -> Result<Value, EvalErr> {
    match &list[0] {
        Value::Symbol(first) => {
            let operands = &list[1..];
            match &first[..] {
                "quote"  => quote(operands),
                "if"     => if_form(operands, env),
                "define" => define(operands, env),
                "set!"   => set(operands, env),
                "lambda" => lambda(operands, env),
                "begin"  => begin(operands, env),
                "print"  => print(operands, env),
                "list"   => builtin::list(&eval_args(operands, env)?),
                "append" => builtin::append(&eval_args(operands, env)?),
                "car"    => builtin::car(&eval_args(operands, env)?),
                "cdr"    => builtin::cdr(&eval_args(operands, env)?),
                _ => {
                    let func = env.get(first)
                        .ok_or_else(|| EvalErr::UnknownFunction(first.to_string()))?;
                    apply(&func, eval_args(operands, env)?)
                }
            }
        },
        head => {
            let func = eval(head, env)?;
            apply(&func, eval_args(&list[1..], env)?)
        }
    }
}

pub fn apply(func: &Value, args: Vec<Value>) -> Result<Value, EvalErr> {
    match func {
        Value::Builtin(b) => b.call(&args),
        Value::Closure(c) => c.call(args),
        other => Err(EvalErr::NotCallable(other.to_string())),
    }
}

// true/false/nil are fixed keywords, user bindings can't shadow them
fn resolve(sym: &str, env: &Environment) -> Result<Value, EvalErr> {
    match sym {
        "true" => Ok(Value::Boolean(true)),
        "false" => Ok(Value::Boolean(false)),
        "nil" => Ok(Value::nil()),
        _ => env.get(sym).ok_or_else(|| EvalErr::UnboundSymbol(sym.to_string()))
    }
}

fn eval_args(operands: &[Value], env: &Rc<Environment>) -> Result<Vec<Value>, EvalErr> {
    operands.iter().map(|arg| eval(arg, env)).collect()
}

fn quote(operands: &[Value]) -> Result<Value, EvalErr> {
    match operands {
        [expr] => Ok(expr.clone()),
        _ => Err(EvalErr::InvalidForm("(quote expr)"))
    }
}

fn if_form(operands: &[Value], env: &Rc<Environment>) -> Result<Value, EvalErr> {
    check!(operands.len() == 2 || operands.len() == 3,
           EvalErr::InvalidForm("(if test conseq [alt])"));
    if eval(&operands[0], env)?.is_truthy() {
        eval(&operands[1], env)
    } else {
        match operands.get(2) {
            Some(alt) => eval(alt, env),
            None => Ok(Value::nil())
        }
    }
}

fn define(operands: &[Value], env: &Rc<Environment>) -> Result<Value, EvalErr> {
    match operands {
        [Value::Symbol(var), expr] => {
            let value = eval(expr, env)?;
            tracing::debug!(symbol = %var, value = %value, "define");
            env.define(var, value);
            Ok(Value::Symbol(var.clone()))
        },
        _ => Err(EvalErr::InvalidForm("(define symbol expr)"))
    }
}

fn set(operands: &[Value], env: &Rc<Environment>) -> Result<Value, EvalErr> {
    match operands {
        [Value::Symbol(var), expr] => {
            check!(env.lookup(var).is_some(), EvalErr::UnboundSymbol(var.to_string()));
            let value = eval(expr, env)?;
            tracing::debug!(symbol = %var, value = %value, "set!");
            check!(env.set(var, value.clone()), EvalErr::UnboundSymbol(var.to_string()));
            Ok(value)
        },
        _ => Err(EvalErr::InvalidForm("(set! symbol expr)"))
    }
}

fn lambda(operands: &[Value], env: &Rc<Environment>) -> Result<Value, EvalErr> {
    match operands {
        [Value::List(params), body] => {
            let mut vars = Vec::with_capacity(params.len());
            for param in params.iter() {
                match param {
                    Value::Symbol(v) => vars.push(v.clone()),
                    _ => return Err(EvalErr::InvalidForm("(lambda (symbol ...) body)"))
                }
            }
            Ok(Value::Closure(Rc::new(Closure::new(vars, body.clone(), env.clone()))))
        },
        _ => Err(EvalErr::InvalidForm("(lambda (symbol ...) body)"))
    }
}

fn begin(operands: &[Value], env: &Rc<Environment>) -> Result<Value, EvalErr> {
    let mut last = Value::nil();
    for expr in operands {
        last = eval(expr, env)?;
    }
    Ok(last)
}

fn print(operands: &[Value], env: &Rc<Environment>) -> Result<Value, EvalErr> {
    let args = eval_args(operands, env)?;
    let line = args.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" ");
    env.output().println(&line);
    Ok(Value::nil())
}
