use crate::procedure::{Builtin, Closure};
use std::fmt;
use std::rc::Rc;

/// Everything the reader produces, environments hold and eval returns.
#[derive(Clone, Debug)]
pub enum Value {
    Number(f64),
    Symbol(Rc<str>),
    Boolean(bool),
    List(Rc<[Value]>),
    Builtin(Builtin),
    Closure(Rc<Closure>),
}

impl Value {
    pub fn symbol(name: &str) -> Value {
        Value::Symbol(Rc::from(name))
    }

    pub fn list(items: Vec<Value>) -> Value {
        Value::List(Rc::from(items))
    }

    /// The empty list, doubling as nil.
    pub fn nil() -> Value {
        Value::List(Rc::from(Vec::new()))
    }

    pub fn is_nil(&self) -> bool {
        match self {
            Value::List(items) => items.is_empty(),
            _ => false
        }
    }

    /// Only `false`, the empty list and the symbol `nil` are false.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Boolean(b) => *b,
            Value::List(items) => !items.is_empty(),
            Value::Symbol(s) => &**s != "nil",
            _ => true
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Symbol(_) => "symbol",
            Value::Boolean(_) => "boolean",
            Value::List(_) => "list",
            Value::Builtin(_) => "builtin",
            Value::Closure(_) => "lambda",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Builtin(a), Value::Builtin(b)) => a.name() == b.name(),
            (Value::Closure(a), Value::Closure(b)) => Rc::ptr_eq(a, b),
            _ => false
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Value { Value::Number(n) }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value { Value::Boolean(b) }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Symbol(s) => write!(f, "{}", s),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 { write!(f, " ")?; }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            },
            Value::Builtin(b) => write!(f, "#<builtin {}>", b.name()),
            Value::Closure(c) => write!(f, "#<lambda ({})>", c.params().join(" ")),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
