use crate::env::Environment;
use crate::eval::{eval, Arity, EvalErr};
use crate::value::Value;
use std::fmt;
use std::rc::Rc;

pub type Fp = Rc<dyn Fn(&[Value]) -> Result<Value, EvalErr>>;

/// A native procedure. Checks its own argument count and types.
#[derive(Clone)]
pub struct Builtin {
    name: Rc<str>,
    fp: Fp,
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Builtin({})", self.name)
    }
}

impl Builtin {
    pub fn new(name: &str, fp: Fp) -> Builtin {
        Builtin{name: Rc::from(name), fp}
    }

    pub fn name(&self) -> &str { &self.name }

    pub fn call(&self, args: &[Value]) -> Result<Value, EvalErr> {
        (self.fp)(args)
    }
}

/// A user procedure created by `lambda`. The environment is the one the
/// lambda was evaluated in, shared with every other closure made there.
pub struct Closure {
    params: Vec<Rc<str>>,
    body: Value,
    env: Rc<Environment>,
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(lambda ({}) {})", self.params.join(" "), self.body)
    }
}

impl Closure {
    pub fn new(params: Vec<Rc<str>>, body: Value, env: Rc<Environment>) -> Closure {
        Closure{params, body, env}
    }

    pub fn params(&self) -> &[Rc<str>] { &self.params }

    pub fn call(&self, args: Vec<Value>) -> Result<Value, EvalErr> {
        if args.len() != self.params.len() {
            return Err(EvalErr::ArgCount{
                name: format!("{:?}", self),
                expected: Arity::Exactly(self.params.len()),
                found: args.len(),
            });
        }
        tracing::trace!(params = ?self.params, "applying closure");
        let frame = Environment::nested(self.params.clone(), args, self.env.clone());
        eval(&self.body, &frame)
    }
}
