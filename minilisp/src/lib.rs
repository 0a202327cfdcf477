mod value;
mod parser;
mod env;
mod output;
mod procedure;
mod builtin;
mod eval;
mod repl;
mod config;

pub use value::Value;
pub use parser::{Parser, ParseError, MAX_NESTING};
pub use env::{Depth, Environment};
pub use output::Output;
pub use procedure::{Builtin, Closure, Fp};
pub use builtin::builtins;
pub use eval::{eval, eval_str, apply, Arity, EvalErr, MAX_DEPTH};
pub use repl::{Repl, Step, FAREWELL};
pub use config::{Config, Mode, UsageError, USAGE};

#[cfg(test)]
mod builtin_test;
