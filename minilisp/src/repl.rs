use crate::env::Environment;
use crate::eval::{eval, EvalErr};
use crate::output::Output;
use crate::parser::Parser;
use crate::value::Value;
use lexers::LispTokenizer;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

pub const FAREWELL: &str = "Bye!";

/// What the driver should do after handling one input line.
#[derive(PartialEq, Debug)]
pub enum Step {
    Print(String),
    Quiet,
    Quit,
}

/// Evaluates input lines against one long lived root environment. An error
/// in one line is reported and leaves earlier bindings in place. Lines
/// printed while a line runs come out of `handle` ahead of its result.
pub struct Repl {
    env: Rc<Environment>,
}

impl Default for Repl {
    fn default() -> Self { Repl::new() }
}

impl Repl {
    pub fn new() -> Repl {
        Repl::with_output(Output::buffer())
    }

    pub fn with_output(out: Output) -> Repl {
        Repl{env: Environment::with_output(out)}
    }

    pub fn env(&self) -> &Rc<Environment> { &self.env }

    pub fn is_quit(line: &str) -> bool {
        line.trim() == "(quit)"
    }

    /// Evaluate every form on the line, yielding the last value. A line
    /// that doesn't parse evaluates nothing.
    pub fn eval_line(&self, line: &str) -> Result<Option<Value>, EvalErr> {
        let mut last = None;
        for form in Parser::parse_all(line)? {
            last = Some(eval(&form, &self.env)?);
        }
        Ok(last)
    }

    pub fn handle(&self, line: &str) -> Step {
        if Self::is_quit(line) {
            return Step::Quit;
        }
        let result = self.eval_line(line);
        let printed = self.env.output().take();
        match result {
            Ok(Some(value)) => Step::Print(format!("{}{}", printed, value)),
            Ok(None) => Step::Quiet,
            Err(err) => {
                tracing::debug!(error = %err, input = line, "recovered from error");
                Step::Print(format!("{}error: {}", printed, err))
            }
        }
    }

    /// Plain line-oriented loop for non-interactive input.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, out: &mut W,
                                     prompt: &str) -> io::Result<()> {
        let mut line = String::new();
        loop {
            write!(out, "{}", prompt)?;
            out.flush()?;
            line.clear();
            if input.read_line(&mut line)? == 0 {
                return Ok(());
            }
            match self.handle(&line) {
                Step::Print(text) => writeln!(out, "{}", text)?,
                Step::Quiet => (),
                Step::Quit => return writeln!(out, "{}", FAREWELL),
            }
        }
    }

    /// Evaluate a whole source text form by form, stopping at the first
    /// error. Forms before the failing one keep their effects.
    pub fn run_script(&self, source: &str) -> Result<Value, EvalErr> {
        let mut lex = LispTokenizer::scanner(source);
        let mut last = Value::nil();
        while lex.peek().is_some() {
            let form = Parser::parse(&mut lex)?;
            last = eval(&form, &self.env)?;
        }
        Ok(last)
    }
}

///////////////////////////////////////////////////////////////////////////////
