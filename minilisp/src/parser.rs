use crate::value::Value;
use lexers::{LispToken, LispTokenizer, Scanner};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, PartialEq, Debug)]
pub enum ParseError {
    #[error("unexpected ')'")]
    UnexpectedCParen,
    #[error("unexpected end of input, missing ')'")]
    UnexpectedEOF,
    #[error("lists nested more than {0} deep")]
    TooDeep(usize),
}

/// Deepest list nesting the reader accepts.
pub const MAX_NESTING: usize = 512;

pub struct Parser;

impl Parser {
    /// Parse the first form in `expr`, ignoring anything after it.
    pub fn parse_str(expr: &str) -> Result<Value, ParseError> {
        Self::parse(&mut LispTokenizer::scanner(expr))
    }

    pub fn parse_all(source: &str) -> Result<Vec<Value>, ParseError> {
        let mut lex = LispTokenizer::scanner(source);
        let mut forms = Vec::new();
        while lex.peek().is_some() {
            forms.push(Self::parse(&mut lex)?);
        }
        Ok(forms)
    }

    /// Read one form off the front of `lex`. Whatever follows it stays in
    /// the scanner for the next call.
    pub fn parse<I>(lex: &mut Scanner<I>) -> Result<Value, ParseError>
            where I: Iterator<Item=LispToken> {
        Self::parse_nested(lex, 0)
    }

    fn parse_nested<I>(lex: &mut Scanner<I>, depth: usize) -> Result<Value, ParseError>
            where I: Iterator<Item=LispToken> {
        let token = lex.next();
        lex.ignore(); // never backtracking, drop what was read
        match token {
            None                       => Err(ParseError::UnexpectedEOF),
            Some(LispToken::CParen)    => Err(ParseError::UnexpectedCParen),
            Some(LispToken::Atom(atom)) => Ok(Self::atom(&atom)),
            Some(LispToken::OParen)    => {
                if depth == MAX_NESTING {
                    return Err(ParseError::TooDeep(MAX_NESTING));
                }
                let mut list = Vec::new();
                while lex.peek() != Some(LispToken::CParen) {
                    // a dry scanner makes parse return UnexpectedEOF
                    list.push(Self::parse_nested(lex, depth + 1)?);
                }
                lex.next(); // get over that CParen
                Ok(Value::list(list))
            },
        }
    }

    // numbers need a digit and a finite value, so inf, nan and 1e400 stay
    // symbols and every number prints back as itself
    fn atom(atom: &str) -> Value {
        if atom.chars().any(|c| c.is_ascii_digit()) {
            match f64::from_str(atom) {
                Ok(n) if n.is_finite() => return Value::Number(n),
                _ => ()
            }
        }
        Value::symbol(atom)
    }
}
