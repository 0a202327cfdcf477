#![deny(warnings)]

use crate::scanner::Scanner;
use std::fmt;

#[derive(Clone, PartialEq, Debug)]
pub enum LispToken {
    OParen, CParen,
    Atom(String),
}

impl fmt::Display for LispToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LispToken::OParen => write!(f, "("),
            LispToken::CParen => write!(f, ")"),
            LispToken::Atom(atom) => write!(f, "{}", atom),
        }
    }
}

/// Splits text into parens and atoms. An atom is a maximal run of
/// characters that are neither whitespace nor parens, so `(+1 2)` yields
/// `(`, `+1`, `2`, `)`. Interpreting atoms is left to the reader.
pub struct LispTokenizer<I: Iterator<Item=char>>(Scanner<I>);

impl<'a> LispTokenizer<std::str::Chars<'a>> {
    pub fn scanner(source: &'a str) -> Scanner<Self> {
        Scanner::new(LispTokenizer(Scanner::from_str(source)))
    }
}

impl<I: Iterator<Item=char>> LispTokenizer<I> {
    pub fn new(source: I) -> Self {
        LispTokenizer(Scanner::new(source))
    }
}

impl<I: Iterator<Item=char>> Iterator for LispTokenizer<I> {
    type Item = LispToken;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.skip_ws();
        if let Some(paren) = self.0.accept_any_char("()") {
            self.0.ignore();
            return Some(match paren {
                '(' => LispToken::OParen,
                _ => LispToken::CParen,
            });
        }
        if self.0.until_delim("()") {
            Some(LispToken::Atom(self.0.extract_string()))
        } else {
            None
        }
    }
}

pub fn tokenize(source: &str) -> Vec<LispToken> {
    LispTokenizer::new(source.chars()).collect()
}

///////////////////////////////////////////////////////////////////////////////
