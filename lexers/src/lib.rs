mod scanner;
mod char_scanner;
mod lisp_tokenizer;

pub use scanner::Scanner;
pub use lisp_tokenizer::{LispTokenizer, LispToken, tokenize};

#[cfg(test)]
mod scanner_test;
