#![deny(warnings)]

use crate::scanner::Scanner;

impl<'a> Scanner<std::str::Chars<'a>> {
    pub fn from_str(source: &'a str) -> Self {
        Scanner::new(source.chars())
    }
}

impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    // skip unicode whitespace and forget it, returns if anything was skipped
    pub fn skip_ws(&mut self) -> bool {
        let skipped = self.skip_while(|c| c.is_whitespace());
        self.ignore();
        skipped
    }

    pub fn accept_any_char(&mut self, any: &str) -> Option<char> {
        self.accept_if(|c| any.contains(*c))
    }

    pub fn skip_all_chars(&mut self, over: &str) -> bool {
        self.skip_while(|c| over.contains(*c))
    }

    // stop before any char in 'any' or whitespace
    pub fn until_delim(&mut self, any: &str) -> bool {
        self.until(|c| c.is_whitespace() || any.contains(*c))
    }
}
