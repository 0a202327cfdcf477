#![deny(warnings)]

/// Wraps an iterator with a lookahead buffer so tokenizers can try a
/// match, backtrack to a saved position, and finally `extract` whatever
/// was consumed since the last extraction.
pub struct Scanner<I: Iterator> where I::Item: Clone {
    src: I,
    buf: Vec<I::Item>,
    cursor: usize,
}

impl<I> Iterator for Scanner<I> where I: Iterator, I::Item: Clone {
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        if !self.fill(self.cursor + 1) {
            return None;
        }
        self.cursor += 1;
        Some(self.buf[self.cursor - 1].clone())
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone {
    pub fn new(source: I) -> Scanner<I> {
        Scanner{src: source, buf: Vec::new(), cursor: 0}
    }

    // pull from the source until the buffer holds at least n items
    fn fill(&mut self, n: usize) -> bool {
        while self.buf.len() < n {
            match self.src.next() {
                Some(item) => self.buf.push(item),
                None => return false,
            }
        }
        true
    }

    /// Number of items consumed since the last `ignore`/`extract`.
    pub fn pos(&self) -> usize { self.cursor }

    pub fn set_pos(&mut self, pos: usize) -> bool {
        if pos > self.buf.len() {
            return false;
        }
        self.cursor = pos;
        true
    }

    /// Last consumed item, if any.
    pub fn curr(&self) -> Option<I::Item> {
        match self.cursor {
            0 => None,
            n => Some(self.buf[n - 1].clone()),
        }
    }

    pub fn peek(&mut self) -> Option<I::Item> {
        if self.fill(self.cursor + 1) {
            Some(self.buf[self.cursor].clone())
        } else {
            None
        }
    }

    pub fn view(&self) -> &[I::Item] {
        &self.buf[..self.cursor]
    }

    /// Drop everything consumed so far.
    pub fn ignore(&mut self) {
        self.buf.drain(..self.cursor);
        self.cursor = 0;
    }

    pub fn extract(&mut self) -> Vec<I::Item> {
        let items = self.buf.drain(..self.cursor).collect();
        self.cursor = 0;
        items
    }

    /// Advance only if the next item satisfies `pred`.
    pub fn accept_if<F>(&mut self, pred: F) -> Option<I::Item>
            where F: Fn(&I::Item) -> bool {
        match self.peek() {
            Some(ref next) if pred(next) => self.next(),
            _ => None,
        }
    }

    /// Skip over items matching `pred`, returns if the scanner advanced.
    pub fn skip_while<F>(&mut self, pred: F) -> bool
            where F: Fn(&I::Item) -> bool {
        let mut advanced = false;
        while self.accept_if(&pred).is_some() { advanced = true; }
        advanced
    }

    /// Consume items until one matches `pred` or the source runs dry.
    pub fn until<F>(&mut self, pred: F) -> bool
            where F: Fn(&I::Item) -> bool {
        self.skip_while(|item| !pred(item))
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone + PartialEq {
    pub fn accept(&mut self, what: &I::Item) -> Option<I::Item> {
        self.accept_if(|next| next == what)
    }

    pub fn accept_any(&mut self, any: &[I::Item]) -> Option<I::Item> {
        self.accept_if(|next| any.contains(next))
    }

    pub fn skip_all(&mut self, over: &[I::Item]) -> bool {
        self.skip_while(|next| over.contains(next))
    }

    pub fn until_any(&mut self, any: &[I::Item]) -> bool {
        self.until(|next| any.contains(next))
    }
}
