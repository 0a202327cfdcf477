use std::cell::RefCell;

/// Where `print` sends its lines.
#[derive(Debug)]
pub enum Output {
    Stdout,
    /// Held until the driver takes it, so printed lines can be written
    /// through the same writer as results.
    Buffer(RefCell<String>),
}

impl Output {
    pub fn buffer() -> Output {
        Output::Buffer(RefCell::new(String::new()))
    }

    pub fn println(&self, line: &str) {
        match self {
            Output::Stdout => println!("{}", line),
            Output::Buffer(buf) => {
                let mut buf = buf.borrow_mut();
                buf.push_str(line);
                buf.push('\n');
            }
        }
    }

    /// Drain whatever was captured; always empty for stdout.
    pub fn take(&self) -> String {
        match self {
            Output::Stdout => String::new(),
            Output::Buffer(buf) => buf.take(),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Output;

    #[test]
    fn buffer_collects_until_taken() {
        let out = Output::buffer();
        out.println("a b");
        out.println("");
        assert_eq!(out.take(), "a b\n\n");
        assert_eq!(out.take(), "");
    }

    #[test]
    fn stdout_keeps_nothing() {
        let out = Output::Stdout;
        out.println("shown");
        assert_eq!(out.take(), "");
    }
}
