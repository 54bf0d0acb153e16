use crate::error_handling::*;
use std::io::{BufRead, Write};

/// Line-oriented console the calculator talks through.
pub trait Scanner {
    /// Shows `text` and blocks until one line of input arrives.
    /// The line terminator is stripped, nothing else is.
    fn prompt(&mut self, text: &str) -> Result<String>;

    fn say(&mut self, text: &str) -> Result<()>;
}

impl<T: Scanner + ?Sized> Scanner for &mut T {
    fn prompt(&mut self, text: &str) -> Result<String> {
        (**self).prompt(text)
    }

    fn say(&mut self, text: &str) -> Result<()> {
        (**self).say(text)
    }
}

pub struct StreamScanner<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StreamScanner<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self{input, output}
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }
}

fn strip_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

impl<R: BufRead, W: Write> Scanner for StreamScanner<R, W> {
    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Err(CalcError::end_of_input);
        }
        // Undecodable bytes stay in the line so the caller rejects it.
        let mut line = String::from_utf8_lossy(&bytes).into_owned();
        strip_line_ending(&mut line);
        Ok(line)
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }
}
