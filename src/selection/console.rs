//! Token-at-a-time reading over a line-oriented source.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Splits input lines into whitespace-separated tokens and hands them out one
/// per call.
///
/// Tokens left over on a line are kept for later calls, so `"1 076174517163"`
/// typed on one line answers both prompts.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// The next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_tokens_span_lines_and_skip_blanks() {
        let mut reader = TokenReader::new(Cursor::new("  1  A\n\n\t x \n"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("1"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("A"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("x"));
        assert_eq!(reader.next_token().unwrap(), None);
        assert_eq!(reader.next_token().unwrap(), None);
    }
}
