//! Token input for the console game.

use std::collections::VecDeque;
use std::io::{self, BufRead};
use tracing::{instrument, trace};

/// Outcome of reading one integer from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A token that parsed as an integer.
    Value(i64),
    /// A token that did not parse; it has been consumed.
    Malformed(String),
    /// No further input will ever arrive.
    EndOfInput,
}

/// Source of whitespace-separated tokens.
///
/// The game loop only talks to this trait, so tests can feed scripted input
/// without a terminal.
pub trait InputSource {
    /// Returns the next token, or `None` once input is exhausted.
    fn next_token(&mut self) -> io::Result<Option<String>>;

    /// Reads the next token as an integer.
    ///
    /// Malformed tokens are consumed so they cannot be read again.
    fn read_int(&mut self) -> io::Result<ReadOutcome> {
        Ok(match self.next_token()? {
            None => ReadOutcome::EndOfInput,
            Some(token) => match token.parse::<i64>() {
                Ok(value) => ReadOutcome::Value(value),
                Err(_) => ReadOutcome::Malformed(token),
            },
        })
    }
}

/// Splits any buffered reader into whitespace-separated tokens.
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }
}

impl<R: BufRead> InputSource for TokenReader<R> {
    #[instrument(skip(self))]
    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                trace!("End of input");
                return Ok(None);
            }
            // Invalid UTF-8 becomes a malformed token rather than an I/O error.
            let line = String::from_utf8_lossy(&line);
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}
