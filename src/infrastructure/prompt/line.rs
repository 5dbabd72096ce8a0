//! Interactive line prompter
//!
//! Writes the question to stderr (or any writer) and reads one line of
//! input. Anything but `y`/`yes` declines, including EOF and read errors.

use std::io::{self, BufRead, Write};
use std::sync::Mutex;

use crate::domain::ports::{is_affirmative, Prompter};

/// Prompter that reads answers line by line.
pub struct LinePrompter<R, W> {
    io: Mutex<(R, W)>,
}

impl LinePrompter<io::StdinLock<'static>, io::Stderr> {
    /// Prompt on stderr, answer on stdin
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            io: Mutex::new((input, output)),
        }
    }

    /// Give back the reader and writer, e.g. to inspect captured output
    pub fn into_inner(self) -> (R, W) {
        self.io
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn confirm(&self, prompt: &str) -> bool {
        let mut guard = self
            .io
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let (input, output) = &mut *guard;

        let _ = write!(output, "{prompt} [y/n]: ");
        let _ = output.flush();

        let mut answer = String::new();
        match input.read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => is_affirmative(&answer),
        }
    }
}
