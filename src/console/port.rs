//! The console port and its stream-backed implementation.

use std::io::{BufRead, Write};

use super::{ConsoleError, TokenReader};

/// Prompting and reading, as seen by the game.
///
/// The binary plugs in stdin/stdout; tests plug in in-memory buffers.
pub trait Console {
    /// Write text and flush it, so prompts show before the next read.
    fn print(&mut self, text: &str) -> Result<(), ConsoleError>;

    /// Read the next integer. `Ok(None)` means the next token is not a number.
    fn read_integer(&mut self) -> Result<Option<i64>, ConsoleError>;

    /// Read the next non-whitespace character.
    fn read_char(&mut self) -> Result<char, ConsoleError>;

    /// Discard the rest of the current input line.
    fn discard_line(&mut self);
}

impl<C: Console + ?Sized> Console for &mut C {
    fn print(&mut self, text: &str) -> Result<(), ConsoleError> {
        (**self).print(text)
    }

    fn read_integer(&mut self) -> Result<Option<i64>, ConsoleError> {
        (**self).read_integer()
    }

    fn read_char(&mut self) -> Result<char, ConsoleError> {
        (**self).read_char()
    }

    fn discard_line(&mut self) {
        (**self).discard_line()
    }
}

/// Console over any buffered reader and writer.
#[derive(Debug)]
pub struct IoConsole<R, W> {
    input: TokenReader<R>,
    output: W,
}

impl<R: BufRead, W: Write> IoConsole<R, W> {
    /// Create a console reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: TokenReader::new(input),
            output,
        }
    }

    /// Everything written so far.
    #[must_use]
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Consume the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for IoConsole<R, W> {
    fn print(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    fn read_integer(&mut self) -> Result<Option<i64>, ConsoleError> {
        self.input.next_integer()
    }

    fn read_char(&mut self) -> Result<char, ConsoleError> {
        self.input.next_char()
    }

    fn discard_line(&mut self) {
        self.input.discard_line()
    }
}
