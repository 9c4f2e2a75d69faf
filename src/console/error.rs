use std::io;

use thiserror::Error;

/// Errors from the console port.
///
/// Malformed numbers are not errors: the validator recovers from them by
/// re-prompting. Only running out of input or a failing stream reach callers.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Input stream closed.
    #[error("end of input")]
    EndOfInput,
    /// Underlying read or write failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl ConsoleError {
    /// Check if this is the end-of-input condition.
    #[must_use]
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, ConsoleError::EndOfInput)
    }
}
