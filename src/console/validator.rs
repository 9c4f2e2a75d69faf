//! Prompt-and-retry input validation.

use log::debug;

use super::{Console, ConsoleError};

/// Printed after each rejected numeric token.
pub const INVALID_INPUT: &str = "Invalid input. Please enter a number.\n";

/// Prompt until the user enters an integer.
///
/// A non-numeric token prints [`INVALID_INPUT`], drops the rest of its line
/// and prompts again. No range or sign checks are made here.
pub fn prompt_number<C: Console + ?Sized>(console: &mut C, prompt: &str) -> Result<i64, ConsoleError> {
    loop {
        console.print(prompt)?;
        match console.read_integer()? {
            Some(value) => return Ok(value),
            None => {
                debug!("Rejected non-numeric input for prompt {:?}", prompt.trim_end());
                console.discard_line();
                console.print(INVALID_INPUT)?;
            }
        }
    }
}

/// Prompt once and read a single character.
pub fn prompt_char<C: Console + ?Sized>(console: &mut C, prompt: &str) -> Result<char, ConsoleError> {
    console.print(prompt)?;
    console.read_char()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::IoConsole;
    use std::io::Cursor;

    fn console(input: &str) -> IoConsole<Cursor<Vec<u8>>, Vec<u8>> {
        IoConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: IoConsole<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_valid_first_try() {
        let mut c = console("42\n");
        assert_eq!(prompt_number(&mut c, "N: ").unwrap(), 42);
        assert_eq!(output(c), "N: ");
    }

    #[test]
    fn test_retries_after_garbage() {
        let mut c = console("abc\nx y z\n-7\n");
        assert_eq!(prompt_number(&mut c, "N: ").unwrap(), -7);

        let out = output(c);
        assert_eq!(out.matches(INVALID_INPUT).count(), 2);
        assert_eq!(out.matches("N: ").count(), 3);
    }

    #[test]
    fn test_rejection_drops_rest_of_line() {
        let mut c = console("oops 5\n6\n");
        assert_eq!(prompt_number(&mut c, "N: ").unwrap(), 6);
    }

    #[test]
    fn test_non_utf8_line_is_reprompted() {
        let mut c = IoConsole::new(Cursor::new(b"\xff\xfe\n42\n".to_vec()), Vec::new());
        assert_eq!(prompt_number(&mut c, "N: ").unwrap(), 42);
        assert_eq!(output(c).matches(INVALID_INPUT).count(), 1);
    }

    #[test]
    fn test_end_of_input_while_retrying() {
        let mut c = console("abc\n");
        let err = prompt_number(&mut c, "N: ").unwrap_err();
        assert!(err.is_end_of_input());
        assert_eq!(output(c).matches(INVALID_INPUT).count(), 1);
    }

    #[test]
    fn test_prompt_char() {
        let mut c = console("\n  Y\n");
        assert_eq!(prompt_char(&mut c, "Again? ").unwrap(), 'Y');
        assert_eq!(output(c), "Again? ");
    }
}
