//! Whitespace-delimited token reading over a line-buffered stream.
//!
//! Reads behave like a formatted input stream: tokens may be spread over
//! lines or packed several to a line, and a numeric read only consumes the
//! numeric prefix of a token, leaving the rest for the next read.
//!
//! Lines are decoded lossily: bytes that are not UTF-8 become U+FFFD and
//! fail numeric reads like any other malformed token.

use std::io::BufRead;

use super::ConsoleError;

/// Line-buffered token reader.
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    raw: Vec<u8>,
    line: String,
    pos: usize,
}

impl<R: BufRead> TokenReader<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            raw: Vec::new(),
            line: String::new(),
            pos: 0,
        }
    }

    /// Read the next integer.
    ///
    /// Returns `Ok(None)` if the next token has no numeric prefix or the
    /// prefix does not fit an `i64`. Nothing past leading whitespace is
    /// consumed in that case.
    pub fn next_integer(&mut self) -> Result<Option<i64>, ConsoleError> {
        self.skip_whitespace()?;

        let rest = &self.line[self.pos..];
        let bytes = rest.as_bytes();
        let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
        let digits = bytes[sign..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits == 0 {
            return Ok(None);
        }

        let end = sign + digits;
        match rest[..end].parse::<i64>() {
            Ok(value) => {
                self.pos += end;
                Ok(Some(value))
            }
            Err(_) => Ok(None),
        }
    }

    /// Read the next non-whitespace character.
    pub fn next_char(&mut self) -> Result<char, ConsoleError> {
        self.skip_whitespace()?;

        match self.line[self.pos..].chars().next() {
            Some(c) => {
                self.pos += c.len_utf8();
                Ok(c)
            }
            // skip_whitespace only returns once a non-whitespace char is buffered
            None => Err(ConsoleError::EndOfInput),
        }
    }

    /// Drop everything left on the current line.
    pub fn discard_line(&mut self) {
        self.pos = self.line.len();
    }

    /// Advance past whitespace, pulling new lines as needed.
    fn skip_whitespace(&mut self) -> Result<(), ConsoleError> {
        loop {
            let rest = &self.line[self.pos..];
            let trimmed = rest.trim_start_matches(|c: char| c.is_ascii_whitespace());
            self.pos += rest.len() - trimmed.len();
            if self.pos < self.line.len() {
                return Ok(());
            }

            self.raw.clear();
            self.pos = 0;
            if self.reader.read_until(b'\n', &mut self.raw)? == 0 {
                self.line.clear();
                return Err(ConsoleError::EndOfInput);
            }
            self.line = String::from_utf8_lossy(&self.raw).into_owned();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(input: &str) -> TokenReader<Cursor<Vec<u8>>> {
        TokenReader::new(Cursor::new(input.as_bytes().to_vec()))
    }

    #[test]
    fn test_integers_across_lines() {
        let mut r = reader("1\n  -20\n\n+3\n");
        assert_eq!(r.next_integer().unwrap(), Some(1));
        assert_eq!(r.next_integer().unwrap(), Some(-20));
        assert_eq!(r.next_integer().unwrap(), Some(3));
        assert!(r.next_integer().unwrap_err().is_end_of_input());
    }

    #[test]
    fn test_several_tokens_on_one_line() {
        let mut r = reader("4 5\t6\n");
        assert_eq!(r.next_integer().unwrap(), Some(4));
        assert_eq!(r.next_integer().unwrap(), Some(5));
        assert_eq!(r.next_integer().unwrap(), Some(6));
    }

    #[test]
    fn test_malformed_then_discard() {
        let mut r = reader("abc 7\n8\n");
        assert_eq!(r.next_integer().unwrap(), None);
        // Failed read leaves the token in place
        assert_eq!(r.next_integer().unwrap(), None);

        r.discard_line();
        assert_eq!(r.next_integer().unwrap(), Some(8));
    }

    #[test]
    fn test_numeric_prefix_leaves_remainder() {
        let mut r = reader("12abc\n");
        assert_eq!(r.next_integer().unwrap(), Some(12));
        assert_eq!(r.next_integer().unwrap(), None);
        assert_eq!(r.next_char().unwrap(), 'a');
    }

    #[test]
    fn test_lone_sign_is_malformed() {
        let mut r = reader("- 5\n");
        assert_eq!(r.next_integer().unwrap(), None);
    }

    #[test]
    fn test_overflow_is_malformed() {
        let mut r = reader("99999999999999999999\n");
        assert_eq!(r.next_integer().unwrap(), None);
    }

    #[test]
    fn test_next_char_takes_one_char() {
        let mut r = reader("  yes\n");
        assert_eq!(r.next_char().unwrap(), 'y');
        assert_eq!(r.next_char().unwrap(), 'e');
        r.discard_line();
        assert!(r.next_char().unwrap_err().is_end_of_input());
    }

    #[test]
    fn test_input_without_trailing_newline() {
        let mut r = reader("42");
        assert_eq!(r.next_integer().unwrap(), Some(42));
        assert!(r.next_integer().unwrap_err().is_end_of_input());
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let mut r = TokenReader::new(Cursor::new(b"\xff\xfe 9\n42\n".to_vec()));
        assert_eq!(r.next_integer().unwrap(), None);

        r.discard_line();
        assert_eq!(r.next_integer().unwrap(), Some(42));
    }

    #[test]
    fn test_non_ascii_whitespace_is_malformed() {
        let mut r = reader("\u{a0}7\n");
        assert_eq!(r.next_integer().unwrap(), None);
        assert_eq!(r.next_char().unwrap(), '\u{a0}');
    }

    #[test]
    fn test_empty_input() {
        let mut r = reader("");
        assert!(r.next_char().unwrap_err().is_end_of_input());
    }
}
