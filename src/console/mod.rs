//! Console I/O behind an injectable port.
//!
//! - `Console`: the trait the game talks to
//! - `IoConsole`: `Console` over any `BufRead` + `Write` pair
//! - `TokenReader`: whitespace tokenizer used by `IoConsole`
//! - `prompt_number` / `prompt_char`: the input validator

mod error;
pub mod port;
pub mod tokens;
pub mod validator;

pub use error::ConsoleError;
pub use port::{Console, IoConsole};
pub use tokens::TokenReader;
pub use validator::{prompt_char, prompt_number, INVALID_INPUT};
