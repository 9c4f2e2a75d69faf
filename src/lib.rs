//! # guessing-game
//!
//! An interactive number-guessing game for the console.
//!
//! The user picks a range and a guess budget, the game draws a secret from
//! the range, and each guess gets "too low" / "too high" feedback until the
//! secret is found or the budget runs out. Rounds repeat on request and the
//! best (fewest guesses) win is tracked across the session.
//!
//! ## Design Principles
//!
//! 1. **Injectable I/O**: The game only talks to a `Console`. The binary
//!    wires stdin/stdout; tests wire in-memory buffers.
//!
//! 2. **Explicit session state**: The best score and history live in a
//!    `Session` and are handed to each round, never in globals.
//!
//! 3. **Recoverable input**: Malformed numbers are re-prompted in place.
//!    Only end of input and stream failures leave the validator.
//!
//! ## Modules
//!
//! - `core`: Ranges, configuration, RNG, best score
//! - `rules`: Round state, guess feedback, secret sources
//! - `console`: Console port, tokenizer, input validator
//! - `session`: Round controller, replay loop, history

pub mod core;
pub mod rules;
pub mod console;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    BestScore, ConfigError,
    GameRng, GameRngState,
    GuessRange, RoundConfig, SessionConfig,
};

pub use crate::rules::{GuessOutcome, Round, RoundResult, SecretSource};

pub use crate::console::{prompt_char, prompt_number, Console, ConsoleError, IoConsole, TokenReader};

pub use crate::session::{play_round, RoundRecord, Session, SessionEnd, SessionStats};
