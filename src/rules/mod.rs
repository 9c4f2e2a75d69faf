//! Round rules, independent of any console.
//!
//! - `Round` tracks the secret and the guess budget
//! - `GuessOutcome` is the directional feedback for one guess
//! - `SecretSource` picks the secret for each new round

pub mod round;
pub mod secret;

pub use round::{GuessOutcome, Round, RoundResult};
pub use secret::SecretSource;
