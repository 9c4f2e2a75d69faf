//! Core value types: ranges, configuration, RNG, best score.
//!
//! Nothing in here touches the console. The round rules and the session
//! controller build on these types.

pub mod config;
pub mod rng;
pub mod score;

pub use config::{ConfigError, GuessRange, RoundConfig, SessionConfig};
pub use rng::{GameRng, GameRngState};
pub use score::BestScore;
