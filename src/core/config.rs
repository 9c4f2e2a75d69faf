//! Round and session configuration types.
//!
//! - `GuessRange`: the closed interval the secret is drawn from
//! - `RoundConfig`: range plus guess limit for a single round
//! - `SessionConfig`: process-level settings (RNG seed)

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::GameRng;

/// Errors raised when building configuration values.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `max` must be strictly greater than `min`.
    #[error("max ({max}) should be greater than min ({min})")]
    EmptyRange { min: i64, max: i64 },
}

/// Closed interval `[min, max]` with `max > min`.
///
/// The invariant is checked on construction, so every `GuessRange` in the
/// program holds at least two values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuessRange {
    min: i64,
    max: i64,
}

impl GuessRange {
    /// Create a range, rejecting `max <= min`.
    pub fn new(min: i64, max: i64) -> Result<Self, ConfigError> {
        if max <= min {
            return Err(ConfigError::EmptyRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound (inclusive).
    #[must_use]
    pub const fn min(&self) -> i64 {
        self.min
    }

    /// Upper bound (inclusive).
    #[must_use]
    pub const fn max(&self) -> i64 {
        self.max
    }

    /// Check if a value lies inside the range.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Number of values in the range.
    #[must_use]
    pub fn size(&self) -> u128 {
        (i128::from(self.max) - i128::from(self.min) + 1) as u128
    }
}

impl std::fmt::Display for GuessRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Settings for a single round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Interval the secret is drawn from.
    pub range: GuessRange,

    /// Guesses allowed. Zero or negative means the round is lost immediately.
    pub guess_limit: i64,
}

impl RoundConfig {
    /// Create a new round configuration.
    pub fn new(range: GuessRange, guess_limit: i64) -> Self {
        Self { range, guess_limit }
    }

    /// Guess limit clamped to a usable count.
    #[must_use]
    pub fn allowed_guesses(&self) -> u64 {
        u64::try_from(self.guess_limit).unwrap_or(0)
    }
}

/// Process-level settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Fixed RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Create a config with a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the RNG this session draws secrets from.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_valid() {
        let range = GuessRange::new(1, 10).unwrap();
        assert_eq!(range.min(), 1);
        assert_eq!(range.max(), 10);
        assert_eq!(range.size(), 10);
        assert_eq!(format!("{}", range), "[1, 10]");
    }

    #[test]
    fn test_range_rejects_max_not_above_min() {
        assert_eq!(
            GuessRange::new(5, 3),
            Err(ConfigError::EmptyRange { min: 5, max: 3 })
        );
        assert!(GuessRange::new(4, 4).is_err());
    }

    #[test]
    fn test_range_contains() {
        let range = GuessRange::new(-3, 3).unwrap();
        assert!(range.contains(-3));
        assert!(range.contains(0));
        assert!(range.contains(3));
        assert!(!range.contains(4));
        assert!(!range.contains(-4));
    }

    #[test]
    fn test_range_size_does_not_overflow() {
        let range = GuessRange::new(i64::MIN, i64::MAX).unwrap();
        assert_eq!(range.size(), 1u128 << 64);
    }

    #[test]
    fn test_allowed_guesses() {
        let range = GuessRange::new(1, 10).unwrap();
        assert_eq!(RoundConfig::new(range, 3).allowed_guesses(), 3);
        assert_eq!(RoundConfig::new(range, 0).allowed_guesses(), 0);
        assert_eq!(RoundConfig::new(range, -5).allowed_guesses(), 0);
    }

    #[test]
    fn test_session_config_seed() {
        let config = SessionConfig::default();
        assert_eq!(config.seed, None);

        let config = config.with_seed(123);
        assert_eq!(config.rng().seed(), 123);
    }

    #[test]
    fn test_serialization() {
        let config = RoundConfig::new(GuessRange::new(1, 100).unwrap(), 7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: RoundConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
