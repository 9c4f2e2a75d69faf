//! State of a single round: the secret, the guess budget, the guesses made.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::core::RoundConfig;

/// Feedback for one guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// Guess is below the secret.
    TooLow,
    /// Guess is above the secret.
    TooHigh,
    /// Guess matches the secret.
    Correct,
}

impl GuessOutcome {
    /// Compare a guess against the secret.
    #[must_use]
    pub fn judge(guess: i64, secret: i64) -> Self {
        match guess.cmp(&secret) {
            Ordering::Less => GuessOutcome::TooLow,
            Ordering::Greater => GuessOutcome::TooHigh,
            Ordering::Equal => GuessOutcome::Correct,
        }
    }
}

/// Result of a completed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    /// Secret found after `guesses` attempts.
    Won { guesses: u64 },
    /// Guess budget exhausted.
    Lost { secret: i64 },
}

impl RoundResult {
    /// Check if the round was won.
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, RoundResult::Won { .. })
    }
}

/// One round of play.
///
/// ## Invariants
///
/// - `secret` lies in `config.range`
/// - `guess_count` never exceeds the guess limit
/// - Once `Correct` has been returned, no further guesses are accepted
#[derive(Clone, Debug)]
pub struct Round {
    config: RoundConfig,
    secret: i64,
    guess_count: u64,
    guessed_correctly: bool,
}

impl Round {
    /// Start a round with a known secret.
    pub fn new(config: RoundConfig, secret: i64) -> Self {
        assert!(
            config.range.contains(secret),
            "Secret {} outside range {}",
            secret,
            config.range
        );
        Self {
            config,
            secret,
            guess_count: 0,
            guessed_correctly: false,
        }
    }

    /// The round's configuration.
    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// The secret number.
    #[must_use]
    pub fn secret(&self) -> i64 {
        self.secret
    }

    /// Guesses made so far.
    #[must_use]
    pub fn guess_count(&self) -> u64 {
        self.guess_count
    }

    /// Guesses still available.
    #[must_use]
    pub fn remaining(&self) -> u64 {
        if self.guessed_correctly {
            return 0;
        }
        self.config.allowed_guesses().saturating_sub(self.guess_count)
    }

    /// Check if the round has ended (won or out of guesses).
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.remaining() == 0
    }

    /// Submit a guess.
    ///
    /// # Panics
    ///
    /// Panics if the round is already over.
    pub fn guess(&mut self, value: i64) -> GuessOutcome {
        assert!(!self.is_over(), "Round is already over");

        self.guess_count += 1;
        let outcome = GuessOutcome::judge(value, self.secret);
        if outcome == GuessOutcome::Correct {
            self.guessed_correctly = true;
        }
        outcome
    }

    /// Result of the round, or `None` while guesses remain.
    #[must_use]
    pub fn result(&self) -> Option<RoundResult> {
        if self.guessed_correctly {
            Some(RoundResult::Won {
                guesses: self.guess_count,
            })
        } else if self.is_over() {
            Some(RoundResult::Lost {
                secret: self.secret,
            })
        } else {
            None
        }
    }

    /// End the round. Anything short of a correct guess is a loss.
    #[must_use]
    pub fn finish(self) -> RoundResult {
        if self.guessed_correctly {
            RoundResult::Won {
                guesses: self.guess_count,
            }
        } else {
            RoundResult::Lost {
                secret: self.secret,
            }
        }
    }
}
