//! In-memory record of finished rounds and the statistics derived from it.

use serde::{Deserialize, Serialize};

use crate::core::GuessRange;
use crate::rules::RoundResult;

/// One finished round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub range: GuessRange,
    pub guess_limit: i64,
    pub secret: i64,
    pub result: RoundResult,
}

impl RoundRecord {
    /// Guesses used, if the round was won.
    #[must_use]
    pub fn winning_guesses(&self) -> Option<u64> {
        match self.result {
            RoundResult::Won { guesses } => Some(guesses),
            RoundResult::Lost { .. } => None,
        }
    }
}

/// Totals over a session's history.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub rounds_played: usize,
    pub rounds_won: usize,
    /// Fewest guesses in any won round.
    pub best_score: Option<u64>,
    /// Mean guesses over won rounds.
    pub average_winning_guesses: Option<f64>,
}

impl SessionStats {
    /// Compute statistics from a history.
    pub fn from_history(history: &[RoundRecord]) -> Self {
        let wins: Vec<u64> = history.iter().filter_map(RoundRecord::winning_guesses).collect();

        let average_winning_guesses = if wins.is_empty() {
            None
        } else {
            Some(wins.iter().sum::<u64>() as f64 / wins.len() as f64)
        };

        Self {
            rounds_played: history.len(),
            rounds_won: wins.len(),
            best_score: wins.iter().copied().min(),
            average_winning_guesses,
        }
    }

    /// Fraction of rounds won, or `None` before any round.
    #[must_use]
    pub fn win_rate(&self) -> Option<f64> {
        if self.rounds_played == 0 {
            return None;
        }
        Some(self.rounds_won as f64 / self.rounds_played as f64)
    }
}

impl std::fmt::Display for SessionStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} played, {} won", self.rounds_played, self.rounds_won)?;
        if let Some(best) = self.best_score {
            write!(f, ", best {}", best)?;
        }
        if let Some(avg) = self.average_winning_guesses {
            write!(f, ", avg {:.2} guesses per win", avg)?;
        }
        Ok(())
    }
}
