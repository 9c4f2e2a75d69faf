//! Session best score.

use serde::{Deserialize, Serialize};

/// Fewest guesses needed to win any round so far.
///
/// Unset until the first win. Only ever decreases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScore(Option<u64>);

impl BestScore {
    /// No win recorded yet.
    #[must_use]
    pub const fn new() -> Self {
        Self(None)
    }

    /// Current best, if any round has been won.
    #[must_use]
    pub const fn get(&self) -> Option<u64> {
        self.0
    }

    /// Record a win. Returns `true` if it set a new best.
    pub fn record_win(&mut self, guesses: u64) -> bool {
        match self.0 {
            Some(best) if guesses >= best => false,
            _ => {
                self.0 = Some(guesses);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_win_sets_best() {
        let mut best = BestScore::new();
        assert_eq!(best.get(), None);
        assert!(best.record_win(4));
        assert_eq!(best.get(), Some(4));
    }

    #[test]
    fn test_only_strictly_smaller_improves() {
        let mut best = BestScore::new();
        best.record_win(4);

        assert!(!best.record_win(4));
        assert!(!best.record_win(9));
        assert_eq!(best.get(), Some(4));

        assert!(best.record_win(2));
        assert_eq!(best.get(), Some(2));
    }
}
