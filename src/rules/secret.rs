//! Where secrets come from.

use log::debug;

use crate::core::{GameRng, GuessRange};

/// Source of secret numbers for new rounds.
///
/// The session draws one secret per round through this trait, so tests can
/// supply fixed secrets instead of random ones.
pub trait SecretSource {
    /// Draw a secret uniformly from `range` (both ends inclusive).
    fn draw(&mut self, range: &GuessRange) -> i64;
}

impl SecretSource for GameRng {
    fn draw(&mut self, range: &GuessRange) -> i64 {
        let secret = self.gen_inclusive(range);
        debug!("Drew secret {} from {}", secret, range);
        secret
    }
}

impl<S: SecretSource + ?Sized> SecretSource for &mut S {
    fn draw(&mut self, range: &GuessRange) -> i64 {
        (**self).draw(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_source_stays_in_range() {
        let mut rng = GameRng::new(42);
        let range = GuessRange::new(-5, 5).unwrap();
        for _ in 0..500 {
            assert!(range.contains(rng.draw(&range)));
        }
    }

    #[test]
    fn test_borrowed_source() {
        let mut rng = GameRng::new(1);
        let mut same = GameRng::new(1);
        let range = GuessRange::new(1, 1000).unwrap();

        fn draw_with<S: SecretSource>(mut source: S, range: &GuessRange) -> i64 {
            source.draw(range)
        }

        assert_eq!(draw_with(&mut rng, &range), same.draw(&range));
    }
}
