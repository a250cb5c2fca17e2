//! Seeded randomness for playouts.
//!
//! A `GameRng` is fully determined by its seed. Child streams for a batch of
//! games draw their seeds from the parent, and each child remembers its seed,
//! so any single game of a batch can be replayed on its own.
//!
//! ```
//! use toothpick::core::GameRng;
//!
//! let mut batch = GameRng::new(42);
//! let mut game = batch.fork();
//! let mut replay = GameRng::new(game.seed());
//!
//! let moves = [1, 2, 3, 4, 5];
//! assert_eq!(game.choose(&moves), replay.choose(&moves));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// ChaCha8 stream that knows the seed it started from.
#[derive(Clone, Debug)]
pub struct GameRng {
    seed: u64,
    stream: ChaCha8Rng,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            stream: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seed that reproduces this stream from its start.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Child stream seeded from the next value of this one.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self::new(self.stream.gen())
    }

    /// Uniformly pick one element, `None` for an empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.stream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws(rng: &mut GameRng) -> Vec<u32> {
        let items: Vec<u32> = (0..1000).collect();
        (0..20).map(|_| *rng.choose(&items).unwrap()).collect()
    }

    #[test]
    fn test_same_seed_same_stream() {
        assert_eq!(draws(&mut GameRng::new(42)), draws(&mut GameRng::new(42)));
        assert_ne!(draws(&mut GameRng::new(42)), draws(&mut GameRng::new(43)));
    }

    #[test]
    fn test_forks_are_distinct_and_replayable() {
        let mut parent = GameRng::new(7);
        let mut a = parent.fork();
        let mut b = parent.fork();
        assert_ne!(a.seed(), b.seed());

        let mut again = GameRng::new(7);
        assert_eq!(again.fork().seed(), a.seed());

        let replayed = draws(&mut GameRng::new(a.seed()));
        assert_eq!(draws(&mut a), replayed);
        assert_ne!(draws(&mut b), replayed);
    }

    #[test]
    fn test_choose_empty() {
        let mut rng = GameRng::new(1);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }
}
