//! Per-session random number generation for playtest shuffles.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical shuffles
//! - **Per-session seeding**: `from_entropy` pulls a fresh seed from the OS,
//!   so two sessions created in the same instant never correlate
//! - **Replayable**: The seed is retained and can be reported to the host
//!
//! ```
//! use deck_engine::core::ShuffleRng;
//!
//! let mut a = ShuffleRng::new(42);
//! let mut b = ShuffleRng::new(42);
//!
//! let mut left = vec![1, 2, 3, 4, 5, 6, 7, 8];
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//!
//! assert_eq!(left, right);
//! ```

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG used to shuffle a playtest deck.
///
/// Uses ChaCha8 for speed while maintaining high quality randomness.
#[derive(Clone, Debug)]
pub struct ShuffleRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl ShuffleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG seeded from the operating system entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(OsRng.next_u64())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fisher-Yates shuffle, in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shuffled(rng: &mut ShuffleRng) -> Vec<u32> {
        let mut data: Vec<u32> = (0..52).collect();
        rng.shuffle(&mut data);
        data
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = ShuffleRng::new(42);
        let mut rng2 = ShuffleRng::new(42);

        for _ in 0..20 {
            assert_eq!(shuffled(&mut rng1), shuffled(&mut rng2));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = ShuffleRng::new(1);
        let mut rng2 = ShuffleRng::new(2);

        assert_ne!(shuffled(&mut rng1), shuffled(&mut rng2));
    }

    #[test]
    fn test_state_advances_between_shuffles() {
        let mut rng = ShuffleRng::new(5);
        let first = shuffled(&mut rng);
        assert_ne!(shuffled(&mut rng), first);
    }

    #[test]
    fn test_seed_is_retained() {
        assert_eq!(ShuffleRng::new(7).seed(), 7);
    }

    #[test]
    fn test_entropy_seeds_differ() {
        // Two draws of 64 random bits colliding is not a realistic outcome.
        assert_ne!(ShuffleRng::from_entropy().seed(), ShuffleRng::from_entropy().seed());
    }

    #[test]
    fn test_shuffle() {
        let mut rng = ShuffleRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        // Same elements, different order (very likely)
        assert_eq!(data.len(), original.len());
        assert_ne!(data, original);

        data.sort();
        assert_eq!(data, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_shuffle_trivial_slices() {
        let mut rng = ShuffleRng::new(42);

        let mut empty: Vec<u8> = vec![];
        rng.shuffle(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![9];
        rng.shuffle(&mut single);
        assert_eq!(single, vec![9]);
    }
}
