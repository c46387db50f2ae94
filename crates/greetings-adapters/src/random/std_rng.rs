//! `RandomSource` backed by `rand::rngs::StdRng`.

use greetings_core::application::ports::RandomSource;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

/// Reproducible random source seeded from a `u64`.
///
/// Two sources built from the same seed yield the same draws, so a seeded
/// run greets identically every time.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    rng: StdRng,
}

impl SeededRandom {
    /// Create a source from a seed.
    pub fn new(seed: u64) -> Self {
        debug!(seed, "Seeded random source created");
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

/// Production random source seeded from operating-system entropy.
#[derive(Debug, Clone)]
pub struct EntropyRandom {
    rng: StdRng,
}

impl EntropyRandom {
    /// Create a new entropy-seeded source.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for EntropyRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropyRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_draws_stay_in_range() {
        let mut rng = SeededRandom::new(42);
        for bound in 1..20 {
            for _ in 0..50 {
                assert!(rng.next_index(bound) < bound);
            }
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SeededRandom::new(2024);
        let mut b = SeededRandom::new(2024);
        let draws_a: Vec<_> = (0..32).map(|_| a.next_index(3)).collect();
        let draws_b: Vec<_> = (0..32).map(|_| b.next_index(3)).collect();
        assert_eq!(draws_a, draws_b);
        assert_eq!(a.seed(), 2024);
    }

    #[test]
    fn bound_of_one_is_always_zero() {
        let mut rng = SeededRandom::new(7);
        assert!((0..10).all(|_| rng.next_index(1) == 0));
    }

    #[test]
    fn entropy_draws_stay_in_range() {
        let mut rng = EntropyRandom::new();
        for _ in 0..100 {
            let value = rng.next_index(3);
            assert!(value < 3, "Value {} out of range", value);
        }
    }

    #[test]
    fn entropy_eventually_covers_every_index() {
        let mut rng = EntropyRandom::default();
        let mut seen = [false; 3];
        for _ in 0..1_000 {
            seen[rng.next_index(3)] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
