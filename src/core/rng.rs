//! Deterministic random number generation for deals.
//!
//! Same seed, same sequence: a session seeded identically deals identical
//! decks, which keeps every shuffle and timing test replayable. Forking
//! gives each deal an independent stream, so a restarted session's deck
//! does not depend on how much randomness earlier deals consumed.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG with forking for independent deal streams.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness. Shuffles are uniform (Fisher-Yates via `SliceRandom`).
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    /// Used to give every deal its own stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place with a uniform permutation.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
