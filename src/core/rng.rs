//! Deterministic random number generation for board scrambles.
//!
//! Uses ChaCha8 seeded from a `u64`: the same seed always produces the
//! same scramble, across runs and platforms. Randomness is consumed only
//! while a board is being created, so the engine never holds an RNG.
//!
//! ```
//! use lights_out::BoardRng;
//!
//! let mut a = BoardRng::new(42);
//! let mut b = BoardRng::new(42);
//! assert_eq!(a.lit(0.5), b.lit(0.5));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG behind initial cell sampling.
#[derive(Clone, Debug)]
pub struct BoardRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl BoardRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Sample one cell: `true` (lit) with the given probability.
    ///
    /// `probability` must lie in `[0, 1]`; the engine validates its
    /// configuration before sampling.
    pub fn lit(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }
}
