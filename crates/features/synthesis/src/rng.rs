//! Seedable random source for the pipeline.
//!
//! Wraps `ChaCha8Rng` so identical seeds give identical datasets on every
//! platform. Every component takes `&mut impl Rng` so tests can pass any source.

use rand::{Error, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG that remembers the seed it was built from.
#[derive(Debug, Clone)]
pub struct FootprintRng {
    seed: u64,
    inner: ChaCha8Rng,
}

impl FootprintRng {
    #[must_use]
    pub fn from_seed_u64(seed: u64) -> Self {
        Self { seed, inner: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Picks a fresh seed from the OS. The seed is still recorded, so the run
    /// can be replayed from the artifact metadata.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::from_seed_u64(rand::random())
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl RngCore for FootprintRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.inner.try_fill_bytes(dest)
    }
}
