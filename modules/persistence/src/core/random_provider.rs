//! Randomness port used for backoff jitter.

use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Supplies unit-interval samples for jittered delays.
pub trait RandomProvider {
  /// Returns a sample in `[0, 1)`.
  fn next_unit(&mut self) -> f64;
}

/// Default provider backed by a seeded [`SmallRng`].
#[derive(Debug)]
pub struct SmallRngRandomProvider {
  rng: SmallRng,
}

impl SmallRngRandomProvider {
  /// Creates a provider from a seed.
  #[must_use]
  pub fn seed_from_u64(seed: u64) -> Self {
    Self { rng: SmallRng::seed_from_u64(seed) }
  }
}

impl RandomProvider for SmallRngRandomProvider {
  fn next_unit(&mut self) -> f64 {
    self.rng.gen::<f64>()
  }
}
