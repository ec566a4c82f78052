//! Per-trial random streams
//!
//! Every trial draws from its own ChaCha20 stream keyed by the run seed and
//! the trial index. Trial `k` therefore sees the same numbers whether trials
//! run sequentially or in parallel, and regardless of the total trial count.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Source of independent, reproducible per-trial generators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialStreams {
    seed: u64,
}

impl TrialStreams {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generator for trial `trial`
    pub fn for_trial(&self, trial: usize) -> ChaCha20Rng {
        let mut rng = ChaCha20Rng::seed_from_u64(self.seed);
        rng.set_stream(trial as u64);
        rng
    }
}

/// Draw `pool.len()` values from `pool` uniformly with replacement
pub fn resample_with_replacement<R: Rng>(pool: &[f64], rng: &mut R) -> Vec<f64> {
    if pool.is_empty() {
        return Vec::new();
    }
    (0..pool.len())
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect()
}
