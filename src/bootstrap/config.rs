//! Simulation run configuration

use serde::{Deserialize, Serialize};

use crate::error::{ReservingError, Result};

/// Default number of bootstrap trials
pub const DEFAULT_TRIALS: usize = 1000;

/// Default random seed
pub const DEFAULT_SEED: u64 = 42;

/// Configuration for a bootstrap run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Number of simulated triangles
    pub n_sim: usize,

    /// Seed for the per-trial random streams
    pub seed: u64,

    /// Run trials on the rayon thread pool.
    /// Results are identical either way.
    pub parallel: bool,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            n_sim: DEFAULT_TRIALS,
            seed: DEFAULT_SEED,
            parallel: true,
        }
    }
}

impl BootstrapConfig {
    /// Small sequential run for spot checks
    pub fn quick() -> Self {
        Self {
            n_sim: 200,
            parallel: false,
            ..Default::default()
        }
    }

    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the number of trials
    pub fn with_trials(mut self, n_sim: usize) -> Self {
        self.n_sim = n_sim;
        self
    }

    /// Set the seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Run trials on the calling thread
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Reject a zero trial count before any work starts
    pub fn validate(&self) -> Result<()> {
        if self.n_sim == 0 {
            return Err(ReservingError::InvalidTrialCount(self.n_sim));
        }
        Ok(())
    }
}
