//! Bootstrap chain-ladder simulator
//!
//! Setup fits the observed triangle once. Each trial then:
//! 1. Resamples the residual pool with replacement
//! 2. Writes the draws into the strictly-upper cells (`row < col`) of a zero matrix
//! 3. Adds `residual * sqrt(fitted)` to the fitted triangle and clips at zero
//! 4. Refits age-to-age factors on the simulated triangle
//! 5. Projects ultimates and IBNR against the observed diagonal
//!
//! Residuals are harvested from the strictly-lower cells but written into the
//! strictly-upper cells. The two masks are mirror images and are kept that way.

use rayon::prelude::*;
use std::time::Instant;

use super::config::BootstrapConfig;
use super::result::{SimulationResult, TrialOutcome};
use super::rng::{resample_with_replacement, TrialStreams};
use crate::chain_ladder::{
    age_to_age_factors, cumulative_development_factors, ibnr, pearson_residuals,
    project_ultimates, scale, ChainLadder,
};
use crate::error::{ReservingError, Result};
use crate::triangle::Triangle;

/// Shared, read-only state for all trials of one run
#[derive(Debug, Clone)]
pub struct BootstrapSimulator {
    fit: ChainLadder,
    residuals: Vec<f64>,
    streams: TrialStreams,
}

impl BootstrapSimulator {
    /// Fit the observed triangle and build the residual pool
    pub fn new(triangle: &Triangle, seed: u64) -> Result<Self> {
        let fit = ChainLadder::fit(triangle)?;
        let residuals = pearson_residuals(triangle, &fit.fitted)?;

        log::debug!(
            "Bootstrap setup: {}x{} triangle, {} residuals, seed {}",
            triangle.size(),
            triangle.size(),
            residuals.len(),
            seed
        );

        Ok(Self {
            fit,
            residuals,
            streams: TrialStreams::new(seed),
        })
    }

    /// Build a simulator seeded from `config.seed`
    pub fn from_config(triangle: &Triangle, config: &BootstrapConfig) -> Result<Self> {
        config.validate()?;
        Self::new(triangle, config.seed)
    }

    /// Deterministic fit of the observed triangle
    pub fn deterministic(&self) -> &ChainLadder {
        &self.fit
    }

    /// Residual pool sampled by every trial
    pub fn residuals(&self) -> &[f64] {
        &self.residuals
    }

    pub fn seed(&self) -> u64 {
        self.streams.seed()
    }

    /// Run `config.n_sim` trials
    ///
    /// `config.seed` must equal the seed the simulator was built with; a
    /// different seed is rejected rather than silently replaced.
    pub fn run(&self, config: &BootstrapConfig) -> Result<SimulationResult> {
        config.validate()?;
        if config.seed != self.seed() {
            return Err(ReservingError::SeedMismatch {
                expected: self.seed(),
                found: config.seed,
            });
        }

        log::info!(
            "Running {} bootstrap trials (seed {}, parallel: {})",
            config.n_sim,
            self.seed(),
            config.parallel
        );
        let start = Instant::now();

        let outcomes: Vec<(Vec<f64>, Vec<f64>)> = if config.parallel {
            (0..config.n_sim)
                .into_par_iter()
                .map(|k| self.simulate(k))
                .collect()
        } else {
            (0..config.n_sim).map(|k| self.simulate(k)).collect()
        };

        let (ultimates, ibnr): (Vec<_>, Vec<_>) = outcomes.into_iter().unzip();

        log::info!("Bootstrap complete in {:?}", start.elapsed());

        Ok(SimulationResult {
            seed: self.seed(),
            ultimates,
            ibnr,
        })
    }

    /// Full detail for a single trial; matches row `trial` of [`Self::run`]
    pub fn run_trial(&self, trial: usize) -> TrialOutcome {
        let simulated = self.simulated_triangle(trial);
        let factors = age_to_age_factors(&simulated);
        let cdf = cumulative_development_factors(&factors);
        let ultimates = project_ultimates(&simulated, &cdf);
        let ibnr = ibnr(&ultimates, &self.fit.latest_observed);

        TrialOutcome {
            trial,
            simulated,
            factors,
            cdf,
            ultimates,
            ibnr,
        }
    }

    fn simulate(&self, trial: usize) -> (Vec<f64>, Vec<f64>) {
        let outcome = self.run_trial(trial);
        (outcome.ultimates, outcome.ibnr)
    }

    /// Fitted triangle perturbed by resampled residuals in the upper cells
    fn simulated_triangle(&self, trial: usize) -> Triangle {
        let mut rng = self.streams.for_trial(trial);
        let draws = resample_with_replacement(&self.residuals, &mut rng);
        let mut draws = draws.into_iter();

        let rows: Vec<Vec<f64>> = self
            .fit
            .fitted
            .rows()
            .iter()
            .enumerate()
            .map(|(i, fitted_row)| {
                fitted_row
                    .iter()
                    .enumerate()
                    .map(|(j, &fitted)| {
                        let residual = if i < j { draws.next().unwrap_or(0.0) } else { 0.0 };
                        (fitted + residual * scale(fitted)).max(0.0)
                    })
                    .collect::<Vec<f64>>()
            })
            .collect();

        Triangle::from_rows_unchecked(rows)
    }
}
