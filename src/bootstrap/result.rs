//! Simulation output matrices and per-trial detail

use serde::{Deserialize, Serialize};

use crate::chain_ladder::ChainLadder;
use crate::error::Result;
use crate::summary::DistributionSummary;
use crate::triangle::Triangle;

/// Everything derived from one resampled triangle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialOutcome {
    pub trial: usize,
    /// Fitted triangle plus scaled residuals, clipped at zero
    pub simulated: Triangle,
    /// Age-to-age factors refit on `simulated`
    pub factors: Vec<f64>,
    pub cdf: Vec<f64>,
    pub ultimates: Vec<f64>,
    pub ibnr: Vec<f64>,
}

/// Simulated ultimates and IBNR, one row per trial and one column per
/// accident year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    pub seed: u64,
    pub ultimates: Vec<Vec<f64>>,
    pub ibnr: Vec<Vec<f64>>,
}

impl SimulationResult {
    /// Number of trials
    pub fn n_sim(&self) -> usize {
        self.ultimates.len()
    }

    /// Number of accident years
    pub fn n_years(&self) -> usize {
        self.ultimates.first().map(|r| r.len()).unwrap_or(0)
    }

    /// (trials, accident years)
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sim(), self.n_years())
    }

    /// IBNR summed across accident years, one value per trial
    pub fn total_ibnr(&self) -> Vec<f64> {
        self.ibnr.iter().map(|row| row.iter().sum()).collect()
    }

    /// Ultimate losses summed across accident years, one value per trial
    pub fn total_ultimate(&self) -> Vec<f64> {
        self.ultimates.iter().map(|row| row.iter().sum()).collect()
    }

    /// Distribution of total IBNR
    pub fn ibnr_summary(&self) -> Result<DistributionSummary> {
        DistributionSummary::from_samples(&self.total_ibnr())
    }

    /// Distribution of total ultimate losses
    pub fn ultimate_summary(&self) -> Result<DistributionSummary> {
        DistributionSummary::from_samples(&self.total_ultimate())
    }

    /// IBNR distribution for each accident year
    pub fn accident_year_summaries(&self) -> Result<Vec<DistributionSummary>> {
        (0..self.n_years())
            .map(|i| {
                let column: Vec<f64> = self.ibnr.iter().map(|row| row[i]).collect();
                DistributionSummary::from_samples(&column)
            })
            .collect()
    }
}

/// Deterministic estimate, simulated matrices and total IBNR summary for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapReport {
    pub deterministic: ChainLadder,
    pub simulation: SimulationResult,
    pub ibnr_summary: DistributionSummary,
}
