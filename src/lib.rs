//! Reserve Bootstrap - stochastic chain-ladder reserving
//!
//! This library provides:
//! - Square loss development triangles with CSV loading
//! - Deterministic chain-ladder factors, fitted triangles and Pearson residuals
//! - Bootstrap simulation of ultimate losses and IBNR with reproducible,
//!   parallel-safe random streams
//! - Distribution summaries (mean, standard deviation, CV, percentiles)

pub mod error;
pub mod triangle;
pub mod chain_ladder;
pub mod bootstrap;
pub mod summary;

// Re-export commonly used types
pub use error::{ReservingError, Result};
pub use triangle::{Triangle, load_triangle, load_triangle_from_reader};
pub use chain_ladder::ChainLadder;
pub use bootstrap::{BootstrapConfig, BootstrapReport, BootstrapSimulator, SimulationResult};
pub use summary::DistributionSummary;

/// Fit `triangle`, run the bootstrap and summarise total IBNR
pub fn run_bootstrap(triangle: &Triangle, config: &BootstrapConfig) -> Result<BootstrapReport> {
    let simulator = BootstrapSimulator::from_config(triangle, config)?;
    let simulation = simulator.run(config)?;
    let ibnr_summary = simulation.ibnr_summary()?;

    log::info!(
        "Total IBNR: mean {:.2}, std {:.2}, CV {:.4}",
        ibnr_summary.mean,
        ibnr_summary.std_dev,
        ibnr_summary.cv
    );

    Ok(BootstrapReport {
        deterministic: simulator.deterministic().clone(),
        simulation,
        ibnr_summary,
    })
}
