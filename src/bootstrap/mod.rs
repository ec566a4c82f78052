//! Bootstrap chain-ladder simulation
//!
//! Quantifies reserve uncertainty by resampling Pearson residuals of the
//! fitted triangle, refitting development factors on each simulated triangle
//! and projecting ultimate losses.
//!
//! # Example
//!
//! ```rust,ignore
//! use reserve_bootstrap::bootstrap::{BootstrapConfig, BootstrapSimulator};
//!
//! let config = BootstrapConfig::default().with_trials(5000);
//! let simulator = BootstrapSimulator::from_config(&triangle, &config)?;
//! let result = simulator.run(&config)?;
//! println!("Mean IBNR: {:.0}", result.ibnr_summary()?.mean);
//! ```

mod config;
mod result;
mod rng;
mod simulator;

pub use config::{BootstrapConfig, DEFAULT_SEED, DEFAULT_TRIALS};
pub use result::{BootstrapReport, SimulationResult, TrialOutcome};
pub use rng::{resample_with_replacement, TrialStreams};
pub use simulator::BootstrapSimulator;
