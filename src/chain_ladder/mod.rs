//! Deterministic chain-ladder building blocks
//!
//! - Age-to-age and cumulative development factors
//! - Fitted triangle reconstruction from the first column
//! - Pearson residuals between observed and fitted values
//! - Ultimate and IBNR projection

mod factors;
mod fitted;
mod projection;
mod residuals;

pub use factors::{age_to_age_factors, cumulative_development_factors, degenerate_columns};
pub use fitted::fitted_triangle;
pub use projection::{ibnr, project_ultimates, ChainLadder};
pub use residuals::{pearson_residuals, scale, FITTED_FLOOR};
