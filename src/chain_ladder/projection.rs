//! Ultimate loss projection and the deterministic chain-ladder estimate

use serde::{Deserialize, Serialize};

use super::{
    age_to_age_factors, cumulative_development_factors, degenerate_columns, fitted_triangle,
};
use crate::error::Result;
use crate::triangle::Triangle;

/// Project ultimate losses for every accident year
///
/// Row `i` is treated as observed through `n - i` lags, so its latest loss is
/// taken from column `n - i - 1` and developed with `cdf[n - i - 1]`. The
/// oldest accident year (row 0) is already at the final lag and uses 1.0.
pub fn project_ultimates(triangle: &Triangle, cdf: &[f64]) -> Vec<f64> {
    let n = triangle.size();

    (0..n)
        .map(|i| {
            let latest_lag = n - i;
            let latest_loss = triangle.value(i, latest_lag - 1);
            let cdf_to_use = if latest_lag < n { cdf[latest_lag - 1] } else { 1.0 };
            latest_loss * cdf_to_use
        })
        .collect()
}

/// IBNR per accident year: ultimate minus the latest observed loss
pub fn ibnr(ultimates: &[f64], latest_observed: &[f64]) -> Vec<f64> {
    ultimates
        .iter()
        .zip(latest_observed)
        .map(|(ult, latest)| ult - latest)
        .collect()
}

/// Deterministic chain-ladder fit of an observed triangle
///
/// This is the point estimate the bootstrap distribution is read against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainLadder {
    /// Age-to-age factors, length n-1
    pub factors: Vec<f64>,
    /// Cumulative development factors, length n-1
    pub cdf: Vec<f64>,
    /// Transitions whose factor defaulted to 1.0
    pub degenerate_columns: Vec<usize>,
    /// Triangle rebuilt from column 0 and `factors`
    pub fitted: Triangle,
    /// Main-diagonal cells of the observed triangle
    pub latest_observed: Vec<f64>,
    pub ultimates: Vec<f64>,
    pub ibnr: Vec<f64>,
}

impl ChainLadder {
    /// Fit factors and project ultimates for `triangle`
    pub fn fit(triangle: &Triangle) -> Result<Self> {
        let degenerate_columns = degenerate_columns(triangle);
        for j in &degenerate_columns {
            log::warn!("Development column {} sums to zero, factor defaults to 1.0", j);
        }

        let factors = age_to_age_factors(triangle);
        let cdf = cumulative_development_factors(&factors);
        let fitted = fitted_triangle(triangle, &factors)?;
        let latest_observed = triangle.diagonal();
        let ultimates = project_ultimates(triangle, &cdf);
        let ibnr = ibnr(&ultimates, &latest_observed);

        log::debug!("Chain-ladder factors: {:?}", factors);

        Ok(Self {
            factors,
            cdf,
            degenerate_columns,
            fitted,
            latest_observed,
            ultimates,
            ibnr,
        })
    }

    pub fn total_ultimate(&self) -> f64 {
        self.ultimates.iter().sum()
    }

    pub fn total_ibnr(&self) -> f64 {
        self.ibnr.iter().sum()
    }
}
