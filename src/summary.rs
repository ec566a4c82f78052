//! Descriptive statistics over simulated reserve outcomes

use serde::{Deserialize, Serialize};

use crate::error::{ReservingError, Result};

/// Percentile levels reported in every summary
pub const PERCENTILE_LEVELS: [u8; 5] = [5, 25, 50, 75, 95];

/// Distribution summary of a simulated quantity
///
/// `std_dev` is the population standard deviation (divisor `n`). Percentiles
/// interpolate linearly between order statistics at rank `p/100 * (n - 1)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSummary {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    /// Coefficient of variation, `std_dev / mean`; 0.0 when the mean is zero
    pub cv: f64,
    pub p5: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p95: f64,
}

impl DistributionSummary {
    /// Summarise a sample of simulated values
    pub fn from_samples(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(ReservingError::EmptySample);
        }

        let count = values.len();
        let mean = values.iter().sum::<f64>() / count as f64;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count as f64;
        let std_dev = variance.sqrt();
        let cv = if mean != 0.0 { std_dev / mean } else { 0.0 };

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let [p5, p25, p50, p75, p95] =
            PERCENTILE_LEVELS.map(|p| interpolate(&sorted, f64::from(p)));

        Ok(Self {
            count,
            mean,
            std_dev,
            cv,
            p5,
            p25,
            p50,
            p75,
            p95,
        })
    }

    /// Summary statistic at one of the reported percentile levels
    pub fn percentile(&self, level: u8) -> Option<f64> {
        let values = [self.p5, self.p25, self.p50, self.p75, self.p95];
        PERCENTILE_LEVELS
            .iter()
            .position(|&l| l == level)
            .map(|i| values[i])
    }
}

/// Linear-interpolation percentile of an ascending slice, `p` in [0, 100]
///
/// Returns `None` for an empty slice.
pub fn percentile(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    Some(interpolate(sorted, p))
}

/// Percentile of a non-empty ascending slice
fn interpolate(sorted: &[f64], p: f64) -> f64 {
    if sorted.len() == 1 {
        return sorted[0];
    }

    let rank = (p / 100.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let frac = rank - lower as f64;

    if upper >= sorted.len() {
        sorted[sorted.len() - 1]
    } else {
        sorted[lower] * (1.0 - frac) + sorted[upper] * frac
    }
}
