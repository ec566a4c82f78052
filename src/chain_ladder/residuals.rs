//! Pearson residuals between observed and fitted triangles

use crate::error::{ReservingError, Result};
use crate::triangle::Triangle;

/// Floor applied to fitted values before they are used as a divisor or under
/// a square root
pub const FITTED_FLOOR: f64 = 1e-10;

/// Square root of a fitted value, floored at [`FITTED_FLOOR`]
#[inline]
pub fn scale(fitted: f64) -> f64 {
    fitted.max(FITTED_FLOOR).sqrt()
}

/// Standardized residuals for the strictly-lower cells (`row > col`)
///
/// Each residual is `(observed - fitted) / sqrt(max(fitted, 1e-10))`, collected
/// in row-major order. The pool has `n(n-1)/2` values. Cells on or above the
/// diagonal are never included.
pub fn pearson_residuals(observed: &Triangle, fitted: &Triangle) -> Result<Vec<f64>> {
    let n = observed.size();
    if fitted.size() != n {
        return Err(ReservingError::ShapeMismatch {
            observed: n,
            fitted: fitted.size(),
        });
    }

    let mut residuals = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for row in 1..n {
        for col in 0..row {
            let expected = fitted.value(row, col);
            residuals.push((observed.value(row, col) - expected) / scale(expected));
        }
    }

    Ok(residuals)
}
