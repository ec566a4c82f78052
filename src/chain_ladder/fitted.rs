//! Fitted (smoothed) triangle reconstruction

use crate::error::{ReservingError, Result};
use crate::triangle::Triangle;

/// Rebuild a triangle from `triangle`'s first column and a factor sequence
///
/// Column 0 is copied verbatim; every later column is the previous column
/// times the corresponding factor.
pub fn fitted_triangle(triangle: &Triangle, factors: &[f64]) -> Result<Triangle> {
    let n = triangle.size();
    let expected = n - 1;
    if factors.len() != expected {
        return Err(ReservingError::FactorLengthMismatch {
            expected,
            found: factors.len(),
        });
    }

    let rows = triangle
        .rows()
        .iter()
        .map(|source| {
            let mut row = Vec::with_capacity(n);
            row.push(source[0]);
            for (j, &f) in factors.iter().enumerate() {
                row.push(row[j] * f);
            }
            row
        })
        .collect();

    Ok(Triangle::from_rows_unchecked(rows))
}
