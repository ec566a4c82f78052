//! Dense square triangle of cumulative losses

use serde::{Deserialize, Serialize};

use crate::error::{ReservingError, Result};

/// Cumulative losses by accident year (row) and development lag (column)
///
/// The matrix is always square and fully populated. The cell on the main
/// diagonal, `value(i, i)`, is treated as the most recently reported cumulative
/// loss for accident year `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Triangle {
    rows: Vec<Vec<f64>>,
}

impl Triangle {
    /// Build a triangle from row vectors, validating shape and cell values
    ///
    /// Cells must be finite and non-negative, and every column must sum to a
    /// finite `f64`; a column that overflows is rejected with
    /// [`ReservingError::ColumnOverflow`].
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        if rows.is_empty() {
            return Err(ReservingError::EmptyTriangle);
        }

        let n = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(ReservingError::NotSquare {
                    row: i,
                    expected: n,
                    found: row.len(),
                });
            }
            for (j, &value) in row.iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(ReservingError::InvalidCell { row: i, col: j, value });
                }
            }
        }

        for col in 0..n {
            if !rows.iter().map(|r| r[col]).sum::<f64>().is_finite() {
                return Err(ReservingError::ColumnOverflow { col });
            }
        }

        Ok(Self { rows })
    }

    /// Wrap rows produced internally (fitted or simulated triangles).
    /// Callers guarantee a square shape.
    pub(crate) fn from_rows_unchecked(rows: Vec<Vec<f64>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == rows.len()));
        Self { rows }
    }

    /// Number of accident years (equal to the number of development lags)
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Cell value at (accident year, lag)
    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.rows[row][col]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.rows[row]
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Copy of a development-lag column
    pub fn column(&self, col: usize) -> Vec<f64> {
        self.rows.iter().map(|r| r[col]).collect()
    }

    /// Sum of `col` over the first `row_count` accident years
    pub fn column_sum(&self, col: usize, row_count: usize) -> f64 {
        self.rows.iter().take(row_count).map(|r| r[col]).sum()
    }

    /// Main-diagonal cells, one per accident year
    pub fn diagonal(&self) -> Vec<f64> {
        self.rows.iter().enumerate().map(|(i, r)| r[i]).collect()
    }

    /// Consume the triangle, returning its rows
    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows
    }
}

impl TryFrom<Vec<Vec<f64>>> for Triangle {
    type Error = ReservingError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<Triangle> for Vec<Vec<f64>> {
    fn from(triangle: Triangle) -> Self {
        triangle.rows
    }
}
