//! Error types for triangle validation, model fitting and simulation setup

use thiserror::Error;

/// Errors raised by the reserving engine.
///
/// Only precondition failures surface here. Degenerate development columns and
/// non-positive fitted values are recovered locally and never reach the caller.
#[derive(Error, Debug)]
pub enum ReservingError {
    /// Triangle has no rows
    #[error("triangle is empty")]
    EmptyTriangle,

    /// A row length differs from the number of rows
    #[error("triangle is not square: row {row} has {found} values, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A development column sums past the range of `f64`
    #[error("column {col} sum overflows f64")]
    ColumnOverflow { col: usize },

    /// A cell is negative, NaN or infinite
    #[error("invalid cell at ({row}, {col}): {value}")]
    InvalidCell { row: usize, col: usize, value: f64 },

    /// Factor sequence length does not match the triangle size
    #[error("factor sequence has {found} values, expected {expected}")]
    FactorLengthMismatch { expected: usize, found: usize },

    /// Observed and fitted triangles differ in size
    #[error("shape mismatch: observed triangle is {observed}x{observed}, fitted is {fitted}x{fitted}")]
    ShapeMismatch { observed: usize, fitted: usize },

    /// Trial count must be positive
    #[error("invalid trial count: {0} (must be at least 1)")]
    InvalidTrialCount(usize),

    /// Run config asks for a different seed than the simulator was built with
    #[error("seed mismatch: simulator was built with seed {expected}, config requests {found}")]
    SeedMismatch { expected: u64, found: u64 },

    /// Summary statistics requested over no values
    #[error("cannot summarise an empty sample")]
    EmptySample,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Non-numeric loss value in triangle input
    #[error("line {line}, column {column}: cannot parse '{value}' as a loss amount")]
    Parse {
        line: u64,
        column: usize,
        value: String,
    },

    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ReservingError>;
