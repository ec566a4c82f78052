//! Load loss triangles from CSV
//!
//! Expected layout: a header row, then one row per accident year. The first
//! field of each row is the accident-year label and the remaining fields are
//! cumulative losses by development lag.
//!
//! ```text
//! AccidentYear,1,2,3
//! 2021,1000,1500,1650
//! 2022,1100,1620,1790
//! 2023,1180,1700,1880
//! ```

use csv::{Reader, StringRecord};
use std::io::Read;
use std::path::Path;

use super::Triangle;
use crate::error::{ReservingError, Result};

/// Load a triangle from a CSV file
pub fn load_triangle<P: AsRef<Path>>(path: P) -> Result<Triangle> {
    let reader = Reader::from_path(path)?;
    read_rows(reader)
}

/// Load a triangle from any reader (e.g., string buffer, network stream)
pub fn load_triangle_from_reader<R: Read>(reader: R) -> Result<Triangle> {
    read_rows(Reader::from_reader(reader))
}

fn read_rows<R: Read>(mut reader: Reader<R>) -> Result<Triangle> {
    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result?;
        rows.push(parse_losses(&record)?);
    }

    log::debug!("Loaded {} accident years from CSV", rows.len());
    Triangle::new(rows)
}

/// Parse every field after the accident-year label
fn parse_losses(record: &StringRecord) -> Result<Vec<f64>> {
    let line = record.position().map(|p| p.line()).unwrap_or(0);

    record
        .iter()
        .enumerate()
        .skip(1)
        .map(|(column, field)| {
            field.trim().parse::<f64>().map_err(|_| ReservingError::Parse {
                line,
                column,
                value: field.to_string(),
            })
        })
        .collect()
}
