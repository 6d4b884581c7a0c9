use std::fs::File;
use std::io::{BufRead, BufReader};

use tracing::debug;

use super::types::BinTable;
use crate::error::{DropsizeError, DsResult};

fn parse_field(text: &str, origin: &str, line: usize) -> DsResult<f64> {
    text.parse().map_err(|_| DropsizeError::MalformedInput {
        path: origin.to_string(),
        line,
        reason: format!("'{}' is not a number", text),
    })
}

/// Reads particle areas from a whitespace-delimited table: one value per
/// row, first column if there are several. Blank lines and '#' comments are
/// skipped; anything else must parse, there is no partial load.
pub fn read_measurements<R: BufRead>(reader: R, origin: &str) -> DsResult<Vec<f64>> {
    let mut values = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        let first = text.split_whitespace().next().unwrap_or(text);
        values.push(parse_field(first, origin, idx + 1)?);
    }

    debug!("Loaded {} measurements from {}", values.len(), origin);
    Ok(values)
}

pub fn load_measurements(path: &str) -> DsResult<Vec<f64>> {
    let file = File::open(path).map_err(|e| {
        DropsizeError::Validation(format!("Could not open measurement file '{}': {}", path, e))
    })?;
    read_measurements(BufReader::new(file), path)
}

/// Reads the bin table: three whitespace-delimited columns per row
/// (lower bound, upper bound, representative diameter), ascending.
pub fn read_bins<R: BufRead>(reader: R, origin: &str) -> DsResult<BinTable> {
    let mut lower = Vec::new();
    let mut upper = Vec::new();
    let mut representative = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = text.split_whitespace().collect();
        if fields.len() < 3 {
            return Err(DropsizeError::MalformedInput {
                path: origin.to_string(),
                line: idx + 1,
                reason: format!("expected 3 columns, got {}", fields.len()),
            });
        }

        lower.push(parse_field(fields[0], origin, idx + 1)?);
        upper.push(parse_field(fields[1], origin, idx + 1)?);
        representative.push(parse_field(fields[2], origin, idx + 1)?);
    }

    debug!("Loaded {} bins from {}", representative.len(), origin);
    BinTable::new(lower, upper, representative)
}

pub fn load_bins(path: &str) -> DsResult<BinTable> {
    let file = File::open(path).map_err(|e| {
        DropsizeError::Validation(format!("Could not open bin table '{}': {}", path, e))
    })?;
    read_bins(BufReader::new(file), path)
}
