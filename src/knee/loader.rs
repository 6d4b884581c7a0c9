use std::fs::File;
use std::io::{BufRead, BufReader};

use serde::Deserialize;
use tracing::debug;

use crate::error::{DropsizeError, DsResult};

/// One row of the cases file: which curve to fit and how many points the
/// rise and plateau windows take.
#[derive(Debug, Clone, Deserialize)]
pub struct KneeCase {
    pub name: String,
    pub head: usize,
    pub tail: usize,
}

/// Loads the batch description, a CSV table with header `name,head,tail`.
pub fn load_cases(path: &str) -> DsResult<Vec<KneeCase>> {
    let file = File::open(path).map_err(|e| {
        DropsizeError::Validation(format!("Could not open cases file '{}': {}", path, e))
    })?;

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .has_headers(true)
        .from_reader(file);

    let mut cases = Vec::new();
    for result in rdr.deserialize() {
        let case: KneeCase = result?;
        cases.push(case);
    }

    debug!("Loaded {} knee cases from {}", cases.len(), path);
    Ok(cases)
}

/// A measured flux/pressure curve: trans-membrane pressure against flux.
#[derive(Debug, Clone)]
pub struct FluxCurve {
    pub pressure: Vec<f64>,
    pub flux: Vec<f64>,
}

impl FluxCurve {
    pub fn len(&self) -> usize {
        self.pressure.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pressure.is_empty()
    }
}

/// Reads a flux table: whitespace-delimited, pressure in column 1 and flux
/// in column 3 (the layout the plot scripts also assume).
pub fn read_curve<R: BufRead>(reader: R, origin: &str) -> DsResult<FluxCurve> {
    let mut pressure = Vec::new();
    let mut flux = Vec::new();

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
                reason: format!("expected at least 3 columns, got {}", fields.len()),
            });
        }

        let parse = |text: &str| -> DsResult<f64> {
            text.parse().map_err(|_| DropsizeError::MalformedInput {
                path: origin.to_string(),
                line: idx + 1,
                reason: format!("'{}' is not a number", text),
            })
        };

        pressure.push(parse(fields[0])?);
        flux.push(parse(fields[2])?);
    }

    debug!("Loaded {} curve points from {}", pressure.len(), origin);
    Ok(FluxCurve { pressure, flux })
}

pub fn load_curve(path: &str) -> DsResult<FluxCurve> {
    let file = File::open(path).map_err(|e| {
        DropsizeError::Validation(format!("Could not open flux data '{}': {}", path, e))
    })?;
    read_curve(BufReader::new(file), path)
}
