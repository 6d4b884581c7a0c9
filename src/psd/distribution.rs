use clap::ValueEnum;
use strum_macros::Display;

use super::types::{BinTable, Distribution, MomentKind, MomentVectors};
use crate::error::{DropsizeError, DsResult};

/// Comparison used to locate the cumulative crossing. Inclusive (>=) is the
/// canonical behavior; exclusive (>) is kept for parity with older outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display)]
#[strum(serialize_all = "lowercase")]
pub enum CrossingMode {
    #[default]
    Inclusive,
    Exclusive,
}

impl CrossingMode {
    fn crosses(self, value: f64, cutoff: f64) -> bool {
        match self {
            CrossingMode::Inclusive => value >= cutoff,
            CrossingMode::Exclusive => value > cutoff,
        }
    }
}

/// Scales a moment vector to percentages summing to 100.
pub fn percentages(kind: MomentKind, values: &[f64]) -> DsResult<Vec<f64>> {
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return Err(DropsizeError::EmptyBinMass(kind.to_string()));
    }
    Ok(values.iter().map(|v| v * 100.0 / total).collect())
}

/// Running sum of a percentage vector in slot order.
pub fn cumulative(percent: &[f64]) -> Vec<f64> {
    let mut total = 0.0;
    percent
        .iter()
        .map(|p| {
            total += p;
            total
        })
        .collect()
}

pub fn build(kind: MomentKind, moments: &MomentVectors) -> DsResult<Distribution> {
    let percent = percentages(kind, moments.moment(kind))?;
    let cumulative = cumulative(&percent);
    Ok(Distribution {
        kind,
        percent,
        cumulative,
    })
}

/// Interpolates the diameter at which a cumulative distribution crosses a
/// cutoff percentage.
///
/// The crossing slot k must pair two representative diameters: k = 0 means
/// the cutoff sits at or below the smallest slot, k >= B means it is never
/// reached inside the bin table. Both are reported as out of range rather
/// than reading past the diameter sequence.
pub fn interpolate_cutoff(
    bins: &BinTable,
    cumulative: &[f64],
    cutoff: f64,
    mode: CrossingMode,
) -> DsResult<f64> {
    let k = cumulative
        .iter()
        .position(|&c| mode.crosses(c, cutoff))
        .ok_or(DropsizeError::OutOfRangeCutoff {
            cutoff,
            index: cumulative.len(),
        })?;

    if k == 0 || k >= bins.len() {
        return Err(DropsizeError::OutOfRangeCutoff { cutoff, index: k });
    }

    let (x1, y1) = (bins.representative[k - 1], cumulative[k - 1]);
    let (x2, y2) = (bins.representative[k], cumulative[k]);

    // First crossing at k guarantees y1 < y2, so the slope is never zero.
    let slope = (y2 - y1) / (x2 - x1);
    let intercept = y2 - slope * x2;
    Ok((cutoff - intercept) / slope)
}
