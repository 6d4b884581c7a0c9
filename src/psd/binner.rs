use std::f64::consts::PI;

use super::types::{BinTable, MomentVectors};

/// Equivalent-circle diameter of a measured cross-sectional area.
pub fn equivalent_diameter(area: f64) -> f64 {
    2.0 * (area / PI).sqrt()
}

/// Right-open digitization: index of the first slot whose edge exceeds the
/// value, i.e. the number of edges <= value. Values below the smallest edge
/// land in slot 0, values at or above the largest in slot edges.len().
pub fn digitize(value: f64, edges: &[f64]) -> usize {
    edges.partition_point(|&e| e <= value)
}

/// Bins a measurement set into per-slot count, surface and volume totals.
///
/// Surface and volume use the slot's representative diameter, not the raw
/// measurement diameter. The binned-radius approximation is intentional and
/// must be preserved for parity with reference outputs.
pub fn bin_measurements(areas: &[f64], bins: &BinTable) -> MomentVectors {
    let slots = bins.slot_count();
    let mut counts = vec![0.0; slots];

    for &area in areas {
        let d = equivalent_diameter(area);
        counts[digitize(d, &bins.representative)] += 1.0;
    }

    let mut surface = vec![0.0; slots];
    let mut volume = vec![0.0; slots];
    for (slot, &n) in counts.iter().enumerate() {
        let r = bins.effective_diameter(slot) / 2.0;
        surface[slot] = 4.0 * PI * r * r * n;
        volume[slot] = (4.0 / 3.0) * PI * r * r * r * n;
    }

    MomentVectors {
        counts,
        surface,
        volume,
    }
}

/// Running mean of the raw measurements over sample index, used for the
/// sample-size convergence plot.
pub fn running_average(values: &[f64]) -> Vec<f64> {
    let mut total = 0.0;
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            total += v;
            total / (i + 1) as f64
        })
        .collect()
}
