use super::types::{BinTable, MomentKind};
use crate::error::{DropsizeError, DsResult};

/// Normalized distribution width, (D90 - D10) / D50.
pub fn span(d10: f64, d50: f64, d90: f64) -> DsResult<f64> {
    if d50 == 0.0 {
        return Err(DropsizeError::DegenerateDistribution);
    }
    Ok((d90 - d10) / d50)
}

/// Diameter of the slot with the highest percentage, first occurrence wins.
pub fn mode_diameter(bins: &BinTable, percent: &[f64]) -> f64 {
    let mut best = 0;
    for (slot, &p) in percent.iter().enumerate() {
        if p > percent[best] {
            best = slot;
        }
    }
    bins.effective_diameter(best)
}

/// Diameter of the first slot where the cumulative distribution reaches 50%.
pub fn median_diameter(bins: &BinTable, cumulative: &[f64]) -> f64 {
    let slot = cumulative
        .iter()
        .position(|&c| c >= 50.0)
        .unwrap_or(cumulative.len() - 1);
    bins.effective_diameter(slot)
}

#[derive(Debug, Clone, Copy)]
pub struct WeightedMeans {
    pub d_1_0: f64,
    pub d_3_2: f64,
    pub d_4_3: f64,
}

/// Moment-ratio mean diameters over the full slot range:
/// D[1,0] = sum(n d)/sum(n), D[3,2] = sum(n d^3)/sum(n d^2),
/// D[4,3] = sum(n d^4)/sum(n d^3).
pub fn weighted_means(bins: &BinTable, counts: &[f64]) -> DsResult<WeightedMeans> {
    let mut s0 = 0.0;
    let mut s1 = 0.0;
    let mut s2 = 0.0;
    let mut s3 = 0.0;
    let mut s4 = 0.0;

    for (slot, &n) in counts.iter().enumerate() {
        let d = bins.effective_diameter(slot);
        let d2 = d * d;
        s0 += n;
        s1 += n * d;
        s2 += n * d2;
        s3 += n * d2 * d;
        s4 += n * d2 * d2;
    }

    // Representative diameters are positive, so s2/s3 vanish only with s0.
    if s0 <= 0.0 {
        return Err(DropsizeError::EmptyBinMass(MomentKind::Number.to_string()));
    }

    Ok(WeightedMeans {
        d_1_0: s1 / s0,
        d_3_2: s3 / s2,
        d_4_3: s4 / s3,
    })
}
