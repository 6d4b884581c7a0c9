pub mod binner;
pub mod distribution;
pub mod loader;
pub mod stats;
pub mod types;

use strum::IntoEnumIterator;

pub use self::distribution::CrossingMode;
pub use self::types::{
    BinTable, Distribution, MomentKind, MomentSummary, MomentVectors, Summary,
};

use crate::error::{DropsizeError, DsResult};

/// One binned sample: the moment vectors and the three distributions built
/// from them, ready to be summarized at arbitrary cutoffs.
#[derive(Debug)]
pub struct Analysis {
    pub bins: BinTable,
    pub moments: MomentVectors,
    pub distributions: Vec<Distribution>,
    pub particles: usize,
    pub running_average: Vec<f64>,
}

impl Analysis {
    pub fn new(areas: &[f64], bins: BinTable) -> DsResult<Self> {
        if areas.len() < 2 {
            return Err(DropsizeError::Validation(format!(
                "Need at least 2 measurements, got {}",
                areas.len()
            )));
        }
        if let Some(bad) = areas.iter().find(|a| !a.is_finite() || **a <= 0.0) {
            return Err(DropsizeError::Validation(format!(
                "Particle areas must be positive, got {}",
                bad
            )));
        }

        let moments = binner::bin_measurements(areas, &bins);
        let distributions = MomentKind::iter()
            .map(|kind| distribution::build(kind, &moments))
            .collect::<DsResult<Vec<_>>>()?;
        let running_average = binner::running_average(areas);

        Ok(Self {
            bins,
            moments,
            distributions,
            particles: areas.len(),
            running_average,
        })
    }

    pub fn distribution(&self, kind: MomentKind) -> &Distribution {
        self.distributions
            .iter()
            .find(|d| d.kind == kind)
            .expect("all three moments are built in new()")
    }

    fn summarize_moment(
        &self,
        kind: MomentKind,
        cutoffs: [f64; 3],
        mode: CrossingMode,
    ) -> DsResult<MomentSummary> {
        let dist = self.distribution(kind);
        let d10 = distribution::interpolate_cutoff(&self.bins, &dist.cumulative, cutoffs[0], mode)?;
        let d50 = distribution::interpolate_cutoff(&self.bins, &dist.cumulative, cutoffs[1], mode)?;
        let d90 = distribution::interpolate_cutoff(&self.bins, &dist.cumulative, cutoffs[2], mode)?;

        Ok(MomentSummary {
            d10,
            d50,
            d90,
            span: stats::span(d10, d50, d90)?,
            mode: stats::mode_diameter(&self.bins, &dist.percent),
            median: stats::median_diameter(&self.bins, &dist.cumulative),
        })
    }

    /// Derives the full report: cutoff diameters, span, mode and median per
    /// moment, plus the weighted mean diameters.
    pub fn summarize(&self, cutoffs: [f64; 3], mode: CrossingMode) -> DsResult<Summary> {
        let number = self.summarize_moment(MomentKind::Number, cutoffs, mode)?;
        let surface = self.summarize_moment(MomentKind::Surface, cutoffs, mode)?;
        let volume = self.summarize_moment(MomentKind::Volume, cutoffs, mode)?;
        let means = stats::weighted_means(&self.bins, &self.moments.counts)?;

        Ok(Summary {
            particles: self.particles,
            cutoffs,
            number,
            surface,
            volume,
            d_1_0: means.d_1_0,
            d_3_2: means.d_3_2,
            d_4_3: means.d_4_3,
        })
    }
}
