use serde::Serialize;
use strum_macros::{Display, EnumIter};

use crate::error::{DropsizeError, DsResult};

/// The three weighting moments a size distribution is reported by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
pub enum MomentKind {
    Number,
    Surface,
    Volume,
}

/// Diameter bin table: (lower, upper, representative) per row, with the
/// representative diameters strictly ascending. Loaded once, read-only.
#[derive(Debug, Clone)]
pub struct BinTable {
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
    pub representative: Vec<f64>,
}

impl BinTable {
    pub fn new(lower: Vec<f64>, upper: Vec<f64>, representative: Vec<f64>) -> DsResult<Self> {
        let b = representative.len();
        if lower.len() != b || upper.len() != b {
            return Err(DropsizeError::Validation(format!(
                "Bin table columns differ in length ({}/{}/{})",
                lower.len(),
                upper.len(),
                b
            )));
        }
        if b < 2 {
            return Err(DropsizeError::Validation(format!(
                "Bin table needs at least 2 bins, got {}",
                b
            )));
        }
        if representative.iter().any(|d| !d.is_finite()) {
            return Err(DropsizeError::Validation(
                "Bin table contains non-finite diameters".to_string(),
            ));
        }
        if representative[0] <= 0.0 {
            return Err(DropsizeError::Validation(
                "Representative diameters must be positive".to_string(),
            ));
        }
        if !representative.windows(2).all(|w| w[0] < w[1]) {
            return Err(DropsizeError::Validation(
                "Representative diameters must be strictly ascending".to_string(),
            ));
        }
        Ok(Self {
            lower,
            upper,
            representative,
        })
    }

    pub fn len(&self) -> usize {
        self.representative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.representative.is_empty()
    }

    /// Number of digitization slots: B bins plus the below-minimum slot.
    pub fn slot_count(&self) -> usize {
        self.len() + 1
    }

    /// Diameter a slot is weighted and reported by. Slot indices past the
    /// bin table (the at-or-above-maximum slot) clamp to the last bin.
    pub fn effective_diameter(&self, slot: usize) -> f64 {
        self.representative[slot.min(self.len() - 1)]
    }
}

/// Per-slot totals for each moment, all of length B+1.
#[derive(Debug, Clone)]
pub struct MomentVectors {
    pub counts: Vec<f64>,
    pub surface: Vec<f64>,
    pub volume: Vec<f64>,
}

impl MomentVectors {
    pub fn moment(&self, kind: MomentKind) -> &[f64] {
        match kind {
            MomentKind::Number => &self.counts,
            MomentKind::Surface => &self.surface,
            MomentKind::Volume => &self.volume,
        }
    }
}

/// Normalized histogram of one moment with its running sum.
#[derive(Debug, Clone)]
pub struct Distribution {
    pub kind: MomentKind,
    pub percent: Vec<f64>,
    pub cumulative: Vec<f64>,
}

/// Cutoff diameters and shape statistics for one moment.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MomentSummary {
    pub d10: f64,
    pub d50: f64,
    pub d90: f64,
    pub span: f64,
    pub mode: f64,
    pub median: f64,
}

/// Everything the report prints, recomputed per run.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub particles: usize,
    pub cutoffs: [f64; 3],
    pub number: MomentSummary,
    pub surface: MomentSummary,
    pub volume: MomentSummary,
    pub d_1_0: f64,
    pub d_3_2: f64,
    pub d_4_3: f64,
}

impl Summary {
    pub fn moment(&self, kind: MomentKind) -> &MomentSummary {
        match kind {
            MomentKind::Number => &self.number,
            MomentKind::Surface => &self.surface,
            MomentKind::Volume => &self.volume,
        }
    }
}
