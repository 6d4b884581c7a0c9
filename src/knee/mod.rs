pub mod fit;
pub mod loader;

pub use self::fit::Line;
pub use self::loader::{FluxCurve, KneeCase};

use crate::error::{DropsizeError, DsResult};

/// Piecewise-linear model of a flux curve: the initial pressure-limited
/// rise, the fouling plateau, and where they meet.
#[derive(Debug, Clone)]
pub struct KneeFit {
    pub rise: Line,
    pub plateau: Line,
    pub knee_pressure: f64,
    pub knee_flux: f64,
}

/// Fits the rise to the first `head` points and the plateau to the last
/// `tail` points, then intersects the two lines.
pub fn fit_knee(curve: &FluxCurve, head: usize, tail: usize) -> DsResult<KneeFit> {
    let n = curve.len();
    if head < 2 || tail < 2 {
        return Err(DropsizeError::Validation(format!(
            "Fit windows need at least 2 points (head {}, tail {})",
            head, tail
        )));
    }
    if head > n || tail > n {
        return Err(DropsizeError::Validation(format!(
            "Fit windows exceed the {} curve points (head {}, tail {})",
            n, head, tail
        )));
    }

    let rise = fit::fit_line(&curve.pressure[..head], &curve.flux[..head])?;
    let plateau = fit::fit_line(&curve.pressure[n - tail..], &curve.flux[n - tail..])?;
    let (knee_pressure, knee_flux) = fit::intersection(&rise, &plateau)?;

    Ok(KneeFit {
        rise,
        plateau,
        knee_pressure,
        knee_flux,
    })
}
