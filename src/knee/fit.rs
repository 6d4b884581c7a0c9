use crate::error::{DropsizeError, DsResult};

/// A fitted line y = slope * x + intercept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub slope: f64,
    pub intercept: f64,
}

impl Line {
    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Ordinary-least-squares line fit (closed form):
/// slope = (n*Sxy - Sx*Sy) / (n*Sxx - Sx^2), intercept = (Sy - slope*Sx)/n.
pub fn fit_line(x: &[f64], y: &[f64]) -> DsResult<Line> {
    if x.len() != y.len() {
        return Err(DropsizeError::Validation(format!(
            "Fit arrays differ in length ({} vs {})",
            x.len(),
            y.len()
        )));
    }
    if x.len() < 2 {
        return Err(DropsizeError::Validation(format!(
            "Line fit needs at least 2 points, got {}",
            x.len()
        )));
    }

    let n = x.len() as f64;
    let sx: f64 = x.iter().sum();
    let sy: f64 = y.iter().sum();
    let sxx: f64 = x.iter().map(|v| v * v).sum();
    let sxy: f64 = x.iter().zip(y).map(|(a, b)| a * b).sum();

    let denom = n * sxx - sx * sx;
    if denom.abs() < f64::EPSILON * n * sxx.abs().max(1.0) {
        return Err(DropsizeError::Validation(
            "Line fit is singular: all x values coincide".to_string(),
        ));
    }

    let slope = (n * sxy - sx * sy) / denom;
    let intercept = (sy - slope * sx) / n;
    Ok(Line { slope, intercept })
}

/// Intersection of two fitted lines. Parallel fits have no knee.
pub fn intersection(first: &Line, second: &Line) -> DsResult<(f64, f64)> {
    let denom = first.slope - second.slope;
    if denom == 0.0 {
        return Err(DropsizeError::Validation(
            "Fitted segments are parallel, no intersection".to_string(),
        ));
    }
    let x = (second.intercept - first.intercept) / denom;
    let y = (first.slope * second.intercept - second.slope * first.intercept) / denom;
    Ok((x, y))
}
