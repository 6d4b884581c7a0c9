use clap::Args;

use crate::error::{DropsizeError, DsResult};
use crate::psd::CrossingMode;

#[derive(Args, Debug, Clone)]
pub struct Config {
    #[command(flatten)]
    pub analysis: AnalysisParams,
    #[command(flatten)]
    pub output: OutputParams,
}

#[derive(Args, Debug, Clone)]
pub struct AnalysisParams {
    /// Cumulative cutoff percentages for the Dxx diameters.
    #[arg(long, default_value = "10,50,90")]
    pub cutoffs: String,

    /// Comparison used to detect the cumulative crossing.
    #[arg(long, value_enum, default_value_t = CrossingMode::Inclusive)]
    pub crossing: CrossingMode,
}

#[derive(Args, Debug, Clone)]
pub struct OutputParams {
    /// Write the fixed-width text report to this file.
    #[arg(long)]
    pub report: Option<String>,

    /// Write the per-bin distribution table to this file.
    #[arg(long)]
    pub distribution: Option<String>,

    /// Emit a gnuplot script (plus its data files) at this path.
    #[arg(long)]
    pub plot: Option<String>,

    /// Write the summary as JSON to this file.
    #[arg(long)]
    pub json: Option<String>,
}

impl AnalysisParams {
    pub fn get_cutoffs(&self) -> DsResult<[f64; 3]> {
        let cutoffs = parse_f64_array::<3>(&self.cutoffs, "cutoffs")?;
        if cutoffs.iter().any(|c| *c <= 0.0 || *c >= 100.0) {
            return Err(DropsizeError::Validation(format!(
                "Cutoffs must lie strictly between 0 and 100, got {:?}",
                cutoffs
            )));
        }
        if !(cutoffs[0] < cutoffs[1] && cutoffs[1] < cutoffs[2]) {
            return Err(DropsizeError::Validation(format!(
                "Cutoffs must be strictly ascending, got {:?}",
                cutoffs
            )));
        }
        Ok(cutoffs)
    }
}

fn parse_f64_array<const N: usize>(s: &str, name: &str) -> DsResult<[f64; N]> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != N {
        return Err(DropsizeError::Validation(format!(
            "--{} requires {} values, got {}",
            name,
            N,
            parts.len()
        )));
    }
    let mut arr = [0.0; N];
    for (i, p) in parts.iter().enumerate() {
        arr[i] = p.trim().parse().map_err(|_| {
            DropsizeError::Validation(format!("Invalid number '{}' in --{}", p.trim(), name))
        })?;
    }
    Ok(arr)
}
