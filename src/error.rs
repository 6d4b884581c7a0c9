use thiserror::Error;

#[derive(Error, Debug)]
pub enum DropsizeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Serialization Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed input in '{path}' (line {line}): {reason}")]
    MalformedInput {
        path: String,
        line: usize,
        reason: String,
    },

    #[error("Empty bin mass: the {0} moment vector sums to zero")]
    EmptyBinMass(String),

    #[error("Cutoff {cutoff}% falls outside the binned range (crossing index {index})")]
    OutOfRangeCutoff { cutoff: f64, index: usize },

    #[error("Degenerate distribution: D50 is zero, span is undefined")]
    DegenerateDistribution,

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type DsResult<T> = Result<T, DropsizeError>;
