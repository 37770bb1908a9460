//! Error taxonomy for the dataset pipeline and scoring client.
//!
//! Every variant is recovered at the CLI boundary and turned into a
//! user-visible message; none of these abort the process.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// The input parsed cleanly but contained zero data rows.
    #[error("dataset contains no data rows")]
    EmptyDataset,

    /// The input file could not be read at all.
    #[error("could not read input file: {0}")]
    UnreadableFile(#[from] std::io::Error),

    /// The input could not be decoded as CSV.
    #[error("could not parse input as CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Transport failure, non-success status, or undecodable body from the
    /// scoring service. A single category on purpose: callers only need to
    /// know the calculation failed, not why.
    #[error("AQI calculation failed: {reason}")]
    CalculationFailed { reason: String },
}
