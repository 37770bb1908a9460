//! Client for the remote AQI scoring service.
//!
//! The service itself is a black box; this module owns only the request and
//! response shapes and the seam for stubbing the call in tests.

mod client;
mod types;

pub use client::AqiServiceClient;
pub use types::{AqiCategory, PollutantReading, ScoreResult};

use crate::error::ReportError;

/// Abstraction over the scoring endpoint.
#[async_trait::async_trait]
pub trait ScoringApi: Send + Sync {
    /// Scores one reading. Any transport failure, non-success status, or
    /// undecodable body surfaces as [`ReportError::CalculationFailed`].
    async fn calc_aqi(&self, reading: &PollutantReading) -> Result<ScoreResult, ReportError>;
}
