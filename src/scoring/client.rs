use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use super::{PollutantReading, ScoreResult, ScoringApi};
use crate::error::ReportError;

/// Reqwest-backed client for the scoring service's `POST /api/calc-aqi`.
pub struct AqiServiceClient {
    base_url: String,
    client: reqwest::Client,
}

impl AqiServiceClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ReportError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ReportError::CalculationFailed {
                reason: e.to_string(),
            })?;

        let base: String = base_url.into();
        Ok(Self {
            base_url: base.trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl ScoringApi for AqiServiceClient {
    async fn calc_aqi(&self, reading: &PollutantReading) -> Result<ScoreResult, ReportError> {
        let url = format!("{}/api/calc-aqi", self.base_url);
        debug!(url = %url, "Submitting reading to scoring service");

        let response = self
            .client
            .post(&url)
            .json(reading)
            .send()
            .await
            .map_err(|e| ReportError::CalculationFailed {
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(ReportError::CalculationFailed {
                reason: format!("service returned status {status}"),
            });
        }

        response
            .json::<ScoreResult>()
            .await
            .map_err(|e| ReportError::CalculationFailed {
                reason: format!("invalid response body: {e}"),
            })
    }
}
