use serde::{Deserialize, Serialize};
use std::fmt;

/// One six-field reading submitted to the scoring service.
///
/// Built transiently from form input and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PollutantReading {
    pub pm25: f64,
    pub pm10: f64,
    pub so2: f64,
    pub no2: f64,
    pub co: f64,
    pub o3: f64,
}

impl PollutantReading {
    /// Builds a reading from raw form strings. Empty, non-numeric, and
    /// negative inputs coerce to 0 rather than erroring, matching the form's
    /// permissive-input policy.
    pub fn from_fields(pm25: &str, pm10: &str, so2: &str, no2: &str, co: &str, o3: &str) -> Self {
        Self {
            pm25: coerce(pm25),
            pm10: coerce(pm10),
            so2: coerce(so2),
            no2: coerce(no2),
            co: coerce(co),
            o3: coerce(o3),
        }
    }

    /// Looks a field up by its internal dictionary key.
    pub fn value(&self, key: &str) -> f64 {
        match key {
            "pm25" => self.pm25,
            "pm10" => self.pm10,
            "so2" => self.so2,
            "no2" => self.no2,
            "co" => self.co,
            "o3" => self.o3,
            _ => 0.0,
        }
    }
}

fn coerce(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map(|n| n.max(0.0))
        .unwrap_or(0.0)
}

/// The scoring service's fixed category scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AqiCategory {
    Good,
    Satisfactory,
    Moderate,
    Poor,
    #[serde(rename = "Very Poor")]
    VeryPoor,
    Severe,
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AqiCategory::Good => "Good",
            AqiCategory::Satisfactory => "Satisfactory",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::Poor => "Poor",
            AqiCategory::VeryPoor => "Very Poor",
            AqiCategory::Severe => "Severe",
        };
        f.write_str(name)
    }
}

/// A scoring response, replaced wholesale on every new calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub aqi: f64,
    pub category: AqiCategory,
    pub dominant_pollutant: String,
    pub chemistry_note: String,
}
