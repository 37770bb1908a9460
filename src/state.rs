//! Application state and the calculation lifecycle.
//!
//! All mutation goes through explicit transition methods so the dataset
//! lifecycle and the `Idle → Pending → {Succeeded, Failed}` machine are
//! testable without any rendering layer.

use tracing::warn;

use crate::error::ReportError;
use crate::parser::{RowSet, parse_csv};
use crate::scoring::{PollutantReading, ScoreResult, ScoringApi};
use crate::views::{DerivedViews, build_views};

/// Lifecycle of one calculator submission.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CalculationState {
    #[default]
    Idle,
    Pending,
    Succeeded(ScoreResult),
    Failed,
}

impl CalculationState {
    pub fn is_pending(&self) -> bool {
        matches!(self, CalculationState::Pending)
    }

    pub fn result(&self) -> Option<&ScoreResult> {
        match self {
            CalculationState::Succeeded(result) => Some(result),
            _ => None,
        }
    }
}

/// The dashboard's whole mutable state: the loaded dataset, its derived
/// views, and the current calculation lifecycle.
#[derive(Debug, Default)]
pub struct AppState {
    dataset: Option<RowSet>,
    views: Option<DerivedViews>,
    calculation: CalculationState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dataset(&self) -> Option<&RowSet> {
        self.dataset.as_ref()
    }

    pub fn views(&self) -> Option<&DerivedViews> {
        self.views.as_ref()
    }

    pub fn calculation(&self) -> &CalculationState {
        &self.calculation
    }

    /// Replaces the dataset and derived views wholesale from CSV text.
    ///
    /// On failure any previously loaded dataset is cleared too, so a bad
    /// upload never leaves stale views on screen next to an error message.
    pub fn load_dataset(&mut self, text: &str) -> Result<(), ReportError> {
        match parse_csv(text) {
            Ok(rows) => {
                self.views = Some(build_views(&rows));
                self.dataset = Some(rows);
                Ok(())
            }
            Err(e) => {
                self.dataset = None;
                self.views = None;
                Err(e)
            }
        }
    }

    /// Loads the dataset from a CSV file on disk.
    ///
    /// An unreadable file clears any previously loaded dataset, same as a
    /// bad upload.
    pub fn load_dataset_file(&mut self, path: &str) -> Result<(), ReportError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                self.dataset = None;
                self.views = None;
                return Err(ReportError::UnreadableFile(e));
            }
        };
        self.load_dataset(&text)
    }

    /// Enters `Pending` and discards any previous result.
    ///
    /// Returns `false` when a request is already in flight: the new
    /// submission is ignored rather than allowed to interleave with the
    /// first one.
    pub fn begin_calculation(&mut self) -> bool {
        if self.calculation.is_pending() {
            warn!("Calculation already in flight, ignoring submission");
            return false;
        }
        self.calculation = CalculationState::Pending;
        true
    }

    /// Resolves the pending request. A failure retains no previous result,
    /// so the display can never show a score next to a contradicting error.
    pub fn finish_calculation(&mut self, outcome: Result<ScoreResult, ReportError>) {
        self.calculation = match outcome {
            Ok(result) => CalculationState::Succeeded(result),
            Err(_) => CalculationState::Failed,
        };
    }
}

/// Drives one full submission through the lifecycle against any
/// [`ScoringApi`]. Returns `false` if the in-flight guard rejected it.
pub async fn run_calculation(
    state: &mut AppState,
    api: &dyn ScoringApi,
    reading: &PollutantReading,
) -> bool {
    if !state.begin_calculation() {
        return false;
    }
    let outcome = api.calc_aqi(reading).await;
    state.finish_calculation(outcome);
    true
}
