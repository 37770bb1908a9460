//! Chart- and table-ready structures derived from the current dataset.
//!
//! These are pure functions of the parsed rows, rebuilt in full on every
//! upload; the presentation layer only reads them.

use serde::Serialize;

use crate::columns::POLLUTANTS;
use crate::parser::RowSet;
use crate::scoring::PollutantReading;
use crate::stats::{aqi_series, pollutant_means};

/// Upper bound on rows shown in the preview table.
pub const TABLE_ROW_LIMIT: usize = 80;

/// Parallel label/value sequences feeding one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataset {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// The bounded preview table: parsed header order, stringified cells,
/// missing cells rendered as empty strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Everything the dashboard derives from one uploaded dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedViews {
    /// AQI-over-time line chart. `None` means the dataset genuinely has no
    /// `AQI`/`aqi` column; an all-zero column still produces a chart.
    pub aqi_line: Option<ChartDataset>,
    /// Per-pollutant mean bar chart, always present, fixed column order.
    pub pollutant_means: ChartDataset,
    pub table: TableView,
}

/// Builds all derived views for a non-empty dataset.
pub fn build_views(rows: &RowSet) -> DerivedViews {
    // Presence is a header question, not a values question: an AQI column of
    // zeros still charts, while no column at all yields no chart.
    let aqi_line = if rows.has_column("AQI") || rows.has_column("aqi") {
        let series = aqi_series(rows);
        Some(ChartDataset {
            labels: series.iter().map(|p| p.label.clone()).collect(),
            values: series.iter().map(|p| p.value).collect(),
        })
    } else {
        None
    };

    let means = pollutant_means(rows);
    let pollutant_means = ChartDataset {
        labels: means.iter().map(|(name, _)| name.clone()).collect(),
        values: means.iter().map(|(_, value)| *value).collect(),
    };

    let table = TableView {
        header: rows.header().to_vec(),
        rows: rows
            .rows()
            .iter()
            .take(TABLE_ROW_LIMIT)
            .map(|row| row.iter().map(|cell| cell.display()).collect())
            .collect(),
    };

    DerivedViews {
        aqi_line,
        pollutant_means,
        table,
    }
}

/// Chart dataset for the live calculator form, labeled with the CSV header
/// spellings so both pollutant charts share an axis vocabulary.
pub fn reading_chart(reading: &PollutantReading) -> ChartDataset {
    ChartDataset {
        labels: POLLUTANTS.iter().map(|(_, h)| h.to_string()).collect(),
        values: POLLUTANTS.iter().map(|(key, _)| reading.value(key)).collect(),
    }
}
