//! Output formatting and persistence for derived reports.
//!
//! Supports pretty-printing, JSON report files, and a CSV export of the
//! per-pollutant means.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::File;
use tracing::{debug, info};

use crate::views::DerivedViews;

/// Envelope written as the JSON report file.
#[derive(Debug, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub row_count: usize,
    pub views: DerivedViews,
}

impl Report {
    pub fn new(row_count: usize, views: DerivedViews) -> Self {
        Self {
            generated_at: Utc::now(),
            row_count,
            views,
        }
    }
}

/// Logs derived views using Rust's debug pretty-print format.
pub fn print_pretty(views: &DerivedViews) {
    debug!("{:#?}", views);
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Writes the full report as pretty JSON.
pub fn write_report(path: &str, report: &Report) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, report)?;
    info!(path, rows = report.row_count, "Report written");
    Ok(())
}

/// Writes the pollutant-mean summary as a two-column CSV.
pub fn write_means_csv(path: &str, means: &[(String, f64)]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["pollutant", "mean"])?;
    for (name, value) in means {
        writer.write_record([name.as_str(), &value.to_string()])?;
    }
    writer.flush()?;
    info!(path, "Means CSV written");
    Ok(())
}
