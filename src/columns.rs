//! The fixed pollutant column dictionary and numeric column projection.

use crate::parser::RowSet;

/// Ordered (internal key, CSV header spelling) pairs for the six pollutant
/// columns. This is the single source of truth for column order and spelling;
/// chart labels, projections, and the live-form dataset all derive from it.
pub static POLLUTANTS: &[(&str, &str)] = &[
    ("pm25", "PM2_5"),
    ("pm10", "PM10"),
    ("no2", "NO2"),
    ("so2", "SO2"),
    ("o3", "O3"),
    ("co", "CO"),
];

/// Extracts the ordered numeric values of one column.
///
/// Non-numeric and missing cells are excluded, never replaced with zero, so
/// the projection carries only real measurements. A column absent from the
/// header yields an empty sequence rather than an error.
pub fn project_numeric(rows: &RowSet, column: &str) -> Vec<f64> {
    let Some(idx) = rows.column_index(column) else {
        return Vec::new();
    };

    rows.rows()
        .iter()
        .filter_map(|row| row.get(idx).and_then(|cell| cell.as_number()))
        .collect()
}
