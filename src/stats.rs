//! Summary statistics over the parsed dataset.

use serde::Serialize;

use crate::columns::{POLLUTANTS, project_numeric};
use crate::parser::RowSet;

/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty
/// input — "no data for this pollutant" charts the same as "zero", a known
/// simplification the dashboard relies on.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Per-pollutant mean concentrations, in dictionary order, keyed by CSV
/// header spelling.
pub fn pollutant_means(rows: &RowSet) -> Vec<(String, f64)> {
    POLLUTANTS
        .iter()
        .map(|(_, header)| (header.to_string(), mean(&project_numeric(rows, header))))
        .collect()
}

/// One labeled point of the AQI time series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// Builds the AQI time series in row order.
///
/// Label: the row's `date` cell when present and non-missing, otherwise a
/// synthetic `Reading {n}` (1-based). Value: the row's `AQI` cell, falling
/// back to `aqi`, defaulting to 0 when neither is numeric.
pub fn aqi_series(rows: &RowSet) -> Vec<SeriesPoint> {
    let date = rows.column_index("date");
    let upper = rows.column_index("AQI");
    let lower = rows.column_index("aqi");

    rows.rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let label = date
                .and_then(|idx| row.get(idx))
                .filter(|cell| !cell.is_missing())
                .map(|cell| cell.display())
                .unwrap_or_else(|| format!("Reading {}", i + 1));

            let value = upper
                .and_then(|idx| row.get(idx))
                .and_then(|cell| cell.as_number())
                .or_else(|| {
                    lower
                        .and_then(|idx| row.get(idx))
                        .and_then(|cell| cell.as_number())
                })
                .unwrap_or(0.0);

            SeriesPoint { label, value }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_csv;

    #[test]
    fn test_mean_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_mean_singleton() {
        assert_eq!(mean(&[7.5]), 7.5);
    }

    #[test]
    fn test_mean_is_order_invariant() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), mean(&[3.0, 1.0, 2.0]));
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
    }

    #[test]
    fn test_mean_after_exclusion() {
        let rows = parse_csv("X\n1\na\n3\n").unwrap();
        let projected = crate::columns::project_numeric(&rows, "X");
        assert_eq!(mean(&projected), 2.0);
    }

    #[test]
    fn test_pollutant_means_fixed_order_and_zero_fill() {
        let rows = parse_csv("PM2_5,CO\n10,1\n20,3\n").unwrap();
        let means = pollutant_means(&rows);
        let names: Vec<&str> = means.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["PM2_5", "PM10", "NO2", "SO2", "O3", "CO"]);
        assert_eq!(means[0].1, 15.0);
        // columns absent from the dataset chart as zero
        assert_eq!(means[1].1, 0.0);
        assert_eq!(means[5].1, 2.0);
    }

    #[test]
    fn test_aqi_series_uses_date_labels() {
        let rows = parse_csv("date,AQI\n2024-01-01,42\n").unwrap();
        let series = aqi_series(&rows);
        assert_eq!(
            series,
            vec![SeriesPoint {
                label: "2024-01-01".to_string(),
                value: 42.0
            }]
        );
    }

    #[test]
    fn test_aqi_series_synthetic_labels_without_date() {
        let rows = parse_csv("AQI\n42\n55\n").unwrap();
        let series = aqi_series(&rows);
        assert_eq!(series[0].label, "Reading 1");
        assert_eq!(series[1].label, "Reading 2");
    }

    #[test]
    fn test_aqi_series_missing_date_cell_falls_back() {
        let rows = parse_csv("date,AQI\n2024-01-01,42\n,55\n").unwrap();
        let series = aqi_series(&rows);
        assert_eq!(series[0].label, "2024-01-01");
        assert_eq!(series[1].label, "Reading 2");
    }

    #[test]
    fn test_aqi_series_lowercase_fallback() {
        let rows = parse_csv("aqi\n61\n").unwrap();
        assert_eq!(aqi_series(&rows)[0].value, 61.0);
    }

    #[test]
    fn test_aqi_series_prefers_uppercase_column() {
        let rows = parse_csv("AQI,aqi\n42,99\nbad,99\n").unwrap();
        let series = aqi_series(&rows);
        assert_eq!(series[0].value, 42.0);
        // non-numeric AQI cell falls through to aqi
        assert_eq!(series[1].value, 99.0);
    }

    #[test]
    fn test_aqi_series_defaults_to_zero() {
        let rows = parse_csv("date,AQI\n2024-01-01,n/a\n").unwrap();
        assert_eq!(aqi_series(&rows)[0].value, 0.0);
    }
}
