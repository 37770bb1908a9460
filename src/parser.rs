//! CSV parser for historical air-quality readings.

use crate::error::ReportError;

/// A single parsed cell. Coercion is deliberately permissive: the variant
/// records what the cell was, and downstream policy (exclude, default to 0,
/// render as empty string) stays auditable instead of hiding behind implicit
/// falsy-value rules.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Missing,
}

impl Cell {
    fn from_field(raw: &str) -> Cell {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Cell::Missing;
        }
        match trimmed.parse::<f64>() {
            // "NaN" and "inf" parse as f64 but are not data
            Ok(n) if n.is_finite() => Cell::Number(n),
            _ => Cell::Text(trimmed.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Table rendering: numbers in their shortest form, missing as empty.
    pub fn display(&self) -> String {
        match self {
            Cell::Number(n) => n.to_string(),
            Cell::Text(s) => s.clone(),
            Cell::Missing => String::new(),
        }
    }
}

/// An ordered dataset of parsed rows sharing one header.
///
/// Cells are stored positionally against the shared header, so every row has
/// the header's exact key set by construction. Row order is input order and
/// defines the time series.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSet {
    header: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl RowSet {
    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<&Cell> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx)
    }
}

/// Parses CSV text with a header line into a [`RowSet`].
///
/// Cell coercion: finite decimal number → [`Cell::Number`], empty →
/// [`Cell::Missing`], anything else → [`Cell::Text`]. Rows whose every cell is
/// missing are dropped; short rows are padded with missing cells and long rows
/// truncated to the header width. No other row is rejected.
///
/// # Errors
///
/// Returns [`ReportError::EmptyDataset`] when no data rows remain, so callers
/// can show a "no data" state instead of deriving views from nothing.
pub fn parse_csv(text: &str) -> Result<RowSet, ReportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let header: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut cells: Vec<Cell> = record
            .iter()
            .take(header.len())
            .map(Cell::from_field)
            .collect();
        cells.resize(header.len(), Cell::Missing);

        if cells.iter().all(Cell::is_missing) {
            continue;
        }
        rows.push(cells);
    }

    if rows.is_empty() {
        return Err(ReportError::EmptyDataset);
    }

    Ok(RowSet { header, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_coercion() {
        assert_eq!(Cell::from_field("12.5"), Cell::Number(12.5));
        assert_eq!(Cell::from_field(" 42 "), Cell::Number(42.0));
        assert_eq!(Cell::from_field("1e3"), Cell::Number(1000.0));
        assert_eq!(Cell::from_field(""), Cell::Missing);
        assert_eq!(Cell::from_field("   "), Cell::Missing);
        assert_eq!(Cell::from_field("abc"), Cell::Text("abc".to_string()));
        // non-finite numeric spellings are text, not data
        assert_eq!(Cell::from_field("NaN"), Cell::Text("NaN".to_string()));
        assert_eq!(Cell::from_field("inf"), Cell::Text("inf".to_string()));
    }

    #[test]
    fn test_parse_row_count_matches_data_lines() {
        let text = "date,AQI\n2024-01-01,42\n2024-01-02,55\n2024-01-03,61\n";
        let rows = parse_csv(text).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows.header(), ["date", "AQI"]);
    }

    #[test]
    fn test_parse_all_rows_share_header_width() {
        // short row padded, long row truncated
        let text = "a,b,c\n1,2,3\n4\n5,6,7,8\n";
        let rows = parse_csv(text).unwrap();
        assert_eq!(rows.len(), 3);
        for row in rows.rows() {
            assert_eq!(row.len(), 3);
        }
        assert_eq!(rows.cell(1, "b"), Some(&Cell::Missing));
        assert_eq!(rows.cell(2, "c"), Some(&Cell::Number(7.0)));
    }

    #[test]
    fn test_parse_drops_fully_empty_rows() {
        let text = "a,b\n1,2\n,\n3,4\n";
        let rows = parse_csv(text).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_parse_header_only_is_empty_dataset() {
        let err = parse_csv("a,b,c\n").unwrap_err();
        assert!(matches!(err, ReportError::EmptyDataset));
    }

    #[test]
    fn test_parse_empty_input_is_empty_dataset() {
        let err = parse_csv("").unwrap_err();
        assert!(matches!(err, ReportError::EmptyDataset));
    }

    #[test]
    fn test_missing_cells_stay_missing_not_zero() {
        let text = "AQI\n\n42\n";
        // the blank line between header and 42 is dropped entirely by the
        // csv reader, so only one data row survives
        let rows = parse_csv(text).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows.cell(0, "AQI"), Some(&Cell::Number(42.0)));
    }

    #[test]
    fn test_parse_is_idempotent() {
        let text = "date,PM2_5,AQI\n2024-01-01,12.5,42\n2024-01-02,,55\n";
        let first = parse_csv(text).unwrap();
        let second = parse_csv(text).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_cell_lookup_by_name() {
        let text = "date,AQI\n2024-01-01,42\n";
        let rows = parse_csv(text).unwrap();
        assert_eq!(
            rows.cell(0, "date"),
            Some(&Cell::Text("2024-01-01".to_string()))
        );
        assert_eq!(rows.cell(0, "AQI"), Some(&Cell::Number(42.0)));
        assert_eq!(rows.cell(0, "nope"), None);
    }
}
