use serde::Serialize;
use std::fmt;
use talkdata_types::Row;

use super::cell::display_value;

/// Rows beyond this many are never rendered, whatever the backend sent.
pub const MAX_DISPLAY_ROWS: usize = 50;

/// Renderable result table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    /// Column order, taken from the keys of the first row.
    pub columns: Vec<String>,
    /// At most [`MAX_DISPLAY_ROWS`] rows, each cell already stringified.
    pub rows: Vec<Vec<String>>,
    /// Authoritative total reported by the backend.
    pub row_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncation: Option<TruncationNote>,
    /// Displayed rows whose keys differ from the first row's.
    #[serde(skip_serializing_if = "is_zero")]
    pub ragged_rows: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TruncationNote {
    pub shown: usize,
    pub total: u64,
}

impl TableView {
    pub fn heading(&self) -> String {
        format!("Results ({} rows)", self.row_count)
    }
}

impl fmt::Display for TruncationNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing first {} of {} rows", self.shown, self.total)
    }
}

/// Project result rows into a bounded, stringified table.
///
/// The first row defines the schema. Later rows missing a column get an empty
/// cell and keys outside the schema are dropped.
pub fn to_table_view(results: &[Row], row_count: u64) -> Option<TableView> {
    let first = results.first()?;
    let columns: Vec<String> = first.keys().cloned().collect();

    let mut ragged_rows = 0;
    let rows: Vec<Vec<String>> = results
        .iter()
        .take(MAX_DISPLAY_ROWS)
        .map(|row| {
            if !matches_schema(row, &columns) {
                ragged_rows += 1;
            }
            columns
                .iter()
                .map(|column| row.get(column).map(display_value).unwrap_or_default())
                .collect()
        })
        .collect();

    if ragged_rows > 0 {
        tracing::debug!(ragged_rows, "rows differ from first-row schema");
    }

    let truncation = (row_count > MAX_DISPLAY_ROWS as u64).then_some(TruncationNote {
        shown: MAX_DISPLAY_ROWS,
        total: row_count,
    });

    Some(TableView {
        columns,
        rows,
        row_count,
        truncation,
        ragged_rows,
    })
}

fn matches_schema(row: &Row, columns: &[String]) -> bool {
    row.len() == columns.len() && columns.iter().all(|column| row.contains_key(column))
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}
