//! Validated table content.
//!
//! A [`TableSpec`] is the only way to get a table onto a slide, and it can
//! only be built when every row has one cell per header and the optional
//! column widths have one entry per header.

use crate::common::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One table cell as given in the deck input: either text or a JSON number.
///
/// Numbers render in their natural form, `1` or `2.5`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self {
        Cell::Number(n.into())
    }
}

/// Headers, rows and optional column widths of one table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSpec {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
    /// Column widths in EMU
    column_widths: Option<Vec<i64>>,
}

impl TableSpec {
    /// Build a table, rejecting rows or widths that do not match the headers.
    pub fn new(
        headers: Vec<String>,
        rows: Vec<Vec<Cell>>,
        column_widths: Option<Vec<i64>>,
    ) -> Result<Self, InputError> {
        let expected = headers.len();

        if let Some(widths) = &column_widths
            && widths.len() != expected
        {
            return Err(InputError::ColumnWidths {
                expected,
                got: widths.len(),
            });
        }

        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != expected)
        {
            return Err(InputError::RowLength {
                row,
                expected,
                got: cells.len(),
            });
        }

        Ok(Self {
            headers,
            rows,
            column_widths,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows, excluding the header row.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Column widths, defaulting to an even split of `total_width`.
    pub fn column_widths(&self, total_width: i64) -> Vec<i64> {
        match &self.column_widths {
            Some(widths) => widths.clone(),
            None => {
                let n = self.headers.len().max(1) as i64;
                vec![total_width / n; self.headers.len()]
            },
        }
    }
}
