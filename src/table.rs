// src/table.rs
//
// DialogueTable: named columns of equal length.
//
// The wiki page yields *columns* (every Nth cell of each row), while the CSV
// store and the GUI work in *rows*. This type owns the conversion and the one
// invariant both sides rely on: after construction every column has the same
// number of cells.

use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub cells: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DialogueTable {
    columns: Vec<Column>,
}

impl DialogueTable {
    /// Pair header names with column data, padding short columns with `""`.
    ///
    /// Fewer data columns than names is a shape mismatch. Surplus data
    /// columns have no name to live under and are dropped.
    pub fn from_columns(names: Vec<String>, mut data: Vec<Vec<String>>) -> Result<Self> {
        if data.len() < names.len() {
            return Err(Error::ShapeMismatch { expected: names.len(), found: data.len() });
        }
        if data.len() > names.len() {
            log::warn!(
                "Table: {} unnamed data column(s) dropped",
                data.len() - names.len()
            );
            data.truncate(names.len());
        }

        pad_columns(&mut data);

        let columns = names
            .into_iter()
            .zip(data)
            .map(|(name, cells)| Column { name, cells })
            .collect();
        Ok(Self { columns })
    }

    /// Build from a header row plus data rows (CSV order).
    /// Short rows are padded; a row wider than the header is a shape mismatch.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        let width = headers.len();
        let mut data: Vec<Vec<String>> = vec![Vec::with_capacity(rows.len()); width];

        for row in rows {
            if row.len() > width {
                return Err(Error::ShapeMismatch { expected: width, found: row.len() });
            }
            let n = row.len();
            for (ci, cell) in row.into_iter().enumerate() {
                data[ci].push(cell);
            }
            for col in data.iter_mut().skip(n) {
                col.push(s!());
            }
        }

        let columns = headers
            .into_iter()
            .zip(data)
            .map(|(name, cells)| Column { name, cells })
            .collect();
        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[Column] { &self.columns }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    pub fn ncols(&self) -> usize { self.columns.len() }

    pub fn nrows(&self) -> usize {
        self.columns.first().map(|c| c.cells.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool { self.nrows() == 0 }

    pub fn row(&self, ix: usize) -> Option<Vec<&str>> {
        if ix >= self.nrows() { return None; }
        Some(self.columns.iter().map(|c| c.cells[ix].as_str()).collect())
    }

    /// Transpose to CSV row order.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        (0..self.nrows())
            .map(|ix| self.columns.iter().map(|c| c.cells[ix].clone()).collect())
            .collect()
    }
}

/// Extend every column with empty strings up to the longest one.
pub fn pad_columns(columns: &mut [Vec<String>]) {
    let max_len = columns.iter().map(Vec::len).max().unwrap_or(0);
    for col in columns.iter_mut() {
        col.resize(max_len, s!());
    }
}
