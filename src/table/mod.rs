//! In-memory result table.
//!
//! Rows have no fixed schema; the table header is the union of row keys in
//! first-seen order, computed when the table is exported.

mod row;

use std::collections::HashSet;

pub use row::{Row, Value, TIMESTAMP_FORMAT};

/// Ordered sequence of rows, one per (host, record type) query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    rows: Vec<Row>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Union of all row keys, in the order each key is first seen.
    pub fn header(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut header = Vec::new();
        for key in self.rows.iter().flat_map(Row::keys) {
            if seen.insert(key) {
                header.push(key);
            }
        }
        header
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}

impl FromIterator<Row> for ResultTable {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
