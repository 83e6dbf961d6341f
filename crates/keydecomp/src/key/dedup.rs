//! Row deduplication and projected distinct counts.

use std::collections::HashSet;

use indexmap::IndexSet;

use crate::input::Table;

/// A borrowed view of a table with exact duplicate rows collapsed.
///
/// The first occurrence of each row is kept. Nulls compare equal to each
/// other, so two rows that are both null in the same column are duplicates.
#[derive(Debug, Clone)]
pub struct DistinctTable<'a> {
    headers: &'a [String],
    rows: Vec<&'a [Option<String>]>,
}

impl<'a> DistinctTable<'a> {
    /// Column headers of the underlying table.
    pub fn headers(&self) -> &'a [String] {
        self.headers
    }

    /// The distinct rows, in first-occurrence order.
    pub fn rows(&self) -> &[&'a [Option<String>]] {
        &self.rows
    }

    /// Row count over the full column set (N).
    pub fn distinct_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of distinct non-null values in one column.
    pub fn cardinality(&self, column: usize) -> usize {
        self.rows
            .iter()
            .filter_map(|row| row.get(column).and_then(|v| v.as_deref()))
            .collect::<HashSet<_>>()
            .len()
    }

    /// Distinct row count after projecting onto `columns` (M).
    pub fn projected_distinct_count(&self, columns: &[usize]) -> usize {
        self.rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|&c| row.get(c).and_then(|v| v.as_deref()))
                    .collect::<Vec<_>>()
            })
            .collect::<HashSet<_>>()
            .len()
    }
}

/// Collapse a table to its distinct rows across all columns.
///
/// Cells beyond the header width are ignored, since no column can select them.
pub fn deduplicate(table: &Table) -> DistinctTable<'_> {
    let width = table.column_count();
    let rows: IndexSet<&[Option<String>]> = table
        .rows
        .iter()
        .map(|row| &row[..row.len().min(width)])
        .collect();

    DistinctTable {
        headers: &table.headers,
        rows: rows.into_iter().collect(),
    }
}
