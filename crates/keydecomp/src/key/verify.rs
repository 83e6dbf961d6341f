//! Post-checks for column sets.

use serde::{Deserialize, Serialize};

use super::dedup::deduplicate;
use super::validate_schema;
use crate::error::{KeyError, Result};
use crate::input::Table;

/// Outcome of checking a column set against a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyCheck {
    /// The columns that were checked.
    pub columns: Vec<String>,
    /// Distinct row count over all columns (N).
    pub distinct_rows: usize,
    /// Distinct row count over the checked columns (M).
    pub projected_rows: usize,
    /// Whether the columns identify every distinct row.
    pub unique: bool,
    /// Columns that can be dropped without losing uniqueness.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub redundant: Vec<String>,
}

impl KeyCheck {
    /// Check whether `columns` form a key of `table`.
    pub fn run<S: AsRef<str>>(table: &Table, columns: &[S]) -> Result<Self> {
        validate_schema(table)?;

        let positions = columns
            .iter()
            .map(|name| {
                let name = name.as_ref();
                table
                    .column_index(name)
                    .ok_or_else(|| KeyError::UnknownColumn(name.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        let distinct = deduplicate(table);
        let distinct_rows = distinct.distinct_rows();
        let projected_rows = distinct.projected_distinct_count(&positions);
        let unique = projected_rows == distinct_rows;

        let redundant = if unique {
            (0..positions.len())
                .filter(|&skip| {
                    let rest: Vec<usize> = positions
                        .iter()
                        .enumerate()
                        .filter(|&(i, _)| i != skip)
                        .map(|(_, &p)| p)
                        .collect();
                    distinct.projected_distinct_count(&rest) == distinct_rows
                })
                .map(|i| table.headers[positions[i]].clone())
                .collect()
        } else {
            Vec::new()
        };

        Ok(Self {
            columns: positions.iter().map(|&p| table.headers[p].clone()).collect(),
            distinct_rows,
            projected_rows,
            unique,
            redundant,
        })
    }

    /// Unique with no redundant column.
    pub fn is_minimal(&self) -> bool {
        self.unique && self.redundant.is_empty()
    }
}

/// Columns that are a key on their own, in table order.
pub fn unique_columns(table: &Table) -> Result<Vec<String>> {
    validate_schema(table)?;

    let distinct = deduplicate(table);
    let target = distinct.distinct_rows();

    Ok(table
        .headers
        .iter()
        .enumerate()
        .filter(|&(i, _)| distinct.projected_distinct_count(&[i]) == target)
        .map(|(_, name)| name.clone())
        .collect())
}
