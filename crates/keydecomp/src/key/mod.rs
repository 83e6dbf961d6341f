//! Minimal candidate key discovery.
//!
//! The pipeline runs in four stages:
//!
//! 1. [`dedup`] collapses the table to its distinct rows and fixes N.
//! 2. [`weight`] scores each column by normalized cardinality.
//! 3. [`reducer`] drops low-weight columns while N distinct rows remain,
//!    locking any column whose removal breaks uniqueness.
//! 4. [`result`] lists the surviving columns.

use std::collections::HashSet;

pub mod dedup;
pub mod reducer;
pub mod result;
pub mod verify;
pub mod weight;

pub use dedup::{DistinctTable, deduplicate};
pub use reducer::{Reduction, ReductionStep, StopReason, reduce};
pub use verify::{KeyCheck, unique_columns};
pub use weight::{Normalization, Weight, WeightMap, WeightedColumn, generate_weights};

use crate::error::{KeyError, Result};
use crate::input::Table;

/// Find a locally minimal set of columns that uniquely identifies every row.
///
/// The key is minimal for this run's removal order, not necessarily the
/// smallest key of the table. Identical input always gives the same result.
///
/// # Errors
///
/// [`KeyError::EmptySchema`] if the table has no columns and
/// [`KeyError::DuplicateColumn`] if two columns share a name.
pub fn find_minimal_key(table: &Table) -> Result<Vec<String>> {
    find_minimal_key_with(table, Normalization::default())
}

/// [`find_minimal_key`] with an explicit weight normalization.
pub fn find_minimal_key_with(table: &Table, normalization: Normalization) -> Result<Vec<String>> {
    validate_schema(table)?;

    let distinct = deduplicate(table);
    let weights = generate_weights(&distinct, normalization);
    let reduction = reduce(&distinct, weights);

    Ok(result::extract(&reduction))
}

/// Reject tables the reducer cannot work on.
pub(crate) fn validate_schema(table: &Table) -> Result<()> {
    if table.headers.is_empty() {
        return Err(KeyError::EmptySchema);
    }

    let mut seen = HashSet::new();
    for name in &table.headers {
        if !seen.insert(name.as_str()) {
            return Err(KeyError::DuplicateColumn(name.clone()));
        }
    }

    Ok(())
}
