//! Turning a finished reduction into a column list.

use super::reducer::Reduction;

/// Column names of the terminal working set, in the order it holds them.
///
/// Locked columns come first in table order, followed by any remaining
/// candidate. Sort the result if a canonical order is needed.
pub fn extract(reduction: &Reduction) -> Vec<String> {
    reduction.working_set.names()
}
