//! Greedy reduction of the working column set with backtracking.
//!
//! Starting from every column, the lowest-weight candidate is dropped while
//! the projection still has as many distinct rows as the full table. When a
//! drop breaks uniqueness the column is put back as [`Weight::Locked`] and
//! the search carries on with the next candidate. Each step either shrinks
//! the candidate count or locks one column, so the loop runs at most twice
//! per column.

use serde::{Deserialize, Serialize};

use super::dedup::DistinctTable;
use super::weight::{Weight, WeightMap, WeightedColumn};

/// One transition of the working set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ReductionStep {
    /// A column was dropped while the remaining set was still unique.
    Removed { column: String, remaining: usize },
    /// Dropping the column broke uniqueness, so it was put back and locked.
    Restored { column: String, distinct_rows: usize },
}

/// Why the reduction stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Only one column was left.
    SingleColumn,
    /// Every remaining column is locked.
    AllLocked,
    /// The working set was not unique and there was nothing to restore.
    Unverified,
}

/// Terminal state of a reduction.
#[derive(Debug, Clone)]
pub struct Reduction {
    /// Surviving columns, in weight order.
    pub working_set: WeightMap,
    /// Every removal and restore, in order.
    pub steps: Vec<ReductionStep>,
    /// Distinct row count of the full table (N).
    pub distinct_rows: usize,
    pub stop: StopReason,
}

/// Reduce `weights` to a locally minimal unique column set.
///
/// # Panics
///
/// Panics if `weights` is empty. Callers reject empty schemas first.
pub fn reduce(distinct: &DistinctTable<'_>, weights: WeightMap) -> Reduction {
    let target = distinct.distinct_rows();
    let max_steps = 2 * weights.len();
    let mut working_set = weights;
    let mut last_removed: Option<WeightedColumn> = None;
    let mut steps = Vec::new();

    let stop = loop {
        assert!(!working_set.is_empty(), "working set emptied during reduction");
        debug_assert!(steps.len() <= max_steps);

        let matched = distinct.projected_distinct_count(&working_set.positions());

        if matched == target {
            if !working_set.has_candidates() {
                break StopReason::AllLocked;
            }
            if working_set.len() == 1 {
                break StopReason::SingleColumn;
            }
            let Some(removed) = working_set.remove_min_candidate() else {
                break StopReason::AllLocked;
            };

            log::debug!(
                "removed '{}' ({:?}), {} columns left",
                removed.name,
                removed.weight,
                working_set.len()
            );
            steps.push(ReductionStep::Removed {
                column: removed.name.clone(),
                remaining: working_set.len(),
            });
            last_removed = Some(removed);
        } else {
            match last_removed.take() {
                Some(column) => {
                    log::debug!(
                        "restored '{}' as locked ({} of {} distinct rows without it)",
                        column.name,
                        matched,
                        target
                    );
                    steps.push(ReductionStep::Restored {
                        column: column.name.clone(),
                        distinct_rows: matched,
                    });
                    working_set.lock(column);
                }
                None => {
                    log::warn!(
                        "column set {:?} gives {} distinct rows, expected {}",
                        working_set.names(),
                        matched,
                        target
                    );
                    break StopReason::Unverified;
                }
            }
        }
    };

    Reduction {
        working_set,
        steps,
        distinct_rows: target,
        stop,
    }
}

impl Reduction {
    /// Number of columns locked by backtracking.
    pub fn locked_count(&self) -> usize {
        self.working_set
            .iter()
            .filter(|c| c.weight == Weight::Locked)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Table;
    use crate::key::dedup::deduplicate;
    use crate::key::weight::{Normalization, generate_weights};

    fn run(table: &Table) -> Reduction {
        let distinct = deduplicate(table);
        let weights = generate_weights(&distinct, Normalization::MaxCardinality);
        reduce(&distinct, weights)
    }

    #[test]
    fn test_unique_column_found_without_backtracking() {
        let table = Table::from_text(
            ["id", "dept", "name"],
            [
                ["1", "A", "Bob"],
                ["2", "A", "Ann"],
                ["3", "B", "Bob"],
                ["4", "B", "Ann"],
            ],
        );
        let reduction = run(&table);

        assert_eq!(reduction.working_set.names(), vec!["id"]);
        assert_eq!(reduction.stop, StopReason::SingleColumn);
        assert_eq!(
            reduction.steps,
            vec![
                ReductionStep::Removed {
                    column: "dept".into(),
                    remaining: 2
                },
                ReductionStep::Removed {
                    column: "name".into(),
                    remaining: 1
                },
            ]
        );
    }

    #[test]
    fn test_backtracks_when_both_columns_required() {
        let table = Table::from_text(
            ["dept", "name"],
            [["A", "Bob"], ["A", "Ann"], ["B", "Bob"], ["B", "Ann"]],
        );
        let reduction = run(&table);

        assert_eq!(reduction.working_set.names(), vec!["dept", "name"]);
        assert_eq!(reduction.stop, StopReason::AllLocked);
        assert_eq!(reduction.locked_count(), 2);
        assert_eq!(
            reduction.steps,
            vec![
                ReductionStep::Removed {
                    column: "dept".into(),
                    remaining: 1
                },
                ReductionStep::Restored {
                    column: "dept".into(),
                    distinct_rows: 2
                },
                ReductionStep::Removed {
                    column: "name".into(),
                    remaining: 1
                },
                ReductionStep::Restored {
                    column: "name".into(),
                    distinct_rows: 2
                },
            ]
        );
    }

    #[test]
    fn test_single_column_table() {
        let table = Table::from_text(["only"], [["a"], ["a"], ["b"]]);
        let reduction = run(&table);

        assert_eq!(reduction.working_set.names(), vec!["only"]);
        assert_eq!(reduction.distinct_rows, 2);
        assert!(reduction.steps.is_empty());
    }

    #[test]
    fn test_locked_column_is_kept_while_others_drop() {
        // `code` has 3 values, `flag` and `batch` 2 each; only
        // (code, batch) is a key. Locked columns keep table order.
        let table = Table::from_text(
            ["flag", "code", "batch"],
            [
                ["y", "a", "1"],
                ["y", "a", "2"],
                ["n", "b", "1"],
                ["n", "c", "1"],
            ],
        );
        let reduction = run(&table);

        assert_eq!(reduction.working_set.names(), vec!["code", "batch"]);
        assert_eq!(reduction.stop, StopReason::AllLocked);
    }

    #[test]
    fn test_empty_table_reduces_to_one_column() {
        let table = Table::new(vec!["a".into(), "b".into()], Vec::new());
        let reduction = run(&table);

        assert_eq!(reduction.distinct_rows, 0);
        assert_eq!(reduction.working_set.names(), vec!["b"]);
    }

    #[test]
    #[should_panic(expected = "working set emptied")]
    fn test_empty_working_set_panics() {
        let table = Table::new(Vec::new(), Vec::new());
        let distinct = deduplicate(&table);
        reduce(&distinct, WeightMap::default());
    }
}
