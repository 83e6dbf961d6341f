//! Column weighting by normalized cardinality.
//!
//! High-cardinality columns are more likely to take part in a key, so they
//! get higher weights and survive longer during reduction. Null values are
//! never counted towards a column's cardinality.

use std::cmp::Ordering;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::dedup::DistinctTable;

/// How raw cardinalities are scaled into weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// Divide by the largest column cardinality.
    #[default]
    MaxCardinality,
    /// Divide by the distinct row count of the table.
    RowCount,
}

impl FromStr for Normalization {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "max" | "max_cardinality" => Ok(Self::MaxCardinality),
            "rows" | "row_count" => Ok(Self::RowCount),
            other => Err(format!("unknown normalization '{other}'")),
        }
    }
}

/// Removal priority of a column in the working set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "score", rename_all = "snake_case")]
pub enum Weight {
    /// May still be removed; lower scores go first.
    Candidate(f64),
    /// Required for uniqueness; never removed again.
    Locked,
}

impl Weight {
    /// The distinctness score, if the column is still a candidate.
    pub fn score(&self) -> Option<f64> {
        match self {
            Weight::Candidate(score) => Some(*score),
            Weight::Locked => None,
        }
    }

    /// Whether the column has been locked by a backtrack.
    pub fn is_locked(&self) -> bool {
        matches!(self, Weight::Locked)
    }
}

/// A column together with its weight and original position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedColumn {
    pub name: String,
    /// Zero-based position in the input table.
    pub position: usize,
    pub weight: Weight,
}

/// Columns ordered by weight: locked first, then score descending, ties by
/// original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightMap {
    columns: Vec<WeightedColumn>,
}

impl WeightMap {
    /// Build a map from columns in any order.
    pub fn new(mut columns: Vec<WeightedColumn>) -> Self {
        columns.sort_by(compare_columns);
        Self { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WeightedColumn> {
        self.columns.iter()
    }

    /// Table positions of the columns, in weight order.
    pub fn positions(&self) -> Vec<usize> {
        self.columns.iter().map(|c| c.position).collect()
    }

    /// Column names, in weight order.
    pub fn names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Whether any column can still be removed.
    pub fn has_candidates(&self) -> bool {
        self.columns.iter().any(|c| !c.weight.is_locked())
    }

    /// The candidate with the lowest score, earliest position on ties.
    pub fn min_candidate(&self) -> Option<&WeightedColumn> {
        self.columns
            .iter()
            .filter_map(|c| c.weight.score().map(|s| (s, c)))
            .min_by(|(a, ca), (b, cb)| a.total_cmp(b).then(ca.position.cmp(&cb.position)))
            .map(|(_, c)| c)
    }

    /// Remove and return the lowest-weight candidate.
    pub fn remove_min_candidate(&mut self) -> Option<WeightedColumn> {
        let position = self.min_candidate()?.position;
        let index = self.columns.iter().position(|c| c.position == position)?;
        Some(self.columns.remove(index))
    }

    /// Put a column back as [`Weight::Locked`].
    pub fn lock(&mut self, mut column: WeightedColumn) {
        column.weight = Weight::Locked;
        self.columns.push(column);
        self.columns.sort_by(compare_columns);
    }

    /// Name to weight, in weight order.
    pub fn to_index_map(&self) -> IndexMap<String, Weight> {
        self.columns
            .iter()
            .map(|c| (c.name.clone(), c.weight))
            .collect()
    }
}

fn compare_columns(a: &WeightedColumn, b: &WeightedColumn) -> Ordering {
    match (a.weight, b.weight) {
        (Weight::Locked, Weight::Locked) => a.position.cmp(&b.position),
        (Weight::Locked, Weight::Candidate(_)) => Ordering::Less,
        (Weight::Candidate(_), Weight::Locked) => Ordering::Greater,
        (Weight::Candidate(x), Weight::Candidate(y)) => {
            y.total_cmp(&x).then(a.position.cmp(&b.position))
        }
    }
}

/// Score every column of a deduplicated table.
///
/// A column with no non-null values scores `0.0`, as does every column when
/// the divisor is zero.
pub fn generate_weights(distinct: &DistinctTable<'_>, normalization: Normalization) -> WeightMap {
    let cardinalities: Vec<usize> = (0..distinct.headers().len())
        .map(|c| distinct.cardinality(c))
        .collect();

    let divisor = match normalization {
        Normalization::MaxCardinality => cardinalities.iter().copied().max().unwrap_or(0),
        Normalization::RowCount => distinct.distinct_rows(),
    };

    let columns = distinct
        .headers()
        .iter()
        .zip(cardinalities)
        .enumerate()
        .map(|(position, (name, count))| {
            let score = if divisor == 0 {
                0.0
            } else {
                count as f64 / divisor as f64
            };
            WeightedColumn {
                name: name.clone(),
                position,
                weight: Weight::Candidate(score),
            }
        })
        .collect();

    WeightMap::new(columns)
}
