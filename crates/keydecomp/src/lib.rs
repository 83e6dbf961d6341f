//! keydecomp: minimal candidate key discovery for tabular datasets.
//!
//! Given a table with no declared primary key, keydecomp finds a small set of
//! columns whose combined values identify every row. Columns are weighted by
//! how many distinct values they hold, then the lowest-weight columns are
//! dropped one at a time for as long as the remaining columns stay unique.
//!
//! # Core Principles
//!
//! - **Read-only**: The input table is never modified
//! - **Deterministic**: Weight ties are broken by column position
//! - **Locally minimal**: No column of the result can be dropped, though a
//!   smaller key may exist elsewhere in the table
//!
//! # Example
//!
//! ```
//! use keydecomp::{Table, find_minimal_key};
//!
//! let table = Table::from_text(
//!     ["id", "dept", "name"],
//!     [["1", "A", "Bob"], ["2", "A", "Ann"], ["3", "B", "Bob"]],
//! );
//!
//! assert_eq!(find_minimal_key(&table).unwrap(), vec!["id"]);
//! ```

pub mod error;
pub mod input;
pub mod key;

mod decomposer;

pub use crate::decomposer::{DecomposerConfig, KeyDecomposer, KeyReport};
pub use error::{KeyError, Result};
pub use input::{Parser, ParserConfig, SourceMetadata, Table};
pub use key::{
    KeyCheck, Normalization, ReductionStep, StopReason, Weight, find_minimal_key,
    find_minimal_key_with, unique_columns,
};
