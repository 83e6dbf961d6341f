//! Main decomposer struct and public API.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{KeyError, Result};
use crate::input::{Parser, ParserConfig, SourceMetadata, Table};
use crate::key::{
    self, Normalization, ReductionStep, StopReason, Weight, deduplicate, generate_weights, reduce,
};

/// Configuration for key discovery.
#[derive(Debug, Clone, Default)]
pub struct DecomposerConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// How column cardinalities are turned into weights.
    pub normalization: Normalization,
    /// Refuse tables wider than this (None = no limit).
    pub max_columns: Option<usize>,
}

/// Result of finding a key for one table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyReport {
    /// Metadata about the source file, when loaded from disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceMetadata>,
    /// Rows in the input table.
    pub total_rows: usize,
    /// Distinct rows over all columns.
    pub distinct_rows: usize,
    /// Initial column weights, highest first.
    pub weights: IndexMap<String, Weight>,
    /// Removals and restores made by the reducer.
    pub steps: Vec<ReductionStep>,
    /// Why the reducer stopped.
    pub stop: StopReason,
    /// The discovered key.
    pub key: Vec<String>,
    /// Whether the key was confirmed to give `distinct_rows` distinct rows.
    pub verified: bool,
}

/// Finds minimal candidate keys for tables and files.
pub struct KeyDecomposer {
    config: DecomposerConfig,
    parser: Parser,
}

impl KeyDecomposer {
    /// Create a decomposer with default configuration.
    pub fn new() -> Self {
        Self::with_config(DecomposerConfig::default())
    }

    /// Create a decomposer with custom configuration.
    pub fn with_config(config: DecomposerConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        Self { config, parser }
    }

    /// The active configuration.
    pub fn config(&self) -> &DecomposerConfig {
        &self.config
    }

    /// Load a delimited file and find its key.
    pub fn decompose_file(&self, path: impl AsRef<Path>) -> Result<KeyReport> {
        let (table, source) = self.parser.parse_file(path)?;
        let mut report = self.decompose_table(&table)?;
        report.source = Some(source);
        Ok(report)
    }

    /// Find the key of an in-memory table.
    pub fn decompose_table(&self, table: &Table) -> Result<KeyReport> {
        key::validate_schema(table)?;
        self.check_width(table)?;

        let distinct = deduplicate(table);
        let weights = generate_weights(&distinct, self.config.normalization);
        let initial = weights.to_index_map();
        let reduction = reduce(&distinct, weights);

        let verified = distinct.projected_distinct_count(&reduction.working_set.positions())
            == reduction.distinct_rows;
        let key = key::result::extract(&reduction);

        log::info!(
            "key {:?} ({} of {} columns, {} distinct rows)",
            key,
            key.len(),
            table.column_count(),
            reduction.distinct_rows
        );

        Ok(KeyReport {
            source: None,
            total_rows: table.row_count(),
            distinct_rows: reduction.distinct_rows,
            weights: initial,
            steps: reduction.steps,
            stop: reduction.stop,
            key,
            verified,
        })
    }

    /// Read and parse a file without running the reducer.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<(Table, SourceMetadata)> {
        let (table, source) = self.parser.parse_file(path)?;
        self.check_width(&table)?;
        Ok((table, source))
    }

    fn check_width(&self, table: &Table) -> Result<()> {
        match self.config.max_columns {
            Some(limit) if table.column_count() > limit => Err(KeyError::TooManyColumns {
                count: table.column_count(),
                limit,
            }),
            _ => Ok(()),
        }
    }
}

impl Default for KeyDecomposer {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyReport {
    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
