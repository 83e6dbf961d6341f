//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use keydecomp::{DecomposerConfig, Normalization, ParserConfig};
use keydecomp::input::parse_delimiter;

/// keydecomp: find the smallest set of columns that identifies every row
#[derive(Parser)]
#[command(name = "keydecomp")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find a minimal candidate key for a data file
    Find {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,

        /// Write the JSON report to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// How column cardinalities are normalized into weights
        #[arg(long, default_value = "max")]
        normalize: NormalizeChoice,

        #[command(flatten)]
        load: LoadArgs,
    },

    /// Show the column weights used to order removals
    Weights {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// How column cardinalities are normalized into weights
        #[arg(long, default_value = "max")]
        normalize: NormalizeChoice,

        #[command(flatten)]
        load: LoadArgs,
    },

    /// Check whether a set of columns is a key
    Verify {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Comma-separated column names to check
        #[arg(short, long, value_delimiter = ',', required = true)]
        columns: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        load: LoadArgs,
    },
}

/// Options controlling how the input file is read.
#[derive(Args, Clone, Debug)]
pub struct LoadArgs {
    /// Field delimiter (",", "tab", ";", "|"); auto-detected when omitted
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// Treat the first row as data and name columns column_1, column_2, ...
    #[arg(long)]
    pub no_header: bool,

    /// Read at most this many data rows
    #[arg(long)]
    pub max_rows: Option<usize>,

    /// Refuse files with more columns than this
    #[arg(long)]
    pub max_columns: Option<usize>,

    /// Keep null tokens such as NA or null as ordinary values
    #[arg(long)]
    pub keep_null_tokens: bool,
}

impl LoadArgs {
    /// Build the library configuration from the command-line options.
    pub fn to_config(&self, normalization: Normalization) -> keydecomp::Result<DecomposerConfig> {
        let delimiter = self.delimiter.as_deref().map(parse_delimiter).transpose()?;

        Ok(DecomposerConfig {
            parser: ParserConfig {
                delimiter,
                has_header: !self.no_header,
                max_rows: self.max_rows,
                detect_nulls: !self.keep_null_tokens,
                ..ParserConfig::default()
            },
            normalization,
            max_columns: self.max_columns,
        })
    }
}

/// Weight normalization choice
#[derive(Clone, Copy, Debug, Default)]
pub enum NormalizeChoice {
    /// Divide by the largest column cardinality
    #[default]
    Max,
    /// Divide by the distinct row count
    Rows,
}

impl std::str::FromStr for NormalizeChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "max" | "max-cardinality" => Ok(NormalizeChoice::Max),
            "rows" | "row-count" => Ok(NormalizeChoice::Rows),
            _ => Err(format!("Unknown normalization: {}. Use: max or rows.", s)),
        }
    }
}

impl std::fmt::Display for NormalizeChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NormalizeChoice::Max => write!(f, "max"),
            NormalizeChoice::Rows => write!(f, "rows"),
        }
    }
}

impl From<NormalizeChoice> for Normalization {
    fn from(choice: NormalizeChoice) -> Self {
        match choice {
            NormalizeChoice::Max => Normalization::MaxCardinality,
            NormalizeChoice::Rows => Normalization::RowCount,
        }
    }
}
