//! Weights command - show how columns are ranked for removal.

use std::path::PathBuf;

use colored::Colorize;
use keydecomp::key::{deduplicate, generate_weights};
use keydecomp::KeyDecomposer;

use crate::cli::{LoadArgs, NormalizeChoice};

pub fn run(
    file: PathBuf,
    normalize: NormalizeChoice,
    load: LoadArgs,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let decomposer = KeyDecomposer::with_config(load.to_config(normalize.into())?);
    let (table, source) = decomposer.load(&file)?;
    let distinct = deduplicate(&table);
    let weights = generate_weights(&distinct, decomposer.config().normalization);

    println!(
        "{} {} ({} normalization)",
        "Weights for".cyan().bold(),
        source.file.white(),
        normalize
    );
    if verbose {
        println!("{} distinct of {} rows", distinct.distinct_rows(), table.row_count());
    }
    println!();

    for column in weights.iter() {
        let score = column.weight.score().unwrap_or(1.0);
        println!(
            "  {:30} {:.4}  ({} distinct)",
            column.name,
            score,
            distinct.cardinality(column.position)
        );
    }

    Ok(())
}
