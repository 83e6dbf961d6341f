//! Verify command - check whether given columns form a key.

use std::path::PathBuf;

use colored::Colorize;
use keydecomp::{KeyCheck, KeyDecomposer, Normalization};

use crate::cli::LoadArgs;

pub fn run(
    file: PathBuf,
    columns: Vec<String>,
    json: bool,
    load: LoadArgs,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let decomposer = KeyDecomposer::with_config(load.to_config(Normalization::default())?);
    let (table, _) = decomposer.load(&file)?;
    let check = KeyCheck::run(&table, &clean_columns(columns))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&check)?);
    } else {
        println!(
            "{} {} distinct of {} ({})",
            "Columns".cyan().bold(),
            check.projected_rows.to_string().white().bold(),
            check.distinct_rows,
            check.columns.join(", ")
        );

        if verbose {
            println!(
                "{} rows, {} distinct over all {} columns",
                table.row_count(),
                check.distinct_rows,
                table.column_count()
            );
        }

        if check.is_minimal() {
            println!("{}", "Minimal key".green().bold());
        } else if check.unique {
            println!(
                "{} redundant: {}",
                "Key, not minimal;".yellow().bold(),
                check.redundant.join(", ")
            );
        }
    }

    if !check.unique {
        return Err(format!(
            "[{}] is not a key: {} distinct values for {} distinct rows",
            check.columns.join(", "),
            check.projected_rows,
            check.distinct_rows
        )
        .into());
    }

    Ok(())
}

/// Trim names given as `--columns "id, dept"` and drop empty entries.
fn clean_columns(columns: Vec<String>) -> Vec<String> {
    columns
        .into_iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect()
}
