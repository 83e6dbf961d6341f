//! Find command - discover a minimal candidate key for a data file.

use std::path::PathBuf;

use colored::Colorize;
use keydecomp::{KeyDecomposer, ReductionStep, Weight};

use crate::cli::{LoadArgs, NormalizeChoice};

pub fn run(
    file: PathBuf,
    json: bool,
    output: Option<PathBuf>,
    normalize: NormalizeChoice,
    load: LoadArgs,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let decomposer = KeyDecomposer::with_config(load.to_config(normalize.into())?);
    let report = decomposer.decompose_file(&file)?;

    if json {
        println!("{}", report.to_json()?);
    } else {
        println!(
            "{} {}",
            "Searching".cyan().bold(),
            file.display().to_string().white()
        );
        println!(
            "{} rows, {} distinct, {} columns",
            report.total_rows.to_string().white().bold(),
            report.distinct_rows.to_string().white().bold(),
            report.weights.len().to_string().white().bold()
        );

        if verbose {
            println!();
            println!("{}", "Weights:".yellow().bold());
            for (name, weight) in &report.weights {
                if let Weight::Candidate(score) = weight {
                    println!("  {:30} {:.4}", name, score);
                }
            }

            println!();
            println!("{}", "Steps:".yellow().bold());
            for step in &report.steps {
                match step {
                    ReductionStep::Removed { column, remaining } => {
                        println!("  {} {} ({} left)", "-".red(), column, remaining)
                    }
                    ReductionStep::Restored {
                        column,
                        distinct_rows,
                    } => println!(
                        "  {} {} (only {} distinct rows without it)",
                        "+".green(),
                        column,
                        distinct_rows
                    ),
                }
            }
            println!("  stopped: {:?}", report.stop);
        }

        println!();
        println!(
            "{} {}",
            "Key:".green().bold(),
            report.key.join(", ").white().bold()
        );

        if !report.verified {
            println!(
                "{}",
                "Warning: the key could not be confirmed as unique".yellow()
            );
        }
    }

    if let Some(path) = output {
        std::fs::write(&path, report.to_json()?)?;
        if !json {
            println!(
                "{} {}",
                "Saved to".green().bold(),
                path.display().to_string().white()
            );
        }
    }

    Ok(())
}
