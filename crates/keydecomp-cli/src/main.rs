//! keydecomp CLI - minimal candidate key discovery.

mod cli;
mod commands;
mod logger;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let result = match cli.command {
        Commands::Find {
            file,
            json,
            output,
            normalize,
            load,
        } => commands::find::run(file, json, output, normalize, load, cli.verbose),

        Commands::Weights {
            file,
            normalize,
            load,
        } => commands::weights::run(file, normalize, load, cli.verbose),

        Commands::Verify {
            file,
            columns,
            json,
            load,
        } => commands::verify::run(file, columns, json, load, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
