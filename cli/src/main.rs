#![deny(missing_docs)]

//! # Mpatch CLI
//!
//! Command Line Interface for format-preserving manifest patching.
//!
//! Supported Commands:
//! - `apply`: Locate -> load -> patch -> persist cycle over the manifest.
//! - `locate`: Prints the manifest path the discovery step resolves.

use clap::{Parser, Subcommand};
use std::process;

use crate::error::CliResult;
use crate::locator::CargoLocator;

mod apply;
mod error;
mod locate;
mod locator;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Format-preserving manifest patcher")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Applies declarative section replacements to the manifest.
    Apply(apply::ApplyArgs),
    /// Prints the manifest path the discovery step resolves.
    Locate,
}

fn run(cli: &Cli) -> CliResult<()> {
    // Injecting the cargo-backed discovery mechanism
    let locator = CargoLocator::default();

    match &cli.command {
        Commands::Apply(args) => apply::execute(args, &locator),
        Commands::Locate => locate::execute(&locator),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
