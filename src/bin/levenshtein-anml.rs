//! levenshtein-anml - Levenshtein automata for bounded edit-distance search
//!
//! Generates ANML (or JSON) descriptions of the automaton for a search string.

use clap::Parser;
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use levenshtein_anml::cli::commands;
use levenshtein_anml::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise warnings only unless --verbose
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = commands::execute(cli) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}
