//! CLI argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[cfg(feature = "rand")]
use crate::generate::SymbolSet;

/// Command-line arguments
#[derive(Parser)]
#[command(name = "levenshtein-anml")]
#[command(about = "Generate Levenshtein automata for a search string and edit distance")]
#[command(version)]
pub struct Cli {
    /// Custom configuration file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate the automaton for a search string and write it to a file
    Generate {
        /// Name of the automata network
        #[arg(short, long)]
        name: String,

        /// The search string
        #[arg(short = 's', long = "string")]
        pattern: String,

        /// Maximum edit distance accepted
        #[arg(short, long, alias = "edit_distance")]
        edit_distance: usize,

        /// Output file name
        #[arg(short, long = "output-filename", aliases = ["output_filename", "output"])]
        output: PathBuf,

        /// Description of the automata network
        #[arg(short, long)]
        description: Option<String>,

        /// Output format (defaults to the configured format, then anml)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Directory holding the block macro definitions
        #[arg(short, long)]
        macro_dir: Option<String>,
    },

    /// Print the block grid and connection counts
    Inspect {
        /// The search string
        #[arg(short = 's', long = "string")]
        pattern: String,

        /// Maximum edit distance accepted
        #[arg(short, long, alias = "edit_distance")]
        edit_distance: usize,
    },

    /// Print a random string
    #[cfg(feature = "rand")]
    RandomString {
        /// The length of the string
        #[arg(short, long)]
        length: usize,

        /// The symbol set used to generate the string
        #[arg(short, long, default_value = "printable")]
        symbol_set: SymbolSet,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show or update user settings
    Settings {
        /// Set default macro directory
        #[arg(long)]
        set_macro_dir: Option<String>,

        /// Set default output format
        #[arg(long)]
        set_format: Option<OutputFormat>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}

/// Output format of `generate`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// ANML automata network
    #[default]
    Anml,
    /// JSON graph listing
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Anml => write!(f, "anml"),
            Self::Json => write!(f, "json"),
        }
    }
}
