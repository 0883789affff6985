//! CLI interface for levenshtein-anml
//!
//! Provides command-line utilities for generating and inspecting automata.

pub mod args;
pub mod commands;
pub mod paths;

pub use args::{Cli, Commands, OutputFormat};
pub use paths::{config_dir, PersistentConfig};
