//! CLI command implementations

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::emit::{AnmlEmitter, BlockLookup, EmitError, Emitter, JsonEmitter, NetworkInfo};
use crate::topology::{BlockKind, Topology};

use super::args::{Cli, Commands, OutputFormat};
use super::paths::PersistentConfig;

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Generate {
            name,
            pattern,
            edit_distance,
            output,
            description,
            format,
            macro_dir,
        } => cmd_generate(
            config_path,
            &name,
            &pattern,
            edit_distance,
            &output,
            description,
            format,
            macro_dir,
        ),
        Commands::Inspect {
            pattern,
            edit_distance,
        } => cmd_inspect(&pattern, edit_distance),
        #[cfg(feature = "rand")]
        Commands::RandomString {
            length,
            symbol_set,
            seed,
        } => cmd_random_string(length, symbol_set, seed),
        Commands::Settings {
            set_macro_dir,
            set_format,
            reset,
        } => cmd_settings(config_path, set_macro_dir, set_format, reset),
    }
}

/// Load persisted settings, falling back to defaults if they cannot be read
fn load_config(config_path: Option<&Path>) -> PersistentConfig {
    match PersistentConfig::load_from(config_path) {
        Ok(config) => config,
        Err(err) => {
            warn!(error = %err, "settings_unreadable");
            PersistentConfig::default()
        }
    }
}

/// Render a network into memory
///
/// Nothing touches the file system until rendering has succeeded.
pub fn render_network(
    format: OutputFormat,
    info: &NetworkInfo,
    topology: &Topology,
    lookup: &BlockLookup,
) -> std::result::Result<Vec<u8>, EmitError> {
    let mut buffer = Vec::new();
    match format {
        OutputFormat::Anml => AnmlEmitter::new().emit(info, topology, lookup, &mut buffer)?,
        OutputFormat::Json => JsonEmitter::pretty().emit(info, topology, lookup, &mut buffer)?,
    }
    Ok(buffer)
}

/// Generate command
#[allow(clippy::too_many_arguments)]
fn cmd_generate(
    config_path: Option<&Path>,
    name: &str,
    pattern: &str,
    edit_distance: usize,
    output: &Path,
    description: Option<String>,
    format: Option<OutputFormat>,
    macro_dir: Option<String>,
) -> Result<()> {
    let topology = Topology::build(pattern, edit_distance).with_context(|| {
        format!(
            "Invalid arguments (name={:?}, string={:?}, edit_distance={})",
            name, pattern, edit_distance
        )
    })?;

    let settings = load_config(config_path).merge_with_cli(macro_dir, format);
    let lookup = BlockLookup::standard(settings.macro_dir());
    let info = NetworkInfo {
        name: name.to_string(),
        description,
    };
    debug!(format = %settings.format(), macro_dir = settings.macro_dir(), "generate");

    let rendered = render_network(settings.format(), &info, &topology, &lookup)
        .with_context(|| format!("Failed to render {} output", settings.format()))?;

    std::fs::write(output, &rendered)
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;

    println!(
        "{} {} network {} ({} blocks, {} connections) to {}",
        "Wrote".green().bold(),
        settings.format(),
        name.cyan(),
        topology.nodes().len(),
        topology.edge_count(),
        output.display().to_string().cyan()
    );

    Ok(())
}

/// Inspect command
fn cmd_inspect(pattern: &str, edit_distance: usize) -> Result<()> {
    let topology = Topology::build(pattern, edit_distance)
        .with_context(|| format!("Invalid arguments (string={:?}, edit_distance={})", pattern, edit_distance))?;
    let grid = topology.grid();

    println!("{}", "Levenshtein Automaton".bold());
    println!("  Pattern:       {:?}", pattern);
    println!("  Edit distance: {}", grid.edit_distance());
    println!("  Grid:          {} rows x {} columns", grid.height(), grid.width());
    println!();
    print!("{}", topology.grid_view());
    println!();

    println!("{}", "Blocks".bold());
    for kind in BlockKind::ALL {
        let count = topology.nodes().iter().filter(|n| n.kind == kind).count();
        if count > 0 {
            println!(
                "  {:<5} {:<24} {}",
                kind.abbreviation(),
                kind.to_string(),
                count.to_string().green()
            );
        }
    }
    println!();
    println!("  Total blocks:      {}", topology.nodes().len().to_string().green());
    println!("  Total connections: {}", topology.edge_count().to_string().green());

    Ok(())
}

/// Random string command
#[cfg(feature = "rand")]
fn cmd_random_string(
    length: usize,
    symbol_set: crate::generate::SymbolSet,
    seed: Option<u64>,
) -> Result<()> {
    use crate::generate::RandomStringGenerator;

    let mut generator = match seed {
        Some(seed) => RandomStringGenerator::new(seed),
        None => RandomStringGenerator::from_entropy(),
    };
    println!("{}", generator.generate(length, symbol_set));
    Ok(())
}

/// Settings command
fn cmd_settings(
    config_path: Option<&Path>,
    set_macro_dir: Option<String>,
    set_format: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = PersistentConfig::default();
        let path = config.save_to(config_path)?;
        println!("{}", "Configuration reset to defaults".green().bold());
        println!();
        print_config(&config, &path);
        return Ok(());
    }

    let mut config = load_config(config_path);
    let mut changed = false;

    if let Some(dir) = set_macro_dir {
        println!("  Set default macro directory: {}", dir.cyan());
        config.macro_dir = Some(dir);
        changed = true;
    }

    if let Some(format) = set_format {
        config.format = Some(format);
        println!("  Set default format: {}", format.to_string().green());
        changed = true;
    }

    let path: PathBuf = if changed {
        let path = config.save_to(config_path)?;
        println!();
        println!("{}", "Configuration saved".green().bold());
        path
    } else {
        super::paths::config_file_path_with_override(config_path)?
    };

    println!();
    print_config(&config, &path);
    Ok(())
}

fn print_config(config: &PersistentConfig, path: &Path) {
    println!("{}", "Current Settings".bold());
    println!("  Config file:     {}", path.display().to_string().cyan());
    println!("  Macro directory: {}", config.macro_dir().cyan());
    println!("  Output format:   {}", config.format().to_string().green());
}
