//! Configuration directory and persisted settings

use super::args::OutputFormat;
use crate::emit::BlockLookup;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Get the configuration directory for levenshtein-anml
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine configuration directory")?;
    Ok(base.join("levenshtein-anml"))
}

/// Get the default settings file path
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Get the settings file path with optional override
pub fn config_file_path_with_override(custom_path: Option<&Path>) -> Result<PathBuf> {
    match custom_path {
        Some(path) => {
            validate_config_path(path)?;
            Ok(path.to_path_buf())
        }
        None => default_config_path(),
    }
}

/// Validate that a config file path has .json extension
pub fn validate_config_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Ok(()),
        Some(ext) => Err(anyhow::anyhow!(
            "Config file must have .json extension, got .{}. Please use a .json file.",
            ext
        )),
        None => Err(anyhow::anyhow!(
            "Config file must have .json extension. Please add .json to the filename."
        )),
    }
}

/// User configuration stored in config file
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PersistentConfig {
    /// Directory holding the block macro definitions
    pub macro_dir: Option<String>,
    /// Default output format
    pub format: Option<OutputFormat>,
}

impl PersistentConfig {
    /// Load configuration from the default path or `custom_path`
    ///
    /// A missing file yields the defaults.
    pub fn load_from(custom_path: Option<&Path>) -> Result<Self> {
        let path = config_file_path_with_override(custom_path)?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to the default path or `custom_path`
    pub fn save_to(&self, custom_path: Option<&Path>) -> Result<PathBuf> {
        let path = config_file_path_with_override(custom_path)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(path)
    }

    /// Merge with command-line options (CLI options take precedence)
    pub fn merge_with_cli(&self, macro_dir: Option<String>, format: Option<OutputFormat>) -> Self {
        Self {
            macro_dir: macro_dir.or_else(|| self.macro_dir.clone()),
            format: format.or(self.format),
        }
    }

    /// Effective macro directory
    pub fn macro_dir(&self) -> &str {
        self.macro_dir
            .as_deref()
            .unwrap_or(BlockLookup::DEFAULT_MACRO_DIR)
    }

    /// Effective output format
    pub fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

impl Default for PersistentConfig {
    fn default() -> Self {
        Self {
            macro_dir: Some(BlockLookup::DEFAULT_MACRO_DIR.to_string()),
            format: Some(OutputFormat::Anml),
        }
    }
}
