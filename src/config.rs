//! Configuration file support for pip-chill.
//!
//! Provides YAML-based configuration through `pip-chill.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use pip_chill::application::dto::OutputFormat;
use pip_chill::shared::error::ChillError;
use pip_chill::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const CONFIG_FILENAME: &str = "pip-chill.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub no_version: Option<bool>,
    pub no_chill: Option<bool>,
    pub show_all: Option<bool>,
    pub verbose: Option<bool>,
    /// Distribution names to leave out in addition to pip, setuptools and wheel.
    pub ignore_packages: Option<Vec<String>>,
    pub python: Option<PathBuf>,
    pub paths: Option<Vec<PathBuf>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured output format, already validated on load.
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format
            .as_deref()
            .and_then(|format| OutputFormat::from_str(format).ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = if content.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml_ng::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
    };

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(format) = config.format.as_deref() {
        OutputFormat::from_str(format).map_err(|message| ChillError::Validation { message })?;
    }

    if let Some(ref ignore_packages) = config.ignore_packages {
        for (i, name) in ignore_packages.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(ChillError::Validation {
                    message: format!(
                        "ignore_packages[{}] must not be empty.\n\n\
                         💡 Hint: Each ignore_packages entry must be a distribution name (e.g., \"black\").",
                        i
                    ),
                }
                .into());
            }
        }
    }

    if let Some(ref paths) = config.paths {
        if paths.iter().any(|path| path.as_os_str().is_empty()) {
            return Err(ChillError::Validation {
                message: "paths entries must not be empty.".to_string(),
            }
            .into());
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
