//! Configuration serialization functionality
//!
//! This module contains functions for writing the configuration as YAML.

use std::fs;
use std::path::Path;

use anyhow::{Result, anyhow};
use log::info;

use super::model::Config;

/// Serializes a configuration to a YAML string
pub fn serialize_config(config: &Config) -> Result<String> {
    serde_yaml::to_string(config).map_err(|e| anyhow!("Failed to serialize configuration: {e}"))
}

/// Writes `config` to `file`
///
/// # Errors
/// Returns an error when `file` exists and `force` is off, or when it cannot be written
pub fn write_config(config: &Config, file: &Path, force: bool) -> Result<()> {
    if file.exists() && !force {
        return Err(anyhow!(
            "Configuration file {} already exists. Use --force to replace it.",
            file.display()
        ));
    }

    let yaml = serialize_config(config)?;
    fs::write(file, yaml)
        .map_err(|e| anyhow!("Failed to write configuration file {}: {}", file.display(), e))?;

    info!("Configuration written to {}", file.display());
    Ok(())
}
