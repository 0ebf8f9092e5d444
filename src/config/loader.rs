//! Configuration loading functionality
//!
//! This module contains functions for loading and validating configuration
//! and for resolving the paths it holds.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use log::{debug, info};
use serde_yaml::from_str;
use shellexpand::{full, tilde};

use super::model::Config;
use crate::errors::config_parsing_error;

/// Loads a configuration from a file
///
/// YAML is read with `serde_yaml`, which also accepts JSON documents.
///
/// # Errors
/// Returns an error if the file cannot be read or if the configuration is invalid
pub fn load_config(file: &Path) -> Result<Config> {
    let file_content = fs::read(file).map_err(|e| {
        anyhow!(
            "Failed to read configuration file {}: {}",
            file.display(),
            e
        )
    })?;

    let content_str = String::from_utf8(file_content).map_err(|e| {
        anyhow!(
            "Configuration file {} contains invalid UTF-8 characters: {}",
            file.display(),
            e
        )
    })?;

    // An empty file means "all defaults".
    let config: Config = if content_str.trim().is_empty() {
        Config::default()
    } else {
        from_str(&content_str).map_err(|e| {
            let detail = format!(
                "{}: {}\nPlease check the YAML syntax.",
                file.display(),
                e
            );
            config_parsing_error(e, &detail)
        })?
    };

    config.validate()?;
    debug!("Loaded configuration from {}", file.display());

    Ok(config)
}

/// Loads the configuration at `file`, or the defaults when it does not exist
///
/// # Errors
/// Returns an error if an existing file cannot be loaded
pub fn load_or_default(file: &Path) -> Result<Config> {
    if file.exists() {
        load_config(file)
    } else {
        info!(
            "No configuration file at {}, using defaults",
            file.display()
        );
        Ok(Config::default())
    }
}

/// Expands `~` and environment variables in a path
///
/// Unknown environment variables are left in place.
pub fn expand_path(path: &str) -> String {
    match full(path) {
        Ok(expanded) => expanded.into_owned(),
        Err(_) => tilde(path).into_owned(),
    }
}

/// Expands `raw` and makes it absolute against `base` when it is relative
pub fn resolve_path(base: &Path, raw: &str) -> PathBuf {
    let expanded = PathBuf::from(expand_path(raw));
    if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    }
}
