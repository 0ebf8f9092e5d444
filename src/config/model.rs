//! Configuration data structures

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LANGUAGE, DEFAULT_TEMPLATES_PATH};

/// How variable values are gathered when a template is generated
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Ask on the terminal for every variable without a `--var` value
    #[default]
    #[serde(alias = "inputBox", alias = "webview")]
    Prompt,
    /// Take values from `--var` arguments only
    Arguments,
}

/// Configuration for the scaffolding tool
///
/// Field names are camelCase on disk, so a configuration written as JSON
/// (`{"templatesPath": "templates", "overwriteFiles": false}`) loads as well.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Folder holding the templates, relative to the workspace directory
    pub templates_path: PathBuf,
    /// Whether generation may overwrite existing files
    pub overwrite_files: bool,
    pub input_mode: InputMode,
    /// Language tag carried over from existing configuration files
    ///
    /// Validated and written back by `init`, but messages are English only.
    pub language: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            templates_path: PathBuf::from(DEFAULT_TEMPLATES_PATH),
            overwrite_files: false,
            input_mode: InputMode::default(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl Config {
    /// Validates the configuration
    ///
    /// # Errors
    /// Returns an error with a detailed message if a field is empty
    pub fn validate(&self) -> Result<()> {
        if self.templates_path.as_os_str().is_empty() {
            return Err(anyhow!(
                "No templates path specified in configuration. Set 'templatesPath' to the folder holding your templates."
            ));
        }

        if self.language.trim().is_empty() {
            return Err(anyhow!(
                "Empty language in configuration. Remove 'language' or set it to a language tag such as '{}'.",
                DEFAULT_LANGUAGE
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.templates_path, PathBuf::from("templates"));
        assert!(!config.overwrite_files);
        assert_eq!(config.input_mode, InputMode::Prompt);
        assert_eq!(config.language, "en");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        let config = Config {
            templates_path: PathBuf::new(),
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            language: "  ".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
