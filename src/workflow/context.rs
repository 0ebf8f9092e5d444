//! Workflow context
//!
//! This module defines the request passed into a generation run and the
//! report it produces.

use std::path::PathBuf;

use crate::config::Config;
use crate::expansion::UserVariables;
use crate::render::RenderOutcome;

/// A single "create from template" request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Name of the template folder inside the templates directory
    pub template: String,
    /// Folder the template is materialized into
    pub destination: PathBuf,
    /// Whether existing files may be replaced
    pub overwrite: bool,
}

impl GenerationRequest {
    /// Creates a request whose overwrite policy comes from the configuration
    ///
    /// # Arguments
    /// * `template` - Template name
    /// * `destination` - Destination folder
    /// * `config` - Configuration supplying `overwriteFiles`
    pub fn new(template: impl Into<String>, destination: impl Into<PathBuf>, config: &Config) -> Self {
        GenerationRequest {
            template: template.into(),
            destination: destination.into(),
            overwrite: config.overwrite_files,
        }
    }

    /// Forces overwriting for this request only
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = self.overwrite || overwrite;
        self
    }
}

/// What a generation run did
#[derive(Debug)]
pub struct GenerationReport {
    pub template: String,
    pub template_dir: PathBuf,
    pub destination: PathBuf,
    /// Values collected for the template's variables
    pub variables: UserVariables,
    pub outcome: RenderOutcome,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }

    pub fn files_written(&self) -> usize {
        self.outcome.files_written()
    }
}
