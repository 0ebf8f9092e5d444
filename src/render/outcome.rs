//! Render outcome reporting
//!
//! A render never throws on write problems; it stops and reports what went
//! wrong together with the files that exist at that point.

use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Why a render stopped early
#[derive(Debug)]
pub enum RenderFailure {
    /// A first-level output entry already existed and overwriting is off;
    /// nothing was written
    Collision { path: PathBuf },
    /// A file appeared at the target after the pre-check while overwriting is off
    WriteConflict { path: PathBuf },
    /// Any other filesystem failure
    Io { path: PathBuf, source: io::Error },
}

impl RenderFailure {
    /// Path the failure refers to
    pub fn path(&self) -> &Path {
        match self {
            RenderFailure::Collision { path }
            | RenderFailure::WriteConflict { path }
            | RenderFailure::Io { path, .. } => path,
        }
    }

    /// Short name of the failure kind
    pub fn kind(&self) -> &'static str {
        match self {
            RenderFailure::Collision { .. } => "collision",
            RenderFailure::WriteConflict { .. } => "write conflict",
            RenderFailure::Io { .. } => "I/O error",
        }
    }
}

impl fmt::Display for RenderFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderFailure::Collision { path } => write!(
                f,
                "File or folder already exists and overwrite is disabled: {}",
                path.display()
            ),
            RenderFailure::WriteConflict { path } => {
                write!(f, "File already exists: {}", path.display())
            }
            RenderFailure::Io { path, source } => {
                write!(f, "Failed to write {}: {source}", path.display())
            }
        }
    }
}

impl StdError for RenderFailure {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            RenderFailure::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result of materializing a template
#[derive(Debug, Default)]
pub struct RenderOutcome {
    written: Vec<PathBuf>,
    failure: Option<RenderFailure>,
}

impl RenderOutcome {
    /// Outcome of a render aborted by the collision pre-check
    pub(crate) fn collision(path: PathBuf) -> Self {
        RenderOutcome {
            written: Vec::new(),
            failure: Some(RenderFailure::Collision { path }),
        }
    }

    pub(crate) fn record_written(&mut self, path: PathBuf) {
        self.written.push(path);
    }

    pub(crate) fn stop(&mut self, failure: RenderFailure) {
        self.failure = Some(failure);
    }

    /// True when at least one file was written, even if a later file failed
    pub fn is_success(&self) -> bool {
        !self.written.is_empty()
    }

    /// True when every template file was written
    pub fn is_complete(&self) -> bool {
        self.is_success() && self.failure.is_none()
    }

    pub fn files_written(&self) -> usize {
        self.written.len()
    }

    /// Destination paths written, in write order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    pub fn failure(&self) -> Option<&RenderFailure> {
        self.failure.as_ref()
    }
}
