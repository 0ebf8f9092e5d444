//! Template tree scanning
//!
//! This module walks a template directory and lists the files it contains,
//! together with their paths relative to the template root. Discovery and
//! rendering share this traversal so both see exactly the same files.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, trace};
use walkdir::WalkDir;

use crate::errors::{
    file_operation_error, invalid_filename_error, template_not_found_error, traversal_error,
    Result,
};

/// A file found inside a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Absolute (or caller-relative) path of the file on disk
    pub path: PathBuf,
    /// Path relative to the template root, placeholders still unresolved
    pub relative: String,
}

impl TemplateFile {
    /// Reads the file content as text
    ///
    /// Returns `Ok(None)` when the content is not valid UTF-8, so binary
    /// assets can be handled without placeholder resolution.
    pub fn read_text(&self) -> Result<Option<String>> {
        let bytes = self.read_bytes()?;
        match String::from_utf8(bytes) {
            Ok(text) => Ok(Some(text)),
            Err(_) => {
                debug!("Treating {} as binary content", self.path.display());
                Ok(None)
            }
        }
    }

    pub fn read_bytes(&self) -> Result<Vec<u8>> {
        fs::read(&self.path).map_err(|e| file_operation_error(e, self.path.clone(), "read"))
    }
}

/// Fails with `TemplateNotFound` unless `root` is an existing directory
pub fn ensure_template_root(root: &Path) -> Result<()> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(template_not_found_error(root.to_path_buf()))
    }
}

/// `/`-joined form of a relative path, on every platform
fn relative_string(relative: &Path) -> Option<String> {
    let parts = relative
        .components()
        .map(|component| component.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?;
    Some(parts.join("/"))
}

/// Lists every file below `root`, recursively, in file-name order
///
/// Directories are only traversed, never returned. Symbolic links are
/// followed, so a link cycle is reported as an error instead of looping.
///
/// # Errors
/// * `TemplateNotFound` if `root` is missing or not a directory
/// * `Traversal` if an entry cannot be read or a link cycle is detected
/// * `InvalidFilename` if a relative path is not valid Unicode
pub fn scan_template(root: &Path) -> Result<Vec<TemplateFile>> {
    ensure_template_root(root)?;
    debug!("Scanning template: {}", root.display());

    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .min_depth(1)
    {
        let entry = entry.map_err(|e| traversal_error(e, root.to_path_buf()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.into_path();
        let relative = path
            .strip_prefix(root)
            .ok()
            .and_then(relative_string)
            .ok_or_else(|| invalid_filename_error(path.clone()))?;

        trace!("Found template file: {relative}");
        files.push(TemplateFile { path, relative });
    }

    debug!("Found {} files in template", files.len());

    Ok(files)
}
