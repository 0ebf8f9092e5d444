//! Render planning
//!
//! Resolves the placeholders in every template file's relative path so the
//! collision pre-check knows what will be produced before anything is written.

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use log::trace;

use crate::discovery::{TemplateFile, replace_tokens, scan_template};
use crate::errors::{Result, invalid_target_path_error};
use crate::expansion::ExpandedVariables;

/// A template file paired with its resolved destination-relative path
#[derive(Debug, Clone)]
pub struct PlannedFile {
    pub source: TemplateFile,
    /// Relative to the destination root; never empty, never contains `..`
    pub target: PathBuf,
}

impl PlannedFile {
    /// First path segment of the target, the entry created directly under
    /// the destination root
    pub fn first_segment(&self) -> Option<OsString> {
        self.target
            .components()
            .next()
            .map(|component| component.as_os_str().to_os_string())
    }
}

/// Resolves placeholders in `text` against `variables`
pub fn render_text(text: &str, variables: &ExpandedVariables) -> String {
    replace_tokens(text, |token| variables.resolve(token))
}

/// Turns a rendered relative path into a clean destination-relative path
///
/// Empty segments left by empty substitutions and `.` segments are dropped.
///
/// # Errors
/// Returns `InvalidTargetPath` when the path has a `..` segment or nothing
/// is left after cleaning.
pub fn target_relative_path(rendered: &str) -> Result<PathBuf> {
    let mut target = PathBuf::new();
    for component in Path::new(rendered).components() {
        match component {
            Component::Normal(segment) => target.push(segment),
            Component::ParentDir => {
                return Err(invalid_target_path_error(
                    rendered,
                    "parent directory segments are not allowed",
                ));
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }

    if target.as_os_str().is_empty() {
        return Err(invalid_target_path_error(rendered, "path is empty"));
    }

    Ok(target)
}

/// Plans the render of the template at `template_root`
///
/// # Errors
/// * `TemplateNotFound` if the template root is missing
/// * `InvalidTargetPath` if a rendered path is empty or escapes the destination
pub fn plan_render(template_root: &Path, variables: &ExpandedVariables) -> Result<Vec<PlannedFile>> {
    scan_template(template_root)?
        .into_iter()
        .map(|source| -> Result<PlannedFile> {
            let rendered = render_text(&source.relative, variables);
            let target = target_relative_path(&rendered)?;
            trace!("{} -> {}", source.relative, target.display());
            Ok(PlannedFile { source, target })
        })
        .collect()
}

/// Distinct first-level entries the plan will create under the destination
pub fn first_level_entries(plan: &[PlannedFile]) -> BTreeSet<OsString> {
    plan.iter().filter_map(PlannedFile::first_segment).collect()
}
