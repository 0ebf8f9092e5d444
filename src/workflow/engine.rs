//! Workflow engine
//!
//! This module contains the engine that orchestrates a generation request:
//! template lookup, variable discovery, value collection, expansion and
//! rendering.

use std::fs::read_dir;
use std::path::{Component, Path, PathBuf};

use log::{debug, info, warn};

use crate::case::ModifierRegistry;
use crate::config::{Config, resolve_path};
use crate::discovery::{VariableSet, discover_variables, ensure_template_root};
use crate::errors::{
    Result, file_operation_error, template_not_found_error, templates_folder_not_found_error,
};
use crate::expansion::expand_variables;
use crate::input::VariableCollector;
use crate::render::render;

use super::context::{GenerationReport, GenerationRequest};

/// Absolute path of the templates folder for a workspace
pub fn templates_dir(workspace: &Path, config: &Config) -> PathBuf {
    resolve_path(workspace, &config.templates_path.to_string_lossy())
}

/// Names of the templates available in `templates_dir`, sorted
///
/// Every direct subdirectory is a template.
///
/// # Errors
/// * `TemplatesFolderNotFound` if the folder is missing or not a directory
pub fn list_templates(templates_dir: &Path) -> Result<Vec<String>> {
    if !templates_dir.is_dir() {
        return Err(templates_folder_not_found_error(templates_dir.to_path_buf()));
    }

    let entries = read_dir(templates_dir)
        .map_err(|e| file_operation_error(e, templates_dir.to_path_buf(), "list"))?;

    let mut templates: Vec<String> = entries
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .filter_map(|path| path.file_name()?.to_str().map(str::to_string))
        .collect();
    templates.sort();

    if templates.is_empty() {
        warn!("No templates found in {}", templates_dir.display());
    }

    Ok(templates)
}

/// Path of the template called `name` inside `templates_dir`
///
/// # Errors
/// * `TemplatesFolderNotFound` if the templates folder is missing
/// * `TemplateNotFound` if `name` is not a plain folder name or no such
///   template exists
pub fn locate_template(templates_dir: &Path, name: &str) -> Result<PathBuf> {
    if !templates_dir.is_dir() {
        return Err(templates_folder_not_found_error(templates_dir.to_path_buf()));
    }

    let template_dir = templates_dir.join(name);
    let mut components = Path::new(name).components();
    let is_plain_name = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !is_plain_name {
        return Err(template_not_found_error(template_dir));
    }

    ensure_template_root(&template_dir)?;
    Ok(template_dir)
}

/// Variables referenced by the template called `name`
pub fn inspect_template(templates_dir: &Path, name: &str) -> Result<VariableSet> {
    let template_dir = locate_template(templates_dir, name)?;
    discover_variables(&template_dir)
}

/// Runs one generation request from start to finish
///
/// The steps are:
/// 1. Locate the template inside `templates_dir`
/// 2. Discover the variables it references
/// 3. Ask `collector` for their values; a missing value aborts before any write
/// 4. Expand the values with every modifier in `registry`
/// 5. Render the template into the destination
///
/// # Errors
/// Request-level failures (`TemplatesFolderNotFound`, `TemplateNotFound`,
/// `NoVariablesCollected`, invalid target paths). Write failures are part of
/// the report's outcome.
pub fn generate<C>(
    templates_dir: &Path,
    request: &GenerationRequest,
    collector: &mut C,
    registry: &ModifierRegistry,
) -> Result<GenerationReport>
where
    C: VariableCollector + ?Sized,
{
    let template_dir = locate_template(templates_dir, &request.template)?;
    info!(
        "Generating '{}' into {}{}",
        request.template,
        request.destination.display(),
        if request.overwrite { " (overwrite)" } else { "" }
    );

    let required = discover_variables(&template_dir)?;
    debug!("Template variables: {required:?}");

    let variables = collector.collect(&required)?;
    let expanded = expand_variables(&variables, registry);

    let outcome = render(&template_dir, &request.destination, &expanded, request.overwrite)?;

    Ok(GenerationReport {
        template: request.template.clone(),
        template_dir,
        destination: request.destination.clone(),
        variables,
        outcome,
    })
}
