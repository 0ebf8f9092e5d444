//! Variable discovery
//!
//! This module collects the base names of all placeholders referenced by a
//! template, both in file and folder names and in file contents.

use std::collections::BTreeSet;
use std::path::Path;

use log::{debug, info};

use crate::errors::Result;

use super::scanner::scan_template;
use super::tokens::find_tokens;

/// Distinct base variable names referenced by a template
pub type VariableSet = BTreeSet<String>;

/// Adds the base name of every token in `text` to `variables`
fn collect_base_names(text: &str, variables: &mut VariableSet) {
    variables.extend(find_tokens(text).map(|token| token.base.to_string()));
}

/// Discovers the variables referenced by the template at `template_root`
///
/// Every file below the root is visited; its relative path and, when it is
/// text, its content are searched for placeholders. Only base names are
/// returned: `{{name.pascalCase}}` contributes `name`. Nothing is written.
///
/// # Errors
/// * `TemplateNotFound` if the root is missing or not a directory, so
///   "no variables" is distinguishable from "no such template"
/// * `FileOperation` if a template file cannot be read
pub fn discover_variables(template_root: &Path) -> Result<VariableSet> {
    let mut variables = VariableSet::new();

    for file in scan_template(template_root)? {
        collect_base_names(&file.relative, &mut variables);
        match file.read_text()? {
            Some(content) => collect_base_names(&content, &mut variables),
            None => debug!("Skipping content scan of {}", file.relative),
        }
    }

    info!(
        "Discovered {} variable(s) in {}",
        variables.len(),
        template_root.display()
    );

    Ok(variables)
}
