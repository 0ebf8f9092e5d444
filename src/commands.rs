//! Subcommand handlers for the `tscaffold` binary

use std::env::current_dir;
use std::io;
use std::path::Path;

use anyhow::{Result, anyhow};
use clap::ArgMatches;
use colored::Colorize;
use log::{debug, error, info, warn};

use crate::case::ModifierRegistry;
use crate::cli::{get_config_path, get_config_source, get_variables, get_workspace};
use crate::config::{Config, InputMode, load_or_default, resolve_path, write_config};
use crate::input::{PresetCollector, PromptCollector, VariableCollector};
use crate::logging::format_message;
use crate::workflow::{
    GenerationReport, GenerationRequest, generate, inspect_template, list_templates,
    templates_dir,
};

/// Runs the subcommand selected on the command line
///
/// # Returns
/// `Ok(true)` when the command did what was asked, `Ok(false)` when a
/// generation stopped on a write failure or created no files.
pub fn run_command(argument_matches: &ArgMatches) -> Result<bool> {
    let current_dir = current_dir()?;
    let workspace = get_workspace(argument_matches, &current_dir);
    let config_path = get_config_path(argument_matches, &current_dir, &workspace);
    let config_source = get_config_source(argument_matches, &current_dir, &workspace);

    match argument_matches.subcommand() {
        Some(("generate", matches)) => {
            let config = load_or_default(&config_source)?;
            run_generate(matches, &config, &workspace, &current_dir)
        }
        Some(("list", _)) => {
            let config = load_or_default(&config_source)?;
            run_list(&config, &workspace).map(|_| true)
        }
        Some(("vars", matches)) => {
            let config = load_or_default(&config_source)?;
            run_vars(matches, &config, &workspace).map(|_| true)
        }
        Some(("init", matches)) => {
            write_config(&Config::default(), &config_path, matches.get_flag("force"))?;
            Ok(true)
        }
        _ => Err(anyhow!("No subcommand given")),
    }
}

fn run_generate(
    matches: &ArgMatches,
    config: &Config,
    workspace: &Path,
    current_dir: &Path,
) -> Result<bool> {
    let template = matches
        .get_one::<String>("template")
        .ok_or_else(|| anyhow!("Template name is required"))?;
    let destination = matches
        .get_one::<String>("destination")
        .map(|raw| resolve_path(current_dir, raw))
        .unwrap_or_else(|| current_dir.to_path_buf());

    let presets = get_variables(matches)?;
    let request = GenerationRequest::new(template.as_str(), destination, config)
        .with_overwrite(matches.get_flag("overwrite"));

    let mut collector: Box<dyn VariableCollector> =
        if matches.get_flag("no_input") || config.input_mode == InputMode::Arguments {
            debug!("Collecting variables from arguments only");
            Box::new(PresetCollector::new(presets))
        } else {
            Box::new(PromptCollector::new(io::stdin().lock(), io::stdout()).with_presets(presets))
        };

    let registry = ModifierRegistry::standard();
    let report = generate(
        &templates_dir(workspace, config),
        &request,
        collector.as_mut(),
        &registry,
    )?;

    print_report(&report);
    Ok(report.outcome.is_complete())
}

fn print_report(report: &GenerationReport) {
    for path in report.outcome.written() {
        debug!("Created {}", path.display());
    }

    match report.outcome.failure() {
        None if !report.is_success() => {
            warn!(
                "No files were created: template '{}' contains no files",
                report.template
            );
        }
        None => {
            let message = format!(
                "Created {} file(s) from '{}' in {}",
                report.files_written(),
                report.template,
                report.destination.display()
            );
            let colored_message = format!(
                "Created {} file(s) from '{}' in {}",
                report.files_written().to_string().bold().green(),
                report.template.bold(),
                report.destination.display()
            );
            info!("{}", format_message(&message, &colored_message));
        }
        Some(failure) => {
            let message = format!("Generation stopped: {failure}");
            let colored_message = format!("Generation stopped: {}", failure.to_string().bold().red());
            error!("{}", format_message(&message, &colored_message));

            if report.is_success() {
                warn!(
                    "{} file(s) were created before the failure and were left in place",
                    report.files_written()
                );
            } else {
                info!("No files were created");
            }
        }
    }
}

fn run_list(config: &Config, workspace: &Path) -> Result<()> {
    for template in list_templates(&templates_dir(workspace, config))? {
        info!("{template}");
    }
    Ok(())
}

fn run_vars(matches: &ArgMatches, config: &Config, workspace: &Path) -> Result<()> {
    let template = matches
        .get_one::<String>("template")
        .ok_or_else(|| anyhow!("Template name is required"))?;
    let variables = inspect_template(&templates_dir(workspace, config), template)?;

    if variables.is_empty() {
        info!("Template '{template}' uses no variables");
    } else {
        info!("Variables:");
        for variable in &variables {
            info!("  {{{{{variable}}}}}");
        }
    }

    info!("Modifiers: {}", modifier_list(&ModifierRegistry::standard()));
    Ok(())
}

/// Comma-separated modifier names, in registry order
fn modifier_list(registry: &ModifierRegistry) -> String {
    let modifiers: Vec<&str> = registry.names().collect();
    modifiers.join(", ")
}
