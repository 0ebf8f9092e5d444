use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use clap::{
    Arg, ArgAction, ArgMatches, Command, command, crate_authors, crate_description, crate_name,
    crate_version,
};
use directories::ProjectDirs;
use log::debug;

use crate::constants::{
    APPLICATION, CONFIG_HELP, DEFAULT_CONFIG_PATH, FORCE_HELP, LEGACY_CONFIG_PATH,
    LOCAL_LOGGING_HELP, LOG_FILE_DEFAULT, LOG_FILE_HELP, NO_INPUT_HELP, ORGANIZATION, OVERWRITE_HELP, QUALIFIER,
    VAR_HELP, VERBOSE_HELP, WORKSPACE_HELP,
};
use crate::errors::{Result, file_operation_error, generic_error};
use crate::expansion::UserVariables;
use crate::input::parse_assignments;
use crate::logging::LogLevel;

/// Builds the command-line interface
///
/// Global arguments:
/// - `config`: Path to the configuration file
/// - `workspace`: Directory holding the templates folder
/// - `verbose`: Increase verbosity level
/// - `log_file` / `log_locally`: Optional log file
///
/// Subcommands: `generate`, `list`, `vars`, `init`.
pub fn build_command() -> Command {
    // define arg for reading from a specific config file
    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .help(CONFIG_HELP)
        .global(true);

    // define arg for the workspace directory
    let arg_workspace = Arg::new("workspace")
        .short('w')
        .long("workspace")
        .help(WORKSPACE_HELP)
        .global(true);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::Count)
        .global(true);

    // define arg for log file
    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP)
        .global(true);

    // define arg for local logging
    let log_locally = Arg::new("log_locally")
        .short('L')
        .long("log-locally")
        .help(LOCAL_LOGGING_HELP)
        .action(ArgAction::SetTrue)
        .global(true);

    let generate = Command::new("generate")
        .about("Create files and folders from a template")
        .arg(Arg::new("template").required(true).help("Name of the template"))
        .arg(
            Arg::new("destination")
                .default_value(".")
                .help("Folder to create the template in"),
        )
        .arg(
            Arg::new("var")
                .long("var")
                .value_name("NAME=VALUE")
                .help(VAR_HELP)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("overwrite")
                .long("overwrite")
                .help(OVERWRITE_HELP)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no_input")
                .long("no-input")
                .help(NO_INPUT_HELP)
                .action(ArgAction::SetTrue),
        );

    let list = Command::new("list").about("List available templates");

    let vars = Command::new("vars")
        .about("Show the variables a template uses and the available modifiers")
        .arg(Arg::new("template").required(true).help("Name of the template"));

    let init = Command::new("init")
        .about("Write a configuration file with default settings")
        .arg(
            Arg::new("force")
                .long("force")
                .help(FORCE_HELP)
                .action(ArgAction::SetTrue),
        );

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(arg_config)
        .arg(arg_workspace)
        .arg(log_file)
        .arg(log_locally)
        .arg(arg_verbose)
        .subcommand(generate)
        .subcommand(list)
        .subcommand(vars)
        .subcommand(init)
}

/// Parses the process arguments
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Gets the verbosity level from the number of -v/--verbose flags
///
/// # Examples
/// ```
/// use template_scaffold::cli::{build_command, get_verbosity};
/// use template_scaffold::logging::LogLevel;
///
/// let matches = build_command().get_matches_from(["tscaffold", "-v", "list"]);
/// assert_eq!(get_verbosity(&matches), LogLevel::Debug);
/// ```
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    LogLevel::from_occurrences(matches.get_count("verbose"))
}

/// Path of the log file, if logging to a file was requested
///
/// `--log-locally` keeps the file in the current directory; otherwise it is
/// placed in the platform configuration directory.
pub fn get_log_file(matches: &ArgMatches) -> Result<Option<PathBuf>> {
    let filename = matches.get_one::<String>("log_file").cloned();
    let log_locally = matches.get_flag("log_locally");

    match (filename, log_locally) {
        (None, false) => Ok(None),
        (filename, true) => Ok(Some(PathBuf::from(
            filename.unwrap_or_else(|| LOG_FILE_DEFAULT.to_string()),
        ))),
        (Some(filename), false) => {
            let folder = find_project_folder()?;
            Ok(Some(folder.config_dir().join(filename)))
        }
    }
}

/// Workspace directory: `--workspace` or the current directory
pub fn get_workspace(matches: &ArgMatches, current_dir: &Path) -> PathBuf {
    match matches.get_one::<String>("workspace") {
        Some(workspace) => crate::config::resolve_path(current_dir, workspace),
        None => current_dir.to_path_buf(),
    }
}

/// Configuration file: `--config` or `scaffold.yaml` inside the workspace
pub fn get_config_path(matches: &ArgMatches, current_dir: &Path, workspace: &Path) -> PathBuf {
    match matches.get_one::<String>("config") {
        Some(config) => crate::config::resolve_path(current_dir, config),
        None => workspace.join(DEFAULT_CONFIG_PATH),
    }
}

/// Configuration file to read settings from
///
/// Same as [`get_config_path`], except that without `--config` a workspace
/// holding only `mycodegenerate.json` is read from that file.
pub fn get_config_source(matches: &ArgMatches, current_dir: &Path, workspace: &Path) -> PathBuf {
    let config_path = get_config_path(matches, current_dir, workspace);
    if matches.get_one::<String>("config").is_some() || config_path.exists() {
        return config_path;
    }

    let legacy = workspace.join(LEGACY_CONFIG_PATH);
    if legacy.is_file() {
        debug!("Reading configuration from {}", legacy.display());
        legacy
    } else {
        config_path
    }
}

/// Values given with `--var name=value`
pub fn get_variables(matches: &ArgMatches) -> Result<UserVariables> {
    match matches.get_many::<String>("var") {
        Some(values) => parse_assignments(values.map(String::as_str)),
        None => Ok(UserVariables::new()),
    }
}

fn find_project_folder() -> Result<ProjectDirs> {
    let folder = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| generic_error("Failed to determine project directories"))?;

    if !folder.config_dir().exists() {
        create_dir_all(folder.config_dir()).map_err(|e| {
            file_operation_error(e, folder.config_dir().to_path_buf(), "create directory")
        })?;
    }
    Ok(folder)
}
