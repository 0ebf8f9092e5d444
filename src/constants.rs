/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// Used to locate the platform configuration directory that holds the log file.
pub const APPLICATION: &str = "template_scaffold";

/// Default name of the configuration file inside the workspace directory
pub const DEFAULT_CONFIG_PATH: &str = "scaffold.yaml";

/// Configuration file read from the workspace when `scaffold.yaml` is absent
///
/// Projects set up for the editor extension keep their settings here.
pub const LEGACY_CONFIG_PATH: &str = "mycodegenerate.json";

/// Default folder, relative to the workspace, that holds the templates
pub const DEFAULT_TEMPLATES_PATH: &str = "templates";

/// Default language tag for user-facing messages
pub const DEFAULT_LANGUAGE: &str = "en";

/// Default name of the log file
pub const LOG_FILE_DEFAULT: &str = "tscaffold.log";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read from a specific config file";

/// Help text for the workspace command-line option
pub const WORKSPACE_HELP: &str = "Workspace directory that contains the templates folder";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Name of the log file";

/// Help text for the local logging command-line option
pub const LOCAL_LOGGING_HELP: &str = "Write the log file to the current directory";

/// Help text for the variable command-line option
pub const VAR_HELP: &str = "Value for a template variable, as name=value (can be used multiple times)";

/// Help text for the overwrite command-line option
pub const OVERWRITE_HELP: &str = "Overwrite existing files in the destination";

/// Help text for the no-input command-line option
pub const NO_INPUT_HELP: &str = "Never prompt; fail when a variable has no --var value";

/// Help text for the force command-line option of `init`
pub const FORCE_HELP: &str = "Replace an existing configuration file";
