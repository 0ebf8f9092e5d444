pub mod case;
pub mod cli;
pub mod commands;
pub mod config;
mod constants;
pub mod discovery;
pub mod errors;
pub mod expansion;
pub mod input;
pub mod logging;
pub mod render;
pub mod workflow;

pub mod prelude {
    pub use crate::case::{CaseModifier, ModifierRegistry, transform};
    pub use crate::commands::run_command;
    pub use crate::config::{Config, InputMode, load_config, load_or_default};
    pub use crate::discovery::{VariableSet, discover_variables};
    pub use crate::errors::{
        config_parsing_error, file_operation_error, generic_error, invalid_filename_error,
        invalid_target_path_error, no_variables_collected_error, template_not_found_error,
        templates_folder_not_found_error, traversal_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::expansion::{ExpandedVariables, UserVariables, expand_variables};
    pub use crate::input::{PresetCollector, PromptCollector, VariableCollector};
    pub use crate::logging::{LogLevel, format_message, init_default_logger, init_logger};
    pub use crate::render::{RenderFailure, RenderOutcome, render};
    pub use crate::workflow::{GenerationReport, GenerationRequest, generate};
}
