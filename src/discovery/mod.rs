//! Template discovery module
//!
//! This module contains components for walking template trees, matching
//! placeholder tokens and collecting the variables a template needs.

mod scanner;
mod tokens;
mod variables;

pub use scanner::{TemplateFile, ensure_template_root, scan_template};
pub use tokens::{Token, find_tokens, replace_tokens};
pub use variables::{VariableSet, discover_variables};
