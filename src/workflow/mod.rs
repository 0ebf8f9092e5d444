//! Workflow module
//!
//! This module contains the components that orchestrate a generation request.

mod context;
mod engine;

pub use context::{GenerationReport, GenerationRequest};
pub use engine::{generate, inspect_template, list_templates, locate_template, templates_dir};
