//! Template rendering module
//!
//! This module contains components for resolving placeholders and writing a
//! rendered template to its destination.

mod materializer;
mod outcome;
mod planner;

pub use materializer::render;
pub use outcome::{RenderFailure, RenderOutcome};
pub use planner::{PlannedFile, first_level_entries, plan_render, render_text, target_relative_path};
