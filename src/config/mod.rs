//! Configuration module
//!
//! This module contains components for loading, validating and writing the
//! scaffolding configuration.

mod loader;
mod model;
mod serializer;

pub use loader::{expand_path, load_config, load_or_default, resolve_path};
pub use model::{Config, InputMode};
pub use serializer::{serialize_config, write_config};
