//! Transaction mapping integration tests
//!
//! End-to-end: options declared in the registry, values layered from env,
//! file and defaults, mapped to the datasource transaction settings.

mod common;

mod help_output;
mod resolution;
mod source_layering;
mod targets;
