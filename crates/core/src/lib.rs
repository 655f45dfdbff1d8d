//! Core types and traits for txconf
//!
//! This crate defines the foundations shared by the source and mapper crates:
//! - Error: Error type for loading and reading configuration
//! - ConfigLookup: Key to value capability consulted at transform time
//! - parse_bool: Lenient boolean parsing ("true" case-insensitive, else false)
//! - OptionSpec: Declaration of a user-facing configuration option
//! - Registry: Process-wide, read-only table of declared options

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod lookup;
pub mod options;
pub mod registry;

pub use error::{ConfigError, Result};
pub use lookup::{
    bool_or, normalize_key, parse_bool, ConfigLookup, EmptyLookup, FnLookup, NS_PREFIX,
};
pub use options::{OptionBuilder, OptionCategory, OptionSpec, ValueType};
pub use registry::{
    all_options, find_option, render_help, visible_options, TRANSACTION_JTA_ENABLED,
    TRANSACTION_XA_ENABLED, TRANSACTION_XA_ENABLED_DATASOURCE,
};
