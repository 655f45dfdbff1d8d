//! txconf - transaction option declarations and datasource mapping
//!
//! Users configure transactions with two flags, `transaction-xa-enabled`
//! and `transaction-jta-enabled`, plus an optional per-datasource
//! `transaction-xa-enabled-<datasource>`. The datasource layer reads a single
//! mode string per datasource. This crate declares the options, layers the
//! places their values come from, and maps them to the datasource setting.
//!
//! # Quick Start
//!
//! ```
//! use txconf::{materialize_transactions, ConfigChain, MapSource, TRANSACTIONS_TARGET};
//!
//! let chain = ConfigChain::new()
//!     .with_source(MapSource::new("cli", 400).with("transaction-xa-enabled", "true"))
//!     .with_defaults();
//!
//! let settings = materialize_transactions(&chain);
//! assert_eq!(settings[TRANSACTIONS_TARGET], "xa");
//! ```
//!
//! # Architecture
//!
//! - `txconf-core`: option declarations, registry, lookup capability
//! - `txconf-config`: environment, file and in-memory sources, the chain
//! - `txconf-mappers`: the resolver and the property mappers

pub mod prelude;

pub use txconf_config::{
    ConfigChain, ConfigSource, EnvSource, FileSource, MapSource, CONFIG_FILE_NAME, ENV_PREFIX,
};
pub use txconf_core::{
    all_options, bool_or, find_option, normalize_key, parse_bool, render_help, visible_options,
    ConfigError, ConfigLookup, EmptyLookup, FnLookup, OptionBuilder, OptionCategory, OptionSpec,
    Result, ValueType, TRANSACTION_JTA_ENABLED, TRANSACTION_XA_ENABLED,
    TRANSACTION_XA_ENABLED_DATASOURCE,
};
pub use txconf_mappers::{
    materialize, materialize_transactions, resolve, transaction_mappers, transaction_transformer,
    PropertyMapper, PropertyMapperBuilder, TransactionMode, TransactionSettings, Transformer,
    DATASOURCE_TRANSACTIONS_TARGET, JTA_ENABLED_KEY, TRANSACTIONS_TARGET,
};
