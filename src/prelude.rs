//! Commonly used items
//!
//! ```
//! use txconf::prelude::*;
//!
//! assert_eq!(resolve("false", &EmptyLookup), TransactionMode::Enabled);
//! ```

pub use crate::{
    materialize_transactions, resolve, ConfigChain, ConfigLookup, EmptyLookup, EnvSource,
    FileSource, MapSource, TransactionMode, TransactionSettings,
};
