//! Configuration sources for txconf
//!
//! Raw option values come from several places at once: the process
//! environment, a `txconf.toml` file, and the declared defaults. Each is a
//! [`ConfigSource`] with an ordinal; a [`ConfigChain`] stacks them so the
//! highest ordinal that knows a key wins. The chain is the
//! [`ConfigLookup`](txconf_core::ConfigLookup) handed to transformers.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chain;
pub mod env;
pub mod file;
pub mod source;

pub use chain::ConfigChain;
pub use env::{EnvSource, ENV_PREFIX};
pub use file::{FileSource, CONFIG_FILE_NAME};
pub use source::{ConfigSource, MapSource};
