//! Environment variable source
//!
//! `KC_TRANSACTION_XA_ENABLED=true` sets `transaction-xa-enabled`. The
//! variable name after the prefix is lowercased and `_` becomes `-`, so a
//! per-datasource flag for `users` is `KC_TRANSACTION_XA_ENABLED_USERS`.

use std::collections::BTreeMap;
use std::ffi::OsString;

use crate::source::ConfigSource;

/// Prefix of variables read by [`EnvSource`].
pub const ENV_PREFIX: &str = "KC_";

/// Default ordinal for [`EnvSource`]. Environment beats the config file.
pub const ENV_ORDINAL: i32 = 300;

/// Source reading `KC_*` environment variables.
#[derive(Debug, Clone)]
pub struct EnvSource {
    values: BTreeMap<String, String>,
}

impl EnvSource {
    /// Snapshot the process environment.
    ///
    /// Variables that are not valid UTF-8 are skipped; a skipped `KC_*`
    /// variable is logged.
    pub fn from_env() -> Self {
        Self::from_vars_os(std::env::vars_os())
    }

    /// Build from raw OS pairs, skipping names or values that are not
    /// valid UTF-8.
    pub fn from_vars_os<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        Self::from_vars(vars.into_iter().filter_map(|(name, value)| {
            let name = match name.into_string() {
                Ok(name) => name,
                Err(name) => {
                    let lossy = name.to_string_lossy();
                    if lossy.starts_with(ENV_PREFIX) {
                        tracing::warn!(name = %lossy, "skipping non-UTF-8 variable name");
                    }
                    return None;
                }
            };
            match value.into_string() {
                Ok(value) => Some((name, value)),
                Err(_) => {
                    if name.starts_with(ENV_PREFIX) {
                        tracing::warn!(name = %name, "skipping variable with non-UTF-8 value");
                    }
                    None
                }
            }
        }))
    }

    /// Build from explicit `(name, value)` pairs. Names without the `KC_`
    /// prefix are ignored.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let values: BTreeMap<String, String> = vars
            .into_iter()
            .filter_map(|(name, value)| Some((env_to_key(name.as_ref())?, value.into())))
            .collect();
        tracing::debug!(count = values.len(), "read environment options");
        Self { values }
    }
}

/// Map a variable name to an option key, if it carries the prefix.
pub fn env_to_key(name: &str) -> Option<String> {
    let rest = name.strip_prefix(ENV_PREFIX)?;
    if rest.is_empty() {
        return None;
    }
    Some(rest.to_ascii_lowercase().replace('_', "-"))
}

impl ConfigSource for EnvSource {
    fn name(&self) -> &str {
        "env"
    }

    fn ordinal(&self) -> i32 {
        ENV_ORDINAL
    }

    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }
}
