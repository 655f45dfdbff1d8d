//! Ordered stack of configuration sources

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use txconf_core::{all_options, normalize_key, ConfigLookup, Result};

use crate::env::EnvSource;
use crate::file::FileSource;
use crate::source::{ConfigSource, MapSource, DEFAULTS_ORDINAL};

/// Sources ordered by precedence.
///
/// Lookups walk the sources from highest to lowest ordinal and return the
/// first value found. Sources with equal ordinals keep insertion order.
#[derive(Default)]
pub struct ConfigChain {
    sources: Vec<Box<dyn ConfigSource>>,
}

impl ConfigChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Environment, then `path` if given, then declared defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is given and cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut chain = Self::new().with_source(EnvSource::from_env());
        if let Some(path) = path {
            chain = chain.with_source(FileSource::open(path)?);
        }
        Ok(chain.with_defaults())
    }

    /// Add a source, keeping the chain ordered.
    pub fn with_source(mut self, source: impl ConfigSource + 'static) -> Self {
        self.push(Box::new(source));
        self
    }

    /// Add a boxed source, keeping the chain ordered.
    pub fn push(&mut self, source: Box<dyn ConfigSource>) {
        tracing::debug!(
            source = source.name(),
            ordinal = source.ordinal(),
            "adding config source"
        );
        let at = self
            .sources
            .iter()
            .position(|s| s.ordinal() < source.ordinal())
            .unwrap_or(self.sources.len());
        self.sources.insert(at, source);
    }

    /// Append the defaults of every declared non-wildcard option at the
    /// lowest precedence.
    pub fn with_defaults(self) -> Self {
        let defaults = all_options()
            .filter(|option| !option.is_wildcard())
            .filter_map(|option| Some((option.key(), option.default_value()?)));
        self.with_source(MapSource::from_pairs("defaults", DEFAULTS_ORDINAL, defaults))
    }

    /// Raw value and the name of the source that supplied it.
    pub fn get_with_source(&self, key: &str) -> Option<(String, &str)> {
        let key = normalize_key(key);
        self.sources.iter().find_map(|source| {
            let value = source.get(key)?;
            tracing::trace!(key, source = source.name(), "config value found");
            Some((value, source.name()))
        })
    }

    /// Union of the keys defined by every source.
    pub fn keys(&self) -> BTreeSet<String> {
        self.sources.iter().flat_map(|s| s.keys()).collect()
    }

    /// Source names in lookup order.
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }
}

impl ConfigLookup for ConfigChain {
    fn get(&self, key: &str) -> Option<String> {
        self.get_with_source(key).map(|(value, _)| value)
    }
}

impl fmt::Debug for ConfigChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigChain")
            .field("sources", &self.source_names())
            .finish()
    }
}
