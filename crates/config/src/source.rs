//! The source abstraction and the in-memory source

use std::collections::BTreeMap;

use txconf_core::normalize_key;

/// Ordinal of the defaults source appended by
/// [`ConfigChain::with_defaults`](crate::ConfigChain::with_defaults).
pub const DEFAULTS_ORDINAL: i32 = 0;

/// Default ordinal for [`MapSource`].
pub const MAP_ORDINAL: i32 = 100;

/// A named set of raw option values.
///
/// Keys are stored and queried without the `kc.` prefix. Sources are
/// immutable once built, so a chain of them can be shared across threads.
pub trait ConfigSource: Send + Sync {
    /// Name used in diagnostics.
    fn name(&self) -> &str;

    /// Precedence. Higher wins.
    fn ordinal(&self) -> i32;

    /// Raw value for a bare key.
    fn get(&self, key: &str) -> Option<String>;

    /// Every key this source defines.
    fn keys(&self) -> Vec<String>;
}

/// Source backed by an in-memory map.
#[derive(Debug, Clone)]
pub struct MapSource {
    name: String,
    ordinal: i32,
    values: BTreeMap<String, String>,
}

impl MapSource {
    /// Create an empty source.
    pub fn new(name: impl Into<String>, ordinal: i32) -> Self {
        Self {
            name: name.into(),
            ordinal,
            values: BTreeMap::new(),
        }
    }

    /// Create a source from key/value pairs. Keys may carry the `kc.` prefix.
    pub fn from_pairs<I, K, V>(name: impl Into<String>, ordinal: i32, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut source = Self::new(name, ordinal);
        for (key, value) in pairs {
            source.insert(key.as_ref(), value);
        }
        source
    }

    /// Set a value. The `kc.` prefix on `key` is dropped.
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.values
            .insert(normalize_key(key).to_string(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Number of values held.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the source holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ConfigSource for MapSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn ordinal(&self) -> i32 {
        self.ordinal
    }

    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }
}
