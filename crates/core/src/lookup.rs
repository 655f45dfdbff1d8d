//! Key lookup capability and lenient boolean parsing
//!
//! Transformers never reach into ambient configuration. Anything they need
//! beyond their own raw value is read through a [`ConfigLookup`] passed in
//! by the caller, which keeps them testable with a plain map or closure.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Namespace prefix for user-facing option keys.
///
/// `kc.transaction-jta-enabled` and `transaction-jta-enabled` address the
/// same option.
pub const NS_PREFIX: &str = "kc.";

/// Strip the namespace prefix from a key, if present.
pub fn normalize_key(key: &str) -> &str {
    key.strip_prefix(NS_PREFIX).unwrap_or(key)
}

/// Parse a boolean the lenient way.
///
/// `"true"` in any letter case is `true`. Everything else, including
/// `"yes"`, `"1"`, the empty string and padded values like `" true"`, is
/// `false`. Never fails.
pub fn parse_bool(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("true")
}

/// Read a boolean option, falling back to `default` when the key is unset.
///
/// A present but unparseable value reads as `false`, not as `default`.
pub fn bool_or<L: ConfigLookup + ?Sized>(lookup: &L, key: &str, default: bool) -> bool {
    match lookup.get(key) {
        Some(raw) => parse_bool(&raw),
        None => default,
    }
}

/// Capability mapping a configuration key to its current raw value.
///
/// Implementations should treat `kc.`-prefixed and bare keys as the same
/// key (see [`normalize_key`]).
pub trait ConfigLookup {
    /// Current raw value for `key`, or `None` when unset.
    fn get(&self, key: &str) -> Option<String>;
}

/// Try the bare key first, then its namespaced form.
fn find_in<F>(key: &str, find: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let bare = normalize_key(key);
    find(bare).or_else(|| find(&format!("{}{}", NS_PREFIX, bare)))
}

impl<S: BuildHasher> ConfigLookup for HashMap<String, String, S> {
    fn get(&self, key: &str) -> Option<String> {
        find_in(key, |k| HashMap::get(self, k).cloned())
    }
}

impl ConfigLookup for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        find_in(key, |k| BTreeMap::get(self, k).cloned())
    }
}

impl<T: ConfigLookup + ?Sized> ConfigLookup for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

impl<T: ConfigLookup + ?Sized> ConfigLookup for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// Adapts a closure into a [`ConfigLookup`].
///
/// The closure receives the key with the namespace prefix stripped.
pub struct FnLookup<F>(pub F);

impl<F> ConfigLookup for FnLookup<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        (self.0)(normalize_key(key))
    }
}

/// Lookup with nothing set.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyLookup;

impl ConfigLookup for EmptyLookup {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }
}
