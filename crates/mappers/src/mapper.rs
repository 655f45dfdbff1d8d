//! Property mappers
//!
//! A [`PropertyMapper`] reads one declared option, optionally rewrites its
//! raw value through a [`Transformer`], and writes the result to a target
//! key. Wildcard options (keys with a `<name>` placeholder) map every
//! configured instance to a target built from the same placeholder.

use std::collections::BTreeMap;
use std::fmt;

use txconf_config::ConfigChain;
use txconf_core::{ConfigLookup, OptionSpec};

/// Rewrites an option's raw value. Extra keys are read through the lookup.
pub type Transformer = fn(&str, &dyn ConfigLookup) -> String;

/// Binding from an option to a target key.
#[derive(Clone)]
pub struct PropertyMapper {
    option: &'static OptionSpec,
    target: Option<String>,
    transformer: Option<Transformer>,
}

impl PropertyMapper {
    /// Start a mapper for a declared option.
    pub fn from_option(option: &'static OptionSpec) -> PropertyMapperBuilder {
        PropertyMapperBuilder {
            mapper: PropertyMapper {
                option,
                target: None,
                transformer: None,
            },
        }
    }

    /// The mapped option.
    pub fn option(&self) -> &'static OptionSpec {
        self.option
    }

    /// Target key or key template, if the mapper writes anywhere.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Apply the transformer, or pass the value through.
    pub fn transform(&self, raw: &str, lookup: &dyn ConfigLookup) -> String {
        match self.transformer {
            Some(transformer) => transformer(raw, lookup),
            None => raw.to_string(),
        }
    }

    /// Map a plain option.
    ///
    /// Reads the option from `lookup`, falling back to its declared default,
    /// and returns `(target, value)`. Returns `None` for wildcard options,
    /// for mappers without a target, and when the option has neither a
    /// value nor a default.
    pub fn map(&self, lookup: &dyn ConfigLookup) -> Option<(String, String)> {
        if self.option.is_wildcard() {
            return None;
        }
        let target = self.target.as_ref()?;
        let raw = lookup
            .get(self.option.key())
            .or_else(|| self.option.default_value().map(str::to_string))?;
        let value = self.transform(&raw, lookup);
        tracing::trace!(
            option = self.option.key(),
            to = %target,
            value = %value,
            "mapped option"
        );
        Some((target.clone(), value))
    }

    /// Map every configured instance of a wildcard option.
    ///
    /// `keys` are the concrete keys known to the configuration; those that
    /// match the option produce one `(target, value)` pair each, with the
    /// captured name substituted into the target template.
    pub fn map_wildcard<'k, I>(
        &self,
        lookup: &dyn ConfigLookup,
        keys: I,
    ) -> Vec<(String, String)>
    where
        I: IntoIterator<Item = &'k str>,
    {
        let (Some(template), Some(placeholder)) =
            (self.target.as_deref(), self.option.wildcard_name())
        else {
            return Vec::new();
        };
        let placeholder = format!("<{}>", placeholder);

        keys.into_iter()
            .filter_map(|key| {
                let name = self.option.matches(key)?;
                let raw = lookup.get(key)?;
                let target = template.replace(&placeholder, name);
                let value = self.transform(&raw, lookup);
                tracing::trace!(
                    option = key,
                    to = %target,
                    value = %value,
                    "mapped wildcard option"
                );
                Some((target, value))
            })
            .collect()
    }
}

impl fmt::Debug for PropertyMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyMapper")
            .field("option", &self.option.key())
            .field("target", &self.target)
            .field("transformer", &self.transformer.is_some())
            .finish()
    }
}

/// Builder for [`PropertyMapper`].
#[derive(Debug, Clone)]
pub struct PropertyMapperBuilder {
    mapper: PropertyMapper,
}

impl PropertyMapperBuilder {
    /// Key the mapped value is written to. For wildcard options the key may
    /// contain the option's placeholder, e.g. `<datasource>`.
    pub fn to(mut self, target: impl Into<String>) -> Self {
        self.mapper.target = Some(target.into());
        self
    }

    /// Rewrite the raw value before it is written.
    pub fn transformer(mut self, transformer: Transformer) -> Self {
        self.mapper.transformer = Some(transformer);
        self
    }

    /// Finish the mapper.
    pub fn build(self) -> PropertyMapper {
        self.mapper
    }
}

/// Run mappers against a chain and collect every target value.
///
/// When two mappers write the same target the later one wins.
pub fn materialize(
    mappers: &[PropertyMapper],
    chain: &ConfigChain,
) -> BTreeMap<String, String> {
    let keys = chain.keys();
    let mut out = BTreeMap::new();
    for mapper in mappers {
        if mapper.option().is_wildcard() {
            out.extend(mapper.map_wildcard(chain, keys.iter().map(String::as_str)));
        } else if let Some((target, value)) = mapper.map(chain) {
            out.insert(target, value);
        }
    }
    tracing::debug!(count = out.len(), "materialized mapped options");
    out
}
