//! Option declarations
//!
//! An [`OptionSpec`] is the user-facing half of a configuration setting: its
//! key, the category it is listed under, its description and default, and
//! whether it is fixed at build time. Declarations are built once with
//! [`OptionBuilder`] and never change afterwards.

use std::fmt;

/// Category an option is listed under in help output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OptionCategory {
    /// General server settings
    General,
    /// Database and datasource settings
    Database,
    /// Transaction handling
    Transaction,
}

impl OptionCategory {
    /// Heading used when listing the category.
    pub fn heading(&self) -> &'static str {
        match self {
            OptionCategory::General => "General",
            OptionCategory::Database => "Database",
            OptionCategory::Transaction => "Transaction",
        }
    }
}

impl fmt::Display for OptionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.heading())
    }
}

/// Type of value an option accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// `true` or `false`
    Bool,
    /// Free-form string
    String,
}

impl ValueType {
    /// Placeholder shown after the option name in help output.
    pub fn param_label(&self) -> &'static str {
        match self {
            ValueType::Bool => "true|false",
            ValueType::String => "value",
        }
    }
}

/// A declared configuration option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    key: String,
    value_type: ValueType,
    category: OptionCategory,
    description: String,
    default_value: Option<String>,
    build_time: bool,
    hidden: bool,
}

impl OptionSpec {
    /// Option key without namespace prefix, e.g. `transaction-xa-enabled`.
    ///
    /// Wildcard options carry a `<name>` placeholder in their key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Type of value the option accepts.
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Help category.
    pub fn category(&self) -> OptionCategory {
        self.category
    }

    /// Help text.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Default as a raw string, if the option has one.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// Whether the option is fixed when the server is built.
    pub fn is_build_time(&self) -> bool {
        self.build_time
    }

    /// Whether the option is left out of user-facing listings.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Whether the key contains a `<name>` placeholder.
    pub fn is_wildcard(&self) -> bool {
        self.wildcard_parts().is_some()
    }

    /// Name of the placeholder, e.g. `datasource` for
    /// `transaction-xa-enabled-<datasource>`.
    pub fn wildcard_name(&self) -> Option<&str> {
        self.wildcard_parts().map(|(_, name, _)| name)
    }

    /// Match a concrete key against this option.
    ///
    /// For a plain option returns `Some("")` on an exact match. For a
    /// wildcard option returns the captured placeholder value, which is
    /// never empty. The namespace prefix on `key` is ignored.
    pub fn matches<'k>(&self, key: &'k str) -> Option<&'k str> {
        let key = crate::lookup::normalize_key(key);
        match self.wildcard_parts() {
            None => (key == self.key).then_some(""),
            Some((prefix, _, suffix)) => {
                let rest = key.strip_prefix(prefix)?;
                let captured = rest.strip_suffix(suffix)?;
                (!captured.is_empty()).then_some(captured)
            }
        }
    }

    /// Concrete key for a wildcard option, e.g.
    /// `transaction-xa-enabled-users` for `users`.
    pub fn key_for(&self, name: &str) -> String {
        match self.wildcard_parts() {
            Some((prefix, _, suffix)) => format!("{}{}{}", prefix, name, suffix),
            None => self.key.clone(),
        }
    }

    fn wildcard_parts(&self) -> Option<(&str, &str, &str)> {
        let open = self.key.find('<')?;
        let close = open + self.key[open..].find('>')?;
        Some((
            &self.key[..open],
            &self.key[open + 1..close],
            &self.key[close + 1..],
        ))
    }
}

/// Builder for [`OptionSpec`].
///
/// ```
/// use txconf_core::{OptionBuilder, OptionCategory, ValueType};
///
/// let option = OptionBuilder::new("transaction-xa-enabled", ValueType::Bool)
///     .category(OptionCategory::Transaction)
///     .description("If set to true, XA datasources will be used.")
///     .build_time(true)
///     .default_value(false)
///     .build();
/// assert_eq!(option.default_value(), Some("false"));
/// ```
#[derive(Debug, Clone)]
pub struct OptionBuilder {
    spec: OptionSpec,
}

impl OptionBuilder {
    /// Start a declaration for `key`.
    pub fn new(key: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            spec: OptionSpec {
                key: key.into(),
                value_type,
                category: OptionCategory::General,
                description: String::new(),
                default_value: None,
                build_time: false,
                hidden: false,
            },
        }
    }

    /// Set the help category.
    pub fn category(mut self, category: OptionCategory) -> Self {
        self.spec.category = category;
        self
    }

    /// Set the help text.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.spec.description = description.into();
        self
    }

    /// Mark the option as fixed at build time.
    pub fn build_time(mut self, build_time: bool) -> Self {
        self.spec.build_time = build_time;
        self
    }

    /// Set the default value.
    pub fn default_value(mut self, value: impl ToString) -> Self {
        self.spec.default_value = Some(value.to_string());
        self
    }

    /// Leave the option out of user-facing listings.
    pub fn hidden(mut self) -> Self {
        self.spec.hidden = true;
        self
    }

    /// Finish the declaration.
    pub fn build(self) -> OptionSpec {
        self.spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wildcard() -> OptionSpec {
        OptionBuilder::new("transaction-xa-enabled-<datasource>", ValueType::Bool)
            .default_value(false)
            .build()
    }

    #[test]
    fn builder_defaults() {
        let option = OptionBuilder::new("some-option", ValueType::String).build();
        assert_eq!(option.key(), "some-option");
        assert_eq!(option.category(), OptionCategory::General);
        assert_eq!(option.default_value(), None);
        assert!(!option.is_build_time());
        assert!(!option.is_hidden());
        assert!(!option.is_wildcard());
    }

    #[test]
    fn builder_sets_every_field() {
        let option = OptionBuilder::new("transaction-jta-enabled", ValueType::Bool)
            .category(OptionCategory::Transaction)
            .description("Set if distributed transactions are supported.")
            .build_time(true)
            .default_value(true)
            .hidden()
            .build();
        assert_eq!(option.category(), OptionCategory::Transaction);
        assert_eq!(option.default_value(), Some("true"));
        assert!(option.is_build_time());
        assert!(option.is_hidden());
        assert_eq!(option.value_type().param_label(), "true|false");
    }

    #[test]
    fn plain_option_matches_exact_key_only() {
        let option = OptionBuilder::new("transaction-xa-enabled", ValueType::Bool).build();
        assert_eq!(option.matches("transaction-xa-enabled"), Some(""));
        assert_eq!(option.matches("kc.transaction-xa-enabled"), Some(""));
        assert_eq!(option.matches("transaction-xa-enabled-users"), None);
        assert_eq!(option.wildcard_name(), None);
    }

    #[test]
    fn wildcard_option_captures_name() {
        let option = wildcard();
        assert!(option.is_wildcard());
        assert_eq!(option.wildcard_name(), Some("datasource"));
        assert_eq!(option.matches("transaction-xa-enabled-users"), Some("users"));
        assert_eq!(option.matches("kc.transaction-xa-enabled-audit-db"), Some("audit-db"));
    }

    #[test]
    fn wildcard_option_rejects_base_key_and_empty_name() {
        let option = wildcard();
        assert_eq!(option.matches("transaction-xa-enabled"), None);
        assert_eq!(option.matches("transaction-xa-enabled-"), None);
        assert_eq!(option.matches("transaction-jta-enabled"), None);
    }

    #[test]
    fn key_for_fills_placeholder() {
        assert_eq!(wildcard().key_for("users"), "transaction-xa-enabled-users");
        let plain = OptionBuilder::new("transaction-xa-enabled", ValueType::Bool).build();
        assert_eq!(plain.key_for("users"), "transaction-xa-enabled");
    }

    #[test]
    fn category_headings() {
        assert_eq!(OptionCategory::Transaction.to_string(), "Transaction");
        assert_eq!(OptionCategory::Database.heading(), "Database");
    }
}
