//! Global option registry
//!
//! Every option the server understands is declared here once, on first
//! access, and is read-only from then on.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::options::{OptionBuilder, OptionCategory, OptionSpec, ValueType};

// =============================================================================
// Transaction Options
// =============================================================================

/// Use XA datasources for the default datasource.
pub static TRANSACTION_XA_ENABLED: Lazy<OptionSpec> = Lazy::new(|| {
    OptionBuilder::new("transaction-xa-enabled", ValueType::Bool)
        .category(OptionCategory::Transaction)
        .description("If set to true, XA datasources will be used.")
        .build_time(true)
        .default_value(false)
        .build()
});

/// Whether distributed (JTA) transactions are supported at all.
pub static TRANSACTION_JTA_ENABLED: Lazy<OptionSpec> = Lazy::new(|| {
    OptionBuilder::new("transaction-jta-enabled", ValueType::Bool)
        .category(OptionCategory::Transaction)
        .description(
            "Set if distributed transactions are supported. If set to false, transactions are \
             managed by the server and can not be joined if multiple data sources are used. By \
             default, distributed transactions are enabled and only XA data sources can be used.",
        )
        .build_time(true)
        .default_value(true)
        .hidden()
        .build()
});

/// Use XA for one named datasource.
pub static TRANSACTION_XA_ENABLED_DATASOURCE: Lazy<OptionSpec> = Lazy::new(|| {
    OptionBuilder::new("transaction-xa-enabled-<datasource>", ValueType::Bool)
        .category(OptionCategory::Transaction)
        .description("If set to true, XA will be used for the named datasource.")
        .build_time(true)
        .default_value(false)
        .build()
});

/// Registry of all declared options, in declaration order.
static OPTIONS: Lazy<Vec<&'static OptionSpec>> = Lazy::new(|| {
    let options: Vec<&'static OptionSpec> = vec![
        &*TRANSACTION_XA_ENABLED,
        &*TRANSACTION_JTA_ENABLED,
        &*TRANSACTION_XA_ENABLED_DATASOURCE,
    ];
    tracing::debug!(count = options.len(), "option registry initialized");
    options
});

/// All declared options, hidden ones included.
pub fn all_options() -> impl Iterator<Item = &'static OptionSpec> {
    OPTIONS.iter().copied()
}

/// Options shown to users.
pub fn visible_options() -> impl Iterator<Item = &'static OptionSpec> {
    all_options().filter(|option| !option.is_hidden())
}

/// Find the option a concrete key belongs to.
///
/// Accepts `kc.`-prefixed keys. Exact matches take precedence over wildcard
/// matches, so `transaction-xa-enabled` never resolves to the per-datasource
/// option.
pub fn find_option(key: &str) -> Option<&'static OptionSpec> {
    all_options()
        .filter(|option| !option.is_wildcard())
        .find(|option| option.matches(key).is_some())
        .or_else(|| {
            all_options()
                .filter(|option| option.is_wildcard())
                .find(|option| option.matches(key).is_some())
        })
}

/// Render help text for the visible options, grouped by category.
pub fn render_help() -> String {
    let mut by_category: BTreeMap<OptionCategory, Vec<&OptionSpec>> = BTreeMap::new();
    for option in visible_options() {
        by_category.entry(option.category()).or_default().push(option);
    }

    let mut out = String::new();
    for (category, options) in by_category {
        let _ = writeln!(out, "{}:", category);
        for option in options {
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "  --{} <{}>",
                option.key(),
                option.value_type().param_label()
            );
            let mut text = option.description().to_string();
            if let Some(default) = option.default_value() {
                let _ = write!(text, " Default: {}.", default);
            }
            if option.is_build_time() {
                text.push_str(" (build time)");
            }
            let _ = writeln!(out, "      {}", text.trim());
        }
        let _ = writeln!(out);
    }
    out
}
