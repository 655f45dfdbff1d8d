//! Transaction mode resolution and the transaction mapper group
//!
//! The datasource layer takes a single transaction setting, while users
//! configure two flags. Resolution order:
//!
//! 1. `transaction-jta-enabled` false (looked up, default true) -> `disabled`
//! 2. XA flag true -> `xa`
//! 3. otherwise -> `enabled`
//!
//! The per-datasource XA flag goes through the same resolution. JTA is a
//! server-wide switch, so `disabled` applies to every datasource.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

use txconf_config::ConfigChain;
use txconf_core::{
    bool_or, parse_bool, ConfigLookup, TRANSACTION_JTA_ENABLED, TRANSACTION_XA_ENABLED,
    TRANSACTION_XA_ENABLED_DATASOURCE,
};

use crate::mapper::{materialize, PropertyMapper};
use crate::mode::TransactionMode;

/// Key read through the lookup to decide whether JTA is on.
pub const JTA_ENABLED_KEY: &str = "transaction-jta-enabled";

/// Datasource setting written for the default datasource.
pub const TRANSACTIONS_TARGET: &str = "quarkus.datasource.jdbc.transactions";

/// Datasource setting written per named datasource.
pub const DATASOURCE_TRANSACTIONS_TARGET: &str =
    "quarkus.datasource.\"<datasource>\".jdbc.transactions";

/// Resolve the transaction mode for one XA flag.
///
/// `xa_enabled_raw` is parsed leniently: only `"true"` (any case) is true.
/// JTA defaults to enabled when `lookup` has no value for
/// [`JTA_ENABLED_KEY`]. Never fails.
pub fn resolve<L: ConfigLookup + ?Sized>(xa_enabled_raw: &str, lookup: &L) -> TransactionMode {
    let xa_enabled = parse_bool(xa_enabled_raw);
    let jta_enabled = bool_or(lookup, JTA_ENABLED_KEY, true);
    tracing::trace!(xa_enabled, jta_enabled, "resolving transaction mode");

    let mode = if !jta_enabled {
        TransactionMode::Disabled
    } else if xa_enabled {
        TransactionMode::Xa
    } else {
        TransactionMode::Enabled
    };
    tracing::debug!(mode = %mode, "resolved transaction mode");
    mode
}

/// [`resolve`] as a mapper transformer.
pub fn transaction_transformer(raw: &str, lookup: &dyn ConfigLookup) -> String {
    resolve(raw, lookup).as_str().to_string()
}

static TRANSACTION_MAPPERS: Lazy<Vec<PropertyMapper>> = Lazy::new(|| {
    vec![
        PropertyMapper::from_option(&TRANSACTION_XA_ENABLED)
            .to(TRANSACTIONS_TARGET)
            .transformer(transaction_transformer)
            .build(),
        PropertyMapper::from_option(&TRANSACTION_JTA_ENABLED).build(),
        PropertyMapper::from_option(&TRANSACTION_XA_ENABLED_DATASOURCE)
            .to(DATASOURCE_TRANSACTIONS_TARGET)
            .transformer(transaction_transformer)
            .build(),
    ]
});

/// The transaction mapper group.
///
/// The JTA mapper has no target: JTA only feeds into the other two through
/// the lookup.
pub fn transaction_mappers() -> &'static [PropertyMapper] {
    &TRANSACTION_MAPPERS
}

/// Every transaction setting the datasource layer should receive.
pub fn materialize_transactions(chain: &ConfigChain) -> BTreeMap<String, String> {
    materialize(transaction_mappers(), chain)
}

/// Typed view of the resolved transaction settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionSettings {
    /// Mode of the default datasource.
    pub default_mode: TransactionMode,
    /// Modes of named datasources that set their own XA flag.
    pub datasources: BTreeMap<String, TransactionMode>,
}

impl TransactionSettings {
    /// Resolve settings from a chain.
    ///
    /// An unset XA flag counts as the declared default (`false`).
    pub fn from_chain(chain: &ConfigChain) -> Self {
        let xa_default = TRANSACTION_XA_ENABLED.default_value().unwrap_or("false");
        let xa_raw = chain
            .get(TRANSACTION_XA_ENABLED.key())
            .unwrap_or_else(|| xa_default.to_string());
        let default_mode = resolve(&xa_raw, chain);

        let mut datasources = BTreeMap::new();
        for key in chain.keys() {
            if let Some(name) = TRANSACTION_XA_ENABLED_DATASOURCE.matches(&key) {
                if let Some(raw) = chain.get(&key) {
                    datasources.insert(name.to_string(), resolve(&raw, chain));
                }
            }
        }

        Self {
            default_mode,
            datasources,
        }
    }

    /// Mode for a named datasource, falling back to the default mode.
    pub fn mode_for(&self, datasource: &str) -> TransactionMode {
        self.datasources
            .get(datasource)
            .copied()
            .unwrap_or(self.default_mode)
    }
}
