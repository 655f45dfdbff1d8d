//! Precedence between environment, file and defaults.

use crate::common::{chain, write_config};
use txconf::{ConfigError, ConfigLookup, FileSource, TransactionMode, TransactionSettings};

#[test]
fn defaults_alone_resolve_to_enabled() {
    let chain = chain(&[], None);
    assert_eq!(chain.get("transaction-xa-enabled"), Some("false".to_string()));
    assert_eq!(chain.get("transaction-jta-enabled"), Some("true".to_string()));
    assert_eq!(
        TransactionSettings::from_chain(&chain).default_mode,
        TransactionMode::Enabled
    );
}

#[test]
fn file_overrides_defaults() {
    let (_dir, path) = write_config("transaction-xa-enabled = true\n");
    let chain = chain(&[], Some(&path));
    assert_eq!(
        chain.get_with_source("transaction-xa-enabled").map(|(v, _)| v),
        Some("true".to_string())
    );
    assert_eq!(
        TransactionSettings::from_chain(&chain).default_mode,
        TransactionMode::Xa
    );
}

#[test]
fn env_overrides_file() {
    let (_dir, path) = write_config("transaction-xa-enabled = true\n");
    let chain = chain(&[("KC_TRANSACTION_XA_ENABLED", "false")], Some(&path));
    assert_eq!(
        chain.get_with_source("transaction-xa-enabled"),
        Some(("false".to_string(), "env"))
    );
    assert_eq!(
        TransactionSettings::from_chain(&chain).default_mode,
        TransactionMode::Enabled
    );
}

#[test]
fn jta_from_env_disables_file_xa() {
    let (_dir, path) = write_config("transaction-xa-enabled = true\n");
    let chain = chain(&[("KC_TRANSACTION_JTA_ENABLED", "false")], Some(&path));
    assert_eq!(
        TransactionSettings::from_chain(&chain).default_mode,
        TransactionMode::Disabled
    );
}

#[test]
fn namespaced_file_key_reaches_resolver() {
    let (_dir, path) = write_config("\"kc.transaction-jta-enabled\" = false\n");
    let chain = chain(&[], Some(&path));
    assert_eq!(chain.get("kc.transaction-jta-enabled"), Some("false".to_string()));
    assert_eq!(
        TransactionSettings::from_chain(&chain).default_mode,
        TransactionMode::Disabled
    );
}

#[test]
fn broken_file_reports_path() {
    let (_dir, path) = write_config("transaction-xa-enabled = = true\n");
    let err = FileSource::open(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains(&path.display().to_string()));
}
