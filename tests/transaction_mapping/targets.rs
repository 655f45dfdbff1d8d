//! Materialized datasource settings.

use crate::common::{chain, map_chain, write_config};
use txconf::{
    materialize_transactions, TransactionMode, TransactionSettings, DATASOURCE_TRANSACTIONS_TARGET,
    TRANSACTIONS_TARGET,
};

fn datasource_target(name: &str) -> String {
    DATASOURCE_TRANSACTIONS_TARGET.replace("<datasource>", name)
}

#[test]
fn default_target_is_always_written() {
    let out = materialize_transactions(&map_chain(&[]));
    assert_eq!(out.len(), 1);
    assert_eq!(out[TRANSACTIONS_TARGET], "enabled");
}

#[test]
fn file_datasource_tables_become_templated_targets() {
    let (_dir, path) = write_config(
        r#"
transaction-xa-enabled = true

[datasource.users]
xa-enabled = false

[datasource.audit]
xa-enabled = true
"#,
    );
    let out = materialize_transactions(&chain(&[], Some(&path)));
    assert_eq!(out[TRANSACTIONS_TARGET], "xa");
    assert_eq!(out[&datasource_target("users")], "enabled");
    assert_eq!(out[&datasource_target("audit")], "xa");
    assert_eq!(
        datasource_target("users"),
        "quarkus.datasource.\"users\".jdbc.transactions"
    );
}

#[test]
fn env_datasource_variable_becomes_templated_target() {
    let out = materialize_transactions(&chain(
        &[("KC_TRANSACTION_XA_ENABLED_REPORTS", "true")],
        None,
    ));
    assert_eq!(out[&datasource_target("reports")], "xa");
    assert_eq!(out[TRANSACTIONS_TARGET], "enabled");
}

#[test]
fn jta_off_disables_every_datasource() {
    let chain = map_chain(&[
        ("transaction-jta-enabled", "false"),
        ("transaction-xa-enabled", "true"),
        ("transaction-xa-enabled-users", "true"),
    ]);
    let out = materialize_transactions(&chain);
    assert_eq!(out.len(), 2);
    assert!(out.values().all(|v| v == "disabled"));

    let settings = TransactionSettings::from_chain(&chain);
    assert_eq!(settings.mode_for("users"), TransactionMode::Disabled);
}

#[test]
fn materialized_values_parse_back() {
    let chain = map_chain(&[("transaction-xa-enabled-users", "TRUE")]);
    let out = materialize_transactions(&chain);
    let settings = TransactionSettings::from_chain(&chain);
    for (name, mode) in &settings.datasources {
        let value: TransactionMode = out[&datasource_target(name)].parse().unwrap();
        assert_eq!(value, *mode);
    }
    let default: TransactionMode = out[TRANSACTIONS_TARGET].parse().unwrap();
    assert_eq!(default, settings.default_mode);
}
