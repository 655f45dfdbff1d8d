//! Option registry and help text.

use txconf::{find_option, render_help, transaction_mappers, visible_options};

#[test]
fn help_shows_visible_transaction_options() {
    let help = render_help();
    assert!(help.contains("Transaction:"));
    assert!(help.contains("--transaction-xa-enabled <true|false>"));
    assert!(!help.contains("--transaction-jta-enabled"));
}

#[test]
fn every_mapper_option_is_registered() {
    for mapper in transaction_mappers() {
        let found = find_option(mapper.option().key()).unwrap();
        assert_eq!(found.key(), mapper.option().key());
    }
}

#[test]
fn visible_options_exclude_hidden() {
    assert!(visible_options().all(|o| !o.is_hidden()));
    assert!(find_option("kc.transaction-jta-enabled").unwrap().is_hidden());
}
