//! Resolver behavior through the public facade.

use crate::common::{init_tracing, jta_lookup};
use txconf::{resolve, EmptyLookup, TransactionMode};

#[test]
fn xa_true_with_jta_unset_is_xa() {
    init_tracing();
    assert_eq!(resolve("true", &jta_lookup(None)), TransactionMode::Xa);
}

#[test]
fn xa_false_with_jta_unset_is_enabled() {
    assert_eq!(resolve("false", &jta_lookup(None)), TransactionMode::Enabled);
}

#[test]
fn jta_false_overrides_xa() {
    assert_eq!(
        resolve("true", &jta_lookup(Some("false"))),
        TransactionMode::Disabled
    );
}

#[test]
fn garbage_xa_reads_as_false() {
    assert_eq!(resolve("garbage", &jta_lookup(None)), TransactionMode::Enabled);
}

#[test]
fn both_flags_parse_case_insensitively() {
    assert_eq!(resolve("TRUE", &jta_lookup(Some("TRUE"))), TransactionMode::Xa);
}

#[test]
fn repeated_calls_agree() {
    let lookup = jta_lookup(Some("true"));
    let modes: Vec<TransactionMode> = (0..10).map(|_| resolve("TrUe", &lookup)).collect();
    assert!(modes.iter().all(|m| *m == TransactionMode::Xa));
}

#[test]
fn resolves_concurrently() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let raw = if i % 2 == 0 { "true" } else { "false" };
                resolve(raw, &EmptyLookup)
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let expected = if i % 2 == 0 {
            TransactionMode::Xa
        } else {
            TransactionMode::Enabled
        };
        assert_eq!(handle.join().unwrap(), expected);
    }
}
