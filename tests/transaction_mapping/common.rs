//! Shared helpers for the transaction mapping tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Once;

use tempfile::TempDir;
use txconf::{ConfigChain, ConfigLookup, EnvSource, FileSource, FnLookup, MapSource};

static INIT_TRACING: Once = Once::new();

/// Install a test subscriber once so trace output shows up with `--nocapture`.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}

/// Lookup answering only `transaction-jta-enabled`.
pub fn jta_lookup(value: Option<&'static str>) -> impl ConfigLookup {
    FnLookup(move |key: &str| {
        if key == "transaction-jta-enabled" {
            value.map(str::to_string)
        } else {
            None
        }
    })
}

/// Write `content` as `txconf.toml` in a fresh directory.
pub fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(txconf::CONFIG_FILE_NAME);
    std::fs::write(&path, content).unwrap();
    (dir, path)
}

/// Chain of env pairs, an optional file and the defaults.
pub fn chain(env: &[(&str, &str)], file: Option<&PathBuf>) -> ConfigChain {
    let mut chain = ConfigChain::new().with_source(EnvSource::from_vars(env.iter().copied()));
    if let Some(path) = file {
        chain = chain.with_source(FileSource::open(path).unwrap());
    }
    chain.with_defaults()
}

/// Chain of a single in-memory source plus defaults.
pub fn map_chain(pairs: &[(&str, &str)]) -> ConfigChain {
    ConfigChain::new()
        .with_source(MapSource::from_pairs("test", 100, pairs.iter().copied()))
        .with_defaults()
}
