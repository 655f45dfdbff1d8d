//! Transaction mode
//!
//! The value written to the datasource transaction setting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use txconf_core::ConfigError;

/// How datasources take part in transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionMode {
    /// JTA is off; the server manages transactions locally.
    Disabled,
    /// Two-phase commit through XA datasources.
    Xa,
    /// JTA with non-XA datasources.
    Enabled,
}

impl TransactionMode {
    /// The downstream string: `"disabled"`, `"xa"` or `"enabled"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionMode::Disabled => "disabled",
            TransactionMode::Xa => "xa",
            TransactionMode::Enabled => "enabled",
        }
    }
}

impl fmt::Display for TransactionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse, for reading a materialized value back.
impl FromStr for TransactionMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "disabled" => Ok(TransactionMode::Disabled),
            "xa" => Ok(TransactionMode::Xa),
            "enabled" => Ok(TransactionMode::Enabled),
            other => Err(ConfigError::UnknownTransactionMode(other.to_string())),
        }
    }
}
