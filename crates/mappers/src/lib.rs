//! Property mappers for txconf
//!
//! A property mapper binds a user-facing option to a downstream key and
//! rewrites the option's raw value on the way. The transaction mappers turn
//! the `transaction-xa-enabled` and `transaction-jta-enabled` flags into the
//! single mode string read by the datasource layer:
//!
//! ```
//! use std::collections::HashMap;
//! use txconf_mappers::{resolve, TransactionMode};
//!
//! let lookup: HashMap<String, String> = HashMap::new();
//! assert_eq!(resolve("true", &lookup), TransactionMode::Xa);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod mapper;
pub mod mode;
pub mod transaction;

pub use mapper::{materialize, PropertyMapper, PropertyMapperBuilder, Transformer};
pub use mode::TransactionMode;
pub use transaction::{
    materialize_transactions, resolve, transaction_mappers, transaction_transformer,
    TransactionSettings, DATASOURCE_TRANSACTIONS_TARGET, JTA_ENABLED_KEY, TRANSACTIONS_TARGET,
};
