//! Infrastructure layer implementations.

pub mod database;
pub mod observability;

pub use database::{MariaDbConfig, MariaDbExecutor, SqlAccountStore, SqlTransactionStore};
pub use observability::init_tracing;
