//! Concrete database adapters.
//!
//! This module contains the production executor and the store adapters that
//! implement the persistence ports defined in the domain layer.

pub mod mariadb;
pub mod store;

pub use mariadb::{MariaDbConfig, MariaDbExecutor};
pub use store::{SqlAccountStore, SqlTransactionStore};
