//! spend-api
//!
//! A hexagonal-architecture REST service recording financial accounts and
//! transactions into MariaDB.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                   API Layer                  │
//! │     HTTP handlers, routing, JSON codecs      │
//! ├─────────────────────────────────────────────┤
//! │               Application Layer              │
//! │     Use-case services, shared app state      │
//! ├─────────────────────────────────────────────┤
//! │                 Domain Layer                 │
//! │    Ports, entities, errors (no adapters)     │
//! ├─────────────────────────────────────────────┤
//! │             Infrastructure Layer             │
//! │     MariaDB executor, store adapters         │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Data flows one way: an HTTP request is decoded by a REST adapter, handed
//! to a domain service, persisted through a store port by a SQL adapter, and
//! the generated identifier travels back up the same path.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use spend_api::api::create_router;
//! use spend_api::app::AppState;
//! use spend_api::config::Config;
//! use spend_api::domain::{AccountStore, SqlExecutor, TransactionStore};
//! use spend_api::infra::{MariaDbExecutor, SqlAccountStore, SqlTransactionStore};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let executor: Arc<dyn SqlExecutor> =
//!         Arc::new(MariaDbExecutor::with_defaults(&config).await?);
//!
//!     let accounts: Arc<dyn AccountStore> =
//!         Arc::new(SqlAccountStore::new(Arc::clone(&executor)));
//!     let transactions: Arc<dyn TransactionStore> =
//!         Arc::new(SqlTransactionStore::new(Arc::clone(&executor)));
//!
//!     let state = Arc::new(AppState::new(accounts, transactions, executor));
//!     let router = create_router(state);
//!     axum::serve(listener, router).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod infra;

// Test utilities are available in tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
