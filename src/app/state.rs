//! Application state management.
//!
//! This module provides the shared application state that is
//! accessible to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::domain::{AccountStore, SqlExecutor, TransactionStore};

use super::service::{AccountService, TransactionService};

/// Shared application state for the Axum web server.
///
/// All contained types are wrapped in `Arc` and implement `Send + Sync`,
/// making `AppState` safe to share across async tasks. Handlers access the
/// services without knowing their concrete persistence implementations.
#[derive(Clone)]
pub struct AppState {
    /// Use-case service for accounts.
    pub account_service: Arc<AccountService>,

    /// Use-case service for transactions.
    pub transaction_service: Arc<TransactionService>,

    /// Database executor, used by the health endpoint.
    pub executor: Arc<dyn SqlExecutor>,
}

impl AppState {
    /// Creates a new `AppState`, wiring the services to the provided ports.
    #[must_use]
    pub fn new(
        account_store: Arc<dyn AccountStore>,
        transaction_store: Arc<dyn TransactionStore>,
        executor: Arc<dyn SqlExecutor>,
    ) -> Self {
        Self {
            account_service: Arc::new(AccountService::new(account_store)),
            transaction_service: Arc::new(TransactionService::new(transaction_store)),
            executor,
        }
    }
}
