//! Mock implementations for testing.
//!
//! These mocks provide in-memory implementations of the domain ports that
//! can be configured to simulate success, failure, and edge cases such as a
//! missing generated key.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

use crate::domain::{
    Account, AccountStore, AppError, DatabaseError, ExecResult, PersistenceError, SqlExecutor,
    SqlParam, Transaction, TransactionStore,
};

/// Configuration for mock behavior.
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// If true, operations will fail.
    pub should_fail: bool,
    /// Custom error message for failures.
    pub error_message: Option<String>,
}

impl MockConfig {
    /// Creates a config that always succeeds.
    #[must_use]
    pub fn success() -> Self {
        Self::default()
    }

    /// Creates a config that always fails.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            should_fail: true,
            error_message: Some(message.into()),
        }
    }

    fn failure_message(&self) -> String {
        self.error_message
            .clone()
            .unwrap_or_else(|| "Mock database error".to_string())
    }
}

/// Mock account store assigning sequential identifiers.
pub struct MockAccountStore {
    config: MockConfig,
    next_id: AtomicU64,
    incoming_ids: Mutex<Vec<String>>,
    saved: Mutex<Vec<Account>>,
    call_count: AtomicU64,
}

impl MockAccountStore {
    /// Creates a new mock with default (success) configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(MockConfig::success())
    }

    /// Creates a new mock with the given configuration.
    #[must_use]
    pub fn with_config(config: MockConfig) -> Self {
        Self {
            config,
            next_id: AtomicU64::new(1),
            incoming_ids: Mutex::new(Vec::new()),
            saved: Mutex::new(Vec::new()),
            call_count: AtomicU64::new(0),
        }
    }

    /// Creates a mock whose next assigned identifier is `id`.
    #[must_use]
    pub fn with_next_id(id: u64) -> Self {
        let mock = Self::new();
        mock.next_id.store(id, Ordering::Relaxed);
        mock
    }

    /// Creates a mock that always fails.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_config(MockConfig::failure(message))
    }

    /// Gets the number of save attempts.
    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Identifier values observed on incoming entities at save time.
    pub fn incoming_ids(&self) -> Vec<String> {
        self.incoming_ids.lock().unwrap().clone()
    }

    /// Gets all successfully saved accounts.
    pub fn saved_accounts(&self) -> Vec<Account> {
        self.saved.lock().unwrap().clone()
    }
}

impl Default for MockAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountStore for MockAccountStore {
    async fn save_account(&self, account: &mut Account) -> Result<(), AppError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);

        if self.config.should_fail {
            return Err(PersistenceError::SaveAccount(DatabaseError::Query(
                self.config.failure_message(),
            ))
            .into());
        }

        self.incoming_ids.lock().unwrap().push(account.id.clone());
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        account.id = id.to_string();
        self.saved.lock().unwrap().push(account.clone());
        Ok(())
    }
}

/// Mock transaction store assigning sequential identifiers.
pub struct MockTransactionStore {
    config: MockConfig,
    next_id: AtomicU64,
    saved: Mutex<Vec<Transaction>>,
    call_count: AtomicU64,
}

impl MockTransactionStore {
    /// Creates a new mock with default (success) configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(MockConfig::success())
    }

    /// Creates a new mock with the given configuration.
    #[must_use]
    pub fn with_config(config: MockConfig) -> Self {
        Self {
            config,
            next_id: AtomicU64::new(1),
            saved: Mutex::new(Vec::new()),
            call_count: AtomicU64::new(0),
        }
    }

    /// Creates a mock whose next assigned identifier is `id`.
    #[must_use]
    pub fn with_next_id(id: u64) -> Self {
        let mock = Self::new();
        mock.next_id.store(id, Ordering::Relaxed);
        mock
    }

    /// Creates a mock that always fails.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_config(MockConfig::failure(message))
    }

    /// Gets the number of save attempts.
    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Gets all successfully saved transactions.
    pub fn saved_transactions(&self) -> Vec<Transaction> {
        self.saved.lock().unwrap().clone()
    }
}

impl Default for MockTransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TransactionStore for MockTransactionStore {
    async fn save_transaction(&self, transaction: &mut Transaction) -> Result<(), AppError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);

        if self.config.should_fail {
            return Err(PersistenceError::SaveTransaction(DatabaseError::Query(
                self.config.failure_message(),
            ))
            .into());
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        transaction.id = id.to_string();
        self.saved.lock().unwrap().push(transaction.clone());
        Ok(())
    }
}

/// A statement recorded by [`MockExecutor`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub query: String,
    pub params: Vec<SqlParam>,
}

/// Mock SQL executor for adapter tests.
///
/// Records every executed statement with its bound parameters and can be
/// configured to fail on execution or to report no generated key.
pub struct MockExecutor {
    config: MockConfig,
    last_insert_id: Option<u64>,
    calls: Mutex<Vec<RecordedCall>>,
    is_healthy: AtomicBool,
}

impl MockExecutor {
    /// Creates a new mock reporting generated key 1.
    #[must_use]
    pub fn new() -> Self {
        Self::with_insert_id(1)
    }

    /// Creates a mock reporting the given generated key.
    #[must_use]
    pub fn with_insert_id(id: u64) -> Self {
        Self {
            config: MockConfig::success(),
            last_insert_id: Some(id),
            calls: Mutex::new(Vec::new()),
            is_healthy: AtomicBool::new(true),
        }
    }

    /// Creates a mock whose statements succeed but report no generated key.
    #[must_use]
    pub fn without_insert_id() -> Self {
        Self {
            last_insert_id: None,
            ..Self::new()
        }
    }

    /// Creates a mock that always fails.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            config: MockConfig::failure(message),
            ..Self::new()
        }
    }

    /// Sets the health status reported by `ping`.
    pub fn set_healthy(&self, healthy: bool) {
        self.is_healthy.store(healthy, Ordering::Relaxed);
    }

    /// Gets all recorded statements.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SqlExecutor for MockExecutor {
    async fn execute(
        &self,
        query: &str,
        params: &[SqlParam],
    ) -> Result<ExecResult, DatabaseError> {
        self.calls.lock().unwrap().push(RecordedCall {
            query: query.to_string(),
            params: params.to_vec(),
        });

        if self.config.should_fail {
            return Err(DatabaseError::Query(self.config.failure_message()));
        }

        Ok(ExecResult {
            rows_affected: 1,
            last_insert_id: self.last_insert_id,
        })
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        if !self.is_healthy.load(Ordering::Relaxed) {
            return Err(DatabaseError::Connection(
                "Mock database unhealthy".to_string(),
            ));
        }
        Ok(())
    }
}
