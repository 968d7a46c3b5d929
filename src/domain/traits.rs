//! Domain traits defining the ports that services and adapters depend on.

use async_trait::async_trait;

use super::error::{AppError, DatabaseError};
use super::types::{Account, ExecResult, SqlParam, Transaction};

/// Port for saving an account to persistence.
///
/// On success the implementation assigns the generated identifier to
/// `account.id`; the identifier is empty until then.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn save_account(&self, account: &mut Account) -> Result<(), AppError>;
}

/// Port for saving a transaction to persistence.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    async fn save_transaction(&self, transaction: &mut Transaction) -> Result<(), AppError>;
}

/// Port abstracting parameterized statement execution against the database.
///
/// Persistence adapters depend on this seam instead of a concrete pool, so
/// they can be unit tested against a mock executor.
#[async_trait]
pub trait SqlExecutor: Send + Sync {
    /// Executes a statement with the given bound parameters.
    async fn execute(
        &self,
        query: &str,
        params: &[SqlParam],
    ) -> Result<ExecResult, DatabaseError>;

    /// Checks database connectivity.
    async fn ping(&self) -> Result<(), DatabaseError>;
}
