//! SQL persistence adapters for the store ports.
//!
//! Each adapter issues a single parameterized INSERT through the
//! `SqlExecutor` port and back-fills the generated identifier on the entity.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    Account, AccountStore, AppError, DatabaseError, PersistenceError, SqlExecutor, SqlParam,
    Transaction, TransactionStore,
};

const INSERT_ACCOUNT: &str = "INSERT INTO accounts (name) VALUES (?)";

// The timestamp column is filled by the database default.
const INSERT_TRANSACTION: &str =
    "INSERT INTO transactions (account_id, amount, type, description) VALUES (?, ?, ?, ?)";

/// Adapter for saving accounts through a SQL executor.
pub struct SqlAccountStore {
    executor: Arc<dyn SqlExecutor>,
}

impl SqlAccountStore {
    #[must_use]
    pub fn new(executor: Arc<dyn SqlExecutor>) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl AccountStore for SqlAccountStore {
    async fn save_account(&self, account: &mut Account) -> Result<(), AppError> {
        let result = self
            .executor
            .execute(INSERT_ACCOUNT, &[SqlParam::Text(account.name.clone())])
            .await
            .map_err(PersistenceError::SaveAccount)?;

        // A row may exist even when the generated key is unavailable; the
        // identifier then stays unset and the caller sees the error.
        let id = result
            .last_insert_id
            .ok_or(PersistenceError::LastInsertId(DatabaseError::MissingInsertId))?;
        account.id = id.to_string();
        Ok(())
    }
}

/// Adapter for saving transactions through a SQL executor.
pub struct SqlTransactionStore {
    executor: Arc<dyn SqlExecutor>,
}

impl SqlTransactionStore {
    #[must_use]
    pub fn new(executor: Arc<dyn SqlExecutor>) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl TransactionStore for SqlTransactionStore {
    async fn save_transaction(&self, transaction: &mut Transaction) -> Result<(), AppError> {
        let result = self
            .executor
            .execute(
                INSERT_TRANSACTION,
                &[
                    SqlParam::Text(transaction.account_id.clone()),
                    SqlParam::Double(transaction.amount),
                    SqlParam::Text(transaction.tx_type.clone()),
                    SqlParam::Text(transaction.description.clone()),
                ],
            )
            .await
            .map_err(PersistenceError::SaveTransaction)?;

        let id = result
            .last_insert_id
            .ok_or(PersistenceError::LastInsertId(DatabaseError::MissingInsertId))?;
        transaction.id = id.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockExecutor;

    #[tokio::test]
    async fn test_save_account_assigns_generated_id() {
        let executor = Arc::new(MockExecutor::with_insert_id(42));
        let store = SqlAccountStore::new(executor.clone());

        let mut account = Account::new("John Doe");
        store.save_account(&mut account).await.unwrap();

        assert_eq!(account.id, "42");

        let calls = executor.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].query, INSERT_ACCOUNT);
        assert_eq!(calls[0].params, vec![SqlParam::Text("John Doe".into())]);
    }

    #[tokio::test]
    async fn test_save_account_renders_wide_ids_as_decimal_strings() {
        let executor = Arc::new(MockExecutor::with_insert_id(u64::MAX));
        let store = SqlAccountStore::new(executor);

        let mut account = Account::new("John Doe");
        store.save_account(&mut account).await.unwrap();

        assert_eq!(account.id, "18446744073709551615");
    }

    #[tokio::test]
    async fn test_save_account_execute_failure() {
        let executor = Arc::new(MockExecutor::failing("connection reset"));
        let store = SqlAccountStore::new(executor);

        let mut account = Account::new("John Doe");
        let err = store.save_account(&mut account).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "failed to save account: Query execution failed: connection reset"
        );
        assert_eq!(account.id, "");
    }

    #[tokio::test]
    async fn test_save_account_missing_insert_id() {
        let executor = Arc::new(MockExecutor::without_insert_id());
        let store = SqlAccountStore::new(executor);

        let mut account = Account::new("John Doe");
        let err = store.save_account(&mut account).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "failed to retrieve last insert ID: no generated identifier returned for inserted row"
        );
        // Row may have been inserted; the identifier stays unset regardless.
        assert_eq!(account.id, "");
    }

    #[tokio::test]
    async fn test_save_transaction_assigns_generated_id() {
        let executor = Arc::new(MockExecutor::with_insert_id(678));
        let store = SqlTransactionStore::new(executor.clone());

        let mut transaction = Transaction::new("12345", 100.0, "credit", "Payment");
        store.save_transaction(&mut transaction).await.unwrap();

        assert_eq!(transaction.id, "678");
    }

    #[tokio::test]
    async fn test_save_transaction_binds_four_parameters() {
        let executor = Arc::new(MockExecutor::new());
        let store = SqlTransactionStore::new(executor.clone());

        let mut transaction = Transaction::new("12345", 100.0, "credit", "Payment");
        store.save_transaction(&mut transaction).await.unwrap();

        let calls = executor.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].params,
            vec![
                SqlParam::Text("12345".into()),
                SqlParam::Double(100.0),
                SqlParam::Text("credit".into()),
                SqlParam::Text("Payment".into()),
            ]
        );
        // Placeholder count matches the bound-parameter count.
        assert_eq!(
            calls[0].query.matches('?').count(),
            calls[0].params.len()
        );
    }

    #[tokio::test]
    async fn test_save_transaction_execute_failure() {
        let executor = Arc::new(MockExecutor::failing("connection reset"));
        let store = SqlTransactionStore::new(executor);

        let mut transaction = Transaction::new("12345", 100.0, "credit", "Payment");
        let err = store.save_transaction(&mut transaction).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "failed to save transaction: Query execution failed: connection reset"
        );
        assert_eq!(transaction.id, "");
    }

    #[tokio::test]
    async fn test_save_transaction_missing_insert_id() {
        let executor = Arc::new(MockExecutor::without_insert_id());
        let store = SqlTransactionStore::new(executor);

        let mut transaction = Transaction::new("12345", 100.0, "credit", "Payment");
        let err = store.save_transaction(&mut transaction).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "failed to retrieve last insert ID: no generated identifier returned for inserted row"
        );
        assert_eq!(transaction.id, "");
    }
}
