//! Application service layer.
//!
//! The per-entity services orchestrate identifier-less entity construction
//! and delegate persistence to the store ports. They hold references to the
//! trait abstractions, enabling dependency injection and testability.

use std::sync::Arc;
use tracing::{info, instrument};

use crate::domain::{Account, AccountStore, AppError, Transaction, TransactionStore};

/// Use-case service for accounts.
pub struct AccountService {
    store: Arc<dyn AccountStore>,
}

impl AccountService {
    #[must_use]
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// Creates a new account and saves it through the persistence port.
    ///
    /// The name is unconstrained (empty accepted). Exactly one persistence
    /// write is attempted; on failure the underlying error is propagated
    /// unchanged and no account is returned.
    #[instrument(skip(self))]
    pub async fn create_account(&self, name: &str) -> Result<Account, AppError> {
        let mut account = Account::new(name);
        self.store.save_account(&mut account).await?;
        info!(account_id = %account.id, "account created");
        Ok(account)
    }
}

/// Use-case service for transactions.
pub struct TransactionService {
    store: Arc<dyn TransactionStore>,
}

impl TransactionService {
    #[must_use]
    pub fn new(store: Arc<dyn TransactionStore>) -> Self {
        Self { store }
    }

    /// Creates a new transaction stamped with the current time and saves it
    /// through the persistence port.
    ///
    /// Inputs are not validated: the account reference is not checked for
    /// existence and any amount is accepted. Failure semantics mirror
    /// [`AccountService::create_account`].
    #[instrument(skip(self, description))]
    pub async fn create_transaction(
        &self,
        account_id: &str,
        amount: f64,
        tx_type: &str,
        description: &str,
    ) -> Result<Transaction, AppError> {
        let mut transaction = Transaction::new(account_id, amount, tx_type, description);
        self.store.save_transaction(&mut transaction).await?;
        info!(transaction_id = %transaction.id, "transaction created");
        Ok(transaction)
    }
}
