use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a unique identifier for domain entities.
///
/// Identifiers are assigned by the persistence layer; an entity carries an
/// empty `EntityId` until its first successful save.
pub type EntityId = String;

/// A financial account that transactions can reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub id: EntityId,
    pub name: String,
}

impl Account {
    /// Creates an account with an unset identifier.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
        }
    }
}

/// A financial transaction recorded against an account.
///
/// `account_id` is an unvalidated reference; no existence check is performed
/// against the accounts table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: EntityId,
    pub account_id: EntityId,
    pub amount: f64,
    #[serde(rename = "type")]
    pub tx_type: String,
    pub timestamp: DateTime<Utc>,
    pub description: String,
}

impl Transaction {
    /// Creates a transaction with an unset identifier, stamped with the
    /// current wall-clock time.
    #[must_use]
    pub fn new(
        account_id: impl Into<EntityId>,
        amount: f64,
        tx_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: EntityId::new(),
            account_id: account_id.into(),
            amount,
            tx_type: tx_type.into(),
            timestamp: Utc::now(),
            description: description.into(),
        }
    }
}

/// Request payload for `POST /accounts`.
///
/// Missing fields default to zero values; there is no required-field
/// validation beyond structural JSON decoding.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateAccountRequest {
    pub name: String,
}

/// Request payload for `POST /transactions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateTransactionRequest {
    #[serde(rename = "accountID")]
    pub account_id: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub tx_type: String,
    pub description: String,
}

/// Success response for `POST /accounts`.
///
/// Projects only the generated identifier; the transaction endpoint returns
/// the full entity instead. The asymmetry is a documented API contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountCreatedResponse {
    pub id: EntityId,
}

/// A single bound statement parameter passed through the `SqlExecutor` port.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Text(String),
    Double(f64),
}

/// Outcome of a statement executed through the `SqlExecutor` port.
///
/// `last_insert_id` is `None` when the driver reported no generated key for
/// the statement.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecResult {
    pub rows_affected: u64,
    pub last_insert_id: Option<u64>,
}

/// Health check status for services.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Health check response for the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub database: HealthStatus,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    #[must_use]
    pub fn new(database: HealthStatus) -> Self {
        Self {
            status: database.clone(),
            database,
            timestamp: Utc::now(),
        }
    }
}

/// Error detail within an error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub r#type: String,
    pub message: String,
}

/// JSON error response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_starts_without_id() {
        let account = Account::new("John Doe");

        assert_eq!(account.id, "");
        assert_eq!(account.name, "John Doe");
    }

    #[test]
    fn test_transaction_starts_without_id() {
        let transaction = Transaction::new("12345", 100.0, "credit", "Payment");

        assert_eq!(transaction.id, "");
        assert_eq!(transaction.account_id, "12345");
        assert_eq!(transaction.amount, 100.0);
        assert_eq!(transaction.tx_type, "credit");
        assert_eq!(transaction.description, "Payment");
    }

    #[test]
    fn test_transaction_timestamp_is_current() {
        let before = Utc::now();
        let transaction = Transaction::new("12345", 1.0, "debit", "");
        let after = Utc::now();

        assert!(transaction.timestamp >= before);
        assert!(transaction.timestamp <= after);
    }

    #[test]
    fn test_transaction_serialization_shape() {
        let mut transaction = Transaction::new("12345", 100.0, "credit", "Payment");
        transaction.id = "678".to_string();

        let json = serde_json::to_value(&transaction).unwrap();

        assert_eq!(json["id"], "678");
        assert_eq!(json["account_id"], "12345");
        assert_eq!(json["amount"], 100.0);
        assert_eq!(json["type"], "credit");
        assert_eq!(json["description"], "Payment");
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn test_create_transaction_request_wire_names() {
        let request: CreateTransactionRequest = serde_json::from_str(
            r#"{"accountID":"12345","amount":100.0,"type":"credit","description":"Payment"}"#,
        )
        .unwrap();

        assert_eq!(request.account_id, "12345");
        assert_eq!(request.amount, 100.0);
        assert_eq!(request.tx_type, "credit");
        assert_eq!(request.description, "Payment");
    }

    #[test]
    fn test_request_missing_fields_default_to_zero_values() {
        let account: CreateAccountRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(account.name, "");

        let transaction: CreateTransactionRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(transaction.account_id, "");
        assert_eq!(transaction.amount, 0.0);
        assert_eq!(transaction.tx_type, "");
        assert_eq!(transaction.description, "");
    }

    #[test]
    fn test_health_response_mirrors_database_status() {
        let healthy = HealthResponse::new(HealthStatus::Healthy);
        assert_eq!(healthy.status, HealthStatus::Healthy);

        let unhealthy = HealthResponse::new(HealthStatus::Unhealthy);
        assert_eq!(unhealthy.status, HealthStatus::Unhealthy);
    }
}
