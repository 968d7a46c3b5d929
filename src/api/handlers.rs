//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{error, warn};

use crate::app::AppState;
use crate::domain::{
    AccountCreatedResponse, AppError, CreateAccountRequest, CreateTransactionRequest, ErrorDetail,
    ErrorResponse, HealthResponse, HealthStatus, Transaction,
};

/// Create a new account.
///
/// Success is HTTP 201 with an ID-only body; the transaction endpoint
/// returns the full entity instead (documented asymmetry).
pub async fn create_account_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AccountCreatedResponse>), AppError> {
    let Json(request) = payload.map_err(|e| AppError::Deserialization(e.body_text()))?;

    let account = state.account_service.create_account(&request.name).await?;

    Ok((
        StatusCode::CREATED,
        Json(AccountCreatedResponse { id: account.id }),
    ))
}

/// Create a new transaction.
pub async fn create_transaction_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateTransactionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Transaction>), AppError> {
    let Json(request) = payload.map_err(|e| AppError::Deserialization(e.body_text()))?;

    let transaction = state
        .transaction_service
        .create_transaction(
            &request.account_id,
            request.amount,
            &request.tx_type,
            &request.description,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(transaction)))
}

/// Detailed health check.
pub async fn health_check_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let database = match state.executor.ping().await {
        Ok(()) => HealthStatus::Healthy,
        Err(e) => {
            warn!(error = ?e, "Database health check failed");
            HealthStatus::Unhealthy
        }
    };

    Json(HealthResponse::new(database))
}

/// Liveness probe; touches no dependencies.
pub async fn liveness_handler() -> StatusCode {
    StatusCode::OK
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Client errors echo a generic description; everything else is a
        // generic 500 with the underlying cause logged server-side only.
        let (status, error_type, message) = match &self {
            AppError::Deserialization(_) => (
                StatusCode::BAD_REQUEST,
                "bad_request",
                "Invalid request body".to_string(),
            ),
            AppError::Database(_)
            | AppError::Persistence(_)
            | AppError::Config(_)
            | AppError::Serialization(_)
            | AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "Internal server error".to_string(),
            ),
        };

        if status.is_server_error() {
            error!(error_type = %error_type, error = %self, "Request failed");
        }

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                r#type: error_type.to_string(),
                message,
            },
        });

        (status, body).into_response()
    }
}
