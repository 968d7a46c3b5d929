//! HTTP routing configuration.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::app::AppState;

use super::handlers::{
    create_account_handler, create_transaction_handler, health_check_handler, liveness_handler,
};

/// Per-request deadline; dropping the request future cancels any in-flight
/// database call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Creates the application router.
///
/// Creation endpoints accept POST only; other methods receive 405 from the
/// router's method dispatch.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT));

    let health_routes = Router::new()
        .route("/", get(health_check_handler))
        .route("/live", get(liveness_handler));

    Router::new()
        .route("/accounts", post(create_account_handler))
        .route("/transactions", post(create_transaction_handler))
        .nest("/health", health_routes)
        .layer(middleware)
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockAccountStore, MockExecutor, MockTransactionStore};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState::new(
            Arc::new(MockAccountStore::new()),
            Arc::new(MockTransactionStore::new()),
            Arc::new(MockExecutor::new()),
        ))
    }

    #[tokio::test]
    async fn test_get_on_creation_endpoints_is_method_not_allowed() {
        let router = create_router(test_state());

        for uri in ["/accounts", "/transactions"] {
            let request = Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap();

            let response = router.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        }
    }

    #[tokio::test]
    async fn test_liveness_endpoint() {
        let router = create_router(test_state());

        let request = Request::builder()
            .method("GET")
            .uri("/health/live")
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let router = create_router(test_state());

        let request = Request::builder()
            .method("POST")
            .uri("/nope")
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
