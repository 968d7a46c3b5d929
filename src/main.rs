use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tracing::info;

use spend_api::api::create_router;
use spend_api::app::AppState;
use spend_api::config::Config;
use spend_api::domain::{AccountStore, SqlExecutor, TransactionStore};
use spend_api::infra::{MariaDbExecutor, SqlAccountStore, SqlTransactionStore, init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    init_tracing();

    // Missing required variables abort startup here.
    let config = Config::from_env()?;

    let executor: Arc<dyn SqlExecutor> = Arc::new(MariaDbExecutor::with_defaults(&config).await?);

    // Wire adapters -> services -> state
    let account_store: Arc<dyn AccountStore> =
        Arc::new(SqlAccountStore::new(Arc::clone(&executor)));
    let transaction_store: Arc<dyn TransactionStore> =
        Arc::new(SqlTransactionStore::new(Arc::clone(&executor)));

    let app_state = Arc::new(AppState::new(account_store, transaction_store, executor));

    let router = create_router(app_state);

    let addr = format!("{}:{}", config.http_host, config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(%addr, "Server listening");

    axum::serve(listener, router).await?;

    Ok(())
}
