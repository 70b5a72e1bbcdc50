use std::sync::Arc;

use alumni_chatbot::{
    config::Config,
    routes,
    state::AppState,
    storage::{Access, StatementStore},
};
use anyhow::Context;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().context("invalid configuration")?;

    let store = StatementStore::open(&config.database_path, Access::ReadOnly)
        .await
        .with_context(|| {
            format!(
                "cannot open {} (run the `train` binary first)",
                config.database_path.display()
            )
        })?;
    let statements = store.statement_count().await?;
    tracing::info!(statements, path = %config.database_path.display(), "storage opened read-only");

    let state = Arc::new(AppState::new(store, &config));
    let app = routes::create_router(&config).with_state(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;

    tracing::info!(variant = ?config.variant, "chatbot running at http://{}", config.bind);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("shutting down");
    }
}
