//! Service entry point: env config, lazy pool, startup probe, serve.

use medoffice_api::{app, AppState, PgStore, ServerConfig};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("medoffice_api=info")),
        )
        .init();

    let config = ServerConfig::from_env();
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy_with(config.connect_options());

    // Probe once at startup; on failure the process keeps serving and every
    // query fails until the store recovers.
    match sqlx::query("SELECT 1").execute(&pool).await {
        Ok(_) => tracing::info!("database connection established"),
        Err(e) => tracing::error!(error = %e, "database connection failed"),
    }

    let state = AppState::new(Arc::new(PgStore::new(pool)));
    let listener = TcpListener::bind(config.listen_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
