//! product-api server: reads `DB_*` from the environment (and `.env`), prepares the
//! products table, and serves the API on `BIND_ADDR` (default 0.0.0.0:5000).

use product_api::{app, ensure_database_exists, initialize, AppConfig, AppState, PgProductStore};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("product_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    if let Err(e) = ensure_database_exists(&config.db).await {
        tracing::warn!(error = %e, details = e.details().as_deref(), database = %config.db.name, "could not ensure database exists");
    }
    let store = PgProductStore::from_config(&config.db);
    if let Err(e) = initialize(&store).await {
        tracing::error!(error = %e, details = e.details().as_deref(), "database initialization failed");
    }

    let router = app(AppState::new(store), &config.server);
    let listener = TcpListener::bind(config.server.bind_addr.as_str()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
