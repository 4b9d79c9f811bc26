//! Startup bootstrap: create the database if needed, then the products table and sample rows.

use crate::config::DbConfig;
use crate::error::AppError;
use crate::store::ProductStore;
use sqlx::{ConnectOptions, Connection};

/// Ensure the database named in `config` exists; create it if not. Connects to
/// the maintenance `postgres` database to run CREATE DATABASE.
pub async fn ensure_database_exists(config: &DbConfig) -> Result<(), AppError> {
    if config.name.is_empty() || config.name == "postgres" {
        return Ok(());
    }
    let mut conn = config
        .admin_connect_options()
        .connect()
        .await
        .map_err(AppError::db("database connection failed"))?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&config.name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&config.name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %config.name, "created database");
    }
    conn.close().await?;
    Ok(())
}

/// Create the products table and seed it when empty.
pub async fn initialize(store: &dyn ProductStore) -> Result<(), AppError> {
    store.ensure_schema().await?;
    tracing::info!("products table created or already exists");
    match store.seed_if_empty().await? {
        0 => tracing::info!("products table already contains data"),
        n => tracing::info!(rows = n, "inserted sample products"),
    }
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
