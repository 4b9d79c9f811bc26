//! PostgreSQL-backed product store, one connection per call.

use super::ProductStore;
use crate::config::DbConfig;
use crate::error::AppError;
use crate::model::{NewProduct, Product};
use crate::sql;
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::{ConnectOptions, Connection};

/// PostgreSQL store. Holds connection options only; every call opens its own
/// connection, runs one statement, and closes it.
#[derive(Clone, Debug)]
pub struct PgProductStore {
    options: PgConnectOptions,
}

impl PgProductStore {
    pub fn new(options: PgConnectOptions) -> Self {
        Self { options }
    }

    pub fn from_config(config: &DbConfig) -> Self {
        Self::new(config.connect_options())
    }

    async fn connect(&self) -> Result<PgConnection, AppError> {
        tracing::debug!(
            host = self.options.get_host(),
            database = self.options.get_database(),
            "opening database connection"
        );
        self.options
            .connect()
            .await
            .map_err(AppError::db("database connection failed"))
    }
}

async fn close(conn: PgConnection) {
    if let Err(e) = conn.close().await {
        tracing::warn!(error = %e, "closing database connection");
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn list(&self) -> Result<Vec<Product>, AppError> {
        let mut conn = self.connect().await?;
        let rows = sqlx::query_as::<_, Product>(sql::SELECT_ALL)
            .fetch_all(&mut conn)
            .await;
        close(conn).await;
        rows.map_err(AppError::db("error fetching products"))
    }

    async fn get(&self, id: i32) -> Result<Option<Product>, AppError> {
        let mut conn = self.connect().await?;
        let row = sqlx::query_as::<_, Product>(sql::SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&mut conn)
            .await;
        close(conn).await;
        row.map_err(AppError::db("error fetching product"))
    }

    async fn create(&self, product: &NewProduct) -> Result<i32, AppError> {
        let mut conn = self.connect().await?;
        let id = sqlx::query_scalar::<_, i32>(sql::INSERT)
            .bind(&product.name)
            .bind(product.price)
            .bind(&product.image_url)
            .fetch_one(&mut conn)
            .await;
        close(conn).await;
        id.map_err(AppError::db("error adding product"))
    }

    async fn update(&self, id: i32, product: &NewProduct) -> Result<bool, AppError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query(sql::UPDATE)
            .bind(&product.name)
            .bind(product.price)
            .bind(&product.image_url)
            .bind(id)
            .execute(&mut conn)
            .await;
        close(conn).await;
        let result = result.map_err(AppError::db("error updating product"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query(sql::DELETE).bind(id).execute(&mut conn).await;
        close(conn).await;
        let result = result.map_err(AppError::db("error deleting product"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn ensure_schema(&self) -> Result<(), AppError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query(sql::CREATE_TABLE).execute(&mut conn).await;
        close(conn).await;
        result.map_err(AppError::db("error creating products table"))?;
        Ok(())
    }

    async fn seed_if_empty(&self) -> Result<u64, AppError> {
        let mut conn = self.connect().await?;
        let seeded = seed(&mut conn).await;
        close(conn).await;
        seeded
    }

    async fn ping(&self) -> Result<(), AppError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query(sql::PING).execute(&mut conn).await;
        close(conn).await;
        result.map_err(AppError::db("database ping failed"))?;
        Ok(())
    }
}

async fn seed(conn: &mut PgConnection) -> Result<u64, AppError> {
    let count: i64 = sqlx::query_scalar(sql::COUNT)
        .fetch_one(&mut *conn)
        .await
        .map_err(AppError::db("error counting products"))?;
    if count > 0 {
        return Ok(0);
    }
    let mut tx = conn
        .begin()
        .await
        .map_err(AppError::db("error seeding products"))?;
    let mut inserted = 0u64;
    for (name, price, image_url) in sql::SEED_PRODUCTS {
        sqlx::query(sql::INSERT)
            .bind(*name)
            .bind(*price)
            .bind(*image_url)
            .execute(&mut *tx)
            .await
            .map_err(AppError::db("error seeding products"))?;
        inserted += 1;
    }
    tx.commit().await.map_err(AppError::db("error seeding products"))?;
    Ok(inserted)
}
