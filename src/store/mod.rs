//! Product persistence. One trait, a PostgreSQL implementation that opens a
//! connection per call, and an in-memory implementation with the same semantics.

mod memory;
mod postgres;

pub use memory::MemoryProductStore;
pub use postgres::PgProductStore;

use crate::error::AppError;
use crate::model::{NewProduct, Product};
use async_trait::async_trait;

#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All products, highest id first.
    async fn list(&self) -> Result<Vec<Product>, AppError>;

    async fn get(&self, id: i32) -> Result<Option<Product>, AppError>;

    /// Insert and return the assigned id.
    async fn create(&self, product: &NewProduct) -> Result<i32, AppError>;

    /// Replace name, price and image_url. Returns false when no row matched.
    async fn update(&self, id: i32, product: &NewProduct) -> Result<bool, AppError>;

    /// Returns false when no row matched.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;

    /// Create the products table if it does not exist.
    async fn ensure_schema(&self) -> Result<(), AppError>;

    /// Insert the sample rows when the table is empty. Returns the number inserted.
    async fn seed_if_empty(&self) -> Result<u64, AppError>;

    /// Check that the backing database is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
