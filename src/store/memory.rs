//! In-memory product store.

use super::ProductStore;
use crate::error::AppError;
use crate::model::{NewProduct, Product};
use crate::sql;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug)]
struct Inner {
    rows: BTreeMap<i32, Product>,
    next_id: i32,
}

/// Process-local store with the same observable behavior as the PostgreSQL
/// one: ids start at 1 and are never reused, listing is newest first.
#[derive(Debug)]
pub struct MemoryProductStore {
    inner: Mutex<Inner>,
}

impl Default for MemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn insert(inner: &mut Inner, product: NewProduct) -> i32 {
        let id = inner.next_id;
        inner.next_id += 1;
        inner.rows.insert(id, product.into_product(id));
        id
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn list(&self) -> Result<Vec<Product>, AppError> {
        Ok(self.lock().rows.values().rev().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Product>, AppError> {
        Ok(self.lock().rows.get(&id).cloned())
    }

    async fn create(&self, product: &NewProduct) -> Result<i32, AppError> {
        Ok(Self::insert(&mut self.lock(), product.clone()))
    }

    async fn update(&self, id: i32, product: &NewProduct) -> Result<bool, AppError> {
        let mut inner = self.lock();
        match inner.rows.get_mut(&id) {
            Some(row) => {
                *row = product.clone().into_product(id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(self.lock().rows.remove(&id).is_some())
    }

    async fn ensure_schema(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn seed_if_empty(&self) -> Result<u64, AppError> {
        let mut inner = self.lock();
        if !inner.rows.is_empty() {
            return Ok(0);
        }
        for (name, price, image_url) in sql::SEED_PRODUCTS {
            Self::insert(
                &mut inner,
                NewProduct {
                    name: name.to_string(),
                    price: *price,
                    image_url: Some(image_url.to_string()),
                },
            );
        }
        Ok(sql::SEED_PRODUCTS.len() as u64)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
