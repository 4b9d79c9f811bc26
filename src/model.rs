//! The product row and the request payload used to create or replace one.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A row of the `products` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub image_url: Option<String>,
}

/// Body of `POST /api/products` and `PUT /api/products/{id}`.
///
/// Fields are optional here so that a missing field is reported as a
/// validation error rather than a deserialization failure.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct ProductPayload {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
}

/// A payload that passed validation: all three mutable fields, ready to bind.
#[derive(Clone, Debug, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub image_url: Option<String>,
}

impl NewProduct {
    pub fn into_product(self, id: i32) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            image_url: self.image_url,
        }
    }
}

/// Returned by create.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Created {
    pub message: String,
    pub id: i32,
}

/// Returned by update and delete.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Message {
    pub message: String,
}
