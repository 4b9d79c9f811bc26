//! Product CRUD handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::model::{Created, Message, Product, ProductPayload};
use crate::response::{created, message};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

/// Non-numeric ids are a bad request. Integers outside the id column's range
/// cannot name a row, so they are reported as not found.
fn parse_id(id_str: &str) -> Result<i32, AppError> {
    if let Ok(id) = id_str.parse::<i32>() {
        return Ok(id);
    }
    let digits = id_str.strip_prefix('-').unwrap_or(id_str);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::NotFound(format!("product {}", id_str)));
    }
    Err(AppError::BadRequest("invalid id".into()))
}

fn product_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("product {}", id))
}

#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "All products, newest first", body = Vec<Product>),
        (status = 500, description = "Database failure")
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    let products = state.store.list().await?;
    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "No product with this id")
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Product>, AppError> {
    let id = parse_id(&id_str)?;
    let product = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| product_not_found(id))?;
    Ok(Json(product))
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Product created", body = Created),
        (status = 400, description = "Name or price missing or invalid")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let product = RequestValidator::parse_and_validate(body)?;
    let id = state.store.create(&product).await?;
    tracing::info!(id, "product created");
    Ok(created(id))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Product replaced", body = Message),
        (status = 400, description = "Invalid id or payload"),
        (status = 404, description = "No product with this id")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let product = RequestValidator::parse_and_validate(body)?;
    if !state.store.update(id, &product).await? {
        return Err(product_not_found(id));
    }
    tracing::info!(id, "product updated");
    Ok(message("Product updated successfully"))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted", body = Message),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "No product with this id")
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    if !state.store.delete(id).await? {
        return Err(product_not_found(id));
    }
    tracing::info!(id, "product deleted");
    Ok(message("Product deleted successfully"))
}
