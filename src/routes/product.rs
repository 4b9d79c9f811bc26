//! Product CRUD routes and the OpenAPI document describing them.

use crate::handlers::product::{self, create, delete as delete_handler, list, read, update};
use crate::model::{Created, Message, Product, ProductPayload};
use crate::state::AppState;
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "product-api", description = "Products CRUD API"),
    paths(product::list, product::read, product::create, product::update, product::delete),
    components(schemas(Product, ProductPayload, Created, Message))
)]
pub struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/products", get(list).post(create))
        .route(
            "/api/products/:id",
            get(read).put(update).delete(delete_handler),
        )
        .route("/api/openapi.json", get(openapi))
        .with_state(state)
}
