//! Products CRUD REST API over PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{AppConfig, DbConfig, ServerConfig};
pub use error::{AppError, ConfigError};
pub use migration::{ensure_database_exists, initialize};
pub use model::{NewProduct, Product, ProductPayload};
pub use routes::{common_routes, product_routes, ApiDoc};
pub use state::AppState;
pub use store::{MemoryProductStore, PgProductStore, ProductStore};

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if server.cors_origins.is_empty() {
        return cors.allow_origin(Any);
    }
    let origins: Vec<HeaderValue> = server
        .cors_origins
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect();
    cors.allow_origin(AllowOrigin::list(origins))
}

/// Full application router: common routes, product routes, and middleware.
pub fn app(state: AppState, server: &ServerConfig) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(product_routes(state))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}
