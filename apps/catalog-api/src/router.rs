//! HTTP routing.
//!
//! ```text
//! GET    /produtos              list
//! GET    /produtos/search       search (?descricao=)
//! GET    /produtos/{id}         get_one
//! POST   /produtos              create          201
//! PUT    /produtos/{id}         update
//! POST   /produtos/save         save (create or update)
//! DELETE /produtos/{id}         remove
//! GET    /health                health
//! ```

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{health, products};
use crate::services::ProductService;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<ProductService>,
}

impl AppState {
    pub fn new(products: ProductService) -> Self {
        AppState {
            products: Arc::new(products),
        }
    }
}

/// Builds the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/produtos", get(products::list).post(products::create))
        .route("/produtos/search", get(products::search))
        .route("/produtos/save", post(products::save))
        .route(
            "/produtos/{id}",
            get(products::get_one)
                .put(products::update)
                .delete(products::remove),
        )
        .route("/health", get(health::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
