//! Health check endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::router::AppState;

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: String,
}

/// Reports whether the product store answers.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    if state.products.is_healthy().await {
        (
            StatusCode::OK,
            Json(HealthStatus {
                status: "ok".to_string(),
            }),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthStatus {
                status: "unavailable".to_string(),
            }),
        )
    }
}
