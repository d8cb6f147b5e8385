//! `/produtos` handlers.
//!
//! Handlers only extract, delegate to [`ProductService`](crate::services::ProductService)
//! and serialize. Extractor rejections are taken as `Result` so malformed
//! input is answered with the same JSON error body as service failures.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::debug;

use catalog_core::{DeleteConfirmation, DescriptionInput, Product, ProductInput};

use crate::error::ApiError;
use crate::router::AppState;

/// Query string of `GET /produtos/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    pub descricao: String,
}

/// `GET /produtos`
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.products.find_all().await?;
    Ok(Json(products))
}

/// `GET /produtos/search?descricao=<text>`
pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let Query(params) = params?;
    let products = state.products.find_by_description(&params.descricao).await?;
    Ok(Json(products))
}

/// `GET /produtos/{id}`
pub async fn get_one(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Product>, ApiError> {
    let Path(code) = id?;
    let product = state.products.find_by_code(code).await?;
    Ok(Json(product))
}

/// `POST /produtos`
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<ProductInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let Json(input) = body?;
    debug!(code = ?input.code, "Create product request");

    let product = state.products.create(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// `PUT /produtos/{id}`
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<DescriptionInput>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let Path(code) = id?;
    let Json(input) = body?;

    let product = state.products.update(input.into_input(code)).await?;
    Ok(Json(product))
}

/// `POST /produtos/save`
pub async fn save(
    State(state): State<AppState>,
    body: Result<Json<ProductInput>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let Json(input) = body?;
    debug!(code = ?input.code, "Create-or-update product request");

    let product = state.products.create_or_update(input).await?;
    Ok(Json(product))
}

/// `DELETE /produtos/{id}`
pub async fn remove(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<DeleteConfirmation>, ApiError> {
    let Path(code) = id?;
    let confirmation = state.products.remove(code).await?;
    Ok(Json(confirmation))
}
