//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Catalog API                        │
//! │                                                                         │
//! │  Handler                                                               │
//! │  Result<T, ApiError>                                                   │
//! │         │                                                               │
//! │         ├── extractor rejected (bad JSON, non-numeric id) ──► 400      │
//! │         │                                                               │
//! │         ├── CatalogError::NotFound(code) ───────────────────► 404      │
//! │         │                                                               │
//! │         └── CatalogError::BadRequest { message, .. } ───────► 400      │
//! │                                                                         │
//! │  Body: { "statusCode": 404,                                            │
//! │          "message": "product with code 123 not found",                 │
//! │          "error": "Not Found" }                                        │
//! │                                                                         │
//! │  The cause inside BadRequest is logged by the service, never sent.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use catalog_core::CatalogError;

/// Message used when a path id is not an integer.
pub const NUMERIC_ID_EXPECTED: &str = "Validation failed (numeric string is expected)";

/// API error returned from handlers.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

/// Serialized error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub message: String,
    pub error: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, message)
    }

    /// The body sent to the client.
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            status_code: self.status.as_u16(),
            message: self.message.clone(),
            error: self
                .status
                .canonical_reason()
                .unwrap_or("Error")
                .to_string(),
        }
    }
}

/// Converts domain errors to API errors.
impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(_) => ApiError::new(StatusCode::NOT_FOUND, err.message()),
            CatalogError::BadRequest { message, .. } => ApiError::bad_request(message),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(_: PathRejection) -> Self {
        ApiError::bad_request(NUMERIC_ID_EXPECTED)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body())).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.status.as_u16(), self.message)
    }
}

impl std::error::Error for ApiError {}
