//! # Error Types
//!
//! Domain-specific error types for catalog-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  catalog-core errors (this file)                                       │
//! │  ├── CatalogError     - What the orchestration layer reports           │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  catalog-db errors (separate crate)                                    │
//! │  └── DbError          - Gateway failures (never shown to callers)      │
//! │                                                                         │
//! │  catalog-api errors (in app)                                           │
//! │  └── ApiError         - What HTTP clients see (serialized)             │
//! │                                                                         │
//! │  Flow: DbError ─(remapped)─► CatalogError ─► ApiError ─► HTTP          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Messages carry context (the product code) but never database detail
//! 3. The underlying cause of a `BadRequest` is kept as `source` for operators

use thiserror::Error;

/// Boxed error used to keep the root cause of a remapped failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

// =============================================================================
// Catalog Error
// =============================================================================

/// Errors reported by product operations.
///
/// Only two kinds ever reach a caller: the product is absent, or the request
/// could not be honoured. Gateway failures are folded into `BadRequest` with
/// a generic, operation-specific message.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No product is stored under this code.
    #[error("product with code {0} not found")]
    NotFound(i32),

    /// Validation failure or generic operation failure.
    ///
    /// ## Error Remapping
    /// ```text
    /// DbError::ProcedureFailed("connection reset by peer")
    ///      │
    ///      ▼
    /// BadRequest { message: "error creating product", source: Some(DbError) }
    ///      │
    ///      ▼
    /// Client sees: 400 "error creating product"
    /// Logs keep:   connection reset by peer
    /// ```
    #[error("{message}")]
    BadRequest {
        message: String,
        #[source]
        source: Option<BoxError>,
    },
}

impl CatalogError {
    /// Creates a BadRequest error without an underlying cause.
    pub fn bad_request(message: impl Into<String>) -> Self {
        CatalogError::BadRequest {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a BadRequest error that keeps `cause` for diagnostics.
    pub fn bad_request_caused_by(message: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        CatalogError::BadRequest {
            message: message.into(),
            source: Some(cause.into()),
        }
    }

    /// Returns true for [`CatalogError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }

    /// Caller-facing message (never includes the underlying cause).
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<ValidationError> for CatalogError {
    fn from(err: ValidationError) -> Self {
        CatalogError::bad_request(err.to_string())
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when request input doesn't meet requirements.
/// Used for early validation before any procedure is called.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} should not be empty")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be shorter than or equal to {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_not_found_message_names_the_code() {
        let err = CatalogError::NotFound(123);
        assert_eq!(err.to_string(), "product with code 123 not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_bad_request_hides_cause_in_message() {
        let cause = std::io::Error::new(std::io::ErrorKind::Other, "socket closed");
        let err = CatalogError::bad_request_caused_by("error creating product", cause);

        assert_eq!(err.message(), "error creating product");
        assert!(!err.is_not_found());

        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("socket closed"));
    }

    #[test]
    fn test_validation_converts_to_bad_request() {
        let err: CatalogError = ValidationError::TooLong {
            field: "description".to_string(),
            max: 80,
        }
        .into();

        match err {
            CatalogError::BadRequest { message, source } => {
                assert_eq!(
                    message,
                    "description must be shorter than or equal to 80 characters"
                );
                assert!(source.is_none());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
