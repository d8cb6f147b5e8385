//! # Database Error Types
//!
//! Error types for database operations ("gateway errors").
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Postgres error (sqlx::Error)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Adds context and categorization               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogError::BadRequest ← Generic message, DbError kept as source    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  HTTP 400 with the generic message only                                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Postgres SQLSTATE for unique_violation.
const UNIQUE_VIOLATION: &str = "23505";

/// Postgres SQLSTATE for undefined_function.
const UNDEFINED_FUNCTION: &str = "42883";

/// Database operation errors.
///
/// These errors wrap sqlx errors and provide additional context
/// for operators. They are never rendered to API callers.
#[derive(Debug, Error)]
pub enum DbError {
    /// Unique constraint violation.
    ///
    /// ## When This Occurs
    /// - A procedure inserted a row whose code already exists
    ///   (the bundled save procedure upserts, so this only happens with
    ///   custom procedures)
    #[error("Duplicate {constraint}: {message}")]
    UniqueViolation { constraint: String, message: String },

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Server unreachable or credentials rejected
    /// - Pool closed during shutdown
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// A stored procedure raised an error or does not exist.
    #[error("Procedure failed: {0}")]
    ProcedureFailed(String),

    /// A configured procedure name is not a plain SQL identifier.
    #[error("Invalid procedure name: '{0}'")]
    InvalidProcedureName(String),

    /// Pool exhausted (all connections in use past the acquire timeout).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// The in-memory store was switched offline.
    #[error("Store is offline")]
    Offline,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database (23505)  → DbError::UniqueViolation
/// sqlx::Error::Database (other)  → DbError::ProcedureFailed
/// sqlx::Error::PoolTimedOut      → DbError::PoolExhausted
/// sqlx::Error::PoolClosed / Io   → DbError::ConnectionFailed
/// Other                          → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let code = db_err.code().map(|c| c.into_owned());
                match code.as_deref() {
                    Some(UNIQUE_VIOLATION) => DbError::UniqueViolation {
                        constraint: db_err.constraint().unwrap_or("unknown").to_string(),
                        message: db_err.message().to_string(),
                    },
                    Some(UNDEFINED_FUNCTION) => {
                        DbError::ProcedureFailed(format!("procedure missing: {}", db_err.message()))
                    }
                    _ => DbError::ProcedureFailed(db_err.message().to_string()),
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            sqlx::Error::Io(e) => DbError::ConnectionFailed(e.to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_errors_map_to_connection_categories() {
        assert!(matches!(
            DbError::from(sqlx::Error::PoolTimedOut),
            DbError::PoolExhausted
        ));
        assert!(matches!(
            DbError::from(sqlx::Error::PoolClosed),
            DbError::ConnectionFailed(_)
        ));
    }

    #[test]
    fn test_io_error_is_connection_failure() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
        let err = DbError::from(sqlx::Error::Io(io));
        assert!(matches!(err, DbError::ConnectionFailed(ref m) if m.contains("reset")));
    }

    #[test]
    fn test_row_not_found_is_internal() {
        // Procedures are fetched with fetch_optional/fetch_all, so RowNotFound
        // is never an expected "absent" signal here.
        assert!(matches!(
            DbError::from(sqlx::Error::RowNotFound),
            DbError::Internal(_)
        ));
    }
}
