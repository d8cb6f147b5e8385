//! # Validation Module
//!
//! Input validation for product payloads.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP extractors (catalog-api)                                │
//! │  ├── JSON shape, integer path ids                                      │
//! │  └── Rejected with 400 before the service runs                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: ProductService                                               │
//! │  └── THIS MODULE: description and code rules                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database                                                     │
//! │  ├── varchar(80) procedure parameters                                  │
//! │  └── PRIMARY KEY on products.code                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use catalog_core::validation::{validate_code, validate_description};
//!
//! validate_description("Notebook Dell Inspiron").unwrap();
//! validate_code(123).unwrap();
//! ```

use crate::error::ValidationError;
use crate::types::ProductInput;
use crate::MAX_DESCRIPTION_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a product description.
///
/// ## Rules
/// - Must not be the empty string (whitespace is content)
/// - At most 80 characters (counted as `char`s, not bytes)
///
/// ## Example
/// ```rust
/// use catalog_core::validation::validate_description;
///
/// assert!(validate_description("Monitor LG 24").is_ok());
/// assert!(validate_description("").is_err());
/// assert!(validate_description("   ").is_ok());
/// assert!(validate_description(&"x".repeat(81)).is_err());
/// ```
pub fn validate_description(description: &str) -> ValidationResult<()> {
    if description.is_empty() {
        return Err(ValidationError::Required {
            field: "description".to_string(),
        });
    }

    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_LEN,
        });
    }

    Ok(())
}

/// Validates a caller-supplied product code.
///
/// Codes must be positive; zero and negative values are rejected.
pub fn validate_code(code: i32) -> ValidationResult<()> {
    if code < 1 {
        return Err(ValidationError::OutOfRange {
            field: "code".to_string(),
            min: 1,
            max: i64::from(i32::MAX),
        });
    }
    Ok(())
}

/// Validates a full product payload.
pub fn validate_input(input: &ProductInput) -> ValidationResult<()> {
    if let Some(code) = input.code {
        validate_code(code)?;
    }
    validate_description(&input.description)
}
