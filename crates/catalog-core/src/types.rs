//! # Domain Types
//!
//! The product record and the payloads exchanged with the HTTP layer.
//!
//! ## Wire Shape
//! ```text
//! Request  (POST /produtos, POST /produtos/save)
//!   { "code": 123, "description": "Notebook Dell Inspiron" }   code optional
//!   { "CodProd": 123, "DescrProd": "Notebook Dell Inspiron" }  legacy names
//!
//! Response
//!   { "code": 123, "description": "Notebook Dell Inspiron" }
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// Product
// =============================================================================

/// A product as stored by the save procedure and returned by the lookups.
///
/// The `code` never changes after creation; `description` is non-empty and
/// at most [`crate::MAX_DESCRIPTION_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique product code.
    #[serde(alias = "CodProd")]
    pub code: i32,

    /// Human-readable description.
    #[serde(alias = "DescrProd")]
    pub description: String,
}

impl Product {
    /// Creates a product record.
    pub fn new(code: i32, description: impl Into<String>) -> Self {
        Product {
            code,
            description: description.into(),
        }
    }
}

// =============================================================================
// Inputs
// =============================================================================

/// Payload for create, update and create-or-update.
///
/// `code` is optional on create (a unique one is generated) and required on
/// update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInput {
    #[serde(default, alias = "CodProd", skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,

    #[serde(alias = "DescrProd")]
    pub description: String,
}

impl ProductInput {
    /// Input without a code.
    pub fn new(description: impl Into<String>) -> Self {
        ProductInput {
            code: None,
            description: description.into(),
        }
    }

    /// Input carrying an explicit code.
    pub fn with_code(code: i32, description: impl Into<String>) -> Self {
        ProductInput {
            code: Some(code),
            description: description.into(),
        }
    }
}

/// Body of `PUT /produtos/:id`; the code comes from the path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionInput {
    #[serde(alias = "DescrProd")]
    pub description: String,
}

impl DescriptionInput {
    /// Attaches the path code, producing an update payload.
    pub fn into_input(self, code: i32) -> ProductInput {
        ProductInput::with_code(code, self.description)
    }
}

// =============================================================================
// Responses
// =============================================================================

/// Returned after a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    pub message: String,
}

impl DeleteConfirmation {
    /// Confirmation message for `code`.
    pub fn for_code(code: i32) -> Self {
        DeleteConfirmation {
            message: format!("product with code {code} deleted successfully"),
        }
    }
}
