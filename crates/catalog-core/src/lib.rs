//! # catalog-core: Pure Domain Model for the Catalog Service
//!
//! This crate holds the product record, the error taxonomy shared by every
//! layer, and the input rules. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Service Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 HTTP transport (catalog-api)                    │   │
//! │  │      GET/POST/PUT/DELETE /produtos  ──►  ProductService         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ catalog-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌──────────────┐  ┌─────────────┐             │   │
//! │  │   │   types   │  │    error     │  │ validation  │             │   │
//! │  │   │  Product  │  │ CatalogError │  │ description │             │   │
//! │  │   │  inputs   │  │ Validation   │  │ code rules  │             │   │
//! │  │   └───────────┘  └──────────────┘  └─────────────┘             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │          catalog-db (stored procedures on Postgres)             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product record and request/response payloads
//! - [`error`] - Domain error types
//! - [`validation`] - Input rules (description length, code range)
//!
//! ## Example Usage
//!
//! ```rust
//! use catalog_core::{validation::validate_description, ProductInput};
//!
//! let input = ProductInput::new("Notebook Dell Inspiron");
//! assert!(input.code.is_none());
//! assert!(validate_description(&input.description).is_ok());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{BoxError, CatalogError, CatalogResult, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product description, in characters.
///
/// Matches the `varchar(80)` parameter of the save procedure.
pub const MAX_DESCRIPTION_LEN: usize = 80;

/// Lowest code handed out by the code generator (inclusive).
pub const MIN_GENERATED_CODE: i32 = 1_000;

/// Highest code handed out by the code generator (inclusive).
pub const MAX_GENERATED_CODE: i32 = 999_999;

/// Default number of draws before code generation gives up.
pub const DEFAULT_CODE_ATTEMPTS: u32 = 10;

/// Wildcard pattern that matches every description.
///
/// There is no dedicated "list all" procedure; listing is an unrestricted
/// description search.
pub const MATCH_ALL_PATTERN: &str = "%";
