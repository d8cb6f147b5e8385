//! # Repository Module
//!
//! The product repository seam and its implementations.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  ProductService                                                        │
//! │       │                                                                 │
//! │       │  store.fetch_by_code(123)                                      │
//! │       ▼                                                                 │
//! │  dyn ProductStore                                                      │
//! │  ├── fetch_by_code(code)             → Option<Product>                 │
//! │  ├── fetch_by_description(pattern)   → Vec<Product>                    │
//! │  ├── save(code, description)         → Option<Product>                 │
//! │  └── delete(code)                    → ()                              │
//! │       │                                                                 │
//! │       ├──► ProductRepository   (Postgres stored procedures)            │
//! │       └──► MemoryProductStore  (tests, local development)              │
//! │                                                                         │
//! │  "Zero rows" is a value (None / empty Vec), never an error.            │
//! │  Errors mean the call itself could not be executed.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Postgres procedures
//! - [`MemoryProductStore`](memory::MemoryProductStore) - in-process map

pub mod memory;
pub mod product;

use async_trait::async_trait;
use catalog_core::Product;

use crate::error::DbResult;

/// Typed access to the four product procedures.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Fetches the product stored under `code`, if any.
    async fn fetch_by_code(&self, code: i32) -> DbResult<Option<Product>>;

    /// Fetches products whose description contains `pattern`
    /// (`%` and `_` are wildcards; `%` alone matches everything).
    async fn fetch_by_description(&self, pattern: &str) -> DbResult<Vec<Product>>;

    /// Inserts or updates a product.
    ///
    /// The row is returned when the procedure echoes it; callers must not
    /// rely on that.
    async fn save(&self, code: i32, description: &str) -> DbResult<Option<Product>>;

    /// Deletes the product stored under `code`.
    async fn delete(&self, code: i32) -> DbResult<()>;

    /// Returns true when the store can serve requests.
    async fn health_check(&self) -> bool {
        true
    }
}
