//! # catalog-db: Database Layer for the Catalog Service
//!
//! This crate provides database access for the catalog service.
//! Products live in Postgres and are only ever touched through four stored
//! procedures, called with sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Service Data Flow                          │
//! │                                                                         │
//! │  ProductService (catalog-api)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   catalog-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐   ┌──────────────┐   │   │
//! │  │   │   Database    │    │  Repositories  │   │  Migrations  │   │   │
//! │  │   │   (pool.rs)   │    │ (ProductStore) │   │  (embedded)  │   │   │
//! │  │   │               │    │                │   │              │   │   │
//! │  │   │ PgPool        │◄───│ Postgres impl  │   │ products +   │   │   │
//! │  │   │               │    │ Memory impl    │   │ 4 procedures │   │   │
//! │  │   └───────────────┘    └────────────────┘   └──────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  sp_se1_produto / sp_se_produto / sp_gr_produto / sp_ex_produto        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`procedures`] - Names of the stored procedures
//! - [`error`] - Database error types
//! - [`repository`] - The `ProductStore` seam and its implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use catalog_db::{Database, DbConfig, ProductStore};
//!
//! let db = Database::new(DbConfig::from_url("postgres://localhost/catalog")?).await?;
//! let product = db.products().fetch_by_code(123).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod procedures;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use procedures::ProcedureSet;

// Repository re-exports for convenience
pub use repository::memory::MemoryProductStore;
pub use repository::product::ProductRepository;
pub use repository::ProductStore;
