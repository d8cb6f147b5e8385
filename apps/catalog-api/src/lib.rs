//! # Catalog API
//!
//! HTTP server for product records stored behind four database procedures.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog API Layers                              │
//! │                                                                         │
//! │  ┌────────────────┐  ┌────────────────────┐  ┌────────────────────────┐│
//! │  │  router        │  │  services          │  │  catalog-db            ││
//! │  │  handlers      │─►│                    │─►│                        ││
//! │  │                │  │ • ProductService   │  │ • ProductStore         ││
//! │  │ • /produtos    │  │ • CodeSource       │  │   (Postgres / memory)  ││
//! │  │ • /health      │  │                    │  │                        ││
//! │  └────────────────┘  └────────────────────┘  └────────────────────────┘│
//! │          │                                                              │
//! │          ▼                                                              │
//! │     error::ApiError  ──►  { statusCode, message, error }               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables (optionally from `.env`):
//! - `HTTP_HOST` / `HTTP_PORT` - bind address (default: 0.0.0.0:3000)
//! - `DATABASE_URL` - PostgreSQL connection string, or the `DB_*` parts
//! - `DB_MAX_CONNECTIONS` - pool size (default: 10)
//! - `CODE_GENERATION_ATTEMPTS` - random draws per generated code (default: 10)
//! - `PROC_*` - stored procedure names

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod services;

// Re-exports
pub use config::ApiConfig;
pub use error::ApiError;
pub use router::{build_router, AppState};
pub use services::{CodeSource, ProductService, RandomCodes};
