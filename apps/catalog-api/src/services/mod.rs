//! Service layer.
//!
//! Business logic sits here, between the HTTP handlers and the product store.

pub mod codes;
pub mod product_service;

pub use codes::{CodeSource, RandomCodes};
pub use product_service::ProductService;
